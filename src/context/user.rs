use yew::prelude::*;

use crate::models::{SessionData, UserData};
use crate::utils::constants::STORAGE_KEY_USER_DATA;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Session context handed down to every page. Seeded from localStorage once,
/// then kept in sync with it on login/logout, so components ask this object
/// instead of reading storage themselves.
#[derive(Clone, PartialEq)]
pub struct UserContext {
    session: UseStateHandle<Option<SessionData>>,
}

impl UserContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Profile of the signed-in user, denormalized into ads on publication.
    pub fn user_data(&self) -> Option<UserData> {
        self.session.as_ref().map(|session| session.user.clone())
    }

    pub fn login(&self, session: SessionData) {
        if let Err(e) = save_to_storage(STORAGE_KEY_USER_DATA, &session) {
            log::error!("❌ Could not persist session: {}", e);
        }
        self.session.set(Some(session));
    }

    pub fn logout(&self) {
        let _ = remove_from_storage(STORAGE_KEY_USER_DATA);
        self.session.set(None);
    }
}

#[derive(Properties, PartialEq)]
pub struct UserProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(UserProvider)]
pub fn user_provider(props: &UserProviderProps) -> Html {
    let session = use_state(|| load_from_storage::<SessionData>(STORAGE_KEY_USER_DATA));

    let context = UserContext { session };

    html! {
        <ContextProvider<UserContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<UserContext>>
    }
}

#[hook]
pub fn use_user() -> UserContext {
    use_context::<UserContext>().expect("UserContext missing; wrap the app in <UserProvider>")
}
