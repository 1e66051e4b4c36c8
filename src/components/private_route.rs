use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::utils::constants::STORAGE_KEY_USER_DATA;
use crate::utils::storage::has_storage_key;

#[derive(Properties, PartialEq)]
pub struct PrivateRouteProps {
    #[prop_or_default]
    pub children: Children,
}

/// Gates authenticated-only pages. Checks the session key straight from
/// storage — this runs before any provider mounts — and replaces the
/// location with the login route when it is absent, so protected content
/// never renders for a visitor without a session.
#[function_component(PrivateRoute)]
pub fn private_route(props: &PrivateRouteProps) -> Html {
    if has_storage_key(STORAGE_KEY_USER_DATA) {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
