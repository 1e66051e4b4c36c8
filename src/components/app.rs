use yew::prelude::*;
use yew_router::prelude::*;

use super::ToasterProvider;
use crate::context::UserProvider;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <UserProvider>
            <ToasterProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToasterProvider>
        </UserProvider>
    }
}
