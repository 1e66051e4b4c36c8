use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::PrivateRoute;
use crate::views::{CarRegister, Home, Login, MyAds};

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/cadastro")]
    CarRegister,
    #[at("/meus-anuncios")]
    MyAds,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::CarRegister => html! {
            <PrivateRoute>
                <CarRegister />
            </PrivateRoute>
        },
        Route::MyAds => html! {
            <PrivateRoute>
                <MyAds />
            </PrivateRoute>
        },
        Route::NotFound => html! { <h1>{"404 - Página não encontrada"}</h1> },
    }
}
