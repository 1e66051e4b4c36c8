use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::use_toaster;
use crate::context::use_user;
use crate::router::Route;
use crate::services::ApiClient;

#[function_component(Login)]
pub fn login() -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let navigator = use_navigator().expect("Login rendered outside a router");
    let toaster = use_toaster();
    let user = use_user();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let navigator = navigator.clone();
        let toaster = toaster.clone();
        let user = user.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            if email.trim().is_empty() || password.is_empty() {
                toaster.error("Preencha e-mail e senha");
                return;
            }

            let navigator = navigator.clone();
            let toaster = toaster.clone();
            let user = user.clone();

            spawn_local(async move {
                match ApiClient::new().create_session(&email, &password).await {
                    Ok(session) => {
                        log::info!("✅ Signed in: {}", session.user.email);
                        user.login(session);
                        navigator.push(&Route::Home);
                    }
                    Err(e) => {
                        log::error!("❌ Sign-in failed: {}", e);
                        toaster.error("E-mail ou senha incorretos");
                    }
                }
            });
        })
    };

    html! {
        <div class="login">
            <div class="login-container">
                <h1>{"Car Sell"}</h1>
                <form onsubmit={on_submit}>
                    <span>
                        <label>{"E-mail"}</label>
                        <input type="email" placeholder="seu@email.com" ref={email_ref} />
                    </span>
                    <span>
                        <label>{"Senha"}</label>
                        <input type="password" placeholder="Sua senha" ref={password_ref} />
                    </span>
                    <button type="submit" class="btn-primary">{"Entrar"}</button>
                </form>
            </div>
        </div>
    }
}
