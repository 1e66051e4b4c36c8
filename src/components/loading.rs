use yew::prelude::*;

/// Blocking overlay shown while a request settles.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading-overlay">
            <div class="loading-spinner"></div>
            <p>{"Carregando..."}</p>
        </div>
    }
}
