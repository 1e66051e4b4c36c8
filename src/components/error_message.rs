use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    #[prop_or_default]
    pub message: Option<String>,
}

/// Inline validation message under a form field. Renders nothing while the
/// field is clean.
#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    match &props.message {
        Some(message) => html! { <p class="error-message">{ message }</p> },
        None => html! {},
    }
}
