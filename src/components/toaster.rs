use std::rc::Rc;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Loading,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Loading => "toast-loading",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✖",
            ToastKind::Loading => "…",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
    Clear,
}

#[derive(Clone, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
            ToastAction::Clear => toasts.clear(),
        }
        Rc::new(Self { toasts })
    }
}

/// Cloneable handle to the notification facility. Toasts expire on their
/// own; `remove_all` clears the stack at once (used when a loading toast
/// must give way to the request's outcome).
#[derive(Clone, PartialEq)]
pub struct ToasterHandle {
    dispatcher: UseReducerDispatcher<ToastList>,
}

impl ToasterHandle {
    fn push(&self, kind: ToastKind, message: &str, duration_ms: u32) {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.to_string(),
        };
        let id = toast.id;
        self.dispatcher.dispatch(ToastAction::Push(toast));

        let dispatcher = self.dispatcher.clone();
        Timeout::new(duration_ms, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }

    pub fn success(&self, message: &str) {
        self.push(ToastKind::Success, message, 2000);
    }

    pub fn error(&self, message: &str) {
        self.push(ToastKind::Error, message, 4000);
    }

    pub fn loading(&self, message: &str) {
        self.push(ToastKind::Loading, message, 5000);
    }

    pub fn remove_all(&self) {
        self.dispatcher.dispatch(ToastAction::Clear);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToasterProvider)]
pub fn toaster_provider(props: &ToasterProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let handle = ToasterHandle {
        dispatcher: list.dispatcher(),
    };

    html! {
        <ContextProvider<ToasterHandle> context={handle}>
            { for props.children.iter() }
            <div class="toaster">
                { for list.toasts.iter().map(|toast| html! {
                    <div key={toast.id.to_string()} class={classes!("toast", toast.kind.class())}>
                        <span class="toast-icon">{ toast.kind.icon() }</span>
                        <span class="toast-message">{ &toast.message }</span>
                    </div>
                })}
            </div>
        </ContextProvider<ToasterHandle>>
    }
}

#[hook]
pub fn use_toaster() -> ToasterHandle {
    use_context::<ToasterHandle>().expect("ToasterHandle missing; wrap the app in <ToasterProvider>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(kind: ToastKind, message: &str) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.to_string(),
        }
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let first = toast(ToastKind::Loading, "Anunciando");
        let second = toast(ToastKind::Error, "Falha no sistema, tente novamente");
        let first_id = first.id;

        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(first));
        let list = list.reduce(ToastAction::Push(second));
        let list = list.reduce(ToastAction::Dismiss(first_id));

        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn clear_empties_the_stack() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(toast(ToastKind::Loading, "Anunciando")));
        let list = list.reduce(ToastAction::Push(toast(ToastKind::Success, "ok")));
        let list = list.reduce(ToastAction::Clear);

        assert!(list.toasts.is_empty());
    }
}
