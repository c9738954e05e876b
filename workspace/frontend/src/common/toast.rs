use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Info,
    Error,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            ToastKind::Info => "alert-info",
            ToastKind::Error => "alert-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "fas fa-info-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

/// Visible notifications, newest last.
///
/// Pushing the message already on top keeps a single copy and hands it the
/// new id, so a repeated failure neither stacks up nor expires early.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn apply(mut self, action: ToastAction) -> Self {
        match action {
            ToastAction::Push(toast) => match self.toasts.last_mut() {
                Some(top) if top.kind == toast.kind && top.message == toast.message => top.id = toast.id,
                _ => self.toasts.push(toast),
            },
            ToastAction::Dismiss(id) => self.toasts.retain(|toast| toast.id != id),
        }
        self
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

/// Handle given to components through context.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    queue: UseReducerHandle<ToastQueue>,
    next_id: Rc<Cell<usize>>,
}

impl ToastContext {
    pub fn show_info(&self, message: String) {
        self.show(ToastKind::Info, message);
    }

    pub fn show_error(&self, message: String) {
        self.show(ToastKind::Error, message);
    }

    fn show(&self, kind: ToastKind, message: String) {
        log::debug!("Toast ({:?}): {}", kind, message);
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.dispatch(ToastAction::Push(Toast { id, kind, message }));

        let dispatcher = self.queue.dispatcher();
        Timeout::new(settings::get_settings().toast_duration_ms, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_memo((), |_| Cell::new(0usize));
    let context = ToastContext {
        queue: queue.clone(),
        next_id,
    };

    html! {
        <ContextProvider<ToastContext> {context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for queue.toasts().iter().map(|toast| {
                    let on_close = {
                        let dispatcher = queue.dispatcher();
                        let id = toast.id;
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    };

                    html! {
                        <div key={toast.id} class={classes!("alert", toast.kind.alert_class(), "shadow-lg")}>
                            <i class={toast.kind.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
