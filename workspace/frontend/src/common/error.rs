use compute::ControllerError;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{"Something went wrong"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-primary btn-sm"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub error: ControllerError,
    pub on_dismiss: Callback<()>,
}

/// Inline, dismissable alert for the error currently held by the controller.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let (class, title) = match &props.error {
        ControllerError::ValidationFailure(_) => ("alert-warning", "Check your input"),
        ControllerError::InvalidResponse(_) => ("alert-error", "Unexpected response"),
        ControllerError::NetworkFailure(_) => ("alert-error", "Connection problem"),
    };

    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("alert", class, "mb-6")} data-error-kind={props.error.kind()}>
            <i class="fas fa-exclamation-circle"></i>
            <div class="flex flex-col">
                <span class="font-semibold">{title}</span>
                <span class="text-sm">{props.error.to_string()}</span>
            </div>
            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_dismiss}>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
