use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::toast::{arm_expiry, HideReason, ToastAction, ToastState};

#[derive(Properties, PartialEq)]
pub struct SnackbarProps {
    pub toast: UseReducerHandle<ToastState>,
    pub message: AttrValue,
}

/// Success toast pinned to the bottom of the page.
///
/// While visible it keeps one auto-hide `Timeout` armed for the current
/// showing. Hiding or re-showing drops that timeout, which cancels it.
#[function_component(Snackbar)]
pub fn snackbar(props: &SnackbarProps) -> Html {
    {
        let dispatcher = props.toast.dispatcher();
        use_effect_with_deps(
            move |pending: &Option<(u64, u32)>| {
                let timeout = arm_expiry(*pending, |delay_ms, expire| {
                    Timeout::new(delay_ms, move || dispatcher.dispatch(expire))
                });
                move || drop(timeout)
            },
            props.toast.pending_expiry(),
        );
    }

    if !props.toast.is_visible() {
        return html! {};
    }

    let on_close = {
        let dispatcher = props.toast.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(ToastAction::Dismiss(HideReason::CloseButton));
        })
    };

    html! {
        <div class="snackbar" role="presentation">
            <div class="alert alert-success" role="alert">
                <i class="fas fa-circle-check alert-icon"></i>
                <span class="alert-message">{ props.message.clone() }</span>
                <button class="alert-close" aria-label="Close" onclick={on_close}>
                    <i class="fas fa-xmark"></i>
                </button>
            </div>
        </div>
    }
}
