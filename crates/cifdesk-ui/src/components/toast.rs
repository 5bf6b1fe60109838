use chrono::Utc;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::core::notify::{NoticeTicket, Notification};

#[derive(Properties, PartialEq)]
pub(crate) struct ToastProps {
    pub notice: Option<Notification>,
    pub on_expire: Callback<NoticeTicket>,
    pub on_dismiss: Callback<()>,
}

/// Shows the live notification and expires it at its deadline. A newer
/// notification re-arms the timer; the superseded one drops its own.
#[function_component(NoticeToast)]
pub(crate) fn notice_toast(props: &ToastProps) -> Html {
    {
        let on_expire = props.on_expire.clone();
        use_effect_with_deps(
            move |notice: &Option<Notification>| {
                let handle = notice.as_ref().map(|notice| {
                    let ticket = notice.ticket;
                    Timeout::new(notice.remaining_ms(Utc::now()), move || {
                        on_expire.emit(ticket);
                    })
                });
                move || drop(handle)
            },
            props.notice.clone(),
        );
    }

    let Some(notice) = &props.notice else {
        return html! {};
    };
    let on_close = props.on_dismiss.reform(|_: MouseEvent| ());
    html! {
        <div class={classes!("toast", notice.kind.class())} role="status" aria-live="polite">
            <span class="toast-message">{notice.message.clone()}</span>
            <button type="button" class="toast-close" aria-label="Dismiss" onclick={on_close}>
                {"×"}
            </button>
        </div>
    }
}
