use cifdesk_auth::{Credentials, ViewGate, login_gate};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Redirect;
use yewdux::prelude::use_selector;

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::core::store::AppStore;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let session = use_selector(|store: &AppStore| store.session.clone());
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    if matches!(login_gate(&session), ViewGate::Redirect(_)) {
        return html! { <Redirect<Route> to={Route::Customers} /> };
    }
    let Some(api_ctx) = api_ctx else {
        return html! { <p class="error-text">{"Missing API context."}</p> };
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let credentials = Credentials::new((*email).clone(), (*password).clone());
            let store = api_ctx.session().clone();
            let authenticator = api_ctx.authenticator.clone();
            let error = error.clone();
            let busy = busy.clone();
            busy.set(true);
            error.set(None);
            yew::platform::spawn_local(async move {
                // Success flips the session mirror and the login gate redirects.
                if let Err(err) = store.login(authenticator.as_ref(), credentials).await {
                    error.set(Some(err.user_message()));
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="login-page">
            <form class="login-card" onsubmit={on_submit}>
                <h1>{"Customer Editor Login"}</h1>
                {if let Some(err) = &*error {
                    html! { <div class="error-text" role="alert">{err}</div> }
                } else { html! {} }}
                <label class="stack">
                    <span>{"Email:"}</span>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        value={(*email).clone()}
                        oninput={on_email}
                        required=true
                    />
                </label>
                <label class="stack">
                    <span>{"Password:"}</span>
                    <input
                        type="password"
                        placeholder="Enter your password"
                        value={(*password).clone()}
                        oninput={on_password}
                        required=true
                    />
                </label>
                <button type="submit" class="solid" disabled={*busy}>
                    {if *busy { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
