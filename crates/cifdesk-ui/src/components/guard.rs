use cifdesk_auth::{ViewGate, view_gate};
use yew::prelude::*;
use yew_router::prelude::Redirect;
use yewdux::prelude::use_selector;

use crate::app::Route;
use crate::core::store::AppStore;

#[derive(Properties, PartialEq)]
pub(crate) struct ProtectedProps {
    pub children: Children,
}

/// In-view gate: spinner while the session loads, login redirect when
/// anonymous, children otherwise.
#[function_component(ProtectedRoute)]
pub(crate) fn protected_route(props: &ProtectedProps) -> Html {
    let session = use_selector(|store: &AppStore| store.session.clone());
    match view_gate(&session) {
        ViewGate::Pending => html! {
            <div class="loading-screen">
                <div class="spinner" />
                <p>{"Loading..."}</p>
            </div>
        },
        ViewGate::Redirect(_) => html! { <Redirect<Route> to={Route::Login} /> },
        ViewGate::Render => html! { <>{for props.children.iter()}</> },
    }
}
