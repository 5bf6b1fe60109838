//! Application shell: context, routing and session wiring.
//!
//! # Design
//! - One [`ApiCtx`] per boot; the session store inside it is mirrored into
//!   the yewdux store so guards and the shell re-render on change.
//! - Every route except login sits behind [`ProtectedRoute`].

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

use cifdesk_auth::SessionStore;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

use crate::components::guard::ProtectedRoute;
use crate::components::login::LoginPage;
use crate::components::placeholder::Placeholder;
use crate::components::shell::AppShell;
use crate::core::store::{AppStore, apply_session};
use crate::features::customers::view::CustomersPage;
use crate::features::users::view::UsersPage;
use api::ApiCtx;
use preferences::{LocalStoragePersistence, api_base_url, load_sidebar_expanded};
pub(crate) use routes::Route;

#[function_component(CifDeskApp)]
fn cifdesk_app() -> Html {
    let api_ctx = use_memo(
        |_| ApiCtx::new(SessionStore::new(LocalStoragePersistence), &api_base_url()),
        (),
    );

    {
        let session = api_ctx.session().clone();
        use_effect_with_deps(
            move |_| {
                let dispatch = Dispatch::<AppStore>::new();
                dispatch.reduce_mut(|store| store.sidebar_expanded = load_sidebar_expanded());
                let subscription = session.subscribe(move |next| {
                    let next = next.clone();
                    Dispatch::<AppStore>::new().reduce_mut(|store| apply_session(store, next));
                });
                let hydrated = session.hydrate();
                dispatch.reduce_mut(|store| apply_session(store, hydrated));
                move || drop(subscription)
            },
            (),
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Login => return html! { <LoginPage /> },
        Route::Customers => html! { <CustomersPage /> },
        Route::Admin => html! { <UsersPage /> },
        Route::Approval => html! {
            <Placeholder title="For Approval" body="Pending CIF approvals will appear here." />
        },
        Route::Reports => html! {
            <Placeholder title="CIF Report" body="CIF reports will appear here." />
        },
        Route::NotFound => html! {
            <Placeholder title="Not found" body="The page you requested does not exist." />
        },
    };
    html! {
        <ProtectedRoute>
            <AppShell active={route}>{page}</AppShell>
        </ProtectedRoute>
    }
}

/// Mount the console on `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CifDeskApp>::with_root(root).render();
    } else {
        yew::Renderer::<CifDeskApp>::new().render();
    }
}
