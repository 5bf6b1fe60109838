use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::preferences::persist_sidebar_expanded;
use crate::core::store::{AppStore, toggle_sidebar};

const NAV_ITEMS: [(Route, &str, &str); 4] = [
    (Route::Customers, "CIF Inquiry", "👥"),
    (Route::Approval, "For Approval", "📊"),
    (Route::Reports, "CIF Report", "📈"),
    (Route::Admin, "Admin Settings", "⚙️"),
];

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let expanded = use_selector(|store: &AppStore| store.sidebar_expanded);
    let session = use_selector(|store: &AppStore| store.session.clone());
    let expanded = *expanded;

    let on_toggle = Callback::from(|_| {
        let mut next = true;
        Dispatch::<AppStore>::new().reduce_mut(|store| next = toggle_sidebar(store));
        persist_sidebar_expanded(next);
    });
    let on_logout = Callback::from(move |_| {
        if let Some(api_ctx) = &api_ctx {
            api_ctx.session().logout();
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let user = session.profile().map(|profile| {
        html! {
            <div class="sidebar-user">
                <div class="user-name">{profile.display_name()}</div>
                <div class="user-email muted">{profile.email.clone()}</div>
            </div>
        }
    });

    html! {
        <div class="app-shell">
            <aside class={classes!("sidebar", if expanded { "expanded" } else { "collapsed" })}>
                <div class="sidebar-header">
                    {if expanded { html! { <h2>{"Logic One Systems"}</h2> } } else { html! {} }}
                    <button class="ghost" onclick={on_toggle} aria-label="Toggle sidebar">
                        {if expanded { "◀" } else { "▶" }}
                    </button>
                </div>
                <nav>
                    {for NAV_ITEMS.iter().map(|(route, label, icon)| nav_item(route, label, icon, &props.active, expanded))}
                </nav>
                <div class="sidebar-footer">
                    {if expanded { user.unwrap_or_else(|| html! {}) } else { html! {} }}
                    <button class="logout" onclick={on_logout}>
                        <span class="icon">{"🚪"}</span>
                        {if expanded { html! { <span>{"Logout"}</span> } } else { html! {} }}
                    </button>
                </div>
            </aside>
            <main class="main">
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_item(route: &Route, label: &str, icon: &str, active: &Route, expanded: bool) -> Html {
    let classes = classes!("nav-item", (active == route).then_some("active"));
    html! {
        <Link<Route> to={route.clone()} classes={classes}>
            <span class="icon">{icon}</span>
            {if expanded { html! { <span class="label">{label}</span> } } else { html! {} }}
        </Link<Route>>
    }
}
