//! Admin user management screen.

use cifdesk_api_models::UserSummary;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::detail_modal::OpenDetailModal;
use crate::components::pagination::Pagination;
use crate::components::record_table::{RecordTable, use_list_screen};
use crate::components::toast::NoticeToast;
use crate::core::config::PageSize;
use crate::core::notify::NoticeTicket;
use crate::core::screen::ListScreenHandle;

#[derive(Properties, PartialEq)]
struct UsersProps {
    api: ApiCtx,
}

/// Read-only user table with refresh and detail view.
#[function_component(UsersPage)]
pub(crate) fn users_page() -> Html {
    match use_context::<ApiCtx>() {
        Some(api) => html! { <UsersScreen {api} /> },
        None => html! { <p class="error-text">{"Missing API context."}</p> },
    }
}

#[function_component(UsersScreen)]
fn users_screen(props: &UsersProps) -> Html {
    let handle: ListScreenHandle<UserSummary> = use_list_screen(props.api.gateway.clone());
    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move { handle.load_all().await });
                || ()
            },
            (),
        );
    }
    let screen = handle.cell().snapshot();
    let view = screen.list.view();
    let loading = screen.list.is_loading();

    let on_refresh = {
        let handle = handle.clone();
        Callback::from(move |_| {
            let handle = handle.clone();
            yew::platform::spawn_local(async move { handle.refresh().await });
        })
    };
    let on_prev = {
        let handle = handle.clone();
        Callback::from(move |()| {
            handle.cell().update(|screen| screen.list.prev_page());
        })
    };
    let on_next = {
        let handle = handle.clone();
        Callback::from(move |()| {
            handle.cell().update(|screen| screen.list.next_page());
        })
    };
    let on_page_size = {
        let handle = handle.clone();
        Callback::from(move |size: PageSize| {
            handle.cell().update(|screen| screen.list.set_page_size(size));
        })
    };
    let on_expire = {
        let handle = handle.clone();
        Callback::from(move |ticket: NoticeTicket| {
            handle.cell().update(|screen| {
                screen.notices.expire(ticket);
            });
        })
    };
    let on_dismiss = {
        let handle = handle.clone();
        Callback::from(move |()| {
            handle.cell().update(|screen| screen.notices.dismiss());
        })
    };

    html! {
        <div class="page users-page">
            <div class="page-header">
                <h1>{"Admin Settings - User Management"}</h1>
                <button class="ghost" onclick={on_refresh} disabled={loading}>
                    {if loading { "Loading..." } else { "Refresh" }}
                </button>
            </div>
            <RecordTable<UserSummary>
                handle={handle.clone()}
                screen={screen.clone()}
            />
            <Pagination
                page={view.page}
                total_pages={view.total_pages}
                total={view.total}
                page_size={view.page_size}
                {on_prev}
                {on_next}
                {on_page_size}
            />
            <OpenDetailModal<UserSummary> handle={handle.clone()} screen={screen.clone()} />
            <NoticeToast notice={screen.notices.current().cloned()} {on_expire} {on_dismiss} />
        </div>
    }
}
