//! CIF inquiry screen.

use cifdesk_api_models::CustomerSummary;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::customer_form::CustomerForm;
use crate::components::detail_modal::OpenDetailModal;
use crate::components::pagination::Pagination;
use crate::components::record_table::{RecordTable, use_list_screen};
use crate::components::toast::NoticeToast;
use crate::core::config::PageSize;
use crate::core::detail::OpenDetail;
use crate::core::list::EmptyState;
use crate::core::notify::NoticeTicket;
use crate::core::screen::ListScreenHandle;
use crate::features::customers::form::CustomerDraft;

#[derive(Properties, PartialEq)]
struct CustomersProps {
    api: ApiCtx,
}

/// Customer search, table and detail screen.
#[function_component(CustomersPage)]
pub(crate) fn customers_page() -> Html {
    match use_context::<ApiCtx>() {
        Some(api) => html! { <CustomersScreen {api} /> },
        None => html! { <p class="error-text">{"Missing API context."}</p> },
    }
}

#[function_component(CustomersScreen)]
fn customers_screen(props: &CustomersProps) -> Html {
    let handle: ListScreenHandle<CustomerSummary> = use_list_screen(props.api.gateway.clone());
    let query = use_state(String::new);
    let form = use_state(|| None as Option<CustomerDraft>);
    let screen = handle.cell().snapshot();
    let list = &screen.list;
    let view = list.view();

    let run_search = {
        let handle = handle.clone();
        let query = query.clone();
        Callback::from(move |()| {
            let handle = handle.clone();
            let raw = (*query).clone();
            yew::platform::spawn_local(async move { handle.search(&raw).await });
        })
    };
    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };
    let on_key = {
        let run_search = run_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                run_search.emit(());
            }
        })
    };
    let on_search_click = {
        let run_search = run_search.clone();
        Callback::from(move |_| run_search.emit(()))
    };
    let on_delete = {
        let handle = handle.clone();
        Callback::from(move |_| {
            let handle = handle.clone();
            yew::platform::spawn_local(async move { handle.bulk_delete().await });
        })
    };
    let on_add = {
        let form = form.clone();
        Callback::from(move |_| form.set(Some(CustomerDraft::default())))
    };
    let on_edit = {
        let form = form.clone();
        let handle = handle.clone();
        Callback::from(move |open: OpenDetail| {
            handle.cell().update(|screen| screen.detail.close());
            form.set(Some(CustomerDraft::from_detail(&open.record)));
        })
    };
    let on_form_close = {
        let form = form.clone();
        Callback::from(move |()| form.set(None))
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

    let searching = list.is_loading();
    let selected = list.selected_count();
    let body = match list.empty_state() {
        EmptyState::Prompt => html! {
            <div class="empty-state">
                <h3>{"🔍 CIF Inquiry"}</h3>
                <p>{"Enter at least 4 characters in the search box to find CIF records."}</p>
            </div>
        },
        EmptyState::NoResults(q) => html! {
            <div class="empty-state">
                <h3>{"No Results Found"}</h3>
                <p>{format!("No CIF records match your search criteria: \"{q}\"")}</p>
            </div>
        },
        EmptyState::None => html! {
            <>
                <RecordTable<CustomerSummary>
                    handle={handle.clone()}
                    screen={screen.clone()}
                    skeleton_rows={6}
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
            </>
        },
    };

    html! {
        <div class="page customers-page">
            <div class="page-header">
                <h1>{"Customer Information Summary"}</h1>
                <div class="toolbar">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search (min 4 characters)..."
                        value={(*query).clone()}
                        oninput={on_input}
                        onkeypress={on_key}
                    />
                    <button class="solid" onclick={on_search_click} disabled={searching}>
                        {if searching { "Searching..." } else { "Search" }}
                    </button>
                    <button class="ghost" onclick={on_add}>{"Add Customer"}</button>
                    {if selected > 0 {
                        html! {
                            <button class="danger" onclick={on_delete} disabled={list.is_deleting()}>
                                {format!("Delete Selected ({selected})")}
                            </button>
                        }
                    } else { html! {} }}
                </div>
                {if let Some(err) = list.query_error() {
                    html! { <div class="error-text" role="alert">{err}</div> }
                } else { html! {} }}
            </div>
            {body}
            <OpenDetailModal<CustomerSummary>
                handle={handle.clone()}
                screen={screen.clone()}
                on_edit={Some(on_edit)}
            />
            {if let Some(draft) = &*form {
                html! {
                    <CustomerForm
                        handle={handle.clone()}
                        initial={draft.clone()}
                        on_close={on_form_close}
                    />
                }
            } else { html! {} }}
            <NoticeToast notice={screen.notices.current().cloned()} {on_expire} {on_dismiss} />
        </div>
    }
}
