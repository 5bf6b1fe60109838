//! Generic record table and the hook that binds a list screen to a view.
//!
//! # Design
//! - One table renders any [`Record`] from its schema's columns.
//! - State changes go through the screen cell; the cell's notifier re-renders.

use yew::prelude::*;

use crate::core::gateway::Gateway;
use crate::core::list::{Record, SortDirection};
use crate::core::screen::{ListScreen, ListScreenHandle};

/// Bind a fresh list screen to the calling component for its lifetime.
#[hook]
pub(crate) fn use_list_screen<R>(gateway: Gateway) -> ListScreenHandle<R>
where
    R: Record,
{
    let handle = use_memo(move |_| ListScreenHandle::<R>::new(gateway), ());
    let force = use_force_update();
    {
        let handle = (*handle).clone();
        use_effect_with_deps(
            move |_| {
                handle.cell().set_notifier(move || force.force_update());
                let cell = handle.cell().clone();
                move || cell.close()
            },
            (),
        );
    }
    (*handle).clone()
}

#[derive(Properties, PartialEq)]
pub(crate) struct RecordTableProps<R: Record> {
    pub handle: ListScreenHandle<R>,
    pub screen: ListScreen<R>,
    #[prop_or(6)]
    pub skeleton_rows: usize,
    #[prop_or(true)]
    pub selectable: bool,
}

#[function_component(RecordTable)]
pub(crate) fn record_table<R>(props: &RecordTableProps<R>) -> Html
where
    R: Record,
{
    let schema = R::schema();
    let list = &props.screen.list;
    let view = list.view();
    let sort = list.sort_state();
    let selectable = props.selectable;
    let span = schema.columns.len() + 1 + usize::from(selectable);

    let on_toggle_all = {
        let handle = props.handle.clone();
        Callback::from(move |_: Event| {
            handle.cell().update(|screen| screen.list.toggle_select_all());
        })
    };

    let header = schema.columns.iter().map(|column| {
        let Some(key) = column.sort_key else {
            return html! { <th>{column.label}</th> };
        };
        let icon = match sort {
            Some(state) if state.field == key => match state.direction {
                SortDirection::Ascending => "↑",
                SortDirection::Descending => "↓",
            },
            _ => "↕️",
        };
        let onclick = {
            let handle = props.handle.clone();
            Callback::from(move |_| {
                handle.cell().update(|screen| screen.list.sort(key));
            })
        };
        html! {
            <th class="sortable" {onclick}>
                {column.label}{" "}<span class="sort-icon">{icon}</span>
            </th>
        }
    });

    let body = if list.is_loading() && view.rows.is_empty() {
        html! {
            {for (0..props.skeleton_rows).map(|_| html! {
                <tr class="skeleton-row">
                    {for (0..span).map(|_| html! { <td><div class="skeleton" /></td> })}
                </tr>
            })}
        }
    } else {
        html! {
            {for view.rows.iter().map(|row| render_row(row, props))}
        }
    };

    html! {
        <div class="table-container">
            <table class="record-table">
                <thead>
                    <tr>
                        {if selectable {
                            html! {
                                <th class="select-col">
                                    <input
                                        type="checkbox"
                                        checked={view.all_selected}
                                        onchange={on_toggle_all}
                                        aria-label="Select all rows"
                                    />
                                </th>
                            }
                        } else { html! {} }}
                        {for header}
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

fn render_row<R: Record>(row: &R, props: &RecordTableProps<R>) -> Html {
    let id = row.id();
    let detail = &props.screen.detail;
    let loading_this = detail.pending_id() == Some(id.as_str());
    let selected = props.screen.list.is_selected(&id);

    let on_select = {
        let handle = props.handle.clone();
        let id = id.clone();
        Callback::from(move |_: Event| {
            handle.cell().update(|screen| screen.list.toggle_select_one(&id));
        })
    };
    let on_view = {
        let handle = props.handle.clone();
        let id = id.clone();
        Callback::from(move |_| {
            let handle = handle.clone();
            let id = id.clone();
            yew::platform::spawn_local(async move { handle.load_detail(&id).await });
        })
    };

    html! {
        <tr key={id.clone()} class={classes!(selected.then_some("selected"))}>
            {if props.selectable {
                html! {
                    <td class="select-col">
                        <input type="checkbox" checked={selected} onchange={on_select} />
                    </td>
                }
            } else { html! {} }}
            {for R::schema().columns.iter().map(|column| html! { <td>{(column.cell)(row)}</td> })}
            <td>
                <button class="view-button" onclick={on_view} disabled={detail.is_loading()}>
                    {if loading_this { "Loading..." } else { "View" }}
                </button>
            </td>
        </tr>
    }
}
