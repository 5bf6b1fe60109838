use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::core::config::PageSize;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub page_size: PageSize,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_page_size: Callback<PageSize>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let on_prev = {
        let cb = props.on_prev.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_size = {
        let cb = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(size) = PageSize::parse(&select.value()) {
                    cb.emit(size);
                }
            }
        })
    };

    html! {
        <div class="pagination">
            <div class="pagination-controls">
                <button onclick={on_prev} disabled={props.page <= 1}>{"Prev"}</button>
                <span>{format!("Page {} of {}", props.page, props.total_pages)}</span>
                <button onclick={on_next} disabled={props.page >= props.total_pages}>{"Next"}</button>
            </div>
            <div class="pagination-size">
                <label>
                    {"Rows per page: "}
                    <select onchange={on_size}>
                        {for PageSize::all().into_iter().map(|size| html! {
                            <option value={size.rows().to_string()} selected={size == props.page_size}>
                                {size.rows()}
                            </option>
                        })}
                    </select>
                </label>
                <span class="muted">{format!("{} total", props.total)}</span>
            </div>
        </div>
    }
}
