use yew::prelude::*;

use crate::core::detail::{HasDetailLayout, OpenDetail, RenderedSection};
use crate::core::format::offset_from_js_minutes;
use crate::core::list::Record;
use crate::core::screen::{ListScreen, ListScreenHandle};

#[derive(Properties, PartialEq)]
pub(crate) struct DetailModalProps {
    pub title: AttrValue,
    pub sections: Vec<RenderedSection>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_edit: Option<Callback<()>>,
}

/// Sectioned key/value modal. Clicking the overlay or the close button
/// closes it; clicks inside the content do not.
#[function_component(DetailModal)]
pub(crate) fn detail_modal(props: &DetailModalProps) -> Html {
    let on_overlay = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_button = on_overlay.clone();
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={on_overlay}>
            <div class="modal-content" onclick={keep_open} role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2>{props.title.clone()}</h2>
                    {if let Some(on_edit) = &props.on_edit {
                        let on_edit = on_edit.clone();
                        html! {
                            <button class="ghost" onclick={Callback::from(move |_| on_edit.emit(()))}>
                                {"Edit"}
                            </button>
                        }
                    } else { html! {} }}
                    <button class="modal-close" onclick={on_button} aria-label="Close">{"×"}</button>
                </div>
                <div class="modal-body">
                    {for props.sections.iter().map(|section| html! {
                        <section class="detail-section">
                            <h3>{section.title}</h3>
                            <div class="detail-grid">
                                {for section.rows.iter().map(|(label, value)| html! {
                                    <div class="detail-item">
                                        <span class="detail-label">{*label}{":"}</span>
                                        <span class="detail-value">{value.clone()}</span>
                                    </div>
                                })}
                            </div>
                        </section>
                    })}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct OpenDetailProps<R: Record> {
    pub handle: ListScreenHandle<R>,
    pub screen: ListScreen<R>,
    #[prop_or_default]
    pub on_edit: Option<Callback<OpenDetail>>,
}

/// Renders the screen's open detail, if any, in the browser's local time.
#[function_component(OpenDetailModal)]
pub(crate) fn open_detail_modal<R>(props: &OpenDetailProps<R>) -> Html
where
    R: Record + HasDetailLayout,
{
    let Some(open) = props.screen.detail.current() else {
        return html! {};
    };
    let layout = R::detail_layout();
    let offset = offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset());
    let on_close = {
        let handle = props.handle.clone();
        Callback::from(move |()| {
            handle.cell().update(|screen| screen.detail.close());
        })
    };

    let on_edit = props.on_edit.clone().map(|on_edit| {
        let open = open.clone();
        Callback::from(move |()| on_edit.emit(open.clone()))
    });

    html! {
        <DetailModal
            title={layout.title(&open.record, &open.id)}
            sections={layout.render(&open.record, offset)}
            {on_close}
            {on_edit}
        />
    }
}
