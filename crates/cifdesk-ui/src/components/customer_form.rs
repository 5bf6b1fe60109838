use cifdesk_api_models::CustomerSummary;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::core::screen::ListScreenHandle;
use crate::features::customers::form::{CustomerDraft, FormMode};

const FIELDS: [&str; 8] = [
    "CIF Key",
    "Branch",
    "First Name",
    "Middle Name",
    "Last Name",
    "Address",
    "Email",
    "Mobile No",
];

fn field_mut<'a>(draft: &'a mut CustomerDraft, label: &str) -> &'a mut String {
    match label {
        "CIF Key" => &mut draft.cif_key,
        "Branch" => &mut draft.branch,
        "First Name" => &mut draft.first_name,
        "Middle Name" => &mut draft.middle_name,
        "Last Name" => &mut draft.last_name,
        "Address" => &mut draft.address,
        "Email" => &mut draft.email,
        _ => &mut draft.mobile_no,
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CustomerFormProps {
    pub handle: ListScreenHandle<CustomerSummary>,
    pub initial: CustomerDraft,
    pub on_close: Callback<()>,
}

/// Add or edit a customer. Validation errors show inline; server outcomes
/// go to the screen's notification channel.
#[function_component(CustomerForm)]
pub(crate) fn customer_form(props: &CustomerFormProps) -> Html {
    let draft = use_state(|| props.initial.clone());
    let error = use_state(|| None as Option<String>);
    let saving = use_state(|| false);

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let saving = saving.clone();
        let handle = props.handle.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let current = (*draft).clone();
            let handle = handle.clone();
            let error = error.clone();
            let saving = saving.clone();
            let on_close = on_close.clone();
            saving.set(true);
            error.set(None);
            yew::platform::spawn_local(async move {
                match handle.save_customer(&current).await {
                    Ok(true) => on_close.emit(()),
                    Ok(false) => {}
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let editing = draft.mode == FormMode::Edit;
    let inputs = FIELDS.iter().map(|&label| {
        let mut scratch = (*draft).clone();
        let value = field_mut(&mut scratch, label).clone();
        let oninput = {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    let mut next = (*draft).clone();
                    *field_mut(&mut next, label) = input.value();
                    draft.set(next);
                }
            })
        };
        let locked = editing && label == "CIF Key";
        html! {
            <label class="stack">
                <span>{label}{":"}</span>
                <input type="text" {value} {oninput} disabled={locked} />
            </label>
        }
    });

    html! {
        <div class="modal-overlay">
            <form class="modal-content customer-form" onsubmit={on_submit}>
                <div class="modal-header">
                    <h2>{if editing { "Edit Customer" } else { "Add Customer" }}</h2>
                </div>
                {if let Some(err) = &*error {
                    html! { <div class="error-text" role="alert">{err}</div> }
                } else { html! {} }}
                <div class="form-grid">{for inputs}</div>
                <div class="form-actions">
                    <button type="button" class="ghost" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="solid" disabled={*saving}>
                        {if *saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
