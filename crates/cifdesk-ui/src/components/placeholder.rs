use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PlaceholderProps {
    pub title: AttrValue,
    pub body: AttrValue,
}

#[function_component(Placeholder)]
pub(crate) fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder">
            <h1>{&props.title}</h1>
            <p class="muted">{&props.body}</p>
        </div>
    }
}
