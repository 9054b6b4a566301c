/// Reusable UI components

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UrlInputProps {
    pub value: AttrValue,
    /// Keeps the floating label clear of the value.
    pub label_active: bool,
    pub oninput: Callback<String>,
    pub onsubmit: Callback<()>,
}

#[function_component(UrlInput)]
pub fn url_input(props: &UrlInputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };

    let onkeypress = {
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                onsubmit.emit(());
            }
        })
    };

    html! {
        <div class="input-field">
            <input id="url" type="text" value={props.value.clone()} {oninput} {onkeypress} />
            <label for="url" class={classes!(props.label_active.then_some("active"))}>{"URL"}</label>
        </div>
    }
}
