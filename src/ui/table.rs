/// Table view: the result is generated markup inside `#result`

use yew::prelude::*;

use crate::inspector::ViewState;
use crate::render::{rows, table_markup};
use crate::ui::browser::RESULT_ID;
use crate::ui::components::UrlInput;
use crate::ui::hooks::use_inspector;
use crate::ui::{InspectorProps, PanelProps};

pub const PANEL: &str = "card-panel hoverable col m6 s10 offset-m3 offset-s1";

#[function_component(TableInspector)]
pub fn table_inspector(props: &InspectorProps) -> Html {
    let inspector = use_inspector(props.config.clone());
    let panel = PanelProps::from_handle(&inspector);

    html! { <TablePanel ..panel /> }
}

#[function_component(TablePanel)]
pub fn table_panel(props: &PanelProps) -> Html {
    let result = match &props.view {
        ViewState::Empty => html! { <div id={RESULT_ID}></div> },
        ViewState::Result(decomposition) => {
            let markup = AttrValue::from(table_markup(&rows(decomposition)));
            html! {
                <div id={RESULT_ID} class={PANEL}>
                    {Html::from_html_unchecked(markup)}
                </div>
            }
        }
        ViewState::Failure(failure) => html! {
            <div id={RESULT_ID} class={format!("{} red white-text", PANEL)}>
                <p>{failure.to_string()}</p>
            </div>
        },
    };

    html! {
        <div class="row">
            <UrlInput
                value={props.query.clone()}
                label_active={props.label_active}
                oninput={props.oninput.clone()}
                onsubmit={props.onsubmit.clone()}
            />
            {result}
        </div>
    }
}
