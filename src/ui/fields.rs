/// Field view: fixed-id `<code>` elements, toggled on and off

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::inspector::ViewState;
use crate::render::{blank_rows, rows};
use crate::ui::browser::RESULT_ID;
use crate::ui::components::UrlInput;
use crate::ui::hooks::use_inspector;
use crate::ui::{InspectorProps, PanelProps};

fn display(visible: bool) -> &'static str {
    if visible { "display: inline" } else { "display: none" }
}

#[function_component(FieldInspector)]
pub fn field_inspector(props: &InspectorProps) -> Html {
    let inspector = use_inspector(props.config.clone());
    let panel = PanelProps::from_handle(&inspector);

    html! { <FieldPanel ..panel /> }
}

#[function_component(FieldPanel)]
pub fn field_panel(props: &PanelProps) -> Html {
    let on_submit_click = {
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |_: MouseEvent| onsubmit.emit(()))
    };

    let (field_rows, failure) = match &props.view {
        ViewState::Result(decomposition) => (rows(decomposition), None),
        ViewState::Failure(failure) => (blank_rows(), Some(failure.to_string())),
        ViewState::Empty => (blank_rows(), None),
    };
    let result_style = display(matches!(props.view, ViewState::Result(_)));
    let failure_style = display(failure.is_some());

    html! {
        <div class="row">
            <UrlInput
                value={props.query.clone()}
                label_active={props.label_active}
                oninput={props.oninput.clone()}
                onsubmit={props.onsubmit.clone()}
            />
            <Button onclick={on_submit_click} variant={ButtonVariant::Primary}>
                {"Split"}
            </Button>

            <div id={RESULT_ID} style={result_style}>
                <table class="centered responsive-table striped">
                    {for field_rows.into_iter().map(|row| html! {
                        <tr key={row.id}>
                            <td>{row.label}</td>
                            <td><code id={row.id}>{row.value}</code></td>
                        </tr>
                    })}
                </table>
            </div>

            <div id="failure" style={failure_style}>
                if let Some(message) = failure {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        <p id="error-message">{message}</p>
                    </Alert>
                }
            </div>
        </div>
    }
}
