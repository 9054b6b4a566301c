/// UI module exports
use yew::prelude::*;

use crate::config::InspectorConfig;
use crate::inspector::ViewState;

pub mod browser;
pub mod components;
pub mod fields;
pub mod hooks;
pub mod table;

#[derive(Properties, PartialEq, Clone)]
pub struct InspectorProps {
    pub config: InspectorConfig,
}

/// Everything a view needs to draw one frame.
#[derive(Properties, PartialEq, Clone)]
pub struct PanelProps {
    pub view: ViewState,
    pub query: AttrValue,
    pub label_active: bool,
    pub oninput: Callback<String>,
    pub onsubmit: Callback<()>,
}

impl PanelProps {
    fn from_handle(inspector: &hooks::InspectorHandle) -> PanelProps {
        let oninput = {
            let inspector = inspector.clone();
            Callback::from(move |value: String| inspector.input(value))
        };
        let onsubmit = {
            let inspector = inspector.clone();
            Callback::from(move |_: ()| inspector.submit())
        };

        PanelProps {
            view: inspector.view(),
            query: inspector.query(),
            label_active: inspector.label_active(),
            oninput,
            onsubmit,
        }
    }
}
