/// gparse-web - front end for the URL decomposition service
/// Built with Rust + WASM + Yew

mod client;
pub mod config;
pub mod decomposition;
pub mod fragment;
pub mod inspector;
mod render;
pub mod ui;

use wasm_bindgen::prelude::*;

use config::{ConfigError, FieldViewOptions, InspectorConfig, Variant};
use ui::InspectorProps;
use ui::fields::FieldInspector;
use ui::table::TableInspector;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the table view, requests go to `/{url}`
#[wasm_bindgen]
pub fn start_table_inspector() -> Result<(), JsValue> {
    mount(InspectorConfig::table())
}

// Start the field view; `options` may be undefined
#[wasm_bindgen]
pub fn start_field_inspector(options: JsValue) -> Result<(), JsValue> {
    mount(FieldViewOptions::from_js(options)?.into_config()?)
}

// Start either view from a full config object
#[wasm_bindgen]
pub fn start_inspector(config: JsValue) -> Result<(), JsValue> {
    mount(InspectorConfig::from_js(config)?)
}

fn mount(config: InspectorConfig) -> Result<(), JsValue> {
    let root = match &config.mount {
        Some(id) => Some(
            ui::browser::mount_element(id).ok_or_else(|| ConfigError::MountNotFound(id.clone()))?,
        ),
        None => None,
    };
    log::info!("Mounting {:?} inspector against {:?}", config.variant, config.service_path);

    let variant = config.variant;
    let props = InspectorProps { config };
    match (variant, root) {
        (Variant::Table, Some(root)) => {
            yew::Renderer::<TableInspector>::with_root_and_props(root, props).render();
        }
        (Variant::Table, None) => {
            yew::Renderer::<TableInspector>::with_props(props).render();
        }
        (Variant::Fields, Some(root)) => {
            yew::Renderer::<FieldInspector>::with_root_and_props(root, props).render();
        }
        (Variant::Fields, None) => {
            yew::Renderer::<FieldInspector>::with_props(props).render();
        }
    }
    Ok(())
}
