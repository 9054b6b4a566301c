/// Thin wrappers over the browser APIs the inspector touches
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

use crate::inspector::SelectionSnapshot;

/// Id of the element that holds rendered results.
pub const RESULT_ID: &str = "result";

/// Current `location.hash`, `""` when unavailable.
pub fn current_fragment() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    match window.location().hash() {
        Ok(hash) => hash,
        Err(e) => {
            log::warn!("Unable to read location.hash: {:?}", e);
            String::new()
        }
    }
}

/// Assign a raw value to `location.hash`. The browser encodes it and fires
/// `hashchange` when it differs from the current fragment.
pub fn set_fragment(value: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_hash(value) {
        log::warn!("Unable to set location.hash: {:?}", e);
    }
}

/// Describe the document's current selection for the capture rule.
pub fn selection_snapshot() -> Option<SelectionSnapshot> {
    let document = web_sys::window()?.document()?;
    let selection = match document.get_selection() {
        Ok(selection) => selection?,
        Err(e) => {
            log::warn!("Unable to read the selection: {:?}", e);
            return None;
        }
    };

    let anchor = selection.anchor_node()?;
    let focus = selection.focus_node();
    let parent = anchor.parent_node();

    let in_code = parent
        .as_ref()
        .is_some_and(|node| node.node_name().eq_ignore_ascii_case("code"));
    let in_result = match (parent.as_ref(), document.get_element_by_id(RESULT_ID)) {
        (Some(node), Some(result)) => result.contains(Some(node)),
        _ => false,
    };

    Some(SelectionSnapshot {
        text: String::from(selection.to_string()),
        single_node: anchor.is_same_node(focus.as_ref()),
        in_code,
        in_result,
    })
}

/// An event subscription that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn new<F>(target: EventTarget, event: &'static str, handler: F) -> Result<Listener, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target,
            event,
            callback,
        })
    }

    /// Listen on `window`.
    pub fn window<F>(event: &'static str, handler: F) -> Option<Listener>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let window = web_sys::window()?;
        Self::attach(window.into(), event, handler)
    }

    /// Listen on `document`.
    pub fn document<F>(event: &'static str, handler: F) -> Option<Listener>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let document = web_sys::window()?.document()?;
        Self::attach(document.into(), event, handler)
    }

    fn attach<F>(target: EventTarget, event: &'static str, handler: F) -> Option<Listener>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        match Listener::new(target, event, handler) {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("Unable to listen for {}: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Unable to stop listening for {}: {:?}", self.event, e);
        }
    }
}

/// Element to mount into, by id.
pub fn mount_element(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}
