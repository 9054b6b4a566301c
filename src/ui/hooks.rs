/// The `use_inspector` hook: one `Inspector` per mounted app, wired to the
/// browser's `hashchange` and `selectionchange` events.
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::client;
use crate::config::InspectorConfig;
use crate::inspector::{Inspector, ViewState};
use crate::ui::browser::{self, Listener};

#[derive(Clone)]
pub struct InspectorHandle {
    inspector: Rc<RefCell<Inspector>>,
    redraw: UseForceUpdateHandle,
}

impl InspectorHandle {
    pub fn query(&self) -> AttrValue {
        AttrValue::from(self.inspector.borrow().query().to_string())
    }

    pub fn label_active(&self) -> bool {
        self.inspector.borrow().label_active()
    }

    pub fn view(&self) -> ViewState {
        self.inspector.borrow().view().clone()
    }

    pub fn input(&self, value: String) {
        self.inspector.borrow_mut().on_input(value);
        self.redraw.force_update();
    }

    /// Write the input to the fragment and let `hashchange` run the cycle.
    pub fn submit(&self) {
        let value = self.inspector.borrow().on_submit();
        browser::set_fragment(&value);
    }
}

fn run_cycle(inspector: Rc<RefCell<Inspector>>, redraw: UseForceUpdateHandle) {
    let request = inspector
        .borrow_mut()
        .on_fragment_change(&browser::current_fragment());
    redraw.force_update();

    let Some(request) = request else {
        return;
    };
    spawn_local(async move {
        let outcome = client::fetch(&request.url).await;
        let changed = inspector.borrow_mut().on_response(request.token, outcome);
        if changed {
            redraw.force_update();
        }
    });
}

#[hook]
pub fn use_inspector(config: InspectorConfig) -> InspectorHandle {
    let inspector = use_mut_ref(move || Inspector::new(config));
    let redraw = use_force_update();

    {
        let inspector = inspector.clone();
        let redraw = redraw.clone();

        use_effect_with((), move |_| {
            run_cycle(inspector.clone(), redraw.clone());

            let on_hashchange = {
                let inspector = inspector.clone();
                let redraw = redraw.clone();
                Listener::window("hashchange", move |_| {
                    run_cycle(inspector.clone(), redraw.clone())
                })
            };

            let capture_selection = inspector.borrow().config().capture_selection;
            let on_selectionchange = if capture_selection {
                Listener::document("selectionchange", move |_| {
                    let Some(selection) = browser::selection_snapshot() else {
                        return;
                    };
                    let changed = inspector.borrow_mut().on_selection_change(&selection);
                    if changed {
                        redraw.force_update();
                    }
                })
            } else {
                None
            };

            move || {
                drop(on_hashchange);
                drop(on_selectionchange);
            }
        });
    }

    InspectorHandle { inspector, redraw }
}
