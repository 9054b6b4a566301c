/// The inspector state machine
///
/// Keeps the input value, the address fragment and the result panel in
/// step. The browser glue feeds it three kinds of events: fragment changes,
/// submissions and selection changes. Each handler is a plain method, so
/// the whole cycle can be driven without a browser.

use crate::client;
use crate::config::InspectorConfig;
use crate::decomposition::{Decomposition, Failure, RawOutcome, classify};
use crate::fragment::decode_fragment;

/// Identifies one fetch cycle. Only the latest cycle may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CycleToken(u64);

impl CycleToken {
    fn next(self) -> CycleToken {
        CycleToken(self.0 + 1)
    }
}

/// What the result panel shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Empty,
    Result(Decomposition),
    Failure(Failure),
}

/// A request the glue must issue on behalf of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: CycleToken,
    pub url: String,
}

/// The parts of a DOM selection the capture rule looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    pub text: String,
    /// Anchor and focus are the same node.
    pub single_node: bool,
    /// The anchor node's parent is a `<code>` element.
    pub in_code: bool,
    /// That element sits inside the rendered result.
    pub in_result: bool,
}

impl SelectionSnapshot {
    fn is_capturable(&self) -> bool {
        self.single_node && self.in_code && self.in_result && !self.text.is_empty()
    }
}

#[derive(Debug)]
pub struct Inspector {
    config: InspectorConfig,
    query: String,
    label_active: bool,
    view: ViewState,
    cycle: CycleToken,
}

impl Inspector {
    pub fn new(config: InspectorConfig) -> Inspector {
        Inspector {
            config,
            query: String::new(),
            label_active: false,
            view: ViewState::Empty,
            cycle: CycleToken::default(),
        }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Current input control value.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn label_active(&self) -> bool {
        self.label_active
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn cycle(&self) -> CycleToken {
        self.cycle
    }

    /// The user edited the input.
    pub fn on_input(&mut self, value: String) {
        self.label_active = !value.is_empty() || self.label_active;
        self.query = value;
    }

    /// Start a new cycle from `location.hash`.
    ///
    /// The view is cleared either way. An empty fragment keeps the input
    /// and issues nothing.
    pub fn on_fragment_change(&mut self, hash: &str) -> Option<FetchRequest> {
        self.cycle = self.cycle.next();
        self.view = ViewState::Empty;

        let query = decode_fragment(hash)?;
        let url = client::request_url(&self.config, &query);
        log::debug!("Cycle {:?}: inspecting {:?} via {}", self.cycle, query, url);

        self.query = query;
        self.label_active = true;
        Some(FetchRequest {
            token: self.cycle,
            url,
        })
    }

    /// Enter or submit. Returns the raw value to assign to `location.hash`;
    /// the resulting `hashchange` runs the cycle.
    pub fn on_submit(&self) -> String {
        self.query.clone()
    }

    /// Copy a selection from inside the result into the input. Returns
    /// whether the input changed.
    pub fn on_selection_change(&mut self, selection: &SelectionSnapshot) -> bool {
        if !self.config.capture_selection || !selection.is_capturable() {
            return false;
        }
        if self.query == selection.text {
            return false;
        }
        self.query = selection.text.clone();
        self.label_active = true;
        true
    }

    /// A request finished. Returns whether the view changed; responses from
    /// superseded cycles are dropped.
    pub fn on_response(&mut self, token: CycleToken, outcome: RawOutcome) -> bool {
        if token != self.cycle {
            log::debug!("Dropping stale response for {:?}, current {:?}", token, self.cycle);
            return false;
        }

        self.view = match classify(outcome) {
            Ok(decomposition) => ViewState::Result(decomposition),
            Err(failure) => {
                log::debug!("Cycle {:?} failed: {:?}", token, failure);
                ViewState::Failure(failure)
            }
        };
        true
    }
}
