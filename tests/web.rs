//! Browser glue tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use gparse_web::decomposition::{Failure, RawOutcome, classify};
use gparse_web::fragment::decode_fragment;
use gparse_web::inspector::ViewState;
use gparse_web::ui::PanelProps;
use gparse_web::ui::browser::{Listener, current_fragment, set_fragment};
use gparse_web::ui::fields::FieldPanel;
use gparse_web::ui::table::{PANEL, TablePanel};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;
use web_sys::Element;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_set_fragment_round_trips() {
    let query = "https://bücher.example/a b?c=<d>";

    set_fragment(query);

    assert_eq!(decode_fragment(&current_fragment()).as_deref(), Some(query));
}

#[wasm_bindgen_test]
fn test_empty_fragment_reads_as_none() {
    set_fragment("");

    assert_eq!(decode_fragment(&current_fragment()), None);
}

#[wasm_bindgen_test]
fn test_listener_detaches_on_drop() {
    let hits = Rc::new(Cell::new(0));
    let listener = {
        let hits = hits.clone();
        Listener::window("gparse-test", move |_| hits.set(hits.get() + 1)).unwrap()
    };
    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("gparse-test").unwrap();

    window.dispatch_event(&event).unwrap();
    drop(listener);
    window.dispatch_event(&event).unwrap();

    assert_eq!(hits.get(), 1);
}

fn sample_result() -> ViewState {
    let body = serde_json::json!({
        "scheme": "https",
        "username": "user",
        "password": "p%40ss",
        "hostname": "www.example.co.uk",
        "port": "8443",
        "path": "/a%20b",
        "query": "q=%3Cscript%3E",
        "anchor": "top",
        "domain": "example",
        "public_suffix": "co.uk",
        "is_rulable": true,
        "is_subdomain": true,
        "is_public_suffix": true,
    })
    .to_string();
    let outcome = RawOutcome::Response { status: 200, body };
    ViewState::Result(classify(outcome).unwrap())
}

fn panel(view: ViewState) -> PanelProps {
    PanelProps {
        view,
        query: AttrValue::from("https://www.example.co.uk/"),
        label_active: true,
        oninput: Callback::noop(),
        onsubmit: Callback::noop(),
    }
}

fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

async fn render<C>(props: PanelProps) -> Element
where
    C: yew::html::BaseComponent<Properties = PanelProps>,
{
    let root = mount_point();
    yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(Duration::ZERO).await;
    root
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn text(root: &Element, selector: &str) -> String {
    find(root, selector)
        .and_then(|element| element.text_content())
        .unwrap_or_default()
}

fn style(root: &Element, selector: &str) -> String {
    find(root, selector)
        .and_then(|element| element.get_attribute("style"))
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn test_field_panel_shows_result_hides_failure() {
    let root = render::<FieldPanel>(panel(sample_result())).await;

    assert_eq!(style(&root, "#result"), "display: inline");
    assert_eq!(style(&root, "#failure"), "display: none");
    assert!(find(&root, "#error-message").is_none());

    assert_eq!(text(&root, "#hostname"), "www.example.co.uk");
    assert_eq!(text(&root, "#password"), "p@ss");
    assert_eq!(text(&root, "#query"), "q=<script>");
    assert_eq!(text(&root, "#public-suffix"), "co.uk");
    for id in ["#is-rulable", "#is-subdomain", "#is-public-suffix"] {
        assert_eq!(text(&root, id), "Yes");
    }
}

#[wasm_bindgen_test]
async fn test_field_panel_transport_failure_hides_fields() {
    let root = render::<FieldPanel>(panel(ViewState::Failure(Failure::Transport))).await;

    assert_eq!(style(&root, "#result"), "display: none");
    assert_eq!(style(&root, "#failure"), "display: inline");
    assert_eq!(text(&root, "#error-message"), "We are unable to talk to the server.");
    for id in ["#scheme", "#hostname", "#domain", "#is-rulable"] {
        assert_eq!(text(&root, id), "", "{id} should be blank");
    }
}

#[wasm_bindgen_test]
async fn test_field_panel_empty_hides_both() {
    let root = render::<FieldPanel>(panel(ViewState::Empty)).await;

    assert_eq!(style(&root, "#result"), "display: none");
    assert_eq!(style(&root, "#failure"), "display: none");
    assert!(find(&root, "#error-message").is_none());
}

#[wasm_bindgen_test]
async fn test_table_panel_shows_result() {
    let root = render::<TablePanel>(panel(sample_result())).await;
    let result = find(&root, "#result").unwrap();

    assert_eq!(result.class_name(), PANEL);
    assert!(find(&root, "#result table").is_some());
    assert!(find(&root, "#result p").is_none());
    assert!(find(&root, "#result script").is_none());

    let markup = result.inner_html();
    assert_eq!(markup.matches("<code>Yes</code>").count(), 3);
    assert!(markup.contains("<code>www.example.co.uk</code>"));
    assert!(text(&root, "#result").contains("q=<script>"));
}

#[wasm_bindgen_test]
async fn test_table_panel_transport_failure() {
    let root = render::<TablePanel>(panel(ViewState::Failure(Failure::Transport))).await;
    let result = find(&root, "#result").unwrap();

    assert_eq!(result.class_name(), format!("{} red white-text", PANEL));
    assert!(find(&root, "#result table").is_none());
    assert_eq!(text(&root, "#result p"), "We are unable to talk to the server.");
}

#[wasm_bindgen_test]
async fn test_table_panel_wrong_server() {
    let failure = classify(RawOutcome::Response {
        status: 200,
        body: "{not json".to_string(),
    })
    .unwrap_err();
    let root = render::<TablePanel>(panel(ViewState::Failure(failure))).await;

    assert_eq!(text(&root, "#result p"), "We are talking to the wrong server.");
}

#[wasm_bindgen_test]
async fn test_table_panel_empty() {
    let root = render::<TablePanel>(panel(ViewState::Empty)).await;
    let result = find(&root, "#result").unwrap();

    assert_eq!(result.class_name(), "");
    assert_eq!(result.child_element_count(), 0);
}
