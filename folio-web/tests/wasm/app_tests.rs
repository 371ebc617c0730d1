use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use folio_content::Lang;
use folio_web::app::App;
use folio_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    // Pin the starting language so assertions are order-independent.
    folio_web::i18n::apply_lang(Lang::Fa);
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_app();
    let doc = dom::document();
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
}

#[wasm_bindgen_test]
fn language_toggle_updates_lang_and_dir() {
    render_app();
    let doc = dom::document();
    let html = doc.document_element().expect("document element");
    assert_eq!(html.get_attribute("lang"), Some("fa".into()));
    assert_eq!(html.get_attribute("dir"), Some("rtl".into()));

    let toggle: HtmlElement = doc
        .query_selector(".lang-toggle")
        .expect("query toggle")
        .expect("toggle exists")
        .dyn_into()
        .expect("cast to element");
    toggle.click();
    assert_eq!(html.get_attribute("lang"), Some("en".into()));
    assert_eq!(html.get_attribute("dir"), Some("ltr".into()));

    toggle.click();
    assert_eq!(html.get_attribute("lang"), Some("fa".into()));
    assert_eq!(html.get_attribute("dir"), Some("rtl".into()));
}

#[wasm_bindgen_test]
fn toggled_language_is_persisted() {
    render_app();
    let storage = dom::local_storage().expect("localStorage");
    let toggle: HtmlElement = dom::document()
        .query_selector(".lang-toggle")
        .expect("query toggle")
        .expect("toggle exists")
        .dyn_into()
        .expect("cast to element");
    toggle.click();
    assert_eq!(
        storage.get_item("folio.lang").expect("read preference"),
        Some("en".to_string())
    );
}
