use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlInputElement};

use crate::widget::ToggleDescriptor;

/// Class marker shared by every toggle control on the stock settings page.
pub const TOGGLE_CLASS: &str = "form-check-input";

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// One-time snapshot of the toggle controls present in the document.
///
/// Controls added after this scan are not tracked. Elements without an id
/// cannot be keyed to a server setting and are skipped.
pub fn discover_controls(doc: &Document) -> Vec<ToggleDescriptor> {
    let collection = doc.get_elements_by_class_name(TOGGLE_CLASS);
    let mut descriptors = Vec::new();

    for i in 0..collection.length() {
        let Some(el) = collection.item(i) else { continue };
        if el.dyn_ref::<HtmlInputElement>().is_none() {
            web_sys::console::warn_1(
                &format!("SETTINGS: skipping non-input toggle '{}'", el.id()).into(),
            );
            continue;
        }
        let id = el.id();
        if id.is_empty() {
            web_sys::console::warn_1(&"SETTINGS: skipping toggle without id".into());
            continue;
        }
        descriptors.push(ToggleDescriptor {
            label: label_for(doc, &id),
            id,
        });
    }

    descriptors
}

/// Resolve a descriptor back to its input element.
pub fn control_by_id(doc: &Document, id: &str) -> Option<HtmlInputElement> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

/// Text of the `<label for="...">` associated with a control, if any.
fn label_for(doc: &Document, id: &str) -> Option<String> {
    let selector = format!("label[for=\"{id}\"]");
    doc.query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
