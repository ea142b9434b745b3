pub mod dom;
mod network;
mod phase;
mod widget;

pub use phase::Phase;
pub use widget::{SettingsWidget, ToggleDescriptor};

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Boot the widget against the current document.
///
/// Discovers the toggle controls present right now (later additions are
/// not tracked), then kicks off the initial load in the background. Never
/// throws into the hosting page past this point: load and submit failures
/// end up on the developer console only.
#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = dom::get_document().ok_or("no document to scan for toggle controls")?;

    let descriptors = dom::discover_controls(&document);
    if descriptors.is_empty() {
        web_sys::console::warn_1(&"SETTINGS: no toggle controls on this page".into());
        return Ok(());
    }

    let widget = SettingsWidget::new(&document, descriptors);
    spawn_local(async move {
        widget.load_all().await;
    });

    Ok(())
}
