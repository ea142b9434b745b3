use futures::future::try_join_all;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlInputElement};

use settings_sync_protocol::{setting_enabled, UpdateRequest};

use crate::dom;
use crate::network;
use crate::phase::{Phase, PhaseCell};

/// One toggle control under management: the id doubles as the settings key,
/// the label is the page's human-readable name for it when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleDescriptor {
    pub id: String,
    pub label: Option<String>,
}

impl ToggleDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }
}

/// The settings sync widget.
///
/// Constructed from an explicit descriptor list so callers are not coupled
/// to the page's class naming; `dom::discover_controls` produces that list
/// for the stock page. Owns the lifecycle phase: no submission leaves the
/// widget until the initial load has settled.
pub struct SettingsWidget {
    phase: PhaseCell,
    controls: Vec<BoundControl>,
}

struct BoundControl {
    descriptor: ToggleDescriptor,
    element: HtmlInputElement,
}

impl SettingsWidget {
    /// Bind descriptors to their DOM elements. Descriptors that resolve to
    /// nothing are dropped with a console warning.
    pub fn new(document: &Document, descriptors: Vec<ToggleDescriptor>) -> Self {
        let mut controls = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            match dom::control_by_id(document, &descriptor.id) {
                Some(element) => controls.push(BoundControl {
                    descriptor,
                    element,
                }),
                None => web_sys::console::warn_1(
                    &format!("SETTINGS: no control on page for '{}'", descriptor.id).into(),
                ),
            }
        }
        Self {
            phase: PhaseCell::new(),
            controls,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// Settings keys under management, in page order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().map(|c| c.descriptor.id.as_str())
    }

    /// Load every control's stored value, then open the widget for
    /// submissions.
    ///
    /// Per control, the change listener is attached before its read
    /// resolves, so a listener is in place regardless of the read outcome.
    /// The reads fan out concurrently and are joined all-or-nothing: if any
    /// read fails the widget stays in `Loading` for the lifetime of the
    /// page and every later toggle is dropped.
    pub async fn load_all(&self) {
        let mut reads = Vec::with_capacity(self.controls.len());
        for control in &self.controls {
            self.attach_change_listener(&control.element);
            reads.push(load_one(control));
        }

        match try_join_all(reads).await {
            Ok(_) => {
                self.phase.mark_ready();
                web_sys::console::log_1(
                    &format!("SETTINGS: {} controls ready", self.controls.len()).into(),
                );
            }
            Err(err) => {
                web_sys::console::error_1(
                    &format!("SETTINGS: initial load failed, widget stays inert: {err:?}").into(),
                );
            }
        }
    }

    /// Wire the `change` event to a submission. The phase guard inside the
    /// handler drops anything that fires before the initial load settles.
    fn attach_change_listener(&self, element: &HtmlInputElement) {
        let phase = self.phase.clone();
        let cb = Closure::wrap(Box::new(move |e: Event| {
            submit(&phase, &e);
        }) as Box<dyn FnMut(_)>);
        let _ = element.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

/// Read one control's stored value and reflect it into the DOM.
///
/// Only the exact body `"True"` checks the control; any other body leaves
/// it at its unchecked default. Transport failures propagate to the join.
async fn load_one(control: &BoundControl) -> Result<(), JsValue> {
    let body = network::fetch_setting(&control.descriptor.id).await?;
    if setting_enabled(&body) {
        control.element.set_checked(true);
    }
    Ok(())
}

/// Per-change submission handler.
fn submit(phase: &PhaseCell, event: &Event) {
    if !phase.is_ready() {
        web_sys::console::log_1(&"SETTINGS: change before ready, dropped".into());
        return;
    }

    let Some(input) = event
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let key = input.id();
    let value = input.checked();
    web_sys::console::log_1(&format!("SETTINGS: submit {key}={value}").into());

    let request = UpdateRequest::single(key.clone(), value);
    spawn_local(async move {
        // Fire-and-forget: failures are a console trace, nothing more.
        if let Err(err) = network::push_update(&request).await {
            web_sys::console::warn_1(&format!("SETTINGS: write for '{key}' failed: {err:?}").into());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_without_label() {
        let d = ToggleDescriptor::new("dark_mode");
        assert_eq!(d.id, "dark_mode");
        assert!(d.label.is_none());
    }
}
