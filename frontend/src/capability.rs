//! Drag & drop upload capability detection.
//!
//! Evaluated once when the application mounts; the resulting
//! [`AdvancedUpload`] flag is handed to every upload widget as a prop.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Whether drag & drop uploads can be offered on this page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvancedUpload(pub bool);

impl AdvancedUpload {
    /// Probe the browser. Call once per page load.
    pub fn detect() -> Self {
        let supported = detect_advanced_upload();
        log::info!("🖱️ Drag & drop upload supported: {}", supported);
        AdvancedUpload(supported)
    }

    pub fn enabled(self) -> bool {
        self.0
    }
}

/// Environment features consulted by [`advanced_upload_supported`].
pub trait CapabilityProbe {
    /// An element exposes the `draggable` property.
    fn has_draggable(&self) -> bool;
    /// An element exposes both `ondragstart` and `ondrop` handlers.
    fn has_drag_events(&self) -> bool;
    /// `FormData` can be constructed from script.
    fn has_form_data(&self) -> bool;
    /// `FileReader` is available to read files client-side.
    fn has_file_reader(&self) -> bool;
}

/// Decide drag & drop support from a probe.
pub fn advanced_upload_supported(probe: &impl CapabilityProbe) -> bool {
    (probe.has_draggable() || probe.has_drag_events())
        && probe.has_form_data()
        && probe.has_file_reader()
}

/// Probe backed by the live DOM: a scratch `<div>` and the global `window`.
pub struct DomProbe {
    window: JsValue,
    element: JsValue,
}

impl DomProbe {
    /// `None` outside a browser (no window or document).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let element = window.document()?.create_element("div").ok()?;
        Some(Self {
            window: window.into(),
            element: element.into(),
        })
    }

    fn element_has(&self, property: &str) -> bool {
        Reflect::has(&self.element, &JsValue::from_str(property)).unwrap_or(false)
    }

    fn window_has(&self, property: &str) -> bool {
        Reflect::has(&self.window, &JsValue::from_str(property)).unwrap_or(false)
    }
}

impl CapabilityProbe for DomProbe {
    fn has_draggable(&self) -> bool {
        self.element_has("draggable")
    }

    fn has_drag_events(&self) -> bool {
        self.element_has("ondragstart") && self.element_has("ondrop")
    }

    fn has_form_data(&self) -> bool {
        self.window_has("FormData")
    }

    fn has_file_reader(&self) -> bool {
        self.window_has("FileReader")
    }
}

/// `true` iff the current browser supports drag & drop file uploads.
pub fn detect_advanced_upload() -> bool {
    DomProbe::new()
        .map(|probe| advanced_upload_supported(&probe))
        .unwrap_or(false)
}
