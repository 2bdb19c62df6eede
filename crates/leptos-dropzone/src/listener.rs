//! Scoped document-level event listeners.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

/// A document-level event listener that deregisters itself when dropped.
///
/// Registration and removal are paired through `Drop`, so the listener
/// cannot outlive the scope that owns it no matter how that scope is torn
/// down.
pub struct DocumentListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentListener {
    /// Attach `handler` to the document for `event`, non-capturing
    pub fn new(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let document = document().expect("dropzone requires a browser document");
        let _ = document.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self { event, callback }
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        // the document may already be gone during page teardown
        if let Some(document) = document() {
            let _ = document
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}
