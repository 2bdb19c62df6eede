//! Full-viewport drag-and-drop overlay component.

use std::sync::Arc;

use leptos::portal::Portal;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File};

use crate::accept::AcceptList;
use crate::fade::Fade;
use crate::listener::DocumentListener;
use crate::state::{DropState, DropzoneStatus};
use crate::style::{self, SizeToken};

/// Full-viewport overlay that accepts files dragged anywhere onto the page.
///
/// Listens for `dragover`, `dragleave` and `drop` on the document, shows a
/// portal-mounted overlay while a drag hovers, validates the dragged item
/// types against `accept` on every dragover, and hands the dropped files to
/// `on_drop` exactly once per valid drop, never for a rejected one.
///
/// Every mounted instance attaches its own document listeners; multiple
/// simultaneous instances all react to the same drag. Mount one at a time
/// unless that is intended.
#[component]
pub fn FullScreenDropzone<C, IV>(
    /// Space between overlay and viewport edges
    #[prop(default = SizeToken::Xl)]
    offset: SizeToken,
    /// Zone padding
    #[prop(default = SizeToken::Md)]
    padding: SizeToken,
    /// Zone border radius
    #[prop(default = SizeToken::Sm)]
    radius: SizeToken,
    /// Overlay stacking order
    #[prop(default = 1000)]
    z_index: i32,
    /// Suppress the overlay regardless of drag state
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Accepted MIME types
    #[prop(into, optional)]
    accept: AcceptList,
    /// Called with the dropped files after a valid drop
    #[prop(into)]
    on_drop: UnsyncCallback<Vec<File>>,
    /// Renders the overlay content from the current drag status
    children: C,
) -> impl IntoView
where
    C: Fn(DropzoneStatus) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let (state, set_state) = signal(DropState::default());

    let over_accept = accept.clone();
    let on_drag_over = DocumentListener::new("dragover", move |ev| {
        ev.prevent_default();
        let ev: DragEvent = ev.unchecked_into();
        let valid = over_accept.accepts_event(&ev);
        set_state.update(|s| s.drag_over(valid));
    });

    let on_drag_leave = DocumentListener::new("dragleave", move |ev| {
        ev.prevent_default();
        set_state.update(|s| s.drag_leave());
    });

    let on_document_drop = DocumentListener::new("drop", move |ev| {
        ev.stop_propagation();
        ev.prevent_default();
        let ev: DragEvent = ev.unchecked_into();
        let valid = accept.accepts_event(&ev);
        let deliver = set_state
            .try_update(|s| s.drop_received(valid))
            .unwrap_or(false);
        if deliver {
            on_drop.run(dropped_files(&ev));
        }
    });

    let listeners = StoredValue::new_local(vec![on_drag_over, on_drag_leave, on_document_drop]);
    on_cleanup(move || listeners.update_value(|guards| guards.clear()));

    let status = Memo::new(move |_| state.get().status());
    let shown = Signal::derive(move || state.get().visible() && !disabled.get());

    let wrapper_style = style::wrapper_style(offset, z_index);
    let zone_style = style::zone_style(padding, radius);
    let children = Arc::new(children);

    let overlay = move || {
        let children = Arc::clone(&children);
        let wrapper_style = wrapper_style.clone();
        let zone_style = zone_style.clone();
        view! {
            <Fade shown=shown children=move |transition: String| {
                let children = Arc::clone(&children);
                let zone_style = zone_style.clone();
                view! {
                    <div
                        class="fullscreen-dropzone-wrapper"
                        style=format!("{wrapper_style} {transition}")
                    >
                        <div class=move || style::zone_class(status.get()) style=zone_style>
                            {move || children(status.get())}
                        </div>
                    </div>
                }
            } />
        }
    };

    view! { <Portal>{overlay()}</Portal> }
}

/// Files carried by a drop. A missing transfer degrades to an empty list.
fn dropped_files(event: &DragEvent) -> Vec<File> {
    let Some(transfer) = event.data_transfer() else {
        return Vec::new();
    };
    let Some(files) = transfer.files() else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}
