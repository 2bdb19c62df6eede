//! Full-viewport drag-and-drop overlay for Leptos.
//!
//! [`FullScreenDropzone`] listens for drag events on the document, shows a
//! portal-mounted overlay while files hover anywhere over the page,
//! validates the dragged MIME types against an [`AcceptList`], and hands
//! dropped files to a callback. Overlay content is supplied as a render
//! function of the current [`DropzoneStatus`].

mod accept;
mod dropzone;
mod fade;
mod listener;
pub mod mime;
mod state;
mod style;

pub use accept::{AcceptList, WILDCARD};
pub use dropzone::FullScreenDropzone;
pub use fade::Fade;
pub use listener::DocumentListener;
pub use state::DropzoneStatus;
pub use style::SizeToken;
