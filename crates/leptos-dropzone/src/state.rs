//! Overlay visibility/error state machine.
//!
//! Pure data, mutated only by the three drag event handlers, so the
//! transitions stay testable away from the DOM.

/// Drag status exposed to the overlay render function.
///
/// Both fields are derived from the event-driven state and never set
/// directly by a caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropzoneStatus {
    /// An active drag over the document passes the accept list
    pub accepted: bool,
    /// The active drag violates the accept list
    pub rejected: bool,
}

/// Visibility and validity of one mounted dropzone's overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DropState {
    visible: bool,
    error: bool,
}

impl DropState {
    pub(crate) fn visible(self) -> bool {
        self.visible
    }

    pub(crate) fn status(self) -> DropzoneStatus {
        DropzoneStatus {
            accepted: self.visible && !self.error,
            rejected: self.error,
        }
    }

    /// A drag moved over the document. Runs on every dragover, so a
    /// changing content signature updates the error state mid-gesture.
    pub(crate) fn drag_over(&mut self, valid: bool) {
        self.error = !valid;
        self.visible = true;
    }

    /// The drag left the document without dropping
    pub(crate) fn drag_leave(&mut self) {
        self.visible = false;
    }

    /// Content was dropped. Returns whether the dropped files should be
    /// delivered to the caller.
    pub(crate) fn drop_received(&mut self, valid: bool) -> bool {
        self.visible = false;
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::AcceptList;

    #[test]
    fn valid_drag_over_shows_overlay() {
        let accept = AcceptList::new(["image/png"]);
        let mut state = DropState::default();

        state.drag_over(accept.accepts(["image/png"]));

        assert!(state.visible());
        assert_eq!(
            state.status(),
            DropzoneStatus {
                accepted: true,
                rejected: false,
            }
        );
    }

    #[test]
    fn invalid_drag_over_sets_error() {
        let accept = AcceptList::new(["image/png"]);
        let mut state = DropState::default();

        state.drag_over(accept.accepts(["text/plain"]));

        assert!(state.visible());
        assert_eq!(
            state.status(),
            DropzoneStatus {
                accepted: false,
                rejected: true,
            }
        );
    }

    #[test]
    fn wildcard_drag_is_never_rejected() {
        let accept = AcceptList::any();
        let mut state = DropState::default();

        state.drag_over(accept.accepts(["anything/x"]));

        assert!(!state.status().rejected);
    }

    #[test]
    fn revalidation_updates_error_mid_gesture() {
        let mut state = DropState::default();

        state.drag_over(false);
        assert!(state.status().rejected);

        // dragged content signature changed to something acceptable
        state.drag_over(true);
        assert!(state.status().accepted);
        assert!(!state.status().rejected);
    }

    #[test]
    fn valid_drop_delivers_and_hides() {
        let mut state = DropState::default();
        state.drag_over(true);

        assert!(state.drop_received(true));
        assert!(!state.visible());
    }

    #[test]
    fn invalid_drop_never_delivers() {
        let mut state = DropState::default();
        state.drag_over(false);

        assert!(!state.drop_received(false));
        assert!(!state.visible());
    }

    #[test]
    fn drag_leave_hides_without_delivery() {
        let mut state = DropState::default();
        state.drag_over(true);

        state.drag_leave();

        assert!(!state.visible());
        assert!(!state.status().accepted);
    }
}
