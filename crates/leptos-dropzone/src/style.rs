//! Sizing tokens and style generation for the overlay.

use crate::state::DropzoneStatus;

/// Named size from the theme scale, or an exact pixel count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Px(u16),
}

impl SizeToken {
    /// Spacing scale in pixels, used for offset and padding
    pub fn spacing_px(self) -> u16 {
        match self {
            SizeToken::Xs => 10,
            SizeToken::Sm => 12,
            SizeToken::Md => 16,
            SizeToken::Lg => 20,
            SizeToken::Xl => 24,
            SizeToken::Px(px) => px,
        }
    }

    /// Border-radius scale in pixels
    pub fn radius_px(self) -> u16 {
        match self {
            SizeToken::Xs => 2,
            SizeToken::Sm => 4,
            SizeToken::Md => 8,
            SizeToken::Lg => 16,
            SizeToken::Xl => 32,
            SizeToken::Px(px) => px,
        }
    }
}

pub(crate) const ZONE_CLASS: &str = "fullscreen-dropzone";
pub(crate) const ACTIVE_CLASS: &str = "active";
pub(crate) const REJECT_CLASS: &str = "reject";

/// Fixed-position wrapper covering the viewport, inset by `offset`
pub(crate) fn wrapper_style(offset: SizeToken, z_index: i32) -> String {
    let inset = offset.spacing_px();
    format!(
        "position: fixed; top: {inset}px; right: {inset}px; bottom: {inset}px; left: {inset}px; z-index: {z_index};"
    )
}

/// Inner zone filling the wrapper
pub(crate) fn zone_style(padding: SizeToken, radius: SizeToken) -> String {
    format!(
        "display: flex; align-items: center; justify-content: center; height: 100%; border: 2px dashed; border-radius: {}px; padding: {}px;",
        radius.radius_px(),
        padding.spacing_px(),
    )
}

/// State classes are mutually exclusive: a visible valid drag is active,
/// an invalid one is reject.
pub(crate) fn zone_class(status: DropzoneStatus) -> String {
    let mut class = ZONE_CLASS.to_string();
    if status.accepted {
        class.push(' ');
        class.push_str(ACTIVE_CLASS);
    }
    if status.rejected {
        class.push(' ');
        class.push_str(REJECT_CLASS);
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_tokens_resolve_to_scale_pixels() {
        assert_eq!(SizeToken::Xl.spacing_px(), 24);
        assert_eq!(SizeToken::Md.spacing_px(), 16);
        assert_eq!(SizeToken::Sm.radius_px(), 4);
        assert_eq!(SizeToken::Px(7).spacing_px(), 7);
        assert_eq!(SizeToken::Px(7).radius_px(), 7);
    }

    #[test]
    fn wrapper_style_positions_overlay() {
        let style = wrapper_style(SizeToken::Xl, 1000);
        assert!(style.contains("position: fixed"));
        assert!(style.contains("top: 24px"));
        assert!(style.contains("z-index: 1000"));
    }

    #[test]
    fn state_classes_are_mutually_exclusive() {
        let active = zone_class(DropzoneStatus {
            accepted: true,
            rejected: false,
        });
        assert_eq!(active, "fullscreen-dropzone active");

        let reject = zone_class(DropzoneStatus {
            accepted: false,
            rejected: true,
        });
        assert_eq!(reject, "fullscreen-dropzone reject");

        let idle = zone_class(DropzoneStatus::default());
        assert_eq!(idle, "fullscreen-dropzone");
    }
}
