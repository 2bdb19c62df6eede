//! Accept-list validation for dragged content.

use web_sys::DragEvent;

/// Sentinel MIME entry accepting any type
pub const WILDCARD: &str = "*";

/// Ordered allowlist of MIME type strings checked against dragged items.
///
/// A list containing [`WILDCARD`] accepts everything. The default list is
/// wildcard-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptList(Vec<String>);

impl AcceptList {
    /// Accept any MIME type
    pub fn any() -> Self {
        Self(vec![WILDCARD.to_string()])
    }

    /// Accept only the given MIME types
    pub fn new<I, T>(types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self(types.into_iter().map(Into::into).collect())
    }

    /// Whether a set of dragged item types passes the allowlist.
    ///
    /// An empty type set passes unconditionally: items that cannot be
    /// enumerated are not rejected. Callers that need strict validation
    /// must inspect the dropped files themselves.
    pub fn accepts<'a, I>(&self, types: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.0.iter().any(|entry| entry == WILDCARD) {
            return true;
        }
        types
            .into_iter()
            .all(|ty| self.0.iter().any(|entry| entry == ty))
    }

    /// Whether the content carried by a drag event passes the allowlist
    pub fn accepts_event(&self, event: &DragEvent) -> bool {
        let types = item_types(event);
        self.accepts(types.iter().map(String::as_str))
    }
}

impl Default for AcceptList {
    fn default() -> Self {
        Self::any()
    }
}

impl From<&[&str]> for AcceptList {
    fn from(types: &[&str]) -> Self {
        Self::new(types.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for AcceptList {
    fn from(types: [&str; N]) -> Self {
        Self::new(types)
    }
}

/// MIME types of the items carried by a drag event.
///
/// A missing `DataTransfer` degrades to an empty list, never an error.
pub(crate) fn item_types(event: &DragEvent) -> Vec<String> {
    let Some(transfer) = event.data_transfer() else {
        return Vec::new();
    };
    let items = transfer.items();
    (0..items.length())
        .filter_map(|i| items.get(i))
        .map(|item| item.type_())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_accepts_everything() {
        let accept = AcceptList::any();
        assert!(accept.accepts(["text/plain"]));
        assert!(accept.accepts(["application/x-unknown", "video/mp4"]));
    }

    #[test]
    fn wildcard_accepts_empty_item_set() {
        assert!(AcceptList::any().accepts(std::iter::empty::<&str>()));
    }

    #[test]
    fn wildcard_mixed_into_list_short_circuits() {
        let accept = AcceptList::new(["image/png", WILDCARD]);
        assert!(accept.accepts(["text/plain"]));
    }

    #[test]
    fn all_listed_types_accepted() {
        let accept = AcceptList::new(["image/png", "image/jpeg"]);
        assert!(accept.accepts(["image/png"]));
        assert!(accept.accepts(["image/png", "image/jpeg"]));
    }

    #[test]
    fn any_unlisted_type_rejects_the_set() {
        let accept = AcceptList::new(["image/png", "image/jpeg"]);
        assert!(!accept.accepts(["text/plain"]));
        assert!(!accept.accepts(["image/png", "text/plain"]));
    }

    #[test]
    fn empty_item_set_is_accepted_by_strict_lists() {
        // items that cannot be enumerated are treated as valid
        let accept = AcceptList::new(["image/png"]);
        assert!(accept.accepts(std::iter::empty::<&str>()));
    }
}
