//! Error types for layout activation

use thiserror::Error;

use crate::anchors::Attribute;

/// Errors that can occur while turning a layout tree into live
/// constraints.
///
/// Every variant is a programmer error in the declarative tree: nothing
/// here is transient or retryable. A dropped constraint would surface as
/// a silently broken layout, so activation fails fast instead of
/// skipping the offending descriptor.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// An anchor has no target to resolve against: the view is not
    /// nested under another view in the tree and has no live superview.
    #[error("cannot resolve a target for the '{attribute}' anchor of '{view}': no enclosing view in the tree and no live superview")]
    UnresolvedTarget { view: String, attribute: Attribute },

    /// An anchors node wraps a layout that contains no view to anchor.
    #[error("anchors declared on a layout with no view to anchor them to")]
    AnchorsWithoutView,
}

impl LayoutError {
    /// Create an unresolved target error for an anchor on the given view.
    pub(crate) fn unresolved(view: &crate::view::View, attribute: Attribute) -> Self {
        Self::UnresolvedTarget {
            view: view.tag_description(),
            attribute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;

    #[test]
    fn test_unresolved_target_display() {
        let view = View::new().tagged("orphan");
        let err = LayoutError::unresolved(&view, Attribute::Top);
        assert!(err.to_string().contains("orphan"));
        assert!(err.to_string().contains("top"));
    }

    #[test]
    fn test_anchors_without_view_display() {
        let err = LayoutError::AnchorsWithoutView;
        assert!(err.to_string().contains("no view"));
    }
}
