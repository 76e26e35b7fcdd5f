//! Tree traversals feeding the activation engine

use crate::activation::snapshot::{SnapshotSet, ViewSnapshot};
use crate::error::LayoutError;
use crate::view::{Constraint, View};

use super::Layout;

impl Layout {
    /// Collect every view in the tree, depth-first pre-order, paired
    /// with the view it is declared under.
    pub(crate) fn collect_views(&self, superview: Option<&View>, out: &mut SnapshotSet) {
        match self {
            Layout::View(node) => {
                out.insert(ViewSnapshot {
                    view: node.view.clone(),
                    superview: superview.cloned(),
                });
                node.sublayout.collect_views(Some(&node.view), out);
            }
            Layout::Tuple(items) => {
                for item in items {
                    item.collect_views(superview, out);
                }
            }
            Layout::Anchors(node) => node.layout.collect_views(superview, out),
            Layout::Empty => {}
        }
    }

    /// Materialize every descriptor in the tree against its concrete
    /// source view. Each anchors node resolves at its own tree position,
    /// so a view's default target is the view it is nested under there,
    /// not some further ancestor.
    pub(crate) fn collect_constraints(
        &self,
        superview: Option<&View>,
        out: &mut Vec<Constraint>,
    ) -> Result<(), LayoutError> {
        match self {
            Layout::View(node) => node.sublayout.collect_constraints(Some(&node.view), out),
            Layout::Tuple(items) => {
                for item in items {
                    item.collect_constraints(superview, out)?;
                }
                Ok(())
            }
            Layout::Anchors(node) => {
                let source = node
                    .layout
                    .anchor_view()
                    .ok_or(LayoutError::AnchorsWithoutView)?;
                out.extend(node.anchors.materialize(source, superview)?);
                node.layout.collect_constraints(superview, out)
            }
            Layout::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::{Anchors, Attribute};
    use crate::view::Item;

    #[test]
    fn test_collect_views_preorder() {
        let root = View::new().tagged("root");
        let child = View::new().tagged("child");
        let grandchild = View::new().tagged("grandchild");
        let friend = View::new().tagged("friend");
        let tree = root.sublayout((child.sublayout(&grandchild), friend.layout()));

        let mut set = SnapshotSet::new();
        tree.collect_views(None, &mut set);

        let order: Vec<String> = set.iter().map(|s| s.view.tag_description()).collect();
        assert_eq!(order, vec!["root", "child", "grandchild", "friend"]);
        let parents: Vec<Option<String>> = set
            .iter()
            .map(|s| s.superview.as_ref().map(View::tag_description))
            .collect();
        assert_eq!(
            parents,
            vec![
                None,
                Some("root".into()),
                Some("child".into()),
                Some("root".into())
            ]
        );
    }

    #[test]
    fn test_default_target_is_nearest_enclosing_view() {
        let root = View::new().tagged("root");
        let child = View::new().tagged("child");
        let grandchild = View::new().tagged("grandchild");
        let tree = root.sublayout(
            child.sublayout(grandchild.anchors(Anchors::new([Attribute::Top]))),
        );

        let mut constraints = Vec::new();
        tree.collect_constraints(None, &mut constraints).unwrap();

        assert_eq!(constraints.len(), 1);
        let (item, attribute) = constraints[0].target().unwrap();
        // Nested directly under `child`, so `child` is the target, not `root`.
        assert_eq!(item, &Item::View(child));
        assert_eq!(attribute, Attribute::Top);
    }

    #[test]
    fn test_each_view_resolves_exactly_once() {
        let root = View::new().tagged("root");
        let a = View::new().tagged("a");
        let b = View::new().tagged("b");
        let tree = root.sublayout((
            a.anchors(Anchors::all_sides()),
            b.anchors(Anchors::new([Attribute::Top, Attribute::Bottom])),
        ));

        let mut constraints = Vec::new();
        tree.collect_constraints(None, &mut constraints).unwrap();
        assert_eq!(constraints.len(), 6);
    }

    #[test]
    fn test_anchors_on_empty_layout_is_an_error() {
        let tree = Layout::Empty.anchors(Anchors::new([Attribute::Top]));
        let mut constraints = Vec::new();
        let result = tree.collect_constraints(None, &mut constraints);
        assert!(matches!(result, Err(LayoutError::AnchorsWithoutView)));
    }
}
