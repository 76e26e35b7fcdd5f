//! In-memory retained view hierarchy
//!
//! This module is the crate's stand-in for a native view runtime. It
//! exposes exactly the capability surface the activation engine calls —
//! attach/detach plus constraint materialization and bulk
//! (de)activation — and the read-back the printer needs. It performs no
//! geometry: realized constraints are inert records for whatever
//! runtime consumes them.

pub mod constraint;

pub use constraint::Constraint;

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use constraint::ConstraintCore;

/// A handle to one retained view.
///
/// Handles are cheap to clone and compare by reference identity: two
/// clones of the same handle are the same view. The hierarchy owns its
/// subviews strongly and its superview weakly, the usual shape for a
/// parent-linked `Rc` tree.
#[derive(Clone)]
pub struct View {
    core: Rc<ViewCore>,
}

struct ViewCore {
    type_name: String,
    identifier: RefCell<Option<String>>,
    superview: RefCell<Weak<ViewCore>>,
    subviews: RefCell<Vec<View>>,
    // Constraints whose source item is this view, held weakly: the
    // owning activation token keeps them alive, the view only observes.
    constraints: RefCell<Vec<Weak<ConstraintCore>>>,
}

impl View {
    /// Create a plain view.
    pub fn new() -> Self {
        Self::with_type("View")
    }

    /// Create a view with a runtime type name, used by identifier
    /// assignment and printing (`name:TypeName`).
    pub fn with_type(type_name: impl Into<String>) -> Self {
        Self {
            core: Rc::new(ViewCore {
                type_name: type_name.into(),
                identifier: RefCell::new(None),
                superview: RefCell::new(Weak::new()),
                subviews: RefCell::new(Vec::new()),
                constraints: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Set the identifier and return the same handle, for inline tagging
    /// at construction time.
    pub fn tagged(self, identifier: impl Into<String>) -> Self {
        self.set_identifier(identifier);
        self
    }

    pub fn identifier(&self) -> Option<String> {
        self.core.identifier.borrow().clone()
    }

    pub fn set_identifier(&self, identifier: impl Into<String>) {
        *self.core.identifier.borrow_mut() = Some(identifier.into());
    }

    pub fn type_name(&self) -> &str {
        &self.core.type_name
    }

    /// The identifier if set, otherwise the type name in angle brackets.
    /// This is what error messages and the printer fall back to.
    pub fn tag_description(&self) -> String {
        self.identifier()
            .unwrap_or_else(|| format!("<{}>", self.core.type_name))
    }

    pub fn superview(&self) -> Option<View> {
        self.core.superview.borrow().upgrade().map(|core| View { core })
    }

    pub fn subviews(&self) -> Vec<View> {
        self.core.subviews.borrow().clone()
    }

    /// Attach `child` as the last subview, reparenting it if it is
    /// already attached elsewhere.
    pub fn add_subview(&self, child: &View) {
        child.remove_from_superview();
        self.core.subviews.borrow_mut().push(child.clone());
        *child.core.superview.borrow_mut() = Rc::downgrade(&self.core);
    }

    /// Detach this view from its superview. No-op when unattached.
    pub fn remove_from_superview(&self) {
        if let Some(superview) = self.superview() {
            superview
                .core
                .subviews
                .borrow_mut()
                .retain(|sibling| sibling != self);
        }
        *self.core.superview.borrow_mut() = Weak::new();
    }

    /// The view's safe-area layout guide, usable as an explicit
    /// constraint target.
    pub fn safe_area_guide(&self) -> LayoutGuide {
        LayoutGuide {
            owner: self.clone(),
        }
    }

    /// Active constraints whose source item is this view, as read back
    /// from the live hierarchy.
    pub fn installed_constraints(&self) -> Vec<Constraint> {
        self.core
            .constraints
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .filter(|core| core.is_active())
            .map(Constraint::from_core)
            .collect()
    }

    pub(crate) fn register_constraint(&self, core: &Rc<ConstraintCore>) {
        self.core.constraints.borrow_mut().push(Rc::downgrade(core));
    }

    pub(crate) fn unregister_constraint(&self, core: &Rc<ConstraintCore>) {
        self.core.constraints.borrow_mut().retain(|weak| {
            weak.upgrade()
                .map_or(false, |held| !Rc::ptr_eq(&held, core))
        });
    }

    /// Stable identity for hashing and set membership.
    pub(crate) fn id(&self) -> usize {
        Rc::as_ptr(&self.core) as usize
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

impl Eq for View {}

impl Hash for View {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.id());
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "View({})", self.tag_description())
    }
}

/// A layout guide owned by a view, targetable instead of the view
/// itself. Only the safe-area guide exists today.
#[derive(Clone)]
pub struct LayoutGuide {
    owner: View,
}

impl LayoutGuide {
    pub fn owner(&self) -> &View {
        &self.owner
    }

    /// Canonical printed form of the guide as a constraint target.
    pub(crate) fn tag_description(&self) -> String {
        format!("{}.safeAreaLayoutGuide", self.owner.tag_description())
    }
}

impl PartialEq for LayoutGuide {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
    }
}

impl fmt::Debug for LayoutGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayoutGuide({})", self.tag_description())
    }
}

/// Something a constraint can target: a view or one of its guides.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    View(View),
    Guide(LayoutGuide),
}

impl Item {
    pub(crate) fn tag_description(&self) -> String {
        match self {
            Self::View(view) => view.tag_description(),
            Self::Guide(guide) => guide.tag_description(),
        }
    }

    /// Identity key for constraint grouping in the printer.
    pub(crate) fn id(&self) -> (usize, bool) {
        match self {
            Self::View(view) => (view.id(), false),
            Self::Guide(guide) => (guide.owner.id(), true),
        }
    }
}

impl From<View> for Item {
    fn from(view: View) -> Self {
        Self::View(view)
    }
}

impl From<&View> for Item {
    fn from(view: &View) -> Self {
        Self::View(view.clone())
    }
}

impl From<LayoutGuide> for Item {
    fn from(guide: LayoutGuide) -> Self {
        Self::Guide(guide)
    }
}

impl From<&LayoutGuide> for Item {
    fn from(guide: &LayoutGuide) -> Self {
        Self::Guide(guide.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_by_handle() {
        let a = View::new();
        let b = a.clone();
        let c = View::new();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_add_subview_sets_links() {
        let parent = View::new().tagged("parent");
        let child = View::new().tagged("child");
        parent.add_subview(&child);
        assert_eq!(child.superview(), Some(parent.clone()));
        assert_eq!(parent.subviews(), vec![child]);
    }

    #[test]
    fn test_add_subview_reparents() {
        let first = View::new();
        let second = View::new();
        let child = View::new();
        first.add_subview(&child);
        second.add_subview(&child);
        assert!(first.subviews().is_empty());
        assert_eq!(child.superview(), Some(second));
    }

    #[test]
    fn test_remove_from_superview_is_idempotent() {
        let parent = View::new();
        let child = View::new();
        parent.add_subview(&child);
        child.remove_from_superview();
        child.remove_from_superview();
        assert_eq!(child.superview(), None);
        assert!(parent.subviews().is_empty());
    }

    #[test]
    fn test_tag_description_falls_back_to_type() {
        let label = View::with_type("Label");
        assert_eq!(label.tag_description(), "<Label>");
        assert_eq!(label.clone().tagged("title").tag_description(), "title");
    }

    #[test]
    fn test_guide_tag_description() {
        let root = View::new().tagged("root");
        assert_eq!(
            root.safe_area_guide().tag_description(),
            "root.safeAreaLayoutGuide"
        );
    }
}
