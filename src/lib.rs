//! Reanchor - declarative layout trees reconciled against a retained view hierarchy
//!
//! This library lets a caller describe a view subtree and its anchor
//! constraints as a value, then reconciles successive descriptions into
//! a minimal set of attach/detach mutations plus a full constraint
//! rebuild. Views keep their referential identity across updates; the
//! crate never performs geometric solving.
//!
//! # Example
//!
//! ```rust
//! use reanchor::{activate, update, Anchors, View, ViewPrinter};
//!
//! let root = View::new().tagged("root");
//! let child = View::new().tagged("child");
//!
//! let mut activation = activate(&root.sublayout(child.anchors(Anchors::all_sides()))).unwrap();
//! assert_eq!(child.superview(), Some(root.clone()));
//!
//! // Reconcile against a tree without the child: it detaches.
//! update(&root.layout(), &mut activation).unwrap();
//! assert_eq!(child.superview(), None);
//! assert_eq!(ViewPrinter::new(&root).print(), "root");
//! ```

pub mod activation;
pub mod anchors;
pub mod error;
pub mod identifier;
pub mod layout;
pub mod printer;
pub mod view;

pub use activation::{activate, update, Activation, Layoutable};
pub use anchors::{priority, Anchors, Attribute, ConstraintSpec, Relation};
pub use error::LayoutError;
pub use identifier::{FieldRef, IdentifierAssignment, ViewComponent};
pub use layout::Layout;
pub use printer::ViewPrinter;
pub use view::{Constraint, Item, LayoutGuide, View};
