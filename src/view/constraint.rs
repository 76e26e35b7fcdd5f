//! Realized constraint handles

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::anchors::{Attribute, Relation};

use super::{Item, View};

/// A materialized constraint between a source view and an optional
/// target item.
///
/// Handles are opaque to callers: they are produced by materializing
/// descriptors during activation and torn down through the activation
/// token. The hierarchy itself never owns them strongly — the token's
/// constraint set does — so a leaked view cannot keep a torn-down
/// constraint alive.
#[derive(Clone)]
pub struct Constraint {
    core: Rc<ConstraintCore>,
}

pub(crate) struct ConstraintCore {
    pub(crate) source: View,
    pub(crate) attribute: Attribute,
    pub(crate) relation: Relation,
    pub(crate) target: Option<(Item, Attribute)>,
    pub(crate) multiplier: f64,
    pub(crate) constant: f64,
    pub(crate) priority: f64,
    active: Cell<bool>,
}

impl ConstraintCore {
    pub(crate) fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Constraint {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        source: View,
        attribute: Attribute,
        relation: Relation,
        target: Option<(Item, Attribute)>,
        multiplier: f64,
        constant: f64,
        priority: f64,
    ) -> Self {
        Self {
            core: Rc::new(ConstraintCore {
                source,
                attribute,
                relation,
                target,
                multiplier,
                constant,
                priority,
                active: Cell::new(false),
            }),
        }
    }

    pub(crate) fn from_core(core: Rc<ConstraintCore>) -> Self {
        Self { core }
    }

    pub fn source(&self) -> &View {
        &self.core.source
    }

    pub fn attribute(&self) -> Attribute {
        self.core.attribute
    }

    pub fn relation(&self) -> Relation {
        self.core.relation
    }

    pub fn target(&self) -> Option<(&Item, Attribute)> {
        self.core
            .target
            .as_ref()
            .map(|(item, attribute)| (item, *attribute))
    }

    pub fn multiplier(&self) -> f64 {
        self.core.multiplier
    }

    pub fn constant(&self) -> f64 {
        self.core.constant
    }

    pub fn priority(&self) -> f64 {
        self.core.priority
    }

    pub fn is_active(&self) -> bool {
        self.core.is_active()
    }

    /// Install every constraint on its source view in one pass.
    pub fn activate_all(constraints: &[Constraint]) {
        for constraint in constraints {
            if !constraint.is_active() {
                constraint.core.active.set(true);
                constraint.core.source.register_constraint(&constraint.core);
            }
        }
    }

    /// Uninstall every constraint from its source view in one pass.
    pub fn deactivate_all(constraints: &[Constraint]) {
        for constraint in constraints {
            if constraint.is_active() {
                constraint.core.active.set(false);
                constraint
                    .core
                    .source
                    .unregister_constraint(&constraint.core);
            }
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("source", &self.core.source)
            .field("attribute", &self.core.attribute)
            .field("relation", &self.core.relation)
            .field("target", &self.core.target)
            .field("constant", &self.core.constant)
            .field("multiplier", &self.core.multiplier)
            .field("active", &self.is_active())
            .finish()
    }
}
