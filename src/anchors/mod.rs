//! Constraint descriptor builder
//!
//! An [`Anchors`] value is an ordered container of normalized constraint
//! descriptors. Attribute groups go in through the constructors
//! ([`Anchors::new`], [`Anchors::all_sides`], …), refinements chain on
//! afterwards, and the activation engine materializes the container into
//! realized constraints once concrete source/target views are known.
//!
//! Refinement scoping follows the declarative grammar: relation, target,
//! target-attribute and constant calls rewrite the most recently declared
//! attribute group, while `multiplier` and `priority` are uniform
//! overrides that rewrite every descriptor currently in the container.

pub mod attribute;

pub use attribute::{priority, Attribute, Relation};

use crate::error::LayoutError;
use crate::view::{Constraint, Item, View};

/// One normalized, unmaterialized constraint descriptor.
///
/// A `target` of `None` means "resolve at materialization time": the
/// same attribute on the nearest enclosing view for positional
/// attributes, or a pure dimension constraint for `Width`/`Height`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSpec {
    pub attribute: Attribute,
    pub relation: Relation,
    pub target: Option<Item>,
    pub target_attribute: Option<Attribute>,
    pub constant: f64,
    pub multiplier: f64,
    pub priority: f64,
}

impl ConstraintSpec {
    fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            relation: Relation::Equal,
            target: None,
            target_attribute: None,
            constant: 0.0,
            multiplier: 1.0,
            priority: priority::REQUIRED,
        }
    }

    /// Materialize this descriptor against a concrete source view.
    ///
    /// `enclosing` is the view the source is nested under in the layout
    /// tree, used when no explicit target was declared. A source with
    /// neither an enclosing tree view nor a live superview cannot anchor
    /// a positional attribute and fails fast.
    pub(crate) fn materialize(
        &self,
        source: &View,
        enclosing: Option<&View>,
    ) -> Result<Constraint, LayoutError> {
        let target = match &self.target {
            Some(item) => Some((
                item.clone(),
                self.target_attribute.unwrap_or(self.attribute),
            )),
            None if self.attribute.is_dimension() => None,
            None => {
                let fallback = enclosing.cloned().or_else(|| source.superview());
                let view = fallback.ok_or_else(|| LayoutError::unresolved(source, self.attribute))?;
                Some((
                    Item::View(view),
                    self.target_attribute.unwrap_or(self.attribute),
                ))
            }
        };
        Ok(Constraint::new(
            source.clone(),
            self.attribute,
            self.relation,
            target,
            self.multiplier,
            self.constant,
            self.priority,
        ))
    }
}

/// An ordered container of constraint descriptors with a chainable
/// builder surface.
#[derive(Debug, Clone, Default)]
pub struct Anchors {
    specs: Vec<ConstraintSpec>,
    // Start index of the most recently declared attribute group;
    // relation/target/constant refinements apply from here on.
    group_start: usize,
}

impl Anchors {
    /// Declare one attribute group.
    pub fn new(attributes: impl IntoIterator<Item = Attribute>) -> Self {
        Self {
            specs: attributes.into_iter().map(ConstraintSpec::new).collect(),
            group_start: 0,
        }
    }

    /// All four sides: top, bottom, leading, trailing.
    pub fn all_sides() -> Self {
        Self::new([
            Attribute::Top,
            Attribute::Bottom,
            Attribute::Leading,
            Attribute::Trailing,
        ])
    }

    /// The top three sides: top, leading, trailing.
    pub fn cap() -> Self {
        Self::new([Attribute::Top, Attribute::Leading, Attribute::Trailing])
    }

    /// The bottom three sides: bottom, leading, trailing.
    pub fn shoe() -> Self {
        Self::new([Attribute::Bottom, Attribute::Leading, Attribute::Trailing])
    }

    /// Concatenate another container; its descriptors become the most
    /// recently declared group.
    pub fn and(mut self, other: Anchors) -> Self {
        self.group_start = self.specs.len();
        self.specs.extend(other.specs);
        self
    }

    /// Anchor the current group equal to `target`, same attribute unless
    /// refined with [`Anchors::attribute`].
    pub fn equal_to(self, target: impl Into<Item>) -> Self {
        self.relate(Relation::Equal, Some(target.into()))
    }

    /// Anchor the current group `>=` `target`.
    pub fn greater_than_or_equal_to(self, target: impl Into<Item>) -> Self {
        self.relate(Relation::GreaterOrEqual, Some(target.into()))
    }

    /// Anchor the current group `<=` `target`.
    pub fn less_than_or_equal_to(self, target: impl Into<Item>) -> Self {
        self.relate(Relation::LessOrEqual, Some(target.into()))
    }

    /// `>=` against the default target.
    pub fn greater_than_or_equal(self) -> Self {
        self.relate(Relation::GreaterOrEqual, None)
    }

    /// `<=` against the default target.
    pub fn less_than_or_equal(self) -> Self {
        self.relate(Relation::LessOrEqual, None)
    }

    /// Target attribute for the current group, when it differs from the
    /// source attribute (e.g. own top to another view's bottom).
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        for spec in self.last_group_mut() {
            spec.target_attribute = Some(attribute);
        }
        self
    }

    /// Constant offset for the current group.
    pub fn constant(mut self, constant: f64) -> Self {
        for spec in self.last_group_mut() {
            spec.constant = constant;
        }
        self
    }

    /// Uniform multiplier override across the whole container.
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        for spec in &mut self.specs {
            spec.multiplier = multiplier;
        }
        self
    }

    /// Uniform priority override across the whole container.
    pub fn priority(mut self, priority: f64) -> Self {
        for spec in &mut self.specs {
            spec.priority = priority;
        }
        self
    }

    pub fn specs(&self) -> &[ConstraintSpec] {
        &self.specs
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    fn relate(mut self, relation: Relation, target: Option<Item>) -> Self {
        for spec in self.last_group_mut() {
            spec.relation = relation;
            spec.target = target.clone();
        }
        self
    }

    fn last_group_mut(&mut self) -> &mut [ConstraintSpec] {
        let start = self.group_start;
        &mut self.specs[start..]
    }

    /// Materialize every descriptor, one realized constraint per
    /// attribute token, in declaration order.
    pub(crate) fn materialize(
        &self,
        source: &View,
        enclosing: Option<&View>,
    ) -> Result<Vec<Constraint>, LayoutError> {
        self.specs
            .iter()
            .map(|spec| spec.materialize(source, enclosing))
            .collect()
    }
}
