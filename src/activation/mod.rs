//! The activation engine
//!
//! One reconciliation pass takes a freshly built [`Layout`] tree and the
//! bookkeeping from the previous pass, then issues the minimal view
//! mutations: views that disappeared from the tree are detached, views
//! that appeared are attached to their declared parents. Constraints are
//! not diffed — every pass tears the previous realized set down in full
//! and activates a new one, which keeps arbitrary tree restructuring
//! trivially consistent without a descriptor-equality algorithm.
//!
//! The strict order within [`update`]:
//!
//! 1. deactivate every previously realized constraint
//! 2. detach views missing from the new tree
//! 3. materialize the new descriptors as a batch, then attach new views
//! 4. activate the new constraints in one bulk call
//! 5. swap the new bookkeeping into the token
//!
//! Materialization happens before any attach so that an unresolvable
//! tree fails out with the hierarchy's attachments untouched by step 3.

pub(crate) mod snapshot;

use log::{debug, trace};

use crate::error::LayoutError;
use crate::layout::Layout;
use crate::view::Constraint;

use snapshot::SnapshotSet;

/// The record of what one activation pass installed.
///
/// This token is mutated in place by [`update`] and is the only strong
/// owner of the realized constraints. Hold it for as long as the
/// installed state should persist: dropping it tears everything down
/// again. For layouts that should outlive any owner, see
/// [`Activation::finalize`].
#[derive(Debug, Default)]
pub struct Activation {
    views: SnapshotSet,
    constraints: Vec<Constraint>,
}

impl Activation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of realized constraints currently recorded.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Number of view snapshots currently recorded.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Tear down everything this token recorded: deactivate all
    /// constraints, detach all views still attached where this token put
    /// them, and clear the record. Idempotent.
    pub fn deactivate(&mut self) {
        Constraint::deactivate_all(&self.constraints);
        for snapshot in self.views.iter() {
            if let Some(superview) = &snapshot.superview {
                // Skip views that were re-attached elsewhere since.
                if snapshot.view.superview().as_ref() == Some(superview) {
                    snapshot.view.remove_from_superview();
                }
            }
        }
        self.constraints.clear();
        self.views.clear();
    }

    /// Leave the installed state in place permanently, releasing the
    /// token without tearing anything down.
    pub fn finalize(self) {
        std::mem::forget(self);
    }
}

impl Drop for Activation {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Install a layout tree for the first time, producing the token for
/// later updates or teardown.
pub fn activate(layout: &Layout) -> Result<Activation, LayoutError> {
    let mut activation = Activation::new();
    update(layout, &mut activation)?;
    Ok(activation)
}

/// Reconcile the live hierarchy against a new tree, reusing the token
/// from the previous pass.
pub fn update(layout: &Layout, activation: &mut Activation) -> Result<(), LayoutError> {
    Constraint::deactivate_all(&activation.constraints);

    let mut views = SnapshotSet::new();
    layout.collect_views(None, &mut views);

    let mut detached = 0usize;
    for orphan in activation.views.missing_from(&views) {
        trace!("detaching '{}'", orphan.view.tag_description());
        orphan.view.remove_from_superview();
        detached += 1;
    }

    let mut constraints = Vec::new();
    layout.collect_constraints(None, &mut constraints)?;

    for snapshot in views.iter() {
        if let Some(superview) = &snapshot.superview {
            if snapshot.view.superview().as_ref() != Some(superview) {
                superview.add_subview(&snapshot.view);
            }
        }
    }

    Constraint::activate_all(&constraints);

    debug!(
        "layout pass: {} views ({} detached), {} constraints",
        views.len(),
        detached,
        constraints.len()
    );

    activation.views = views;
    activation.constraints = constraints;
    Ok(())
}

/// A component that owns its declarative layout.
///
/// Implementors describe their subtree in [`Layoutable::layout`] and
/// reserve a slot for the activation token; the provided
/// [`Layoutable::update_layout`] activates on first call and reconciles
/// on every call after that.
pub trait Layoutable {
    /// Build the declarative tree for the current state.
    fn layout(&self) -> Layout;

    /// Storage for the activation token between passes.
    fn activation(&mut self) -> &mut Option<Activation>;

    /// Activate or reconcile the layout.
    fn update_layout(&mut self) -> Result<(), LayoutError> {
        let layout = self.layout();
        let activation = self.activation().get_or_insert_with(Activation::new);
        update(&layout, activation)
    }
}
