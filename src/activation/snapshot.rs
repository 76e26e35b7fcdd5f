//! View snapshots for membership diffing

use std::collections::HashMap;

use crate::view::View;

/// A (view, declared superview) pair captured during tree traversal.
///
/// Snapshots compare by view identity only: the recorded superview is
/// what the view should be attached to, not part of the membership key.
#[derive(Debug, Clone)]
pub(crate) struct ViewSnapshot {
    pub(crate) view: View,
    pub(crate) superview: Option<View>,
}

/// An insertion-ordered, identity-deduplicated set of snapshots.
///
/// Order matters: traversal inserts parents before children, and the
/// attach pass walks in insertion order so a parent is always live
/// before its children attach to it.
#[derive(Debug, Clone, Default)]
pub(crate) struct SnapshotSet {
    entries: Vec<ViewSnapshot>,
    index: HashMap<usize, usize>,
}

impl SnapshotSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a snapshot. A view already present keeps its position but
    /// takes the newly declared superview: the last declaration wins.
    pub(crate) fn insert(&mut self, snapshot: ViewSnapshot) {
        match self.index.get(&snapshot.view.id()) {
            Some(&position) => self.entries[position] = snapshot,
            None => {
                self.index.insert(snapshot.view.id(), self.entries.len());
                self.entries.push(snapshot);
            }
        }
    }

    pub(crate) fn contains(&self, view: &View) -> bool {
        self.index.contains_key(&view.id())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ViewSnapshot> {
        self.entries.iter()
    }

    /// Entries of this set whose views are absent from `newer`.
    pub(crate) fn missing_from<'a>(
        &'a self,
        newer: &'a SnapshotSet,
    ) -> impl Iterator<Item = &'a ViewSnapshot> {
        self.entries
            .iter()
            .filter(move |snapshot| !newer.contains(&snapshot.view))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(view: &View, superview: Option<&View>) -> ViewSnapshot {
        ViewSnapshot {
            view: view.clone(),
            superview: superview.cloned(),
        }
    }

    #[test]
    fn test_membership_is_by_view_identity() {
        let parent = View::new();
        let other = View::new();
        let child = View::new();
        let mut set = SnapshotSet::new();
        set.insert(snap(&child, Some(&parent)));
        // Same view, different recorded parent: still the same entry.
        set.insert(snap(&child, Some(&other)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().superview, Some(other));
    }

    #[test]
    fn test_missing_from_finds_orphans() {
        let a = View::new();
        let b = View::new();
        let mut old = SnapshotSet::new();
        old.insert(snap(&a, None));
        old.insert(snap(&b, None));
        let mut new = SnapshotSet::new();
        new.insert(snap(&a, None));
        let orphans: Vec<_> = old.missing_from(&new).map(|s| s.view.clone()).collect();
        assert_eq!(orphans, vec![b]);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let views: Vec<View> = (0..4).map(|_| View::new()).collect();
        let mut set = SnapshotSet::new();
        for view in &views {
            set.insert(snap(view, None));
        }
        let order: Vec<View> = set.iter().map(|s| s.view.clone()).collect();
        assert_eq!(order, views);
    }
}
