//! Identifier assignment over component structures, and how assigned
//! identifiers surface in printed output.

use pretty_assertions::assert_eq;

use reanchor::{
    activate, Anchors, FieldRef, IdentifierAssignment, View, ViewComponent, ViewPrinter,
};

struct Grand {
    view: View,
}

impl Grand {
    fn new() -> Self {
        Self {
            view: View::with_type("Grand"),
        }
    }
}

impl ViewComponent for Grand {
    fn view(&self) -> &View {
        &self.view
    }

    fn fields(&self) -> Vec<FieldRef<'_>> {
        Vec::new()
    }
}

struct Child {
    view: View,
    grand: Grand,
}

impl Child {
    fn new() -> Self {
        Self {
            view: View::with_type("Child"),
            grand: Grand::new(),
        }
    }
}

impl ViewComponent for Child {
    fn view(&self) -> &View {
        &self.view
    }

    fn fields(&self) -> Vec<FieldRef<'_>> {
        vec![FieldRef::component("grand", &self.grand)]
    }
}

struct Root {
    view: View,
    child: Child,
}

impl Root {
    fn new() -> Self {
        Self {
            view: View::with_type("Root"),
            child: Child::new(),
        }
    }
}

impl ViewComponent for Root {
    fn view(&self) -> &View {
        &self.view
    }

    fn fields(&self) -> Vec<FieldRef<'_>> {
        vec![FieldRef::component("child", &self.child)]
    }
}

#[test]
fn test_reference_and_name_with_type_qualifies_every_level() {
    let root = Root::new();
    IdentifierAssignment::ReferenceAndNameWithTypeOfView.assign(&root);

    assert_eq!(root.child.view.identifier(), Some("child:Child".into()));
    assert_eq!(
        root.child.grand.view.identifier(),
        Some("child.grand:Grand".into())
    );
}

#[test]
fn test_name_only_leaves_deeper_levels_untouched() {
    let root = Root::new();
    IdentifierAssignment::NameOnly.assign(&root);

    assert_eq!(root.child.view.identifier(), Some("child".into()));
    assert_eq!(root.child.grand.view.identifier(), None);
}

#[test]
fn test_assignment_overwrites_previous_identifiers() {
    let root = Root::new();
    root.child.view.set_identifier("stale");
    IdentifierAssignment::ReferenceAndName.assign(&root);

    assert_eq!(root.child.view.identifier(), Some("child".into()));
}

struct Cell {
    view: View,
    profile_view: View,
    name_label: View,
}

impl Cell {
    fn new() -> Self {
        Self {
            view: View::with_type("Cell"),
            profile_view: View::with_type("ImageView"),
            name_label: View::with_type("Label"),
        }
    }
}

impl ViewComponent for Cell {
    fn view(&self) -> &View {
        &self.view
    }

    fn fields(&self) -> Vec<FieldRef<'_>> {
        vec![
            FieldRef::view("profileView", &self.profile_view),
            FieldRef::view("nameLabel", &self.name_label),
        ]
    }
}

#[test]
fn test_print_with_assigned_type_qualified_identifiers() {
    let cell = Cell::new();
    IdentifierAssignment::WithTypeOfView.assign(&cell);

    let _activation =
        activate(&cell.view.sublayout((&cell.profile_view, &cell.name_label))).unwrap();

    let expected = "\
contentView {
    profileView:ImageView
    nameLabel:Label
}";
    let printed = ViewPrinter::new(&cell.view)
        .tag(&cell.view, "contentView")
        .print();
    assert_eq!(printed, expected);
}

#[test]
fn test_anonymous_layout_views_are_never_assigned() {
    let cell = Cell::new();
    let transient = View::new();

    let _activation = activate(&cell.view.sublayout((
        cell.profile_view.layout(),
        transient.sublayout(cell.name_label.anchors(Anchors::all_sides())),
    )))
    .unwrap();

    IdentifierAssignment::ReferenceAndName.assign(&cell);

    // Reached through the declarative tree only, so no name is derived.
    assert_eq!(transient.identifier(), None);
    assert_eq!(cell.name_label.identifier(), Some("nameLabel".into()));
}
