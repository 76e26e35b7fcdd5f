//! Identifier assignment from stored view references
//!
//! Components that keep named references to their subviews can have
//! identifiers derived from those field names, so printed output and
//! accessibility tooling see stable, human-readable names. Rust has no
//! structural reflection, so components opt in by implementing
//! [`ViewComponent`] with an explicit field list.

use crate::view::View;

/// One named stored subview reference of a component.
pub struct FieldRef<'a> {
    /// The field's name as declared in the component.
    pub name: &'static str,
    /// The referenced view.
    pub view: &'a View,
    /// Set when the field's value is itself a component, enabling the
    /// recursive policies to descend into it.
    pub component: Option<&'a dyn ViewComponent>,
}

impl<'a> FieldRef<'a> {
    /// A plain view field.
    pub fn view(name: &'static str, view: &'a View) -> Self {
        Self {
            name,
            view,
            component: None,
        }
    }

    /// A field whose value is itself a component.
    pub fn component(name: &'static str, component: &'a dyn ViewComponent) -> Self {
        Self {
            name,
            view: component.view(),
            component: Some(component),
        }
    }
}

/// A live view structure with named stored subview references.
pub trait ViewComponent {
    /// The component's own view.
    fn view(&self) -> &View;

    /// The component's named subview references, in declaration order.
    fn fields(&self) -> Vec<FieldRef<'_>>;
}

/// How identifiers are derived from field names, applied uniformly to a
/// component subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierAssignment {
    /// Field name only; nested components' views are left alone.
    NameOnly,
    /// `fieldName:TypeName`; not recursive.
    WithTypeOfView,
    /// Dotted path from the root through every intermediate field name,
    /// applied recursively.
    ReferenceAndName,
    /// Dotted path with a trailing `:TypeName`, applied recursively.
    ReferenceAndNameWithTypeOfView,
}

impl IdentifierAssignment {
    /// Assign identifiers to every view reachable through the
    /// component's named references, per this policy. Views reachable
    /// only through a declarative tree are never touched.
    pub fn assign(self, component: &dyn ViewComponent) {
        self.assign_fields(component, "");
    }

    fn assign_fields(self, component: &dyn ViewComponent, prefix: &str) {
        for field in component.fields() {
            let path = if prefix.is_empty() {
                field.name.to_string()
            } else {
                format!("{prefix}.{}", field.name)
            };
            let identifier = match self {
                Self::NameOnly => field.name.to_string(),
                Self::WithTypeOfView => format!("{}:{}", field.name, field.view.type_name()),
                Self::ReferenceAndName => path.clone(),
                Self::ReferenceAndNameWithTypeOfView => {
                    format!("{path}:{}", field.view.type_name())
                }
            };
            field.view.set_identifier(identifier);

            if self.is_recursive() {
                if let Some(nested) = field.component {
                    self.assign_fields(nested, &path);
                }
            }
        }
    }

    fn is_recursive(self) -> bool {
        matches!(
            self,
            Self::ReferenceAndName | Self::ReferenceAndNameWithTypeOfView
        )
    }
}
