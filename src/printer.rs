//! Canonical textual rendering of a live view subtree
//!
//! The printer reads the *live* hierarchy — attachments and active
//! constraints as they currently are, not as any tree declared them —
//! and renders a deterministic, brace-delimited form suitable for
//! debugging and for exact-match assertions in tests. Constraint lines
//! are canonicalized (merged by identical shape, attribute lists in
//! attribute order, lines sorted lexicographically) so semantically
//! identical states always print identically.

use std::collections::HashMap;

use crate::anchors::{Attribute, Relation};
use crate::view::{Item, View};

/// Renders a view subtree in the canonical text format.
pub struct ViewPrinter {
    root: View,
    tags: HashMap<usize, String>,
}

impl ViewPrinter {
    pub fn new(root: &View) -> Self {
        Self {
            root: root.clone(),
            tags: HashMap::new(),
        }
    }

    /// Override the printed identifier for one view, without touching
    /// the view's own identifier. Useful for views that were never
    /// assigned one.
    pub fn tag(mut self, view: &View, name: impl Into<String>) -> Self {
        self.tags.insert(view.id(), name.into());
        self
    }

    /// Render the subtree. Four spaces per nesting depth, no trailing
    /// newline.
    pub fn print(&self) -> String {
        let mut lines = Vec::new();
        self.render(&self.root, 0, &mut lines);
        lines.join("\n")
    }

    fn render(&self, view: &View, depth: usize, lines: &mut Vec<String>) {
        let indent = "    ".repeat(depth);
        let identifier = self.identifier(view);
        let anchors = self.constraint_lines(view);
        let children = view.subviews();

        match (anchors.is_empty(), children.is_empty()) {
            (true, true) => lines.push(format!("{indent}{identifier}")),
            (true, false) => {
                lines.push(format!("{indent}{identifier} {{"));
                for child in &children {
                    self.render(child, depth + 1, lines);
                }
                lines.push(format!("{indent}}}"));
            }
            (false, true) => {
                lines.push(format!("{indent}{identifier}.anchors {{"));
                for line in anchors {
                    lines.push(format!("{indent}    {line}"));
                }
                lines.push(format!("{indent}}}"));
            }
            (false, false) => {
                lines.push(format!("{indent}{identifier}.anchors {{"));
                for line in anchors {
                    lines.push(format!("{indent}    {line}"));
                }
                lines.push(format!("{indent}}}.sublayout {{"));
                for child in &children {
                    self.render(child, depth + 1, lines);
                }
                lines.push(format!("{indent}}}"));
            }
        }
    }

    fn identifier(&self, view: &View) -> String {
        self.tags
            .get(&view.id())
            .cloned()
            .or_else(|| view.identifier())
            .unwrap_or_else(|| format!("<{}>", view.type_name()))
    }

    fn item_identifier(&self, item: &Item) -> String {
        match item {
            Item::View(view) => self.identifier(view),
            Item::Guide(guide) => format!("{}.safeAreaLayoutGuide", self.identifier(guide.owner())),
        }
    }

    /// The sorted, merged `.anchors` block lines for one view.
    fn constraint_lines(&self, view: &View) -> Vec<String> {
        let mut groups: Vec<ConstraintGroup> = Vec::new();
        for constraint in view.installed_constraints() {
            let target = constraint.target().map(|(item, target_attribute)| {
                let explicit = (target_attribute != constraint.attribute())
                    .then_some(target_attribute);
                (item.clone(), explicit)
            });
            let key = GroupKey {
                relation: constraint.relation(),
                target_id: target.as_ref().map(|(item, explicit)| (item.id(), *explicit)),
                constant: constraint.constant().to_bits(),
                multiplier: constraint.multiplier().to_bits(),
                priority: constraint.priority().to_bits(),
            };
            match groups.iter_mut().find(|group| group.key == key) {
                Some(group) => group.attributes.push(constraint.attribute()),
                None => groups.push(ConstraintGroup {
                    key,
                    target,
                    relation: constraint.relation(),
                    constant: constraint.constant(),
                    multiplier: constraint.multiplier(),
                    attributes: vec![constraint.attribute()],
                }),
            }
        }

        let superview = view.superview();
        let mut lines: Vec<String> = groups
            .iter()
            .map(|group| self.render_group(group, superview.as_ref()))
            .collect();
        lines.sort();
        lines
    }

    fn render_group(&self, group: &ConstraintGroup, superview: Option<&View>) -> String {
        let mut attributes = group.attributes.clone();
        attributes.sort();
        attributes.dedup();
        let list: Vec<String> = attributes.iter().map(|a| format!(".{a}")).collect();
        let mut line = format!("Anchors({})", list.join(", "));

        // The default target is the same attribute on the live
        // superview; dimension anchors default to no target at all.
        // Defaults are omitted from the rendering.
        let default_target = match &group.target {
            None => true,
            Some((Item::View(target), None)) => Some(target) == superview,
            Some(_) => false,
        };

        let mut args: Vec<String> = Vec::new();
        if let Some((item, explicit)) = &group.target {
            if !default_target {
                args.push(self.item_identifier(item));
                if let Some(attribute) = explicit {
                    args.push(format!("attribute: .{attribute}"));
                }
            }
        }
        if group.constant != 0.0 {
            args.push(format!("constant: {:?}", group.constant));
        }

        if group.relation != Relation::Equal || !args.is_empty() {
            line.push_str(&format!(
                ".{}({})",
                group.relation.method_name(),
                args.join(", ")
            ));
        }
        if group.multiplier != 1.0 {
            line.push_str(&format!(".setMultiplier({:?})", group.multiplier));
        }
        line
    }
}

#[derive(PartialEq)]
struct GroupKey {
    relation: Relation,
    // Target identity plus explicit target attribute, if any; `None`
    // for dimension constraints.
    target_id: Option<((usize, bool), Option<Attribute>)>,
    constant: u64,
    multiplier: u64,
    priority: u64,
}

struct ConstraintGroup {
    key: GroupKey,
    target: Option<(Item, Option<Attribute>)>,
    relation: Relation,
    constant: f64,
    multiplier: f64,
    attributes: Vec<Attribute>,
}
