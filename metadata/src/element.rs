//! Constraints attached to one element (a class, a property or a getter).

use crate::Constraint;
use std::collections::HashSet;

/// Ordered constraints of one element.
///
/// Constraints added explicitly are always kept, in the order given.
/// Inherited constraints are only taken for kinds the element does not
/// already carry.
#[derive(Debug, Clone, Default)]
pub struct ElementMetadata {
    constraints: Vec<Constraint>,
}

impl ElementMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// All constraints in attachment order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Constraints that apply to `group`, in attachment order.
    pub fn find_constraints<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Constraint> + 'a {
        self.constraints.iter().filter(move |c| c.in_group(group))
    }

    /// Check whether a constraint of the given kind is attached.
    pub fn has_constraint_kind(&self, name: &str) -> bool {
        self.constraints.iter().any(|c| c.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub(crate) fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Merge inherited constraints. `implicit_group` is the name of the
    /// inheriting class, added to inherited default-group constraints.
    pub(crate) fn merge_constraints<'a, I>(&mut self, inherited: I, implicit_group: &str)
    where
        I: IntoIterator<Item = &'a Constraint>,
    {
        let existing: HashSet<&'static str> = self.constraints.iter().map(|c| c.name()).collect();
        for constraint in inherited {
            if !existing.contains(constraint.name()) {
                self.constraints
                    .push(constraint.with_implicit_group(implicit_group));
            }
        }
    }
}
