use crate::assignment::Assignment;
use crate::ast::{Arena, Expr, Node};

pub trait Eval {
    /// Evaluates under a complete assignment.
    ///
    /// # Panics
    ///
    /// Panics if an identifier is missing from `assignment`.
    fn eval(&self, assignment: &Assignment) -> bool;

    /// Evaluates under a possibly partial assignment; `None` if an identifier is missing.
    fn try_eval(&self, assignment: &Assignment) -> Option<bool>;
}

/// Folds the arena from the leaves up, so evaluation depth does not grow with the tree.
impl Eval for Arena<'_> {
    fn eval(&self, assignment: &Assignment) -> bool {
        self.collapse::<bool, _>(|expr| match expr {
            Expr::Identifier(name) => match assignment.get(name) {
                Some(value) => value,
                None => panic!("identifier `{}` is not assigned in {{{}}}", name, assignment),
            },
            Expr::Not(a) => !a,
            Expr::And(a, b) => a && b,
            Expr::Or(a, b) => a || b,
        })
    }

    fn try_eval(&self, assignment: &Assignment) -> Option<bool> {
        self.collapse::<Option<bool>, _>(|expr| {
            Some(match expr {
                Expr::Identifier(name) => assignment.get(name)?,
                Expr::Not(a) => !a?,
                Expr::And(a, b) => a? & b?,
                Expr::Or(a, b) => a? | b?,
            })
        })
    }
}

impl Eval for Node {
    fn eval(&self, assignment: &Assignment) -> bool {
        Arena::from_node(self).eval(assignment)
    }

    fn try_eval(&self, assignment: &Assignment) -> Option<bool> {
        Arena::from_node(self).try_eval(assignment)
    }
}

/// An absent expression is vacuously true.
impl Eval for Option<Node> {
    fn eval(&self, assignment: &Assignment) -> bool {
        self.as_ref().map_or(true, |node| node.eval(assignment))
    }

    fn try_eval(&self, assignment: &Assignment) -> Option<bool> {
        match self {
            Some(node) => node.try_eval(assignment),
            None => Some(true),
        }
    }
}

pub fn evaluate(root: &Node, assignment: &Assignment) -> bool {
    root.eval(assignment)
}
