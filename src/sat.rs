use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};
use num_bigint::BigUint;

use crate::assignment::{assignment_count, enumerate_assignments, Assignment};
use crate::ast::{Arena, Node};
use crate::eval::Eval;

/// Returns the set of distinct identifier names referenced in the tree.
pub fn collect_identifiers(root: &Node) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node.name() {
            Some(name) => {
                names.insert(name.to_string());
            }
            None => stack.extend(node.children()),
        }
    }
    names
}

/// One evaluated assignment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Outcome {
    pub assignment: Assignment,
    pub value: bool,
}

/// Evaluation result of every enumerated assignment, keyed by its canonical key.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    entries: BTreeMap<String, Outcome>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, assignment: Assignment, value: bool) {
        let key = assignment.canonical_key();
        trace!("{{{}}} -> {}", key, value);
        let previous = self.entries.insert(key, Outcome { assignment, value });
        debug_assert!(previous.is_none(), "canonical keys of distinct assignments collide");
    }

    /// Result recorded for the assignment with the given canonical key.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries.get(key).map(|o| o.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Outcomes in lexicographic order of canonical keys.
    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.entries.values()
    }

    pub fn satisfying(&self) -> impl Iterator<Item = &Assignment> {
        self.iter().filter(|o| o.value).map(|o| &o.assignment)
    }

    /// Returns `true` iff at least one recorded result is `true`.
    pub fn is_satisfiable(&self) -> bool {
        self.iter().any(|o| o.value)
    }

    /// Returns one satisfying assignment, if any exists.
    pub fn one_sat(&self) -> Option<&Assignment> {
        self.satisfying().next()
    }

    /// Number of satisfying assignments.
    pub fn sat_count(&self) -> BigUint {
        BigUint::from(self.satisfying().count())
    }
}

/// Evaluates `root` under every assignment of its identifiers.
///
/// Performs exactly `2^k` evaluations for `k` distinct identifiers.
/// An absent expression has no identifiers and is vacuously true.
pub fn solve(root: Option<&Node>) -> ResultSet {
    let identifiers = root.map(collect_identifiers).unwrap_or_default();
    debug!(
        "solve: {} identifiers, {} assignments",
        identifiers.len(),
        assignment_count(identifiers.len())
    );

    let arena = root.map(Arena::from_node);
    let mut results = ResultSet::new();
    for assignment in enumerate_assignments(&identifiers) {
        let value = match &arena {
            Some(arena) => arena.eval(&assignment),
            None => true,
        };
        results.record(assignment, value);
    }

    debug!(
        "solve: {} of {} assignments satisfy",
        results.sat_count(),
        results.len()
    );
    results
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::parser::parse;

    fn solve_str(input: &str) -> ResultSet {
        let root = parse(input).unwrap();
        solve(root.as_ref())
    }

    #[test]
    fn test_collect_identifiers() {
        let root = parse("a && !b || (a && c) || !!b").unwrap().unwrap();
        let ids: Vec<String> = collect_identifiers(&root).into_iter().collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_contradiction() {
        let results = solve_str("a && !a");
        assert_eq!(results.len(), 2);
        assert!(!results.is_satisfiable());
        assert_eq!(results.one_sat(), None);
        assert_eq!(results.sat_count(), BigUint::from(0u32));
    }

    #[test]
    fn test_tautology() {
        let results = solve_str("a || !a");
        assert!(results.is_satisfiable());
        assert_eq!(results.get("a: true"), Some(true));
        assert_eq!(results.get("a: false"), Some(true));
        assert_eq!(results.sat_count(), BigUint::from(2u32));
    }

    #[test]
    fn test_or_scenario() {
        let results = solve_str("isDone || failed");
        assert_eq!(results.len(), 4);
        assert!(results.is_satisfiable());
        assert_eq!(results.sat_count(), BigUint::from(3u32));
        assert_eq!(results.get("failed: false, isDone: false"), Some(false));
        assert_eq!(results.get("failed: true, isDone: false"), Some(true));
        assert_eq!(results.get("failed: false, isDone: true"), Some(true));
        assert_eq!(results.get("failed: true, isDone: true"), Some(true));
    }

    #[test]
    fn test_empty_expression() {
        let results = solve_str("");
        assert_eq!(results.len(), 1);
        assert_eq!(results.get(""), Some(true));
        assert!(results.is_satisfiable());
    }

    #[test]
    fn test_completeness() {
        let results = solve_str("(a || b) && (c || !d) && e");
        assert_eq!(BigUint::from(results.len()), assignment_count(5));
        for outcome in results.iter() {
            assert_eq!(outcome.assignment.len(), 5);
        }
    }

    #[test]
    fn test_one_sat_is_satisfying() {
        let root = parse("x && !y && z").unwrap().unwrap();
        let results = solve(Some(&root));
        let model = results.one_sat().unwrap();
        assert!(root.eval(model));
        assert_eq!(model.canonical_key(), "x: true, y: false, z: true");
    }

    #[test]
    fn test_solve_long_chain() {
        let input = vec!["a"; 10_000].join(" && ");
        let root = parse(&input).unwrap().unwrap();
        assert_eq!(collect_identifiers(&root).len(), 1);

        let results = solve(Some(&root));
        assert_eq!(results.len(), 2);
        assert_eq!(results.get("a: true"), Some(true));
        assert_eq!(results.get("a: false"), Some(false));
    }
}
