//! Truth assignments and their exhaustive enumeration.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

use num_bigint::BigUint;

/// A mapping from identifier names to truth values.
///
/// Keys are kept sorted, so iteration order (and the [canonical key][Assignment::canonical_key])
/// does not depend on how the assignment was built.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Assignment(BTreeMap<String, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: bool) -> Option<bool> {
        self.0.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs in lexicographic order of names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, &value)| (name.as_str(), value))
    }

    /// Deterministic rendering: `name: value` pairs in sorted order, joined with `, `.
    pub fn canonical_key(&self) -> String {
        self.to_string()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}

/// Number of assignments over `k` identifiers, i.e. `2^k`.
pub fn assignment_count(k: usize) -> BigUint {
    BigUint::from(1u32) << k
}

/// Iterator over all `2^k` assignments of `k` identifiers.
///
/// Equivalent to counting from `0` to `2^k - 1` in binary: the first identifier
/// is the most significant bit, `0` maps to `false` and `1` to `true`.
/// With no identifiers, exactly one (empty) assignment is produced.
#[derive(Debug, Clone)]
pub struct Assignments {
    names: Vec<String>,
    bits: Option<Vec<bool>>,
}

impl Assignments {
    pub fn new(names: Vec<String>) -> Self {
        let bits = vec![false; names.len()];
        Self { names, bits: Some(bits) }
    }

    /// Identifier order used for bit positions.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let bits = self.bits.as_mut()?;
        let assignment = self.names.iter().cloned().zip(bits.iter().copied()).collect();

        // Binary increment, least significant bit last.
        let mut carry = true;
        for bit in bits.iter_mut().rev() {
            if !carry {
                break;
            }
            carry = *bit;
            *bit = !*bit;
        }
        if carry {
            self.bits = None;
        }

        Some(assignment)
    }
}

/// Enumerates every assignment of the given identifiers.
pub fn enumerate_assignments(identifiers: &BTreeSet<String>) -> Assignments {
    Assignments::new(identifiers.iter().cloned().collect())
}
