//! # boolsat: brute-force satisfiability of boolean expressions
//!
//! **`boolsat`** parses expressions built from identifiers, `&&`, `||`, `!` and parentheses
//! into an expression tree, then decides satisfiability by evaluating the tree under every
//! one of the `2^k` assignments to its `k` distinct identifiers.
//!
//! The search is deliberately exhaustive: there is no unit propagation, no clause learning
//! and no bound on `k`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use boolsat::parser::parse;
//! use boolsat::sat::solve;
//!
//! let root = parse("isDone || failed").unwrap();
//! let results = solve(root.as_ref());
//!
//! assert_eq!(results.len(), 4);
//! assert!(results.is_satisfiable());
//! assert_eq!(results.get("failed: false, isDone: false"), Some(false));
//! ```
//!
//! ## Pipeline
//!
//! - **[`lexer`]**: finite-state tokenizer producing [`token::Token`]s.
//! - **[`parser`]**: recursive-descent parser producing an [`ast::Node`] tree.
//! - **[`assignment`]**: assignments and their enumeration.
//! - **[`eval`]**: evaluation of a tree under one assignment.
//! - **[`sat`]**: identifier collection and the result set.
//! - **[`report`]** and **[`dot`]**: textual outputs.

pub mod assignment;
pub mod ast;
pub mod dot;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod sat;
pub mod token;
