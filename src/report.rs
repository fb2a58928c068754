//! Human-readable satisfiability report.
//!
//! ```text
//! input: isDone || failed
//! SAT
//! failed: false, isDone: true
//! failed: true, isDone: false
//! failed: true, isDone: true
//! ```
//!
//! In verbose mode every assignment is listed, followed by `, <value>`.

use std::fmt::{Display, Formatter};

use crate::sat::ResultSet;

#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// List every assignment with its value, not just the satisfying ones.
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub input: String,
    pub satisfiable: bool,
    pub lines: Vec<String>,
}

impl Report {
    pub fn new(input: &str, results: &ResultSet, config: &ReportConfig) -> Self {
        let mut lines: Vec<String> = if config.verbose {
            results
                .iter()
                .map(|o| format!("{}, {}", o.assignment.canonical_key(), o.value))
                .collect()
        } else {
            results.satisfying().map(|a| a.canonical_key()).collect()
        };
        lines.sort();

        Self {
            input: input.to_string(),
            satisfiable: results.is_satisfiable(),
            lines,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "input: {}", self.input)?;
        writeln!(f, "{}", if self.satisfiable { "SAT" } else { "UNSAT" })?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
