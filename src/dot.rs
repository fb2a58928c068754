//! Expression tree to DOT (Graphviz) conversion.
//!
//! Every node is labelled with its [arena index][crate::ast::Idx], so the output is stable
//! for a given tree:
//!
//! ```text
//! digraph expression_tree {
//! 	0 [label="OR"];
//! 	1 [label="ID: isDone" shape=box];
//! 	2 [label="ID: failed" shape=box];
//! 	0 -> 1;
//! 	0 -> 2;
//! }
//! ```
//!
//! Render with e.g. `dot -Tpng tree.dot -o tree.png`.

use std::fmt::Write as _;

use crate::ast::{Arena, Expr, Node};

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Graph name (default: "expression_tree")
    pub graph_name: &'static str,
    /// Shape for identifier leaves (default: "box")
    pub identifier_shape: &'static str,
    /// Shape for operator nodes; Graphviz default when `None`
    pub operator_shape: Option<&'static str>,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            graph_name: "expression_tree",
            identifier_shape: "box",
            operator_shape: None,
        }
    }
}

/// Converts an expression tree to DOT format.
///
/// An absent expression yields an empty graph.
pub fn to_dot(root: Option<&Node>) -> Result<String, std::fmt::Error> {
    to_dot_with_config(root, &DotConfig::default())
}

pub fn to_dot_with_config(root: Option<&Node>, config: &DotConfig) -> Result<String, std::fmt::Error> {
    let mut dot = String::new();
    writeln!(dot, "digraph {} {{", config.graph_name)?;

    if let Some(root) = root {
        let arena = Arena::from_node(root);

        for (idx, expr) in arena.iter() {
            match expr {
                Expr::Identifier(name) => {
                    writeln!(dot, "\t{} [label=\"ID: {}\" shape={}];", idx, name, config.identifier_shape)?;
                }
                _ => match config.operator_shape {
                    Some(shape) => writeln!(dot, "\t{} [label=\"{}\" shape={}];", idx, expr.kind(), shape)?,
                    None => writeln!(dot, "\t{} [label=\"{}\"];", idx, expr.kind())?,
                },
            }
        }

        for (idx, expr) in arena.iter() {
            for child in expr.children() {
                writeln!(dot, "\t{} -> {};", idx, child)?;
            }
        }
    }

    writeln!(dot, "}}")?;
    Ok(dot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_to_dot_or() {
        let root = parse("isDone || failed").unwrap();
        let dot = to_dot(root.as_ref()).unwrap();
        assert_eq!(
            dot,
            "digraph expression_tree {\n\
             \t0 [label=\"OR\"];\n\
             \t1 [label=\"ID: isDone\" shape=box];\n\
             \t2 [label=\"ID: failed\" shape=box];\n\
             \t0 -> 1;\n\
             \t0 -> 2;\n\
             }\n"
        );
    }

    #[test]
    fn test_to_dot_empty() {
        assert_eq!(to_dot(None).unwrap(), "digraph expression_tree {\n}\n");
    }

    #[test]
    fn test_to_dot_not() {
        let root = parse("!a").unwrap();
        let dot = to_dot(root.as_ref()).unwrap();
        assert!(dot.contains("\t0 [label=\"NOT\"];\n"));
        assert!(dot.contains("\t0 -> 1;\n"));
    }

    #[test]
    fn test_to_dot_edge_count() {
        let root = parse("a && b || !c && d || e && !f").unwrap().unwrap();
        let dot = to_dot(Some(&root)).unwrap();
        let edges = dot.lines().filter(|l| l.contains("->")).count();
        assert_eq!(edges, root.size() - 1);
    }

    #[test]
    fn test_to_dot_with_config() {
        let root = parse("a && b").unwrap();
        let config = DotConfig {
            graph_name: "g",
            identifier_shape: "ellipse",
            operator_shape: Some("circle"),
        };
        let dot = to_dot_with_config(root.as_ref(), &config).unwrap();
        assert!(dot.starts_with("digraph g {"));
        assert!(dot.contains("\t0 [label=\"AND\" shape=circle];\n"));
        assert!(dot.contains("\t1 [label=\"ID: a\" shape=ellipse];\n"));
    }
}
