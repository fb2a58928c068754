//! Recursive-descent parser for boolean expressions.
//!
//! ```text
//! E  -> A E'
//! E' -> '||' E | ε
//! A  -> B A'
//! A' -> '&&' A | ε
//! B  -> '!' B | B'
//! B' -> '(' E ')' | IDENTIFIER
//! ```
//!
//! Precedence from lowest to highest: `||`, `&&`, then `!` and grouping.
//!
//! The `E'` and `A'` rules fold every freshly parsed right operand into the operand
//! accumulated so far before continuing, so chains of the same operator are
//! left-associative: `a || b || c` is `(a || b) || c`.
//!
//! Only parenthesised groups recurse; they may be nested at most [`MAX_NESTING`] deep.

use log::debug;

use crate::ast::Node;
use crate::error::{Error, SyntaxError};
use crate::lexer::Lexer;
use crate::token::Token;

/// Deepest accepted nesting of parenthesised groups.
pub const MAX_NESTING: usize = 256;

/// Parses `input` into an expression tree.
///
/// Returns `Ok(None)` for input without any tokens.
pub fn parse(input: &str) -> Result<Option<Node>, Error> {
    let lexer = Lexer::new(input)?;
    let root = Parser::new(lexer).parse()?;
    match &root {
        Some(node) => debug!("parse: {} nodes: {}", node.size(), node),
        None => debug!("parse: no expression"),
    }
    Ok(root)
}

#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    depth: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer, depth: 0 }
    }

    /// Parses the whole token stream.
    pub fn parse(mut self) -> Result<Option<Node>, SyntaxError> {
        if self.lexer.at_end() {
            return Ok(None);
        }
        let root = self.expression()?;
        match self.lexer.next() {
            None => Ok(Some(root)),
            Some(token) => Err(SyntaxError::TrailingToken(token)),
        }
    }

    fn next_is(&self, f: impl FnOnce(&Token) -> bool) -> bool {
        self.lexer.peek().is_some_and(f)
    }

    /// `E -> A E'`
    fn expression(&mut self) -> Result<Node, SyntaxError> {
        let left = self.conjunction()?;
        self.disjunction_rest(left)
    }

    /// `E' -> '||' E | ε`, folded to the left.
    fn disjunction_rest(&mut self, mut left: Node) -> Result<Node, SyntaxError> {
        while self.next_is(Token::is_or) {
            self.lexer.next();
            let right = self.conjunction()?;
            left = Node::or(left, right);
        }
        Ok(left)
    }

    /// `A -> B A'`
    fn conjunction(&mut self) -> Result<Node, SyntaxError> {
        let left = self.negation()?;
        self.conjunction_rest(left)
    }

    /// `A' -> '&&' A | ε`, folded to the left.
    fn conjunction_rest(&mut self, mut left: Node) -> Result<Node, SyntaxError> {
        while self.next_is(Token::is_and) {
            self.lexer.next();
            let right = self.negation()?;
            left = Node::and(left, right);
        }
        Ok(left)
    }

    /// `B -> '!' B | B'`
    fn negation(&mut self) -> Result<Node, SyntaxError> {
        let mut count = 0;
        while self.next_is(Token::is_not) {
            self.lexer.next();
            count += 1;
        }
        let mut node = self.primary()?;
        for _ in 0..count {
            node = Node::not(node);
        }
        Ok(node)
    }

    /// `B' -> '(' E ')' | IDENTIFIER`
    fn primary(&mut self) -> Result<Node, SyntaxError> {
        match self.lexer.next() {
            Some(Token::LeftParen) => {
                if self.depth == MAX_NESTING {
                    return Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING });
                }
                self.depth += 1;
                let group = self.expression()?;
                self.depth -= 1;
                match self.lexer.next() {
                    Some(Token::RightParen) => Ok(group),
                    found => Err(SyntaxError::UnclosedParen { found }),
                }
            }
            Some(Token::Identifier(name)) => Ok(Node::Identifier(name)),
            Some(token) => Err(SyntaxError::UnexpectedToken(token)),
            None => Err(SyntaxError::UnexpectedEnd),
        }
    }
}
