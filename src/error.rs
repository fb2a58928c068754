//! Error kinds raised while turning text into an expression tree.
//!
//! Both kinds are fatal for the pipeline: no partial token list or partial
//! tree is ever returned alongside them.

use std::fmt::{Display, Formatter};

use crate::lexer::State;
use crate::token::Token;

/// A character could not extend any valid token from the current lexer state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LexError {
    /// The offending input character.
    pub character: char,
    /// Zero-based character index of `character` in the input.
    pub position: usize,
    /// Identifier text buffered when the error was raised.
    pub buffer: String,
    /// Lexer state the offending character was fed to.
    pub state: State,
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unexpected character {:?} at position {} (state {:?}, current text {:?})",
            self.character, self.position, self.state, self.buffer
        )
    }
}

impl std::error::Error for LexError {}

/// The token stream does not match the grammar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SyntaxError {
    /// An identifier or `(` was required, but another token was found.
    UnexpectedToken(Token),
    /// Input ended where an operand was required.
    UnexpectedEnd,
    /// A parenthesised expression was not followed by `)`.
    UnclosedParen { found: Option<Token> },
    /// A complete expression was followed by more tokens.
    TrailingToken(Token),
    /// Parenthesised groups nested deeper than `limit`.
    NestingTooDeep { limit: usize },
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxError::UnexpectedToken(token) => write!(f, "unexpected token {}", token),
            SyntaxError::UnexpectedEnd => write!(f, "unexpected end of input"),
            SyntaxError::UnclosedParen { found: Some(token) } => {
                write!(f, "unclosed parenthesized expression: expected PAREN_RIGHT, found {}", token)
            }
            SyntaxError::UnclosedParen { found: None } => {
                write!(f, "unclosed parenthesized expression: expected PAREN_RIGHT, found end of input")
            }
            SyntaxError::TrailingToken(token) => write!(f, "unexpected token {} after complete expression", token),
            SyntaxError::NestingTooDeep { limit } => {
                write!(f, "parentheses nested deeper than {} levels", limit)
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Any failure of the text-to-tree pipeline.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "Lexer error: {}", e),
            Error::Syntax(e) => write!(f, "Syntax error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Syntax(e) => Some(e),
        }
    }
}
