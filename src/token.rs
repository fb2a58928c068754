//! Lexical units of a boolean expression.

use std::fmt::{Display, Formatter};

/// One token produced by the [lexer][crate::lexer].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,
    /// Identifier matching `[A-Za-z_$][A-Za-z0-9_$]*`.
    Identifier(String),
}

impl Token {
    pub fn identifier(name: impl Into<String>) -> Self {
        Token::Identifier(name.into())
    }

    pub fn is_left_paren(&self) -> bool {
        matches!(self, Token::LeftParen)
    }
    pub fn is_right_paren(&self) -> bool {
        matches!(self, Token::RightParen)
    }
    pub fn is_and(&self) -> bool {
        matches!(self, Token::And)
    }
    pub fn is_or(&self) -> bool {
        matches!(self, Token::Or)
    }
    pub fn is_not(&self) -> bool {
        matches!(self, Token::Not)
    }
    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    /// Returns the identifier name, if this is an identifier token.
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LeftParen => write!(f, "PAREN_LEFT"),
            Token::RightParen => write!(f, "PAREN_RIGHT"),
            Token::And => write!(f, "AND"),
            Token::Or => write!(f, "OR"),
            Token::Not => write!(f, "NOT"),
            Token::Identifier(name) => write!(f, "ID({})", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Token::LeftParen.is_left_paren());
        assert!(Token::RightParen.is_right_paren());
        assert!(Token::And.is_and());
        assert!(Token::Or.is_or());
        assert!(Token::Not.is_not());
        assert!(Token::identifier("x").is_identifier());
        assert!(!Token::And.is_identifier());
    }

    #[test]
    fn test_name() {
        assert_eq!(Token::identifier("isDone").name(), Some("isDone"));
        assert_eq!(Token::Or.name(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::identifier("a").to_string(), "ID(a)");
        assert_eq!(Token::And.to_string(), "AND");
        assert_eq!(Token::RightParen.to_string(), "PAREN_RIGHT");
    }
}
