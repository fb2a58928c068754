//! Tokenizer for boolean expressions.
//!
//! Tokenization is a single pass of a finite-state machine over the input characters.
//! Each step either consumes the character or leaves it to be fed again from
//! [`State::Start`], and may produce one token.
//!
//! ```text
//!              | alpha/_/$ | digit     | '(' ')' '!'  | '&'          | '|'          | space     | other
//! -------------+-----------+-----------+--------------+--------------+--------------+-----------+------
//! Start        | (C) -> Id | ERROR     | (C) emit     | (C) -> And   | (C) -> Or    | (C)       | ERROR
//! AndPending   | ERROR     | ERROR     | ERROR        | (C) emit AND | ERROR        | ERROR     | ERROR
//! OrPending    | ERROR     | ERROR     | ERROR        | ERROR        | (C) emit OR  | ERROR     | ERROR
//! Identifier   | (C)       | (C)       | (L) emit ID  | (L) emit ID  | (L) emit ID  | (L) emit  | (L) emit ID
//! ```
//!
//! `(C)` consumes the character, `(L)` leaves it for the next step.
//! A sentinel space is appended to the input so that a trailing identifier is flushed.
//!
//! The produced tokens are exposed through a cursor ([`Lexer::peek`], [`Iterator::next`],
//! [`Lexer::at_end`]), which is what the [parser][crate::parser] consumes.

use log::{debug, trace};

use crate::error::LexError;
use crate::token::Token;

/// Internal state of the tokenizer machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum State {
    /// Between tokens.
    Start,
    /// Inside an identifier.
    Identifier,
    /// After the first `&`.
    AndPending,
    /// After the first `|`.
    OrPending,
    /// A token has been produced and waits to be collected.
    Final,
    /// No transition exists for the last input.
    Error,
}

/// What the driver should do with the character it just fed to the machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Action {
    Consume,
    Leave,
}

#[derive(Debug)]
struct Machine {
    state: State,
    text: String,
    result: Option<Token>,
}

impl Machine {
    fn new() -> Self {
        Self {
            state: State::Start,
            text: String::new(),
            result: None,
        }
    }

    fn is_identifier_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || c == '$'
    }

    fn is_identifier_part(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '$'
    }

    fn produce(&mut self, token: Token) {
        self.state = State::Final;
        self.result = Some(token);
    }

    /// Advances the machine by one character.
    ///
    /// Returns `None` and enters [`State::Error`] if there is no transition for `c` from the
    /// current state. [`State::Error`] has no outgoing transitions.
    fn step(&mut self, c: char) -> Option<Action> {
        let action = self.transition(c);
        if action.is_none() {
            self.state = State::Error;
        }
        action
    }

    fn transition(&mut self, c: char) -> Option<Action> {
        let action = match self.state {
            State::Start => match c {
                c if Self::is_identifier_start(c) => {
                    self.state = State::Identifier;
                    self.text.push(c);
                    Action::Consume
                }
                c if c.is_whitespace() => Action::Consume,
                '!' => {
                    self.produce(Token::Not);
                    Action::Consume
                }
                '(' => {
                    self.produce(Token::LeftParen);
                    Action::Consume
                }
                ')' => {
                    self.produce(Token::RightParen);
                    Action::Consume
                }
                '&' => {
                    self.state = State::AndPending;
                    Action::Consume
                }
                '|' => {
                    self.state = State::OrPending;
                    Action::Consume
                }
                _ => return None,
            },
            State::Identifier => {
                if Self::is_identifier_part(c) {
                    self.text.push(c);
                    Action::Consume
                } else {
                    let name = std::mem::take(&mut self.text);
                    self.produce(Token::Identifier(name));
                    Action::Leave
                }
            }
            State::AndPending if c == '&' => {
                self.produce(Token::And);
                Action::Consume
            }
            State::OrPending if c == '|' => {
                self.produce(Token::Or);
                Action::Consume
            }
            State::AndPending | State::OrPending | State::Error => return None,
            // A produced token must be collected before feeding more input.
            State::Final => Action::Leave,
        };
        Some(action)
    }

    /// Collects the produced token and returns the machine to [`State::Start`].
    fn take_token(&mut self) -> Option<Token> {
        if self.state != State::Final {
            return None;
        }
        self.state = State::Start;
        self.text.clear();
        self.result.take()
    }
}

/// Splits `input` into tokens.
///
/// Fails on the first character that cannot extend a valid token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = input.chars().chain(std::iter::once(' ')).collect();
    let mut machine = Machine::new();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let from = machine.state;
        let Some(action) = machine.step(c) else {
            let e = LexError {
                character: c,
                position: i,
                buffer: machine.text.clone(),
                state: from,
            };
            debug!("tokenize: {}", e);
            return Err(e);
        };
        trace!("{:?} --{:?}--> {:?} ({:?})", from, c, machine.state, action);

        if let Some(token) = machine.take_token() {
            tokens.push(token);
        }
        if action == Action::Consume {
            i += 1;
        }
    }

    debug!("tokenize: {} tokens from {} characters", tokens.len(), chars.len() - 1);
    Ok(tokens)
}

/// Token cursor over a fully tokenized expression.
#[derive(Debug, Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    position: usize,
}

impl Lexer {
    /// Tokenizes the whole `input` up front.
    pub fn new(input: &str) -> Result<Self, LexError> {
        Ok(Self::from_tokens(tokenize(input)?))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens, position: 0 }
    }

    /// Returns the next token without advancing, or `None` at the end.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Returns `true` once all tokens have been consumed.
    pub fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// All tokens, including the consumed ones.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.position).cloned()?;
        self.position += 1;
        Some(token)
    }
}
