use std::fmt::Display;

use scanner::{Token, TokenType};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorType {
    #[error("Binary operators must have a left and right operand.")]
    MissingLeftOperand,
    #[error("Expect ')' after expression.")]
    ExpectedRightParen,
    #[error("Expect ':' after '?'.")]
    ExpectedColon,
    #[error("Expect expression.")]
    ExpectedExpression,
    #[error("Expect end of expression.")]
    ExpectedEof,
    #[error("Literal token carries no value.")]
    MissingLiteralValue,
}

impl ParseErrorType {
    /// Whether parsing continues past an error of this type.
    pub fn is_recoverable(self) -> bool {
        matches!(self, ParseErrorType::MissingLeftOperand)
    }

    pub(crate) fn at(self, token: &Token) -> ParseError {
        ParseError { error: self, token: token.clone() }
    }
}

/// A diagnostic tied to the token it was detected at.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct ParseError {
    error: ParseErrorType,
    token: Token,
}

impl ParseError {
    pub fn new(error: ParseErrorType, token: Token) -> Self {
        Self { error, token }
    }

    pub fn error(&self) -> ParseErrorType {
        self.error
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token.ty() {
            TokenType::Eof => write!(f, "[line {}] Error at end: {}", self.token.line(), self.error),
            _ => write!(
                f,
                "[line {}] Error at '{}': {}",
                self.token.line(),
                self.token.lexeme(),
                self.error
            ),
        }
    }
}

/// Sink for diagnostics produced while parsing.
///
/// Fatal errors are reported once the parse has been abandoned; recoverable
/// ones only after the whole parse succeeded, in the order they were found.
pub trait Reporter {
    fn report(&mut self, error: &ParseError);
}

impl Reporter for Vec<ParseError> {
    fn report(&mut self, error: &ParseError) {
        self.push(error.clone())
    }
}

impl<F: FnMut(&ParseError)> Reporter for F {
    fn report(&mut self, error: &ParseError) {
        (*self)(error)
    }
}
