use std::fmt::Display;

use itertools::Itertools;

pub mod token;
pub use token::{Line, Literal, Token, TokenType};
use TokenType::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {error}")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub line: Line,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub struct ScanErrors(pub Vec<ScanError>);

impl Display for ScanErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().map(|e| e.to_string()).join("\n"))
    }
}

pub struct Scanner {
    start: usize,
    current: usize,
    line: usize,
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            start: 0,
            current: 0,
            line: 1,
            source: source.chars().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, ty: TokenType) {
        self.add_literal_token(ty, None)
    }

    fn add_literal_token(&mut self, ty: TokenType, literal: Option<Literal>) {
        let token = Token::new(ty, self.lexeme(), literal, Line(self.line));
        log::trace!("Scanned {} {:?}", token.ty(), token.lexeme());
        self.tokens.push(token)
    }

    fn error(&mut self, error: ScanErrorType) {
        self.errors.push(ScanError { error, line: Line(self.line) })
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.current += 1;
        }
        c
    }

    fn consume_while(&mut self, cond: impl Fn(char) -> bool) {
        while self.peek().map_or(false, &cond) {
            self.consume();
        }
    }

    fn consume_if_matches(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(c) if c == expected => {
                self.consume();
                true
            }
            _ => false,
        }
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token>, ScanErrors> {
        while let Some(c) = self.consume() {
            self.start = self.current - 1;
            match c {
                '(' => self.add_token(LeftParen),
                ')' => self.add_token(RightParen),
                '{' => self.add_token(LeftBrace),
                '}' => self.add_token(RightBrace),
                ',' => self.add_token(Comma),
                '.' => self.add_token(Dot),
                '-' => self.add_token(Minus),
                '+' => self.add_token(Plus),
                ';' => self.add_token(Semicolon),
                '*' => self.add_token(Star),
                '?' => self.add_token(Question),
                ':' => self.add_token(Colon),

                '!' => {
                    let ty = if self.consume_if_matches('=') { BangEqual } else { Bang };
                    self.add_token(ty)
                }
                '=' => {
                    let ty = if self.consume_if_matches('=') { EqualEqual } else { Equal };
                    self.add_token(ty)
                }
                '<' => {
                    let ty = if self.consume_if_matches('=') { LessEqual } else { Less };
                    self.add_token(ty)
                }
                '>' => {
                    let ty = if self.consume_if_matches('=') { GreaterEqual } else { Greater };
                    self.add_token(ty)
                }

                '/' => {
                    if self.consume_if_matches('/') {
                        // Comment
                        self.consume_while(|c| c != '\n');
                    } else {
                        self.add_token(Slash)
                    }
                }

                d if d.is_ascii_digit() => self.number(),
                a if a.is_ascii_alphabetic() || a == '_' => self.identifier(),

                '"' => self.string(),

                ' ' | '\r' | '\t' => (),

                '\n' => self.line += 1,

                c => self.error(ScanErrorType::UnexpectedCharacter(c)),
            }
        }
        self.tokens.push(Token::eof(Line(self.line)));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(ScanErrors(self.errors))
        }
    }

    fn string(&mut self) {
        loop {
            match self.consume() {
                Some('"') => break,
                Some('\n') => self.line += 1,
                Some(_) => (),
                None => return self.error(ScanErrorType::UnterminatedString),
            }
        }

        let value = self.source[self.start + 1..self.current - 1].iter().collect();
        self.add_literal_token(Str, Some(Literal::Str(value)));
    }

    fn number(&mut self) {
        self.consume_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') && self.peek_next().map_or(false, |c| c.is_ascii_digit()) {
            self.consume();
            self.consume_while(|c| c.is_ascii_digit());
        }

        let lexeme = self.lexeme();
        match lexeme.parse() {
            Ok(n) => self.add_literal_token(Number, Some(Literal::Number(n))),
            Err(_) => self.error(ScanErrorType::InvalidNumber(lexeme)),
        }
    }

    fn identifier(&mut self) {
        self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let ty = TokenType::keyword(&self.lexeme()).unwrap_or(Identifier);
        self.add_token(ty)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn token(ty: TokenType, lexeme: &str) -> Token {
        Token::simple(ty, lexeme, Line(1))
    }

    #[test]
    fn string_literals() {
        let tokens = Scanner::new("\"hello world\"").scan_tokens().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(
                    Str,
                    "\"hello world\"",
                    Some(Literal::Str("hello world".to_string())),
                    Line(1)
                ),
                Token::eof(Line(1)),
            ]
        );

        let errors = Scanner::new("\"hello world").scan_tokens().unwrap_err();
        assert_eq!(
            errors,
            ScanErrors(vec![ScanError {
                error: ScanErrorType::UnterminatedString,
                line: Line(1)
            }])
        );
    }

    #[test]
    fn multiline_string() {
        let tokens = Scanner::new("\"a\nb\" 1").scan_tokens().unwrap();
        assert_eq!(tokens[0].literal(), Some(&Literal::Str("a\nb".to_string())));
        assert_eq!(tokens[1].line(), Line(2));
    }

    #[test]
    fn numbers() {
        let tokens = Scanner::new("12 3.25 4.").scan_tokens().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(Number, "12", Some(Literal::Number(12.0)), Line(1)),
                Token::new(Number, "3.25", Some(Literal::Number(3.25)), Line(1)),
                Token::new(Number, "4", Some(Literal::Number(4.0)), Line(1)),
                token(Dot, "."),
                Token::eof(Line(1)),
            ]
        );
    }

    #[test]
    fn two_char_tokens() {
        let tokens = Scanner::new("! != = == < <= > >=").scan_tokens().unwrap();
        assert_eq!(
            tokens,
            vec![
                token(Bang, "!"),
                token(BangEqual, "!="),
                token(Equal, "="),
                token(EqualEqual, "=="),
                token(Less, "<"),
                token(LessEqual, "<="),
                token(Greater, ">"),
                token(GreaterEqual, ">="),
                Token::eof(Line(1)),
            ]
        );
    }

    #[test]
    fn single_char_tokens() {
        let tokens = Scanner::new("=(){},.-+;*/!<>?:").scan_tokens().unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.ty()).collect_vec(),
            vec![
                Equal, LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus,
                Semicolon, Star, Slash, Bang, Less, Greater, Question, Colon, Eof
            ]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        let tokens = Scanner::new("true nil foo_1 while").scan_tokens().unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.ty()).collect_vec(),
            vec![True, Nil, Identifier, While, Eof]
        );
        assert_eq!(tokens[2].lexeme(), "foo_1");
    }

    #[test]
    fn comments() {
        let tokens = Scanner::new("a // comment\nb").scan_tokens().unwrap();
        assert_eq!(
            tokens,
            vec![
                token(Identifier, "a"),
                Token::simple(Identifier, "b", Line(2)),
                Token::eof(Line(2)),
            ]
        );
    }

    #[test]
    fn collects_all_errors() {
        let errors = Scanner::new("1 @\n# 2").scan_tokens().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "[line 1] Error: Unexpected character: @\n[line 2] Error: Unexpected character: #"
        );
    }
}
