mod error;

pub use ast::{Expr, LiteralValue};
pub use error::{ParseError, ParseErrorType, Reporter};
use scanner::{Line, Token, TokenType};

use TokenType::*;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parses a complete expression, forwarding all diagnostics to `reporter`.
pub fn parse(tokens: &[Token], reporter: &mut impl Reporter) -> Option<Expr> {
    Parser::new(tokens).parse(reporter)
}

/// Recursive descent parser over a token slice.
///
/// Every grammar level returns `Ok(None)` when there is no expression at the
/// current position and leaves it to its caller to decide whether that is an
/// error. Fatal errors are propagated as `Err` and abort the whole parse.
#[derive(Debug)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    current: usize,
    // Stands in for a missing end-of-input sentinel.
    eof: Token,
    diagnostics: Vec<ParseError>,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        let last_line = tokens.last().map_or(Line(1), |t| t.line());
        Self { tokens, current: 0, eof: Token::eof(last_line), diagnostics: Vec::new() }
    }

    /// Returns `None` if a fatal error occurred, in which case that error is
    /// the only one reported.
    pub fn parse(&mut self, reporter: &mut impl Reporter) -> Option<Expr> {
        match self.complete_expression() {
            Ok(expr) => {
                log::debug!("Parsed expression: {}", expr);
                for diagnostic in self.diagnostics.drain(..) {
                    reporter.report(&diagnostic);
                }
                Some(expr)
            }
            Err(e) => {
                log::trace!(
                    "Hit error: {:?}, dropping {} recoverable diagnostics",
                    e,
                    self.diagnostics.len()
                );
                self.diagnostics.clear();
                reporter.report(&e);
                None
            }
        }
    }

    /// Skips tokens until the start of the next statement.
    ///
    /// Stops right after a `;` or in front of a keyword that begins a
    /// statement, or at the end of input.
    pub fn synchronize(&mut self) {
        let mut previous = self.advance();

        while !self.is_at_end() {
            log::trace!("Syncing... {:?}", self.peek());
            if previous.ty() == Semicolon {
                return;
            }

            if let Class | Fun | Var | For | If | While | Print | Return = self.peek().ty() {
                return;
            }

            previous = self.advance();
        }
    }

    fn complete_expression(&mut self) -> Result<Expr> {
        let expr = self.operand(Self::expression)?;
        self.consume_or_error(Eof, ParseErrorType::ExpectedEof)?;
        Ok(expr)
    }

    fn expression(&mut self) -> Result<Option<Expr>> {
        self.comma()
    }

    fn comma(&mut self) -> Result<Option<Expr>> {
        let expr = self.conditional()?;

        if self.consume(Comma).is_ok() {
            // The left operand only matters for its side effects.
            log::trace!("Discarding left operand of ',': {:?}", expr);
            return self.expression();
        }

        Ok(expr)
    }

    fn conditional(&mut self) -> Result<Option<Expr>> {
        let expr = self.equality()?;

        let Ok(question) = self.consume(Question) else {
            return Ok(expr);
        };

        let condition = self.left_operand(expr, &question)?;
        let then_branch = self.operand(Self::conditional)?;
        let colon = self.consume_or_error(Colon, ParseErrorType::ExpectedColon)?;
        let else_branch = self.operand(Self::conditional)?;

        Ok(Some(Expr::conditional(condition, question, then_branch, colon, else_branch)))
    }

    fn equality(&mut self) -> Result<Option<Expr>> {
        let mut expr = self.comparison()?;

        while let BangEqual | EqualEqual = self.peek().ty() {
            let operator = self.advance();
            let left = self.left_operand(expr, &operator)?;
            let right = self.operand(Self::comparison)?;
            expr = Some(Expr::binary(left, operator, right));
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Option<Expr>> {
        let mut expr = self.term()?;

        while let Greater | GreaterEqual | Less | LessEqual = self.peek().ty() {
            let operator = self.advance();
            let left = self.left_operand(expr, &operator)?;
            let right = self.operand(Self::term)?;
            expr = Some(Expr::binary(left, operator, right));
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Option<Expr>> {
        let mut expr = self.factor()?;

        while let Minus | Plus = self.peek().ty() {
            let operator = self.advance();

            // A stray `+`/`-` is skipped and parsing restarts right after it.
            let Some(left) = expr else {
                log::trace!("Missing left operand for {:?}, resyncing", operator);
                self.diagnostics.push(ParseErrorType::MissingLeftOperand.at(&operator));
                return self.expression();
            };

            let right = self.operand(Self::factor)?;
            expr = Some(Expr::binary(left, operator, right));
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Option<Expr>> {
        let mut expr = self.unary()?;

        while let Slash | Star = self.peek().ty() {
            let operator = self.advance();
            let left = self.left_operand(expr, &operator)?;
            let right = self.operand(Self::unary)?;
            expr = Some(Expr::binary(left, operator, right));
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Option<Expr>> {
        if let Bang | Minus = self.peek().ty() {
            let operator = self.advance();
            let right = self.operand(Self::unary)?;
            return Ok(Some(Expr::unary(operator, right)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Option<Expr>> {
        let value = match self.peek().ty() {
            False => LiteralValue::Boolean(false),
            True => LiteralValue::Boolean(true),
            Nil => LiteralValue::Nil,
            Number | Str => match self.peek().literal() {
                Some(literal) => literal.clone().into(),
                None => return Err(ParseErrorType::MissingLiteralValue.at(self.peek())),
            },
            LeftParen => {
                self.advance();
                let expr = self.operand(Self::expression)?;
                self.consume_or_error(RightParen, ParseErrorType::ExpectedRightParen)?;
                return Ok(Some(Expr::grouping(expr)));
            }
            _ => return Ok(None),
        };

        self.advance();
        Ok(Some(Expr::Literal(value)))
    }
}

// Helpers
impl<'t> Parser<'t> {
    /// Runs `level` and requires it to produce an expression.
    fn operand(&mut self, level: fn(&mut Self) -> Result<Option<Expr>>) -> Result<Expr> {
        match level(self)? {
            Some(expr) => Ok(expr),
            None => Err(ParseErrorType::ExpectedExpression.at(self.peek())),
        }
    }

    fn left_operand(&self, expr: Option<Expr>, operator: &Token) -> Result<Expr> {
        expr.ok_or_else(|| ParseErrorType::ExpectedExpression.at(operator))
    }

    fn consume(&mut self, ty: TokenType) -> std::result::Result<Token, &Token> {
        if self.peek().ty() == ty {
            Ok(self.advance())
        } else {
            Err(self.peek())
        }
    }

    fn consume_or_error(&mut self, ty: TokenType, error: ParseErrorType) -> Result<Token> {
        self.consume(ty).map_err(|token| error.at(token))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        log::trace!("Consumed {} {:?}", token.ty(), token.lexeme());
        token
    }

    fn is_at_end(&self) -> bool {
        self.peek().ty() == Eof
    }
}
