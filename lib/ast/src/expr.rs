use std::fmt::{self, Display, Formatter};

use scanner::Token;

use crate::Visitor;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary { left: Box<Expr>, operator: Token, right: Box<Expr> },
    Conditional {
        condition: Box<Expr>,
        question: Token,
        then_branch: Box<Expr>,
        colon: Token,
        else_branch: Box<Expr>,
    },
    Grouping(Box<Expr>),
    Unary { operator: Token, right: Box<Expr> },
    Literal(LiteralValue),
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary { left: Box::new(left), operator, right: Box::new(right) }
    }

    pub fn conditional(
        condition: Expr,
        question: Token,
        then_branch: Expr,
        colon: Token,
        else_branch: Expr,
    ) -> Self {
        Expr::Conditional {
            condition: Box::new(condition),
            question,
            then_branch: Box::new(then_branch),
            colon,
            else_branch: Box::new(else_branch),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary { operator, right: Box::new(right) }
    }

    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn accept<T>(&self, visitor: &mut impl Visitor<T>) -> T {
        match self {
            Expr::Binary { left, operator, right } => visitor.visit_binary(left, operator, right),
            Expr::Conditional { condition, question, then_branch, colon, else_branch } => {
                visitor.visit_conditional(condition, question, then_branch, colon, else_branch)
            }
            Expr::Grouping(inner) => visitor.visit_grouping(inner),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
            Expr::Literal(value) => visitor.visit_literal(value),
        }
    }
}

/// Parenthesized prefix form, e.g. `(* (group (+ 1 2)) 3)`.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { left, operator, right } => {
                write!(f, "({} {} {})", operator, left, right)
            }
            Expr::Conditional { condition, then_branch, else_branch, .. } => {
                write!(f, "(?: {} {} {})", condition, then_branch, else_branch)
            }
            Expr::Grouping(expression) => {
                write!(f, "(group {})", expression)
            }
            Expr::Unary { operator, right } => {
                write!(f, "({} {})", operator, right)
            }
            Expr::Literal(value) => {
                write!(f, "{}", value)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    Str(String),
    Boolean(bool),
    Nil,
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{}", n),
            LiteralValue::Str(s) => write!(f, "{}", s),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::Str(s)
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::Str(s.to_string())
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}

impl From<scanner::Literal> for LiteralValue {
    fn from(literal: scanner::Literal) -> Self {
        match literal {
            scanner::Literal::Number(n) => LiteralValue::Number(n),
            scanner::Literal::Str(s) => LiteralValue::Str(s),
        }
    }
}
