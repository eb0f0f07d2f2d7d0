use std::iter::once;

use ast::{Expr, LiteralValue, Visitor};
use itertools::Itertools;
use scanner::{Token, TokenType};

/// Postfix renderer: operands first, then the operator, separated by single
/// spaces. Groupings leave no trace in the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn postfix(&mut self, operator: &str, operands: &[&Expr]) -> String {
        operands
            .iter()
            .map(|operand| operand.accept(self))
            .chain(once(operator.to_string()))
            .join(" ")
    }
}

impl Visitor<String> for RpnPrinter {
    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        value.to_string()
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        inner.accept(self)
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        // `-` alone would read as subtraction once the operands are flattened.
        match operator.ty() {
            TokenType::Minus => self.postfix("NEGATE", &[right]),
            _ => self.postfix(operator.lexeme(), &[right]),
        }
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.postfix(operator.lexeme(), &[left, right])
    }

    fn visit_conditional(
        &mut self,
        condition: &Expr,
        question: &Token,
        then_branch: &Expr,
        colon: &Token,
        else_branch: &Expr,
    ) -> String {
        let test = self.postfix(question.lexeme(), &[condition, then_branch]);
        format!("{} {}", test, self.postfix(colon.lexeme(), &[else_branch]))
    }
}
