mod expr;
pub use expr::{Expr, LiteralValue};

use scanner::Token;

/// A consumer of the expression tree, dispatched through [`Expr::accept`].
///
/// Children are handed out by reference so an implementation decides itself
/// in which order (and whether at all) to recurse into them.
pub trait Visitor<T> {
    fn visit_literal(&mut self, value: &LiteralValue) -> T;
    fn visit_grouping(&mut self, inner: &Expr) -> T;
    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> T;
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> T;
    fn visit_conditional(
        &mut self,
        condition: &Expr,
        question: &Token,
        then_branch: &Expr,
        colon: &Token,
        else_branch: &Expr,
    ) -> T;
}
