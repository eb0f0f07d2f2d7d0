mod rpn;
pub use rpn::RpnPrinter;

use ast::Expr;

/// Renders `expr` in reverse Polish notation.
pub fn rpn(expr: &Expr) -> String {
    RpnPrinter.print(expr)
}
