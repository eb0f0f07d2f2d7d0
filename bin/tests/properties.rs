use parser::{Expr, ParseError};
use pretty_assertions::assert_eq;
use scanner::{Scanner, TokenType};

fn parse(source: &str) -> (Option<Expr>, Vec<ParseError>) {
    let tokens = Scanner::new(source).scan_tokens().unwrap();
    let mut errors: Vec<ParseError> = Vec::new();
    (parser::parse(&tokens, &mut errors), errors)
}

#[test]
fn postfix_has_one_token_per_operand_and_operator() {
    let sources = [
        "1",
        "-1",
        "1 + 2 * 3",
        "(1 + 2) * -3 / (4 - !true)",
        "1 < 2 == !(3 >= 4)",
        "((((nil))))",
        "1 - 2 - 3 - 4 - 5 != -(-6)",
    ];

    for source in sources {
        let tokens = Scanner::new(source).scan_tokens().unwrap();
        let expected = tokens
            .iter()
            .filter(|t| !matches!(t.ty(), TokenType::LeftParen | TokenType::RightParen | TokenType::Eof))
            .count();

        let (expr, errors) = parse(source);
        assert!(errors.is_empty(), "{source}: {errors:?}");
        let rendered = printer::rpn(&expr.unwrap());
        assert_eq!(rendered.split(' ').count(), expected, "{source} rendered as {rendered}");
    }
}

#[test]
fn rendering_twice_gives_the_same_output() {
    let (expr, _) = parse("true ? -1 : (2 + 3) * 4, !nil");
    let expr = expr.unwrap();
    assert_eq!(printer::rpn(&expr), printer::rpn(&expr));
}

#[test]
fn comma_keeps_only_the_right_operand() {
    assert_eq!(parse("1, 2").0, parse("2").0);
    assert_eq!(printer::rpn(&parse("1, 2").0.unwrap()), "2");
}

#[test]
fn recovered_tree_matches_the_operand_alone() {
    let (recovered, errors) = parse("+ 3");
    assert_eq!(recovered, parse("3").0);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].error().is_recoverable());
    assert_eq!(errors[0].token().ty(), TokenType::Plus);
}

#[test]
fn missing_paren_yields_a_single_fatal_error() {
    let (expr, errors) = parse("(1 + 2");
    assert_eq!(expr, None);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].token().ty(), TokenType::Eof);
}
