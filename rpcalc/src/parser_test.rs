use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::EvalError;
use lexers::MathToken;

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("3+4*2/(1-5)**2**3").unwrap();
    let expect = [
        MathToken::Number(3.0),
        MathToken::Number(4.0),
        MathToken::Number(2.0),
        MathToken::BOp(format!("*")),
        MathToken::Number(1.0),
        MathToken::Number(5.0),
        MathToken::BOp(format!("-")),
        MathToken::Number(2.0),
        MathToken::Number(3.0),
        MathToken::BOp(format!("**")),
        MathToken::BOp(format!("**")),
        MathToken::BOp(format!("/")),
        MathToken::BOp(format!("+")),
    ];
    assert_eq!(rpn, RPNExpr(expect.to_vec()));
}

#[test]
fn test_parse2() {
    // '%' binds like '*' and '/', '^' like '**'
    let rpn = ShuntingParser::parse_str("7 % 4 + 2 ^ -3").unwrap();
    let expect = [
        MathToken::Number(7.0),
        MathToken::Number(4.0),
        MathToken::BOp(format!("%")),
        MathToken::Number(2.0),
        MathToken::Number(-3.0),
        MathToken::BOp(format!("^")),
        MathToken::BOp(format!("+")),
    ];
    assert_eq!(rpn, RPNExpr(expect.to_vec()));
}

#[test]
fn test_associativity() {
    // left-assoc chains fold as they appear
    let rpn = ShuntingParser::parse_str("8-2-3").unwrap();
    let expect = [
        MathToken::Number(8.0),
        MathToken::Number(2.0),
        MathToken::BOp(format!("-")),
        MathToken::Number(3.0),
        MathToken::BOp(format!("-")),
    ];
    assert_eq!(rpn, RPNExpr(expect.to_vec()));

    // right-assoc chains nest instead
    let rpn = ShuntingParser::parse_str("2**3**2").unwrap();
    let expect = [
        MathToken::Number(2.0),
        MathToken::Number(3.0),
        MathToken::Number(2.0),
        MathToken::BOp(format!("**")),
        MathToken::BOp(format!("**")),
    ];
    assert_eq!(rpn, RPNExpr(expect.to_vec()));
}

#[test]
fn test_grouping() {
    let rpn = ShuntingParser::parse_str("(5 + ((1 + 2) * 4)) - 3").unwrap();
    let expect = [
        MathToken::Number(5.0),
        MathToken::Number(1.0),
        MathToken::Number(2.0),
        MathToken::BOp(format!("+")),
        MathToken::Number(4.0),
        MathToken::BOp(format!("*")),
        MathToken::BOp(format!("+")),
        MathToken::Number(3.0),
        MathToken::BOp(format!("-")),
    ];
    assert_eq!(rpn, RPNExpr(expect.to_vec()));
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("(5 + ((1 + 2) * 4) - 3");
    assert_eq!(rpn, Err(EvalError::MismatchedParen));

    let rpn = ShuntingParser::parse_str("5 + (1 + 2)) * 4");
    assert_eq!(rpn, Err(EvalError::MismatchedParen));

    let rpn = ShuntingParser::parse_str("1 @ 2");
    assert_eq!(rpn, Err(EvalError::LexError(format!("@"))));
}
