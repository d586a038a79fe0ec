use crate::rpneval::EvalError;
use lexers::{MathToken, MathTokenizer};

#[derive(PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
    None,
}

// The '(' sits at the bottom of the table so the precedence loop never
// pops it over an operator; only a matching ')' peels it off.
pub fn precedence(mt: &MathToken) -> (usize, Assoc) {
    match *mt {
        MathToken::OParen => (1, Assoc::None),
        MathToken::BOp(ref o) if o == "+" => (2, Assoc::Left),
        MathToken::BOp(ref o) if o == "-" => (2, Assoc::Left),
        MathToken::BOp(ref o) if o == "*" => (3, Assoc::Left),
        MathToken::BOp(ref o) if o == "/" => (3, Assoc::Left),
        MathToken::BOp(ref o) if o == "%" => (3, Assoc::Left),
        MathToken::BOp(ref o) if o == "**" => (4, Assoc::Right),
        MathToken::BOp(ref o) if o == "^" => (4, Assoc::Right),
        _ => (99, Assoc::None),
    }
}

#[derive(PartialEq, Debug)]
pub struct RPNExpr(pub Vec<MathToken>);

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, EvalError> {
        Self::parse(&mut MathTokenizer::new(expr.chars()))
    }

    pub fn parse(lex: &mut impl Iterator<Item = MathToken>) -> Result<RPNExpr, EvalError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        while let Some(token) = lex.next() {
            match token {
                MathToken::Number(_) => out.push(token),
                MathToken::OParen => stack.push(token),
                MathToken::CParen => {
                    while !stack.is_empty() && stack.last() != Some(&MathToken::OParen) {
                        out.push(stack.pop().unwrap());
                    }
                    // peel off the matching '('
                    if stack.pop().is_none() {
                        return Err(EvalError::MismatchedParen);
                    }
                }
                MathToken::BOp(_) => {
                    let (prec_rhs, assoc_rhs) = precedence(&token);
                    while let Some(top) = stack.last() {
                        let (prec_lhs, _) = precedence(top);
                        if prec_lhs < prec_rhs
                            || (prec_lhs == prec_rhs && assoc_rhs == Assoc::Right)
                        {
                            break;
                        }
                        out.push(stack.pop().unwrap());
                    }
                    stack.push(token);
                }
                MathToken::Unknown(lexeme) => return Err(EvalError::LexError(lexeme)),
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                MathToken::OParen => return Err(EvalError::MismatchedParen),
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}
