use crate::parser::ShuntingParser;
use crate::pneval;
use crate::rpneval::{self, EvalError};
use lexers::MathTokenizer;

/// Which notation an input line is written in.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Notation {
    Postfix,
    Prefix,
    Infix,
}

impl Notation {
    // the first whitespace-delimited word selects the notation; postfix
    // is the default and keeps the whole line
    pub fn split(line: &str) -> (Notation, &str) {
        let trimmed = line.trim_start();
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest),
            None => (trimmed, ""),
        };
        match keyword {
            "pre" => (Notation::Prefix, rest),
            "in" => (Notation::Infix, rest),
            _ => (Notation::Postfix, line),
        }
    }
}

/// Evaluate one expression line in whichever notation it declares.
pub fn evaluate(line: &str) -> Result<f64, EvalError> {
    match Notation::split(line) {
        (Notation::Postfix, expr) => rpneval::eval(MathTokenizer::new(expr.chars())),
        (Notation::Prefix, expr) => pneval::eval(MathTokenizer::new(expr.chars())),
        (Notation::Infix, expr) => {
            let rpn = ShuntingParser::parse(&mut MathTokenizer::new(expr.chars()))?;
            rpneval::eval(rpn.0)
        }
    }
}
