use lexers::MathToken;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum EvalError {
    LexError(String),
    StackUnderflow,
    TrailingOperands,
    UnexpectedToken(String),
    MismatchedParen,
    DivisionByZero,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::LexError(lexeme) => write!(f, "unrecognized input '{}'", lexeme),
            EvalError::StackUnderflow => write!(f, "insufficient operands"),
            EvalError::TrailingOperands => write!(f, "too many operands"),
            EvalError::UnexpectedToken(token) => write!(f, "unexpected token '{}'", token),
            EvalError::MismatchedParen => write!(f, "mismatched parenthesis"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

// apply a binary operator to its left and right operands
pub(crate) fn apply(op: &str, l: f64, r: f64) -> Result<f64, EvalError> {
    match op {
        "+" => Ok(l + r),
        "-" => Ok(l - r),
        "*" => Ok(l * r),
        "/" | "%" if r == 0.0 => Err(EvalError::DivisionByZero),
        "/" => Ok(l / r),
        "%" => Ok(l % r),
        "**" | "^" => Ok(l.powf(r)),
        _ => Err(EvalError::UnexpectedToken(op.to_string())),
    }
}

// evaluate a postfix token sequence, scanning it left to right
pub fn eval<I: IntoIterator<Item = MathToken>>(tokens: I) -> Result<f64, EvalError> {
    let mut operands = Vec::new();

    for token in tokens {
        match token {
            MathToken::Number(num) => operands.push(num),
            MathToken::BOp(op) => {
                let r = operands.pop().ok_or(EvalError::StackUnderflow)?;
                let l = operands.pop().ok_or(EvalError::StackUnderflow)?;
                operands.push(apply(&op, l, r)?);
            }
            MathToken::OParen => return Err(EvalError::UnexpectedToken("(".to_string())),
            MathToken::CParen => return Err(EvalError::UnexpectedToken(")".to_string())),
            MathToken::Unknown(lexeme) => return Err(EvalError::LexError(lexeme)),
        }
    }
    let result = operands.pop().ok_or(EvalError::StackUnderflow)?;
    if !operands.is_empty() {
        return Err(EvalError::TrailingOperands);
    }
    Ok(result)
}
