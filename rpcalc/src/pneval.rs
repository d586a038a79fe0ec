use crate::rpneval::{apply, EvalError};
use lexers::MathToken;

// evaluate a prefix (Polish) token sequence by scanning it right to left;
// the operand popped first belongs on the left of the operator
pub fn eval<I: IntoIterator<Item = MathToken>>(tokens: I) -> Result<f64, EvalError> {
    let tokens: Vec<MathToken> = tokens.into_iter().collect();
    let mut operands = Vec::new();

    for token in tokens.into_iter().rev() {
        match token {
            MathToken::Number(num) => operands.push(num),
            MathToken::BOp(op) => {
                let a = operands.pop().ok_or(EvalError::StackUnderflow)?;
                let b = operands.pop().ok_or(EvalError::StackUnderflow)?;
                operands.push(apply(&op, a, b)?);
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
