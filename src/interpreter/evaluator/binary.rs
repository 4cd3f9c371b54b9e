use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Token, TokenKind},
    },
};

/// Evaluates a binary arithmetic operation.
///
/// Both operands are already evaluated, left before right. All four
/// operators use checked `i64` arithmetic; division truncates toward zero.
/// Division by zero is checked before overflow, so `i64::MIN / 0` reports
/// division by zero.
///
/// # Parameters
/// - `operator`: The operator token of the binary node.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
///
/// # Example
/// ```
/// use infix::{
///     error::EvalError,
///     interpreter::{
///         evaluator::binary::eval_binary_op,
///         lexer::{Token, TokenKind},
///     },
/// };
///
/// let slash = Token::new("/", TokenKind::Slash);
/// assert_eq!(eval_binary_op(&slash, -7, 2), Ok(-3));
/// assert_eq!(eval_binary_op(&slash, 1, 0), Err(EvalError::DivisionByZero));
/// ```
pub fn eval_binary_op(operator: &Token, left: i64, right: i64) -> EvalResult<i64> {
    match operator.kind() {
        TokenKind::Plus => left.checked_add(right).ok_or(EvalError::Overflow),
        TokenKind::Minus => left.checked_sub(right).ok_or(EvalError::Overflow),
        TokenKind::Star => left.checked_mul(right).ok_or(EvalError::Overflow),
        TokenKind::Slash => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            left.checked_div(right).ok_or(EvalError::Overflow)
        },
        TokenKind::LParen | TokenKind::RParen | TokenKind::Number => {
            Err(EvalError::InvalidOperator { operator: operator.literal().to_string() })
        },
    }
}
