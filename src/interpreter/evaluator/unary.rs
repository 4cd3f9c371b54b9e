use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Token, TokenKind},
    },
};

/// Evaluates a unary operation on an already evaluated operand.
///
/// The only prefix operator is `-`, which negates its operand. Negating
/// `i64::MIN` overflows.
///
/// # Parameters
/// - `operator`: The operator token of the unary node.
/// - `value`: The evaluated operand.
///
/// # Returns
/// The negated value wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use infix::{
///     error::EvalError,
///     interpreter::{
///         evaluator::unary::eval_unary_op,
///         lexer::{Token, TokenKind},
///     },
/// };
///
/// let minus = Token::new("-", TokenKind::Minus);
/// assert_eq!(eval_unary_op(&minus, 5), Ok(-5));
/// assert_eq!(eval_unary_op(&minus, i64::MIN), Err(EvalError::Overflow));
///
/// let plus = Token::new("+", TokenKind::Plus);
/// assert!(eval_unary_op(&plus, 5).is_err());
/// ```
pub fn eval_unary_op(operator: &Token, value: i64) -> EvalResult<i64> {
    match operator.kind() {
        TokenKind::Minus => value.checked_neg().ok_or(EvalError::Overflow),
        _ => Err(EvalError::InvalidOperator { operator: operator.literal().to_string() }),
    }
}
