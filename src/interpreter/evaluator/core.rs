use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{binary::eval_binary_op, unary::eval_unary_op},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree to an integer.
///
/// The walk is post-order: children are evaluated before the node that owns
/// them, and for binary nodes the left operand is always evaluated before the
/// right one. The first error stops the walk and is returned as-is.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] when a `/` has a zero right operand.
/// - [`EvalError::Overflow`] when a result does not fit in an `i64`.
/// - [`EvalError::InvalidNumber`] when a literal is not a valid `i64`.
/// - [`EvalError::InvalidOperator`] when a node carries a token that is not an
///   operator for its arity.
///
/// # Examples
/// ```
/// use infix::{
///     error::EvalError,
///     interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse},
/// };
///
/// let expr = parse(&tokenize("(1 + 2) * -3").unwrap()).unwrap();
/// assert_eq!(evaluate(&expr), Ok(-9));
///
/// let expr = parse(&tokenize("5 / 0").unwrap()).unwrap();
/// assert_eq!(evaluate(&expr), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::NumberLiteral { text } => eval_number_literal(text),
        Expr::Unary { operator, operand } => {
            let value = evaluate(operand)?;
            eval_unary_op(operator, value)
        },
        Expr::Binary { left,
                       operator,
                       right, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary_op(operator, left, right)
        },
    }
}

/// Converts the digit run of a number literal to an integer.
///
/// Leading zeros are accepted, so `"007"` yields `7`.
///
/// # Errors
/// Returns [`EvalError::InvalidNumber`] if `text` is not a base-10 integer
/// that fits in an `i64`.
///
/// # Example
/// ```
/// use infix::interpreter::evaluator::core::eval_number_literal;
///
/// assert_eq!(eval_number_literal("007"), Ok(7));
/// assert!(eval_number_literal("99999999999999999999").is_err());
/// ```
pub fn eval_number_literal(text: &str) -> EvalResult<i64> {
    text.parse()
        .map_err(|_| EvalError::InvalidNumber { literal: text.to_string() })
}
