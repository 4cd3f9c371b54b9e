#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum EvalError {
    /// Attempted division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A number literal could not be converted to a 64-bit signed integer.
    #[error("invalid number literal '{literal}'")]
    InvalidNumber {
        /// The literal text as it appeared in the source.
        literal: String,
    },
    /// A node carried an operator the evaluator does not apply.
    #[error("unexpected token '{operator}': not an operator")]
    InvalidOperator {
        /// The literal of the operator token.
        operator: String,
    },
    /// Arithmetic operation overflowed.
    #[error("integer overflow while trying to compute result")]
    Overflow,
}
