/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*` and `/` to two evaluated operands with checked
/// integer arithmetic.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree walk, number literal conversion and the result type
/// shared by all evaluation routines.
pub mod core;
