/// Parser entry point and shared types.
///
/// Contains [`core::parse`], the result type used by every grammar rule and
/// the checks that run before and after the descent (empty input, trailing
/// tokens).
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: `term` for `+`/`-`
/// and `factor` for `*`/`/`.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix negation, number literals and parenthesized groups.
pub mod unary;
