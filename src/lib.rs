//! # infix
//!
//! infix is a small integer arithmetic expression interpreter written in Rust.
//! It turns text such as `-(1 + 2) * 3` into a number through three pure
//! stages: lexing, recursive-descent parsing and tree evaluation.
//!
//! Supported syntax: non-negative integer literals, `+`, `-`, `*`, `/`, unary
//! `-` and parentheses. Every stage returns a typed error instead of
//! panicking, and no state is shared between calls.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents an expression as a
/// strict tree. The AST is built by the parser and traversed by the evaluator
/// and the tree printer.
pub mod ast;
/// Provides error types for every stage of the pipeline.
///
/// This module defines the errors raised during lexing, parsing and
/// evaluation, and the pipeline-level `Error` that records which stage
/// failed.
///
/// # Responsibilities
/// - Defines one error enum per stage with positions and literals.
/// - Implements `std::error::Error` and `Display` for all of them.
/// - Maps each failure to its [`error::Stage`].
pub mod error;
/// Orchestrates the stages of interpretation.
///
/// This module groups the lexer, the parser, the evaluator and the tree
/// printer. Each stage can be used on its own; [`calculate`] chains them.
pub mod interpreter;

/// Evaluates an arithmetic expression given as text.
///
/// The source is tokenized, parsed and evaluated in turn. The first stage to
/// fail stops the pipeline and its error is returned; later stages never see
/// partial input.
///
/// # Errors
/// Returns an [`Error`] wrapping the lexical, syntactic or evaluation error
/// of the stage that failed.
///
/// # Examples
/// ```
/// use infix::calculate;
///
/// assert_eq!(calculate("1 - 2 - 3").unwrap(), -4);
/// assert_eq!(calculate("(1 + 2) * 3").unwrap(), 9);
///
/// // Division by zero is reported, not a panic.
/// assert!(calculate("5 / 0").is_err());
/// ```
pub fn calculate(source: &str) -> Result<i64, Error> {
    let tokens = tokenize(source)?;
    debug!("lexed {} tokens from {source:?}", tokens.len());

    let expr = parse(&tokens)?;
    debug!("parsed {expr}");

    let value = evaluate(&expr)?;
    debug!("evaluated {expr} = {value}");

    Ok(value)
}
