use std::fmt;

/// Lexical errors.
///
/// Raised while scanning source text into tokens, before any parsing takes
/// place.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from a token sequence: premature end of input, misplaced tokens, unmatched
/// parentheses and trailing input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking a well-formed
/// syntax tree, such as division by zero or integer overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// The pipeline stage an [`Error`] originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Scanning characters into tokens.
    Lexical,
    /// Building the syntax tree from tokens.
    Syntactic,
    /// Evaluating the syntax tree.
    Semantic,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Syntactic => write!(f, "syntax"),
            Self::Semantic => write!(f, "evaluation"),
        }
    }
}

/// Any error produced by the full pipeline.
///
/// Wraps the error of whichever stage failed first; later stages never run
/// after a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token sequence.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of the syntax tree failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Returns the stage that produced this error.
    ///
    /// ## Example
    /// ```
    /// use infix::{calculate, error::Stage};
    ///
    /// assert_eq!(calculate("2 ^ 3").unwrap_err().stage(), Stage::Lexical);
    /// assert_eq!(calculate("2 +").unwrap_err().stage(), Stage::Syntactic);
    /// assert_eq!(calculate("2 / 0").unwrap_err().stage(), Stage::Semantic);
    /// ```
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Lex(_) => Stage::Lexical,
            Self::Parse(_) => Stage::Syntactic,
            Self::Eval(_) => Stage::Semantic,
        }
    }
}
