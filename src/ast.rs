use std::fmt;

use crate::interpreter::lexer::Token;

/// An abstract syntax tree node representing an arithmetic expression.
///
/// The tree is strict: every node exclusively owns its children, so there are
/// no shared subtrees and no cycles. The parser builds it bottom-up and the
/// evaluator walks it post-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An unsigned integer literal.
    NumberLiteral {
        /// The exact digit run matched by the lexer, e.g. `"42"` or `"007"`.
        /// Conversion to an integer happens during evaluation.
        text: String,
    },
    /// A prefix negation, e.g. `-x`.
    Unary {
        /// The operator token; always of kind `Minus` when built by the
        /// parser.
        operator: Token,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// A binary arithmetic operation, e.g. `a * b`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token; one of `+`, `-`, `*` or `/` when built by the
        /// parser.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl Expr {
    /// Creates a number literal node.
    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self::NumberLiteral { text: text.into() }
    }

    /// Creates a unary node owning `operand`.
    #[must_use]
    pub fn unary(operator: Token, operand: Self) -> Self {
        Self::Unary { operator,
                      operand: Box::new(operand) }
    }

    /// Creates a binary node owning both operands.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }
}

/// Writes the expression fully parenthesized, so grouping decided by
/// precedence and associativity becomes visible.
///
/// ## Example
/// ```
/// use infix::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let expr = parse(&tokenize("1 - 2 - -3 * 4").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "((1 - 2) - ((-3) * 4))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberLiteral { text } => f.write_str(text),
            Self::Unary { operator, operand } => write!(f, "({operator}{operand})"),
            Self::Binary { left,
                           operator,
                           right, } => write!(f, "({left} {operator} {right})"),
        }
    }
}
