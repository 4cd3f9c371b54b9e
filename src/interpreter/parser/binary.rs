use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative operators `+` and `-` by folding each new
/// operand onto the tree built so far, so `1 - 2 - 3` parses as
/// `(1 - 2) - 3`.
///
/// The rule is: `term := factor (("-" | "+") factor)*`
///
/// # Parameters
/// - `tokens`: Iterator over `(index, token)` pairs.
///
/// # Returns
/// An `Expr::Binary` tree, or the single factor if no operator follows.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some((_, token)) = tokens.peek()
           && is_additive_operator(token.kind())
        {
            let operator = (*token).clone();
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::binary(left, operator, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles the left-associative operators `*` and `/`. Since [`parse_term`]
/// calls this for each of its operands, these operators bind tighter than
/// `+` and `-`.
///
/// The rule is: `factor := unary (("/" | "*") unary)*`
///
/// # Parameters
/// - `tokens`: Iterator over `(index, token)` pairs.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut left = parse_unary(tokens)?;
    while let Some((_, token)) = tokens.next_if(|(_, token)| is_multiplicative_operator(token.kind())) {
        let right = parse_unary(tokens)?;
        left = Expr::binary(left, token.clone(), right);
    }
    Ok(left)
}

/// Returns `true` for the operators of the `term` level.
///
/// # Example
/// ```
/// use infix::interpreter::{lexer::TokenKind, parser::binary::is_additive_operator};
///
/// assert!(is_additive_operator(TokenKind::Minus));
/// assert!(!is_additive_operator(TokenKind::Star));
/// ```
#[must_use]
pub const fn is_additive_operator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Plus | TokenKind::Minus)
}

/// Returns `true` for the operators of the `factor` level.
///
/// # Example
/// ```
/// use infix::interpreter::{lexer::TokenKind, parser::binary::is_multiplicative_operator};
///
/// assert!(is_multiplicative_operator(TokenKind::Slash));
/// assert!(!is_multiplicative_operator(TokenKind::Plus));
/// ```
#[must_use]
pub const fn is_multiplicative_operator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Star | TokenKind::Slash)
}
