use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

const EXPECTED_OPERAND: &str = "a number, '(' or '-'";

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-recursive, so `--5` is parsed as `-(-5)` and may repeat without
/// limit. It binds tighter than every binary operator.
///
/// If no `-` is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Iterator over `(index, token)` pairs.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    if let Some((_, operator)) = tokens.next_if(|(_, token)| token.kind() == TokenKind::Minus) {
        let operand = parse_unary(tokens)?;
        Ok(Expr::unary(operator.clone(), operand))
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are number literals and parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    match tokens.next() {
        Some((_, token)) if token.kind() == TokenKind::Number => {
            Ok(Expr::number(token.literal()))
        },
        Some((position, token)) if token.kind() == TokenKind::LParen => {
            parse_grouping(tokens, position)
        },
        Some((position, token)) => {
            Err(ParseError::UnexpectedToken { token: token.literal().to_string(),
                                              position,
                                              expected: EXPECTED_OPERAND })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: EXPECTED_OPERAND }),
    }
}

/// Parses the inside of a parenthesized expression and its closing `)`.
///
/// The grouping yields the inner expression itself; parentheses leave no node
/// in the tree.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Iterator positioned right after the `(`.
/// - `open`: Index of the `(` token, reported if it is never closed.
///
/// # Errors
/// Returns [`ParseError::UnmatchedParenthesis`] if the next token after the
/// inner expression is not `)` or the input ends.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some((_, token)) if token.kind() == TokenKind::RParen => Ok(inner),
        found => {
            let found = found.map(|(_, token)| token.literal().to_string());
            Err(ParseError::UnmatchedParenthesis { position: open,
                                                   found })
        },
    }
}
