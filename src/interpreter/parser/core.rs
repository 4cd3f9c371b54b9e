use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_term},
};

/// Result type used by every grammar rule of the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a single expression tree.
///
/// The cursor over `tokens` lives on this call's stack and is threaded
/// through every grammar rule, so a failed parse leaves nothing behind that
/// could affect the next call.
///
/// Grammar:
/// ```text
///     expression := term
///     term       := factor (("-" | "+") factor)*
///     factor     := unary  (("/" | "*") unary)*
///     unary      := "-" unary | primary
///     primary    := NUMBER | "(" expression ")"
/// ```
///
/// # Errors
/// - [`ParseError::EmptyInput`] if `tokens` is empty.
/// - [`ParseError::UnexpectedEndOfInput`] if a rule runs out of tokens.
/// - [`ParseError::UnexpectedToken`] for a misplaced token, including any
///   token left over after a complete expression.
/// - [`ParseError::UnmatchedParenthesis`] if a `(` is never closed.
///
/// # Examples
/// ```
/// use infix::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let expr = parse(&tokenize("1 + 2 * 3").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
///
/// assert!(parse(&tokenize("(1 + 2").unwrap()).is_err());
/// assert!(parse(&[]).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut cursor = tokens.iter().enumerate().peekable();
    let expr = parse_expression(&mut cursor)?;

    if let Some((position, token)) = cursor.next() {
        return Err(ParseError::UnexpectedToken { token: token.literal().to_string(),
                                                 position,
                                                 expected: "an operator or end of input" });
    }

    trace!("parsed {} tokens into {expr}", tokens.len());
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point of the descent, used both at the top level and
/// inside parentheses. It begins at the lowest-precedence level.
///
/// Grammar: `expression := term`
///
/// # Parameters
/// - `tokens`: Iterator over `(index, token)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    parse_term(tokens)
}
