use std::fmt;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// The language only knows four arithmetic operators, parentheses and
/// unsigned digit runs. Spaces and tabs are skipped; every other character is
/// rejected by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r"[ \t]+")]
pub enum TokenKind {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A maximal run of ASCII digits, such as `42` or `007`.
    #[regex(r"[0-9]+")]
    Number,
}

impl TokenKind {
    /// Returns `true` for the four binary arithmetic operators.
    ///
    /// ## Example
    /// ```
    /// use infix::interpreter::lexer::TokenKind;
    ///
    /// assert!(TokenKind::Slash.is_arithmetic_operator());
    /// assert!(!TokenKind::LParen.is_arithmetic_operator());
    /// ```
    #[must_use]
    pub const fn is_arithmetic_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Number => write!(f, "number"),
        }
    }
}

/// A token produced by the lexer.
///
/// Pairs the exact source text of the token with its [`TokenKind`]. Tokens
/// are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    literal: String,
    kind:    TokenKind,
}

impl Token {
    /// Creates a token from its source text and kind.
    #[must_use]
    pub fn new(literal: impl Into<String>, kind: TokenKind) -> Self {
        Self { literal: literal.into(),
               kind }
    }

    /// The exact source substring of this token, e.g. `"123"` or `"+"`.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// Scans `input` into a sequence of tokens.
///
/// The scan is a single left-to-right pass. Operators and parentheses are
/// single characters, numbers are maximal digit runs kept verbatim (leading
/// zeros included), and spaces and tabs are skipped. Empty or blank input
/// yields an empty vector.
///
/// # Errors
/// Returns [`LexError::UnrecognizedCharacter`] for the first character that
/// is not a digit, operator, parenthesis, space or tab. No partial token list
/// is returned.
///
/// # Examples
/// ```
/// use infix::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("12 * (3 - 007)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Number,
///                 TokenKind::Star,
///                 TokenKind::LParen,
///                 TokenKind::Number,
///                 TokenKind::Minus,
///                 TokenKind::Number,
///                 TokenKind::RParen]);
/// assert_eq!(tokens[5].literal(), "007");
///
/// assert!(tokenize("3.14").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        if let Ok(kind) = kind {
            trace!("token {kind:?} {:?} at {}", lexer.slice(), span.start);
            tokens.push(Token::new(lexer.slice(), kind));
        } else {
            // The offending character is the first one of the error span.
            let character = input[span.start..].chars().next().unwrap_or_default();
            return Err(LexError::UnrecognizedCharacter { position: span.start,
                                                         character });
        }
    }

    Ok(tokens)
}
