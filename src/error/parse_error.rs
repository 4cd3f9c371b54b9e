#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while parsing a token sequence.
///
/// Positions are indices into the token sequence, not byte offsets.
pub enum ParseError {
    /// The token sequence was empty.
    #[error("empty input: no tokens to parse")]
    EmptyInput,
    /// Reached the end of input while a rule still expected a token.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput {
        /// Description of what the grammar expected at this point.
        expected: &'static str,
    },
    /// Found a token that does not fit the grammar at its position.
    #[error("unexpected token '{token}' at position {position}: expected {expected}")]
    UnexpectedToken {
        /// The literal of the token encountered.
        token:    String,
        /// Index of the token in the sequence.
        position: usize,
        /// Description of what the grammar expected at this point.
        expected: &'static str,
    },
    /// An opening parenthesis `(` was not closed by a matching `)`.
    #[error("unmatched '(' at position {position}: expected ')' but {}", describe_found(.found))]
    UnmatchedParenthesis {
        /// Index of the unmatched `(` in the sequence.
        position: usize,
        /// The token found instead of `)`, or `None` at end of input.
        found:    Option<String>,
    },
}

fn describe_found(found: &Option<String>) -> String {
    match found {
        Some(token) => format!("found '{token}'"),
        None => "reached end of input".to_string(),
    }
}
