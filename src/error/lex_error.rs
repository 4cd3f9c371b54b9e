#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// Found a character that does not start any token.
    #[error("unrecognized character '{character}' at position {position}")]
    UnrecognizedCharacter {
        /// Byte offset of the character in the source text.
        position:  usize,
        /// The offending character.
        character: char,
    },
}

impl LexError {
    /// Byte offset at which scanning stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { position, .. } => *position,
        }
    }
}
