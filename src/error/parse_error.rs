use crate::{
    ast::Position,
    error::{ErrorKind, Rendered},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing and parsing.
pub enum ParseError {
    /// A character that starts no token.
    UnrecognizedCharacter {
        /// The offending text.
        lexeme:   String,
        /// Where it starts.
        position: Position,
    },
    /// A string literal without its closing quote.
    UnterminatedString {
        /// Position of the opening quote.
        position: Position,
    },
    /// A block comment without its closing `*/`.
    UnterminatedComment {
        /// Position of the opening `/*`.
        position: Position,
    },
    /// A numeric literal that does not follow the literal grammar, such as
    /// `3.` with no digit after the dot.
    MalformedNumber {
        /// The offending text.
        lexeme:   String,
        /// Where it starts.
        position: Position,
    },
    /// An integer literal that does not fit in 64 bits.
    LiteralTooLarge {
        /// The offending text.
        lexeme:   String,
        /// Where it starts.
        position: Position,
    },
    /// A required token was missing.
    Expected {
        /// What was expected, e.g. `';' after expression in let statement`.
        expected: String,
        /// A description of what was found instead, e.g. `'}'` or
        /// `end of input`.
        found:    String,
        /// Position of the token that was found.
        position: Position,
    },
    /// The left side of an assignment is not a variable name.
    InvalidAssignmentTarget {
        /// Position of the assignment operator.
        position: Position,
    },
    /// The token stream ended in the middle of a construct.
    UnexpectedEndOfInput {
        /// The last known position.
        position: Position,
    },
}

impl ParseError {
    /// Lexical for tokenizer failures, Syntactic otherwise.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedCharacter { .. }
            | Self::UnterminatedString { .. }
            | Self::UnterminatedComment { .. }
            | Self::MalformedNumber { .. }
            | Self::LiteralTooLarge { .. } => ErrorKind::Lexical,
            Self::Expected { .. }
            | Self::InvalidAssignmentTarget { .. }
            | Self::UnexpectedEndOfInput { .. } => ErrorKind::Syntactic,
        }
    }

    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::UnterminatedComment { position }
            | Self::MalformedNumber { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::Expected { position, .. }
            | Self::InvalidAssignmentTarget { position }
            | Self::UnexpectedEndOfInput { position } => position,
        }
    }

    /// The one-line message, without position information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnrecognizedCharacter { lexeme, .. } => {
                format!("Unrecognized character '{lexeme}'")
            },
            Self::UnterminatedString { .. } => "Unterminated string literal".to_string(),
            Self::UnterminatedComment { .. } => "Unterminated block comment".to_string(),
            Self::MalformedNumber { lexeme, .. } => {
                format!("Malformed numeric literal '{lexeme}': expected a digit after '.'")
            },
            Self::LiteralTooLarge { lexeme, .. } => {
                format!("Integer literal '{lexeme}' does not fit in 64 bits")
            },
            Self::Expected { expected, found, .. } => {
                format!("Expected {expected}, found {found}")
            },
            Self::InvalidAssignmentTarget { .. } => {
                "Left-hand side of an assignment must be a variable name".to_string()
            },
            Self::UnexpectedEndOfInput { .. } => "Unexpected end of input".to_string(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message();
        write!(f,
               "{}",
               Rendered { kind:     self.kind(),
                          message:  &message,
                          position: self.position(), })
    }
}

impl std::error::Error for ParseError {}
