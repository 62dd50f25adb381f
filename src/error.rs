use std::{fmt, io, path::PathBuf};

use crate::ast::Position;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unrecognized characters, malformed literals, and missing or
/// unexpected tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, arity mismatches, unsupported operand types, failed imports and
/// arithmetic faults.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The diagnostic category of an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised by the tokenizer.
    Lexical,
    /// Raised by the parser on an expected-token mismatch.
    Syntactic,
    /// Raised by the evaluator for unknown names, arity, imports and faults.
    Semantic,
    /// Raised by the evaluator for unsupported operand or declared types.
    Type,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Lexical => "Lexical",
            Self::Syntactic => "Syntactic",
            Self::Semantic => "Semantic",
            Self::Type => "Type",
        };
        write!(f, "{kind}")
    }
}

/// Writes a diagnostic in the standard four-line layout:
///
/// ```text
/// <message>
/// <Kind> error at line <L>, column <C>
/// <source line>
/// <column - 1 spaces>^ <message>
/// ```
///
/// # Example
/// ```
/// use russet::{
///     ast::Position,
///     error::{ErrorKind, Rendered},
/// };
///
/// let position = Position::new(1, 5, "let 9 = 1;");
/// let text = Rendered { kind:     ErrorKind::Syntactic,
///                       message:  "Expected identifier",
///                       position: &position, }.to_string();
///
/// assert_eq!(text,
///            "Expected identifier\nSyntactic error at line 1, column 5\nlet 9 = \
///             1;\n    ^ Expected identifier");
/// ```
pub struct Rendered<'a> {
    /// The error category.
    pub kind:     ErrorKind,
    /// The human readable message.
    pub message:  &'a str,
    /// Where the error occurred.
    pub position: &'a Position,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { kind,
                   message,
                   position, } = self;
        let padding = " ".repeat(position.column.saturating_sub(1));

        writeln!(f, "{message}")?;
        writeln!(f, "{kind} error at line {}, column {}", position.line, position.column)?;
        writeln!(f, "{}", position.snippet)?;
        write!(f, "{padding}^ {message}")
    }
}

/// Any error the pipeline can surface, whichever stage raised it.
#[derive(Debug)]
pub enum Error {
    /// Raised while tokenizing or parsing.
    Parse(ParseError),
    /// Raised while evaluating.
    Runtime(RuntimeError),
    /// The program file itself could not be read.
    Io {
        /// The file that was being read.
        path:  PathBuf,
        /// The underlying failure.
        error: io::Error,
    },
}

impl Error {
    /// The diagnostic category of a language error, `None` for I/O
    /// failures.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Parse(e) => Some(e.kind()),
            Self::Runtime(e) => Some(e.kind()),
            Self::Io { .. } => None,
        }
    }

    /// Where a language error occurred, `None` for I/O failures.
    #[must_use]
    pub const fn position(&self) -> Option<&Position> {
        match self {
            Self::Parse(e) => Some(e.position()),
            Self::Runtime(e) => Some(e.position()),
            Self::Io { .. } => None,
        }
    }

    /// The one-line message, without position information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Parse(e) => e.message(),
            Self::Runtime(e) => e.message(),
            Self::Io { path, error } => format!("Could not read {}: {error}", path.display()),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io { .. } => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io { error, .. } => Some(error),
        }
    }
}
