use crate::{
    ast::{DeclaredType, Position},
    error::{ErrorKind, Rendered},
    interpreter::value::core::ValueType,
};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a name that no scope frame binds.
    NameNotFound {
        /// The unresolved name.
        name:     String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// The name is bound, but to a different kind of entry, e.g. calling a
    /// variable or reading a function as a value.
    WrongEntryKind {
        /// The name that was looked up.
        name:     String,
        /// The entry kind that was required.
        expected: &'static str,
        /// The entry kind that was found.
        found:    &'static str,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Attempted to declare a name that belongs to a builtin function.
    BuiltinRedefinition {
        /// The reserved name.
        name:     String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A call supplied the wrong number of arguments.
    ArgumentCountMismatch {
        /// The called function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A variadic builtin received fewer arguments than it needs.
    TooFewArguments {
        /// The called function.
        name:     String,
        /// Smallest accepted number of arguments.
        minimum:  usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source position where the error occurred.
        position: Position,
    },
    /// `break` or `continue` escaped every enclosing loop.
    StrayLoopControl {
        /// `break` or `continue`.
        keyword:  &'static str,
        /// The source position where the error occurred.
        position: Position,
    },
    /// `return` executed outside any function body.
    ReturnOutsideFunction {
        /// The source position where the error occurred.
        position: Position,
    },
    /// Integer arithmetic left the 64-bit range.
    Overflow {
        /// The source position where the error occurred.
        position: Position,
    },
    /// Division or modulo by zero.
    DivisionByZero {
        /// The source position where the error occurred.
        position: Position,
    },
    /// An imported file does not exist.
    ImportNotFound {
        /// The resolved path.
        path:     String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// An imported file exists but could not be read.
    ImportUnreadable {
        /// The resolved path.
        path:     String,
        /// The I/O failure.
        reason:   String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A struct literal named a field the struct type does not declare, or a
    /// field access named a missing field.
    UnknownField {
        /// The struct type.
        struct_name: String,
        /// The offending field.
        field:       String,
        /// The source position where the error occurred.
        position:    Position,
    },
    /// A struct literal left a declared field out.
    MissingField {
        /// The struct type.
        struct_name: String,
        /// The omitted field.
        field:       String,
        /// The source position where the error occurred.
        position:    Position,
    },
    /// A struct literal initialised the same field twice.
    DuplicateField {
        /// The struct type.
        struct_name: String,
        /// The repeated field.
        field:       String,
        /// The source position where the error occurred.
        position:    Position,
    },
    /// A builtin received an argument it cannot convert.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details:  String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Writing program output failed.
    Output {
        /// The I/O failure.
        reason:   String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A binary operator does not accept this pair of operand types.
    UnsupportedOperands {
        /// The operator, as written.
        op:       String,
        /// Type of the left operand.
        left:     ValueType,
        /// Type of the right operand.
        right:    ValueType,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A unary or postfix operator does not accept this operand type.
    UnsupportedOperand {
        /// The operator, as written.
        op:       String,
        /// Type of the operand.
        operand:  ValueType,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A condition did not evaluate to a boolean.
    ExpectedBoolean {
        /// The construct the condition belongs to, e.g. `while condition`.
        context:  &'static str,
        /// What was found instead.
        found:    ValueType,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A value does not match its declared type.
    DeclaredTypeMismatch {
        /// The variable, parameter, field or function the type belongs to.
        name:     String,
        /// The annotation.
        expected: DeclaredType,
        /// The runtime type found.
        found:    ValueType,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A field access on something that is not a struct.
    NotAStruct {
        /// The field that was requested.
        field:    String,
        /// What was found instead.
        found:    ValueType,
        /// The source position where the error occurred.
        position: Position,
    },
    /// `exit` was given something other than an integer.
    InvalidExitCode {
        /// What was found instead.
        found:    ValueType,
        /// The source position where the error occurred.
        position: Position,
    },
}

impl RuntimeError {
    /// Type for operand and annotation mismatches, Semantic otherwise.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedOperands { .. }
            | Self::UnsupportedOperand { .. }
            | Self::ExpectedBoolean { .. }
            | Self::DeclaredTypeMismatch { .. }
            | Self::NotAStruct { .. }
            | Self::InvalidExitCode { .. } => ErrorKind::Type,
            _ => ErrorKind::Semantic,
        }
    }

    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::NameNotFound { position, .. }
            | Self::WrongEntryKind { position, .. }
            | Self::BuiltinRedefinition { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::TooFewArguments { position, .. }
            | Self::StrayLoopControl { position, .. }
            | Self::ReturnOutsideFunction { position }
            | Self::Overflow { position }
            | Self::DivisionByZero { position }
            | Self::ImportNotFound { position, .. }
            | Self::ImportUnreadable { position, .. }
            | Self::UnknownField { position, .. }
            | Self::MissingField { position, .. }
            | Self::DuplicateField { position, .. }
            | Self::InvalidArgument { position, .. }
            | Self::Output { position, .. }
            | Self::UnsupportedOperands { position, .. }
            | Self::UnsupportedOperand { position, .. }
            | Self::ExpectedBoolean { position, .. }
            | Self::DeclaredTypeMismatch { position, .. }
            | Self::NotAStruct { position, .. }
            | Self::InvalidExitCode { position, .. } => position,
        }
    }

    /// The one-line message, without position information.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NameNotFound { name, .. } => format!("Name '{name}' not found"),
            Self::WrongEntryKind { name,
                                   expected,
                                   found,
                                   .. } => format!("'{name}' is a {found}, not a {expected}"),
            Self::BuiltinRedefinition { name, .. } => {
                format!("Cannot redefine builtin function '{name}'")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          .. } => {
                format!("Function '{name}' expects {expected} argument(s) but {found} were given")
            },
            Self::TooFewArguments { name,
                                    minimum,
                                    found,
                                    .. } => {
                format!("Function '{name}' expects at least {minimum} argument(s) but {found} were \
                         given")
            },
            Self::StrayLoopControl { keyword, .. } => format!("'{keyword}' outside of a loop"),
            Self::ReturnOutsideFunction { .. } => "'return' outside of a function".to_string(),
            Self::Overflow { .. } => "Integer overflow while trying to compute result".to_string(),
            Self::DivisionByZero { .. } => "Division by zero".to_string(),
            Self::ImportNotFound { path, .. } => format!("File does not exist: {path}"),
            Self::ImportUnreadable { path, reason, .. } => {
                format!("Could not read imported file {path}: {reason}")
            },
            Self::UnknownField { struct_name,
                                 field,
                                 .. } => format!("Struct '{struct_name}' has no field '{field}'"),
            Self::MissingField { struct_name,
                                 field,
                                 .. } => {
                format!("Missing field '{field}' in initializer of struct '{struct_name}'")
            },
            Self::DuplicateField { struct_name,
                                   field,
                                   .. } => {
                format!("Field '{field}' initialized twice in struct '{struct_name}'")
            },
            Self::InvalidArgument { details, .. } => format!("Invalid argument: {details}"),
            Self::Output { reason, .. } => format!("Failed to write output: {reason}"),
            Self::UnsupportedOperands { op, left, right, .. } => {
                format!("Unsupported operand types for '{op}': {left} and {right}")
            },
            Self::UnsupportedOperand { op, operand, .. } => {
                format!("Unsupported operand type for '{op}': {operand}")
            },
            Self::ExpectedBoolean { context, found, .. } => {
                format!("Expected Bool for {context}, found {found}")
            },
            Self::DeclaredTypeMismatch { name,
                                         expected,
                                         found,
                                         .. } => {
                format!("'{name}' is declared as {expected} but the value is {found}")
            },
            Self::NotAStruct { field, found, .. } => {
                format!("Cannot read field '{field}' of a {found} value")
            },
            Self::InvalidExitCode { found, .. } => {
                format!("Exit code must be Int, found {found}")
            },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self.message();
        write!(f,
               "{}",
               Rendered { kind:     self.kind(),
                          message:  &message,
                          position: self.position(), })
    }
}

impl std::error::Error for RuntimeError {}
