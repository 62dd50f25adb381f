//! # russet
//!
//! russet is a small scripting language with declared types, written in Rust.
//! Source text is tokenized, parsed into an abstract syntax tree and executed
//! directly by a tree-walking interpreter. Every error carries the line,
//! column and source line it came from.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs, io::Write, path::Path};

use tracing::debug;

pub use crate::interpreter::evaluator::core::Outcome;
use crate::{
    ast::Statement,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::{SpannedToken, Tokenizer},
        parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Renders nodes in the compact `Kind(field, ...)` debug form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// positions for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line, column and source line to every error.
/// - Renders errors in one fixed diagnostic layout.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scoping and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, scope, evaluator, and
///   value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

/// Tokenizes source text.
///
/// # Returns
/// Every token in order, ending with a single
/// [`Token::EndOfInput`](interpreter::lexer::Token::EndOfInput).
///
/// # Examples
/// ```
/// use russet::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("x += 3;").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.token).collect();
///
/// assert_eq!(kinds,
///            [Token::Identifier("x".to_string()),
///             Token::PlusAssign,
///             Token::Integer(3),
///             Token::Semicolon,
///             Token::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, Error> {
    Ok(Tokenizer::new(source).tokenize_all()?)
}

/// Tokenizes and parses source text into top-level statements.
///
/// # Examples
/// ```
/// use russet::parse_program;
///
/// let program = parse_program("let x: int = 1 + 2 * 3;").unwrap();
///
/// assert_eq!(program[0].to_string(),
///            "Let(x, int, BinOp(+, Int(1), BinOp(*, Int(2), Int(3))))");
/// ```
pub fn parse_program(source: &str) -> Result<Vec<Statement>, Error> {
    let tokens = tokenize(source)?;
    let program = parser::core::parse_program(&mut tokens.iter().peekable())?;
    Ok(program)
}

/// Runs source text.
///
/// `print` writes to `output`. Imports resolve relative to the working
/// directory.
///
/// # Errors
/// The first lexical, syntactic, semantic or type error. The run stops
/// there.
///
/// # Examples
/// ```
/// use russet::{Outcome, run_source};
///
/// let mut output = Vec::new();
/// let outcome = run_source("let x: int = 5; x += 3; print(x); exit 7;", &mut output).unwrap();
///
/// assert_eq!(outcome, Outcome::Exited(7));
/// assert_eq!(output, b"8\n");
///
/// // Using a variable that was never declared.
/// assert!(run_source("print(y);", &mut Vec::new()).is_err());
/// ```
pub fn run_source(source: &str, output: &mut dyn Write) -> Result<Outcome, Error> {
    let program = parse_program(source)?;
    Ok(Context::new(output).run(&program)?)
}

/// Reads and runs a program file.
///
/// Imports resolve relative to the file's directory.
///
/// # Errors
/// [`Error::Io`] if the file cannot be read, otherwise as for
/// [`run_source`].
pub fn run_file(path: &Path, output: &mut dyn Write) -> Result<Outcome, Error> {
    let source = fs::read_to_string(path).map_err(|error| Error::Io { path: path.to_path_buf(),
                                                                       error })?;
    debug!(path = %path.display(), bytes = source.len(), "read program file");

    let program = parse_program(&source)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    Ok(Context::new(output).with_base_dir(base_dir)
                           .run(&program)?)
}
