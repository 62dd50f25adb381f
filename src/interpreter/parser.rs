/// Entry points for statement and expression parsing.
///
/// Defines the [`ParseResult`](core::ParseResult) alias shared by the lexer
/// and the parser, the whole-program loop and the assignment level of the
/// expression grammar.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// exponentiation. Every level is left-associative.
pub mod binary;

/// Prefix, postfix and primary expression parsing.
///
/// Handles `-` and `!`, postfix `++`/`--`, literals, grouping, calls,
/// struct literals and field access.
pub mod unary;

/// Keyword-led statement parsing.
pub mod statement;

/// Brace-delimited statement blocks.
pub mod block;

/// Token-level helpers shared by the parser modules.
pub mod utils;
