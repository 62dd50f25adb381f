/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators under the language's type rules, manages variable state
/// through the scope stack, and propagates control flow. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, structs, loops and `switch`.
/// - Reports runtime errors such as unknown names or unsupported operands.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line, column and
///   source line.
/// - Handles numeric and string literals, identifiers, keywords, operators and
///   comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with position
///   info.
/// - Encodes operator precedence and associativity.
pub mod parser;
/// The scope module holds name bindings at run time.
///
/// A stack of frames maps names to variables, functions and struct types.
/// Lookups search from the innermost frame outward.
pub mod scope;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// integers, doubles, booleans, strings, struct instances and the unit
/// value.
///
/// # Responsibilities
/// - Defines the `Value` enum and its runtime type tags.
/// - Implements display and numeric promotion helpers.
pub mod value;
