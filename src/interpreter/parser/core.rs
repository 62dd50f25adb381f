use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            binary::{parse_logical_or, token_to_assign_operator},
            statement::parse_statement,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Statements are parsed one after another until [`Token::EndOfInput`].
/// The first syntactic error aborts parsing; there is no recovery.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: Token iterator, normally the output of
///   [`Tokenizer::tokenize_all`](crate::interpreter::lexer::Tokenizer::tokenize_all).
///
/// # Returns
/// The top-level statements in source order.
///
/// # Example
/// ```
/// use russet::interpreter::{lexer::Tokenizer, parser::core::parse_program};
///
/// let tokens = Tokenizer::new("let x: int = 1; x += 2;").tokenize_all()
///                                                      .unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[1].to_string(), "Expr(Set(+=, x, Int(2)))");
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a SpannedToken>
{
    let mut statements = Vec::new();

    while let Some(spanned) = tokens.peek()
          && spanned.token != Token::EndOfInput
    {
        statements.push(parse_statement(tokens)?);
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_assignment(tokens)
}

/// Parses an assignment or falls through to logical OR.
///
/// The left side is parsed as an ordinary expression first. If an assignment
/// operator follows, that expression must be a bare variable name and the
/// right side is parsed as a whole new expression, which makes chains such
/// as `a = b = 1` right-associative.
///
/// Grammar:
/// ```text
///     assignment := identifier ("=" | "+=" | "-=" | "*=" | "/=" | "%=" | "^=") assignment
///                 | logical_or
/// ```
///
/// # Errors
/// [`ParseError::InvalidAssignmentTarget`] when the left side is anything
/// other than a variable reference.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let target = parse_logical_or(tokens)?;

    let Some(spanned) = tokens.peek().copied() else {
        return Ok(target);
    };
    let Some(op) = token_to_assign_operator(&spanned.token) else {
        return Ok(target);
    };
    tokens.next();

    let Expr::Variable { name, .. } = target else {
        return Err(ParseError::InvalidAssignmentTarget { position: spanned.position.clone() });
    };

    let value = parse_assignment(tokens)?;

    Ok(Expr::Assign { name,
                      op,
                      value: Box::new(value),
                      position: spanned.position.clone() })
}
