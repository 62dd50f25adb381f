use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{current, expect, unexpected},
        },
    },
};

/// Parses a statement block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `owner`: Names the construct the block belongs to, e.g. `"if
///   condition"`; used in the messages for a missing `{` or `}`.
///
/// # Returns
/// The statements of the block in source order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, owner: &str) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::LBrace, &format!("'{{' after {owner}"))?;

    let mut statements = Vec::new();

    loop {
        let spanned = current(tokens)?;
        match spanned.token {
            Token::RBrace => {
                tokens.next();
                return Ok(statements);
            },
            Token::EndOfInput => {
                return Err(unexpected(&format!("'}}' to close block after {owner}"), spanned));
            },
            _ => statements.push(parse_statement(tokens)?),
        }
    }
}
