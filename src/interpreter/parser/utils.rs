use std::iter::Peekable;

use crate::{
    ast::{DeclaredType, Position, TypedName},
    error::ParseError,
    interpreter::lexer::{SpannedToken, Token},
    interpreter::parser::core::ParseResult,
};

/// Describes a token for an "Expected ..., found ..." message.
///
/// Returns the quoted lexeme, or `end of input`.
pub(in crate::interpreter::parser) fn describe(spanned: &SpannedToken) -> String {
    if spanned.token == Token::EndOfInput {
        "end of input".to_string()
    } else {
        format!("'{}'", spanned.lexeme)
    }
}

/// Builds the error for a token that does not fit the grammar.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 spanned: &SpannedToken)
                                                 -> ParseError {
    ParseError::Expected { expected: expected.to_string(),
                           found:    describe(spanned),
                           position: spanned.position.clone(), }
}

/// Returns the next token without consuming it.
///
/// # Errors
/// [`ParseError::UnexpectedEndOfInput`] if the iterator is exhausted. A
/// stream produced by the tokenizer always ends with
/// [`Token::EndOfInput`], so this only fires for hand-built streams.
pub(in crate::interpreter::parser) fn current<'a, I>(tokens: &mut Peekable<I>)
                                                     -> ParseResult<&'a SpannedToken>
    where I: Iterator<Item = &'a SpannedToken>
{
    tokens.peek()
          .copied()
          .ok_or_else(|| ParseError::UnexpectedEndOfInput { position: Position::default() })
}

/// Consumes the next token if it is `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `what`: Description used in the error, e.g. `"'(' after 'if'"`.
///
/// # Returns
/// The consumed token, so callers can use its position.
///
/// # Errors
/// [`ParseError::Expected`] naming `what` and the token actually found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    what: &str)
                                                    -> ParseResult<&'a SpannedToken>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = current(tokens)?;

    if spanned.token == *expected {
        tokens.next();
        Ok(spanned)
    } else {
        Err(unexpected(what, spanned))
    }
}

/// Consumes the next token if it is `token`. Returns whether it did.
pub(in crate::interpreter::parser) fn consume_if<'a, I>(tokens: &mut Peekable<I>,
                                                        token: &Token)
                                                        -> bool
    where I: Iterator<Item = &'a SpannedToken>
{
    if tokens.peek().is_some_and(|spanned| spanned.token == *token) {
        tokens.next();
        true
    } else {
        false
    }
}

/// Parses a plain identifier and returns its name with its position.
///
/// # Errors
/// [`ParseError::Expected`] naming `what` if the next token is not an
/// identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              what: &str)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = current(tokens)?;

    match &spanned.token {
        Token::Identifier(name) => {
            tokens.next();
            Ok((name.clone(), spanned.position.clone()))
        },
        _ => Err(unexpected(what, spanned)),
    }
}

/// Parses a type annotation: a builtin type name or a struct name.
///
/// Grammar: `type := "int" | "float" | "double" | "bool" | "string" | "void" | identifier`
pub(in crate::interpreter::parser) fn parse_declared_type<'a, I>(tokens: &mut Peekable<I>,
                                                                 what: &str)
                                                                 -> ParseResult<DeclaredType>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = current(tokens)?;

    let declared = match &spanned.token {
        Token::Type(name) => DeclaredType::Builtin(*name),
        Token::Identifier(name) => DeclaredType::Struct(name.clone()),
        _ => return Err(unexpected(what, spanned)),
    };
    tokens.next();

    Ok(declared)
}

/// Parses `name: type`, as used by parameter lists and struct fields.
pub(in crate::interpreter::parser) fn parse_typed_name<'a, I>(tokens: &mut Peekable<I>,
                                                              owner: &str)
                                                              -> ParseResult<TypedName>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (name, _) = parse_identifier(tokens, &format!("{owner} name"))?;
    expect(tokens, &Token::Colon, &format!("':' after {owner} name"))?;
    let declared_type = parse_declared_type(tokens, &format!("type of {owner} '{name}'"))?;

    Ok(TypedName { name, declared_type })
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by argument lists, parameter lists and struct
/// literals. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
/// - `what`: Names the list in error messages, e.g. `"argument list"`.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or a token other than
/// `,` or `closing` follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    mut parse_item: impl FnMut(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    what: &str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a SpannedToken>
{
    let mut items = Vec::new();

    if consume_if(tokens, closing) {
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);

        let spanned = current(tokens)?;
        match &spanned.token {
            Token::Comma => {
                tokens.next();
            },
            token if token == closing => {
                tokens.next();
                return Ok(items);
            },
            _ => return Err(unexpected(&format!("',' or end of {what}"), spanned)),
        }
    }
}
