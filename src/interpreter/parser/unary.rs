use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, PostfixOperator, UnaryOperator},
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{current, expect, parse_comma_separated, parse_identifier, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | postfix
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a postfix-level expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = current(tokens)?;

    let op = match spanned.token {
        Token::Minus => UnaryOperator::Negate,
        Token::Bang => UnaryOperator::Not,
        _ => return parse_postfix(tokens),
    };
    tokens.next();

    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position: spanned.position.clone() })
}

/// Parses field access chains and postfix `++`/`--`.
///
/// Any number of `.field` suffixes may follow a primary expression. A
/// trailing `++` or `--` is only taken when the expression is a bare
/// variable name; otherwise the token is left for the caller, which will
/// then report it.
///
/// Grammar:
/// ```text
///     postfix := identifier ("++" | "--")
///              | primary ("." identifier)*
/// ```
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let mut expr = parse_primary(tokens)?;

    while let Some(dot) = tokens.peek().copied()
          && dot.token == Token::Dot
    {
        tokens.next();
        let (field, _) = parse_identifier(tokens, "field name after '.'")?;
        expr = Expr::FieldAccess { object: Box::new(expr),
                                   field,
                                   position: dot.position.clone() };
    }

    if let Expr::Variable { name, position } = &expr
       && let Some(spanned) = tokens.peek()
    {
        let op = match spanned.token {
            Token::PlusPlus => Some(PostfixOperator::Increment),
            Token::MinusMinus => Some(PostfixOperator::Decrement),
            _ => None,
        };

        if let Some(op) = op {
            let stepped = Expr::Postfix { name: name.clone(),
                                          op,
                                          position: position.clone() };
            tokens.next();
            return Ok(stepped);
        }
    }

    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, floating-point, boolean and string literals
/// - parenthesized expressions
/// - variable references
/// - function calls
/// - struct literals
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "(" expression ")"
///              | identifier "(" (expression ("," expression)*)? ")"
///              | identifier "{" (identifier ":" expression ("," ...)*)? "}"
///              | identifier
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = current(tokens)?;

    let value = match &spanned.token {
        Token::Integer(n) => LiteralValue::Integer(*n),
        Token::Double(d) => LiteralValue::Double(*d),
        Token::Bool(b) => LiteralValue::Bool(*b),
        Token::String(s) => LiteralValue::String(s.clone()),
        Token::LParen => return parse_grouping(tokens),
        Token::Identifier(_) => return parse_identifier_expression(tokens),
        _ => return Err(unexpected("expression", spanned)),
    };
    tokens.next();

    Ok(Expr::Literal { value,
                       position: spanned.position.clone() })
}

/// Parses `"(" expression ")"`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::LParen, "'('")?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')' after expression")?;

    Ok(expr)
}

/// Parses an identifier together with its one-token lookahead: a call when
/// `(` follows, a struct literal when `{` follows, a variable otherwise.
fn parse_identifier_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (name, position) = parse_identifier(tokens, "identifier")?;

    match tokens.peek().map(|spanned| &spanned.token) {
        Some(Token::LParen) => {
            tokens.next();
            let arguments =
                parse_comma_separated(tokens, parse_expression, &Token::RParen, "argument list")?;
            Ok(Expr::Call { name,
                            arguments,
                            position })
        },
        Some(Token::LBrace) => {
            tokens.next();
            let fields = parse_comma_separated(tokens,
                                               parse_field_initialiser,
                                               &Token::RBrace,
                                               "struct literal")?;
            Ok(Expr::StructLiteral { name,
                                     fields,
                                     position })
        },
        _ => Ok(Expr::Variable { name, position }),
    }
}

/// Parses `identifier ":" expression` inside a struct literal.
fn parse_field_initialiser<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Expr)>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (field, _) = parse_identifier(tokens, "field name in struct literal")?;
    expect(tokens, &Token::Colon, "':' after field name")?;
    let value = parse_expression(tokens)?;

    Ok((field, value))
}
