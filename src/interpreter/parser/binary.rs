use std::iter::Peekable;

use crate::{
    ast::{AssignOperator, BinaryOperator, Expr},
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_left_associative(tokens, parse_logical_and, &[BinaryOperator::Or])
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_left_associative(tokens, parse_equality, &[BinaryOperator::And])
}

/// Parses equality and inequality.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_left_associative(tokens,
                           parse_comparison,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual])
}

/// Parses ordering comparisons.
///
/// Grammar: `comparison := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_left_associative(tokens,
                           parse_additive,
                           &[BinaryOperator::Less,
                             BinaryOperator::LessEqual,
                             BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual])
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_left_associative(tokens,
                           parse_multiplicative,
                           &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_left_associative(tokens,
                           parse_exponent,
                           &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod])
}

/// Parses exponentiation expressions.
///
/// Like every other binary level this one folds to the left, so
/// `2 ^ 3 ^ 2` parses as `(2 ^ 3) ^ 2`.
///
/// The rule is: `exponent := unary ("^" unary)*`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_left_associative(tokens, parse_unary, &[BinaryOperator::Pow])
}

/// Shared loop for one precedence level.
///
/// Parses one operand with `next_level`, then keeps consuming an operator
/// from `operators` followed by another operand, folding each pair into the
/// left-hand side.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 next_level: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 operators: &[BinaryOperator])
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let mut left = next_level(tokens)?;

    while let Some(spanned) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&spanned.token)
          && operators.contains(&op)
    {
        tokens.next();
        let right = next_level(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position: spanned.position.clone() };
    }

    Ok(left)
}

/// Maps a token to the binary operator it spells, if any.
///
/// # Example
/// ```
/// use russet::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Maps a token to the assignment operator it spells, if any.
#[must_use]
pub const fn token_to_assign_operator(token: &Token) -> Option<AssignOperator> {
    match token {
        Token::Assign => Some(AssignOperator::Assign),
        Token::PlusAssign => Some(AssignOperator::Compound(BinaryOperator::Add)),
        Token::MinusAssign => Some(AssignOperator::Compound(BinaryOperator::Sub)),
        Token::StarAssign => Some(AssignOperator::Compound(BinaryOperator::Mul)),
        Token::SlashAssign => Some(AssignOperator::Compound(BinaryOperator::Div)),
        Token::PercentAssign => Some(AssignOperator::Compound(BinaryOperator::Mod)),
        Token::CaretAssign => Some(AssignOperator::Compound(BinaryOperator::Pow)),
        _ => None,
    }
}
