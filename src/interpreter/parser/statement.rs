use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Branch, Expr, FunctionDef, Position, Statement, StructDef},
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{
                consume_if, current, expect, parse_comma_separated, parse_declared_type,
                parse_identifier, parse_typed_name, unexpected,
            },
        },
    },
};

/// Parses a single statement.
///
/// Statements are dispatched on their leading keyword. Anything that does
/// not start with a statement keyword is parsed as an expression statement
/// and must be terminated by `;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = current(tokens)?;
    let position = spanned.position.clone();

    let parse_keyword: fn(&mut Peekable<I>, Position) -> ParseResult<Statement> =
        match spanned.token {
            Token::Let => parse_let,
            Token::Del => parse_del,
            Token::If => parse_if,
            Token::For => parse_for,
            Token::While => parse_while,
            Token::Break => parse_break,
            Token::Continue => parse_continue,
            Token::Return => parse_return,
            Token::Exit => parse_exit,
            Token::Func => parse_function,
            Token::Switch => parse_switch,
            Token::Import => parse_import,
            Token::Struct => parse_struct,
            _ => return parse_expression_statement(tokens, position),
        };

    tokens.next();
    parse_keyword(tokens, position)
}

/// `expr;`
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>,
                                     position: Position)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';' after expression")?;

    Ok(Statement::Expression { expr, position })
}

/// `let name: type = expr;`
fn parse_let<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (name, _) = parse_identifier(tokens, "variable name after 'let'")?;
    expect(tokens, &Token::Colon, "':' after variable name in let statement")?;
    let declared_type = parse_declared_type(tokens, "type in let statement")?;
    expect(tokens, &Token::Assign, "'=' after type in let statement")?;
    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';' after expression in let statement")?;

    Ok(Statement::Let { name,
                        declared_type,
                        value,
                        position })
}

/// `del name;`
fn parse_del<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (name, _) = parse_identifier(tokens, "variable name after 'del'")?;
    expect(tokens, &Token::Semicolon, "';' after del statement")?;

    Ok(Statement::Del { name, position })
}

/// `"(" expression ")"` after a keyword.
fn parse_parenthesized<'a, I>(tokens: &mut Peekable<I>,
                              keyword: &str)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::LParen, &format!("'(' after '{keyword}'"))?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, &format!("')' after {keyword} condition"))?;

    Ok(expr)
}

/// Parses an `if` statement with any number of `elif` arms and an optional
/// `else`.
///
/// Grammar:
/// ```text
///     if := "if" "(" expression ")" block
///           ("elif" "(" expression ")" block)*
///           ("else" block)?
/// ```
fn parse_if<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let condition = parse_parenthesized(tokens, "if")?;
    let body = parse_block(tokens, "if condition")?;

    let mut elifs = Vec::new();
    while consume_if(tokens, &Token::Elif) {
        let condition = parse_parenthesized(tokens, "elif")?;
        let body = parse_block(tokens, "elif condition")?;
        elifs.push(Branch { condition, body });
    }

    let else_body = if consume_if(tokens, &Token::Else) {
        parse_block(tokens, "'else'")?
    } else {
        Vec::new()
    };

    Ok(Statement::If { condition,
                       body,
                       elifs,
                       else_body,
                       position })
}

/// Parses a `for` loop over a pre-declared variable.
///
/// Grammar: `for := "for" "(" identifier ";" expression ";" expression ")" block`
fn parse_for<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::LParen, "'(' after 'for'")?;
    let (variable, _) = parse_identifier(tokens, "loop variable in for statement")?;
    expect(tokens, &Token::Semicolon, "';' after loop variable")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';' after for condition")?;
    let increment = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')' after for increment")?;
    let body = parse_block(tokens, "for clauses")?;

    Ok(Statement::For { variable,
                        condition,
                        increment,
                        body,
                        position })
}

/// `while (expr) { stmts }`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let condition = parse_parenthesized(tokens, "while")?;
    let body = parse_block(tokens, "while condition")?;

    Ok(Statement::While { condition,
                          body,
                          position })
}

fn parse_break<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::Semicolon, "';' after 'break'")?;
    Ok(Statement::Break { position })
}

fn parse_continue<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::Semicolon, "';' after 'continue'")?;
    Ok(Statement::Continue { position })
}

/// `return expr;` or `return;`
fn parse_return<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let value = if consume_if(tokens, &Token::Semicolon) {
        None
    } else {
        let value = parse_expression(tokens)?;
        expect(tokens, &Token::Semicolon, "';' after return value")?;
        Some(value)
    };

    Ok(Statement::Return { value, position })
}

/// `exit expr;`
fn parse_exit<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon, "';' after exit code")?;

    Ok(Statement::Exit { value, position })
}

/// Parses a function declaration.
///
/// Grammar:
/// ```text
///     func := "func" identifier "(" (param ("," param)*)? ")" ":" type block
///     param := identifier ":" type
/// ```
fn parse_function<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (name, _) = parse_identifier(tokens, "function name after 'func'")?;
    expect(tokens, &Token::LParen, "'(' after function name")?;
    let params = parse_comma_separated(tokens,
                                       |tokens| parse_typed_name(tokens, "parameter"),
                                       &Token::RParen,
                                       "parameter list")?;
    expect(tokens, &Token::Colon, "':' before return type")?;
    let return_type = parse_declared_type(tokens, "return type")?;
    let body = parse_block(tokens, "function signature")?;

    Ok(Statement::Function(Rc::new(FunctionDef { name,
                                                 params,
                                                 return_type,
                                                 body,
                                                 position })))
}

/// Parses a `switch` statement.
///
/// At least one `case` is required; `default` is optional and must come
/// last.
///
/// Grammar:
/// ```text
///     switch := "switch" "(" expression ")" "{"
///               ("case" "(" expression ")" block)+
///               ("default" block)?
///               "}"
/// ```
fn parse_switch<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let value = parse_parenthesized(tokens, "switch")?;
    expect(tokens, &Token::LBrace, "'{' after switch value")?;

    let mut cases = Vec::new();
    while consume_if(tokens, &Token::Case) {
        let condition = parse_parenthesized(tokens, "case")?;
        let body = parse_block(tokens, "case value")?;
        cases.push(Branch { condition, body });
    }

    if cases.is_empty() {
        return Err(unexpected("'case' in switch body", current(tokens)?));
    }

    let default = if consume_if(tokens, &Token::Default) {
        parse_block(tokens, "'default'")?
    } else {
        Vec::new()
    };

    expect(tokens, &Token::RBrace, "'}' after switch cases")?;

    Ok(Statement::Switch { value,
                           cases,
                           default,
                           position })
}

/// `import "path";`
fn parse_import<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let spanned = current(tokens)?;
    let Token::String(path) = &spanned.token else {
        return Err(unexpected("string path after 'import'", spanned));
    };
    tokens.next();
    expect(tokens, &Token::Semicolon, "';' after import path")?;

    Ok(Statement::Import { path: path.clone(),
                           position })
}

/// Parses a struct type declaration.
///
/// Grammar: `struct := "struct" identifier "{" (identifier ":" type ";")* "}" ";"`
fn parse_struct<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (name, _) = parse_identifier(tokens, "struct name after 'struct'")?;
    expect(tokens, &Token::LBrace, "'{' after struct name")?;

    let mut fields = Vec::new();
    while !consume_if(tokens, &Token::RBrace) {
        fields.push(parse_typed_name(tokens, "field")?);
        expect(tokens, &Token::Semicolon, "';' after struct field")?;
    }

    expect(tokens, &Token::Semicolon, "';' after struct declaration")?;

    Ok(Statement::Struct(Rc::new(StructDef { name,
                                             fields,
                                             position })))
}
