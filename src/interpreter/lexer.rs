use std::sync::Arc;

use logos::{FilterResult, Logos};
use tracing::trace;

use crate::{
    ast::{Position, TypeName},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Logos always prefers the longest match, so `lettuce` is an identifier
/// rather than `let` followed by `tuce`, and `==` is never split into two
/// `=`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_double)]
    #[regex(r"[0-9]+\.", malformed_number)]
    Double(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// String literal tokens, such as `"hello"`. The payload excludes the
    /// quotes; no escape sequences are processed.
    #[regex(r#""[^"]*""#, |lex| {
        let quoted = lex.slice();
        quoted[1..quoted.len() - 1].to_string()
    }, allow_greedy = true)]
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    String(String),
    /// Builtin type names used in annotations.
    #[token("int", |_| TypeName::Int)]
    #[token("float", |_| TypeName::Double)]
    #[token("double", |_| TypeName::Double)]
    #[token("bool", |_| TypeName::Bool)]
    #[token("string", |_| TypeName::String)]
    #[token("void", |_| TypeName::Void)]
    Type(TypeName),
    /// `import`
    #[token("import")]
    Import,
    /// `let`
    #[token("let")]
    Let,
    /// `del`
    #[token("del")]
    Del,
    /// `if`
    #[token("if")]
    If,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// `for`
    #[token("for")]
    For,
    /// `while`
    #[token("while")]
    While,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `return`
    #[token("return")]
    Return,
    /// `exit`
    #[token("exit")]
    Exit,
    /// `func`
    #[token("func")]
    Func,
    /// `switch`
    #[token("switch")]
    Switch,
    /// `case`
    #[token("case")]
    Case,
    /// `default`
    #[token("default")]
    Default,
    /// `struct`
    #[token("struct")]
    Struct,
    /// Identifier tokens; variable, function or struct names such as `x`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `/* Block comments. */`
    #[token("/*", skip_block_comment)]
    BlockComment,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `%=`
    #[token("%=")]
    PercentAssign,
    /// `^=`
    #[token("^=")]
    CaretAssign,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `!`
    #[token("!")]
    Bang,
    /// `=`
    #[token("=")]
    Assign,
    /// `.`
    #[token(".")]
    Dot,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Spaces, tabs, feeds and newlines.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// Produced by [`Tokenizer`] once the source is exhausted; never matched
    /// by the logos automaton.
    EndOfInput,
}

/// Why logos could not produce a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No pattern starts with the current character.
    #[default]
    UnrecognizedCharacter,
    /// A `"` with no closing `"`.
    UnterminatedString,
    /// A `/*` with no closing `*/`.
    UnterminatedComment,
    /// Digits followed by `.` and no further digit.
    MalformedNumber,
    /// An integer literal outside the `i64` range.
    LiteralTooLarge,
}

impl LexErrorKind {
    /// Attaches the offending text and its position.
    fn into_error(self, lexeme: &str, position: Position) -> ParseError {
        let lexeme = lexeme.to_string();
        match self {
            Self::UnrecognizedCharacter => ParseError::UnrecognizedCharacter { lexeme, position },
            Self::UnterminatedString => ParseError::UnterminatedString { position },
            Self::UnterminatedComment => ParseError::UnterminatedComment { position },
            Self::MalformedNumber => ParseError::MalformedNumber { lexeme, position },
            Self::LiteralTooLarge => ParseError::LiteralTooLarge { lexeme, position },
        }
    }
}

/// Parses a floating-point literal from the current token slice.
fn parse_double(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::MalformedNumber)
}

/// Rejects `3.` style literals.
const fn malformed_number(_: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    Err(LexErrorKind::MalformedNumber)
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::LiteralTooLarge)
}

/// Rejects a string literal that runs to the end of the source.
const fn unterminated_string(_: &logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

/// Consumes everything up to and including the next `*/`.
fn skip_block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexErrorKind> {
    if let Some(end) = lex.remainder().find("*/") {
        lex.bump(end + 2);
        FilterResult::Skip
    } else {
        lex.bump(lex.remainder().len());
        FilterResult::Error(LexErrorKind::UnterminatedComment)
    }
}

/// A token together with the text it was lexed from and where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The classified token.
    pub token:    Token,
    /// The exact source text of the token.
    pub lexeme:   String,
    /// Line, column and source line of the first character.
    pub position: Position,
}

/// Maps byte offsets to line/column positions.
#[derive(Debug, Clone)]
struct LineIndex {
    /// Byte offset at which each line starts.
    starts:   Vec<usize>,
    /// Text of each line, shared by every position on that line.
    snippets: Vec<Arc<str>>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut starts = Vec::new();
        let mut snippets = Vec::new();
        let mut offset = 0;

        for line in source.split('\n') {
            starts.push(offset);
            snippets.push(Arc::from(line.strip_suffix('\r').unwrap_or(line)));
            offset += line.len() + 1;
        }

        Self { starts, snippets }
    }

    fn locate(&self, source: &str, offset: usize) -> Position {
        let index = self.starts.partition_point(|&start| start <= offset) - 1;
        let start = self.starts[index];
        let column = source.get(start..offset)
                           .map_or(1, |prefix| prefix.chars().count() + 1);

        Position { line: index + 1,
                   column,
                   snippet: Arc::clone(&self.snippets[index]) }
    }
}

/// Produces [`SpannedToken`]s lazily from source text.
///
/// `next_token` consumes one token; `peek_token` looks at the next token
/// without consuming it. Once the source is exhausted every further call
/// yields [`Token::EndOfInput`].
///
/// # Example
/// ```
/// use russet::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("let x");
///
/// assert_eq!(tokenizer.peek_token().unwrap().token, Token::Let);
/// assert_eq!(tokenizer.next_token().unwrap().token, Token::Let);
/// assert_eq!(tokenizer.next_token().unwrap().token,
///            Token::Identifier("x".to_string()));
/// assert_eq!(tokenizer.next_token().unwrap().token, Token::EndOfInput);
/// ```
#[derive(Clone)]
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, Token>,
    lines: LineIndex,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(source),
               lines: LineIndex::new(source), }
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// Returns a lexical [`ParseError`] when the source at the current
    /// position does not form a valid token.
    pub fn next_token(&mut self) -> ParseResult<SpannedToken> {
        let token = Self::advance(&mut self.lexer, &self.lines)?;
        trace!(token = ?token.token,
               line = token.position.line,
               column = token.position.column,
               "lexed token");
        Ok(token)
    }

    /// Returns the next token without consuming it.
    ///
    /// The lookahead runs on a copy of the lexer, so the tokenizer's own
    /// position never moves.
    ///
    /// # Errors
    /// Returns the same lexical error the next call to
    /// [`next_token`](Self::next_token) would.
    pub fn peek_token(&self) -> ParseResult<SpannedToken> {
        let mut lookahead = self.lexer.clone();
        Self::advance(&mut lookahead, &self.lines)
    }

    /// Consumes the whole source.
    ///
    /// The returned sequence always ends with a single
    /// [`Token::EndOfInput`].
    ///
    /// # Errors
    /// Returns the first lexical error encountered.
    pub fn tokenize_all(mut self) -> ParseResult<Vec<SpannedToken>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let finished = token.token == Token::EndOfInput;
            tokens.push(token);

            if finished {
                return Ok(tokens);
            }
        }
    }

    fn advance(lexer: &mut logos::Lexer<'src, Token>,
               lines: &LineIndex)
               -> ParseResult<SpannedToken> {
        let source = lexer.source();

        match lexer.next() {
            None => Ok(SpannedToken { token:    Token::EndOfInput,
                                      lexeme:   String::new(),
                                      position: lines.locate(source, source.len()), }),
            Some(Ok(token)) => {
                Ok(SpannedToken { token,
                                  lexeme: lexer.slice().to_string(),
                                  position: lines.locate(source, lexer.span().start) })
            },
            Some(Err(kind)) => {
                let position = lines.locate(source, lexer.span().start);
                Err(kind.into_error(lexer.slice(), position))
            },
        }
    }
}
