use russet::{
    ast::TypeName,
    error::{Error, ErrorKind},
    interpreter::lexer::{Token, Tokenizer},
    tokenize,
};

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Tokenizing failed:\n{e}"))
                 .into_iter()
                 .map(|t| t.token)
                 .collect()
}

fn lex_error(src: &str) -> Error {
    match tokenize(src) {
        Ok(tokens) => panic!("Tokenizing succeeded with {} tokens", tokens.len()),
        Err(e) => e,
    }
}

#[test]
fn let_statement_token_kinds() {
    assert_eq!(kinds("let x: int = 1 + 2;"),
               [Token::Let,
                Token::Identifier("x".to_string()),
                Token::Colon,
                Token::Type(TypeName::Int),
                Token::Assign,
                Token::Integer(1),
                Token::Plus,
                Token::Integer(2),
                Token::Semicolon,
                Token::EndOfInput]);
}

#[test]
fn empty_source_is_just_end_of_input() {
    assert_eq!(kinds(""), [Token::EndOfInput]);
    assert_eq!(kinds("   \n\t // only a comment"), [Token::EndOfInput]);
}

#[test]
fn literals_carry_their_values() {
    assert_eq!(kinds("42 2.5 true false \"hi there\""),
               [Token::Integer(42),
                Token::Double(2.5),
                Token::Bool(true),
                Token::Bool(false),
                Token::String("hi there".to_string()),
                Token::EndOfInput]);
}

#[test]
fn longest_operator_wins() {
    assert_eq!(kinds("== = <= < ++ + += -- -= && || != !"),
               [Token::EqualEqual,
                Token::Assign,
                Token::LessEqual,
                Token::Less,
                Token::PlusPlus,
                Token::Plus,
                Token::PlusAssign,
                Token::MinusMinus,
                Token::MinusAssign,
                Token::AndAnd,
                Token::OrOr,
                Token::BangEqual,
                Token::Bang,
                Token::EndOfInput]);
}

#[test]
fn keywords_need_a_word_boundary() {
    assert_eq!(kinds("lettuce iffy format letx let"),
               [Token::Identifier("lettuce".to_string()),
                Token::Identifier("iffy".to_string()),
                Token::Identifier("format".to_string()),
                Token::Identifier("letx".to_string()),
                Token::Let,
                Token::EndOfInput]);
}

#[test]
fn type_names() {
    assert_eq!(kinds("int float double bool string void Point"),
               [Token::Type(TypeName::Int),
                Token::Type(TypeName::Double),
                Token::Type(TypeName::Double),
                Token::Type(TypeName::Bool),
                Token::Type(TypeName::String),
                Token::Type(TypeName::Void),
                Token::Identifier("Point".to_string()),
                Token::EndOfInput]);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(kinds("1 // two\n/* three\n four */ 5"),
               [Token::Integer(1), Token::Integer(5), Token::EndOfInput]);
}

#[test]
fn positions_are_one_based_lines_and_columns() {
    let tokens = tokenize("let a: int = 1;\n  print(a);").expect("tokenizes");

    let print = &tokens[7];
    assert_eq!(print.token, Token::Identifier("print".to_string()));
    assert_eq!(print.lexeme, "print");
    assert_eq!((print.position.line, print.position.column), (2, 3));
    assert_eq!(&*print.position.snippet, "  print(a);");

    let end = tokens.last().expect("has end of input");
    assert_eq!(end.token, Token::EndOfInput);
    assert_eq!(end.position.line, 2);
}

#[test]
fn columns_count_characters() {
    let tokens = tokenize("\"é\" x").expect("tokenizes");

    assert_eq!(tokens[1].position.column, 5);
}

#[test]
fn peek_does_not_consume() {
    let mut tokenizer = Tokenizer::new("a b");

    assert_eq!(tokenizer.peek_token().expect("peeks").lexeme, "a");
    assert_eq!(tokenizer.peek_token().expect("peeks").lexeme, "a");
    assert_eq!(tokenizer.next_token().expect("lexes").lexeme, "a");
    assert_eq!(tokenizer.next_token().expect("lexes").lexeme, "b");
    assert_eq!(tokenizer.next_token().expect("lexes").token, Token::EndOfInput);
    assert_eq!(tokenizer.next_token().expect("lexes").token, Token::EndOfInput);
}

#[test]
fn unrecognized_character() {
    let e = lex_error("let x: int = 1;\nx = 2 # 3;");

    assert_eq!(e.kind(), Some(ErrorKind::Lexical));
    assert_eq!(e.message(), "Unrecognized character '#'");
    let position = e.position().expect("has a position");
    assert_eq!((position.line, position.column), (2, 7));
}

#[test]
fn malformed_literals() {
    assert_eq!(lex_error("let d: float = 3.;").kind(), Some(ErrorKind::Lexical));
    assert_eq!(lex_error("99999999999999999999").kind(), Some(ErrorKind::Lexical));
}

#[test]
fn unterminated_string_and_comment() {
    assert_eq!(lex_error("print(\"abc);").message(), "Unterminated string literal");
    assert_eq!(lex_error("1 /* never closed").message(), "Unterminated block comment");
}
