use russet::{
    error::{Error, ErrorKind},
    parse_program,
};

fn rendered(src: &str) -> Vec<String> {
    parse_program(src).unwrap_or_else(|e| panic!("Parsing failed:\n{e}"))
                      .iter()
                      .map(ToString::to_string)
                      .collect()
}

fn single(src: &str) -> String {
    let mut statements = rendered(src);
    assert_eq!(statements.len(), 1, "expected one statement in {src:?}");
    statements.remove(0)
}

fn syntax_error(src: &str) -> Error {
    match parse_program(src) {
        Ok(program) => panic!("Parsing succeeded with {} statements", program.len()),
        Err(e) => e,
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(single("1 + 2 * 3;"), "Expr(BinOp(+, Int(1), BinOp(*, Int(2), Int(3))))");
}

#[test]
fn operators_are_left_associative() {
    assert_eq!(single("1 - 2 - 3;"), "Expr(BinOp(-, BinOp(-, Int(1), Int(2)), Int(3)))");
    assert_eq!(single("2 ^ 3 ^ 2;"), "Expr(BinOp(^, BinOp(^, Int(2), Int(3)), Int(2)))");
}

#[test]
fn precedence_ladder() {
    assert_eq!(single("a || b && c == d < e + f * g ^ h;"),
               "Expr(BinOp(||, Var(a), BinOp(&&, Var(b), BinOp(==, Var(c), BinOp(<, Var(d), \
                BinOp(+, Var(e), BinOp(*, Var(f), BinOp(^, Var(g), Var(h)))))))))");
}

#[test]
fn unary_and_postfix() {
    assert_eq!(single("-x * !y;"), "Expr(BinOp(*, UnaryOp(-, Var(x)), UnaryOp(!, Var(y))))");
    assert_eq!(single("i++;"), "Expr(Postfix(++, i))");
    assert_eq!(single("- -1;"), "Expr(UnaryOp(-, UnaryOp(-, Int(1))))");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(single("a = b = 1;"), "Expr(Set(=, a, Set(=, b, Int(1))))");
    assert_eq!(single("a ^= 2.5;"), "Expr(Set(^=, a, Float(2.5)))");
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(single("(1 + 2) * 3;"), "Expr(BinOp(*, BinOp(+, Int(1), Int(2)), Int(3)))");
}

#[test]
fn let_and_del() {
    assert_eq!(single("let s: string = \"hi\";"), "Let(s, string, String(hi))");
    assert_eq!(single("let d: double = 1.0;"), "Let(d, float, Float(1.0))");
    assert_eq!(single("del s;"), "Del(s)");
}

#[test]
fn if_elif_else() {
    assert_eq!(single("if (a) { b; } elif (c) { d; } else { e; }"),
               "IEE(Var(a), [Expr(Var(b))], [(Var(c), [Expr(Var(d))])], [Expr(Var(e))])");
    assert_eq!(single("if (a) { }"), "IEE(Var(a), [], [], [])");
}

#[test]
fn loops() {
    assert_eq!(single("for (i; i < 3; i++) { continue; }"),
               "For(i, BinOp(<, Var(i), Int(3)), Postfix(++, i), [Continue()])");
    assert_eq!(single("while (true) { break; }"), "While(Bool(true), [Break()])");
}

#[test]
fn functions_and_calls() {
    assert_eq!(single("func add(a: int, b: float): float { return a + b; }"),
               "Func(add, float, [(a, int), (b, float)], [Return(BinOp(+, Var(a), Var(b)))])");
    assert_eq!(single("func nothing(): void { return; }"), "Func(nothing, void, [], [Return()])");
    assert_eq!(single("f(1, g(), x);"), "Expr(Call(f, [Int(1), Call(g, []), Var(x)]))");
}

#[test]
fn switch_statement() {
    assert_eq!(single("switch (x) { case (1) { a; } case (2) { } default { b; } }"),
               "SCD(Var(x), [(Int(1), [Expr(Var(a))]), (Int(2), [])], [Expr(Var(b))])");
    assert_eq!(single("switch (x) { case (1) { } }"), "SCD(Var(x), [(Int(1), [])], [])");
}

#[test]
fn structs() {
    assert_eq!(single("struct P { x: int; next: P; };"), "Struct(P, [(x, int), (next, P)])");
    assert_eq!(single("let p: P = P { x: 1 };"), "Let(p, P, StructLit(P, [(x, Int(1))]))");
    assert_eq!(single("p.x.y;"), "Expr(Field(Field(Var(p), x), y))");
}

#[test]
fn import_and_exit() {
    assert_eq!(rendered("import \"lib.rss\"; exit 1;"), ["Import(lib.rss)", "Exit(Int(1))"]);
}

#[test]
fn missing_semicolon() {
    let e = syntax_error("let x: int = 1\nprint(x);");

    assert_eq!(e.kind(), Some(ErrorKind::Syntactic));
    assert_eq!(e.message(), "Expected ';' after expression in let statement, found 'print'");
    let position = e.position().expect("has a position");
    assert_eq!((position.line, position.column), (2, 1));
}

#[test]
fn if_needs_parentheses() {
    assert_eq!(syntax_error("if x { }").message(), "Expected '(' after 'if', found 'x'");
}

#[test]
fn unclosed_block() {
    let e = syntax_error("while (true) { x;");

    assert_eq!(e.kind(), Some(ErrorKind::Syntactic));
    assert!(e.message().contains("end of input"), "{}", e.message());
}

#[test]
fn switch_needs_a_case() {
    assert_eq!(syntax_error("switch (x) { default { } }").kind(), Some(ErrorKind::Syntactic));
}

#[test]
fn only_variables_can_be_assigned() {
    assert_eq!(syntax_error("1 = 2;").message(),
               "Left-hand side of an assignment must be a variable name");
    assert_eq!(syntax_error("1++;").kind(), Some(ErrorKind::Syntactic));
}

#[test]
fn missing_expression() {
    assert_eq!(syntax_error("let x: int = ;").message(), "Expected expression, found ';'");
}

#[test]
fn lexical_errors_surface_through_parse() {
    assert_eq!(syntax_error("let x: int = $;").kind(), Some(ErrorKind::Lexical));
}
