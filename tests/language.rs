use russet::{
    Outcome,
    error::{Error, ErrorKind},
    parse_program, run_source, tokenize,
};

fn output_of(src: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run_source(src, &mut output) {
        panic!("Script failed:\n{e}");
    }
    String::from_utf8(output).expect("print writes UTF-8")
}

fn assert_success(src: &str) {
    if let Err(e) = run_source(src, &mut Vec::new()) {
        panic!("Script failed:\n{e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match run_source(src, &mut Vec::new()) {
        Ok(outcome) => panic!("Script succeeded with {outcome:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(output_of("let x: int = 1 + 2; print(x);"), "3\n");
    assert_eq!(output_of("let x: int = 7 * 9; print(x);"), "63\n");
    assert_eq!(output_of("let x: int = 8 - 5; print(x);"), "3\n");
    assert_eq!(output_of("let x: int = 10 / 4; print(x);"), "2\n");
    assert_eq!(output_of("let x: int = 10 % 4; print(x);"), "2\n");
}

#[test]
fn compound_assignment_updates_the_variable() {
    assert_eq!(output_of("let x: int = 5; x += 3; print(x);"), "8\n");
    assert_eq!(output_of("let x: int = 5; x -= 3; x *= 4; print(x);"), "8\n");
    assert_eq!(output_of("let x: int = 17; x %= 5; print(x);"), "2\n");
    assert_eq!(output_of("let x: float = 9; x /= 2; print(x);"), "4.5\n");
}

#[test]
fn assignment_yields_the_assigned_value() {
    assert_eq!(output_of("let x: int = 0; let y: int = 0; y = x = 4; print(x + y);"), "8\n");
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(output_of("print(1 + 2 * 3);"), "7\n");
    assert_eq!(output_of("print((1 + 2) * 3);"), "9\n");
    assert_eq!(output_of("print(10 - 4 - 3);"), "3\n");
    assert_eq!(output_of("print(-2 * 3);"), "-6\n");
    assert_eq!(output_of("print(2 * 3 ^ 2);"), "18.0\n");
}

#[test]
fn double_result_iff_any_operand_is_double() {
    assert_eq!(output_of("print(1 + 2);"), "3\n");
    assert_eq!(output_of("print(1 + 2.0);"), "3.0\n");
    assert_eq!(output_of("print(1.5 * 2);"), "3.0\n");
    assert_eq!(output_of("print(7 / 2.0);"), "3.5\n");
    assert_eq!(output_of("print(7.5 % 2);"), "1.0\n");
    assert_eq!(output_of("print(2 ^ 3);"), "8.0\n");
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(output_of("print(1 < 2);"), "true\n");
    assert_eq!(output_of("print(2 <= 1);"), "false\n");
    assert_eq!(output_of("print(1 == 1.0);"), "true\n");
    assert_eq!(output_of("print(\"a\" != \"b\");"), "true\n");
    assert_eq!(output_of("print(true && !false);"), "true\n");
    assert_eq!(output_of("print(false || 1 > 2);"), "false\n");
}

#[test]
fn logical_operators_evaluate_both_operands() {
    let src = "let n: int = 0;
               func bump(): bool { n += 1; return true; }
               let b: bool = false && bump();
               print(n);";

    assert_eq!(output_of(src), "1\n");
}

#[test]
fn postfix_yields_the_old_value() {
    assert_eq!(output_of("let i: int = 1; print(i++); print(i);"), "1\n2\n");
    assert_eq!(output_of("let d: float = 1.5; d--; print(d);"), "0.5\n");
}

#[test]
fn inner_declarations_do_not_leak() {
    let src = "let x: int = 1;
               if (true) { let x: int = 2; print(x); }
               print(x);";

    assert_eq!(output_of(src), "2\n1\n");
}

#[test]
fn assignment_reaches_the_outer_binding() {
    let src = "let x: int = 1;
               if (true) { x = 5; }
               print(x);";

    assert_eq!(output_of(src), "5\n");
}

#[test]
fn block_locals_are_gone_after_the_block() {
    let e = assert_failure("if (true) { let y: int = 1; } print(y);");

    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
    assert_eq!(e.message(), "Name 'y' not found");
}

#[test]
fn if_elif_else_picks_the_first_true_branch() {
    let src = "let x: int = 5;
               if (x < 3) { print(\"small\"); }
               elif (x < 10) { print(\"medium\"); }
               elif (x < 100) { print(\"large\"); }
               else { print(\"huge\"); }";

    assert_eq!(output_of(src), "medium\n");
    assert_eq!(output_of("if (false) { print(1); } else { print(2); }"), "2\n");
}

#[test]
fn for_loop_runs_three_times_and_leaves_the_counter() {
    let src = "let i: int = 0;
               let runs: int = 0;
               for (i; i < 3; i = i + 1) { runs += 1; }
               print(runs);
               print(i);";

    assert_eq!(output_of(src), "3\n3\n");
}

#[test]
fn for_loop_needs_a_declared_variable() {
    let e = assert_failure("for (k; k < 3; k++) { }");

    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
}

#[test]
fn continue_still_runs_the_increment() {
    let src = "let i: int = 0;
               for (i; i < 5; i++) {
                   if (i % 2 == 0) { continue; }
                   print(i);
               }";

    assert_eq!(output_of(src), "1\n3\n");
}

#[test]
fn break_leaves_the_loop_immediately() {
    let src = "let n: int = 0;
               while (true) {
                   n += 1;
                   if (n == 3) { break; }
                   print(n);
               }
               print(n);";

    assert_eq!(output_of(src), "1\n2\n3\n");
}

#[test]
fn break_only_leaves_the_innermost_loop() {
    let src = "let i: int = 0;
               let total: int = 0;
               for (i; i < 3; i++) {
                   while (true) { total += 1; break; }
               }
               print(total);";

    assert_eq!(output_of(src), "3\n");
}

#[test]
fn stray_loop_control_is_an_error() {
    assert_eq!(assert_failure("break;").kind(), Some(ErrorKind::Semantic));
    assert_eq!(assert_failure("continue;").kind(), Some(ErrorKind::Semantic));
    assert_eq!(assert_failure("return 1;").kind(), Some(ErrorKind::Semantic));

    let e = assert_failure("func f(): void { break; } while (true) { f(); }");
    assert_eq!(e.message(), "'break' outside of a loop");
}

#[test]
fn functions_return_values() {
    let src = "func add(a: int, b: int): int { return a + b; }
               print(add(2, 3));";

    assert_eq!(output_of(src), "5\n");
}

#[test]
fn recursion() {
    let src = "func fact(n: int): int {
                   if (n <= 1) { return 1; }
                   return n * fact(n - 1);
               }
               print(fact(10));";

    assert_eq!(output_of(src), "3628800\n");
}

#[test]
fn return_inside_a_loop_leaves_the_function() {
    let src = "func first_over(limit: int): int {
                   let i: int = 0;
                   while (true) {
                       if (i * i > limit) { return i; }
                       i++;
                   }
                   return -1;
               }
               print(first_over(50));";

    assert_eq!(output_of(src), "8\n");
}

#[test]
fn void_functions_yield_unit() {
    let src = "func greet(name: string): void { print(name); return; }
               print(greet(\"hi\"));";

    assert_eq!(output_of(src), "hi\n()\n");
}

#[test]
fn parameters_do_not_leak_out_of_calls() {
    let e = assert_failure("func f(p: int): int { return p; } f(1); print(p);");

    assert_eq!(e.message(), "Name 'p' not found");
}

#[test]
fn functions_cannot_read_caller_locals() {
    let src = "func f(): int { return y; }
               func g(): int { let y: int = 5; return f(); }
               print(g());";
    let e = assert_failure(src);

    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
    assert_eq!(e.message(), "Name 'y' not found");
}

#[test]
fn functions_cannot_assign_caller_locals() {
    let src = "func f(): void { y = 9; }
               func g(): void { let y: int = 1; f(); print(y); }
               g();";

    assert_eq!(assert_failure(src).message(), "Name 'y' not found");
}

#[test]
fn functions_cannot_see_block_locals_of_the_caller() {
    let src = "func f(): int { return inner; }
               if (true) { let inner: int = 1; print(f()); }";

    assert_eq!(assert_failure(src).message(), "Name 'inner' not found");
}

#[test]
fn functions_see_and_update_top_level_bindings() {
    let src = "let counter: int = 0;
               struct P { v: int; };
               func bump(): P { counter += 1; return P { v: counter }; }
               func twice(): int { bump(); return bump().v; }
               print(twice());
               print(counter);";

    assert_eq!(output_of(src), "2\n2\n");
}

#[test]
fn wrong_argument_count_names_both_counts() {
    let e = assert_failure("func f(a: int): int { return a; } f(1, 2);");

    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
    assert_eq!(e.message(), "Function 'f' expects 1 argument(s) but 2 were given");
}

#[test]
fn builtin_arity_is_checked() {
    let e = assert_failure("print(1, 2);");

    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
}

#[test]
fn builtins_cannot_be_redefined() {
    assert_failure("func print(x: int): void { }");
    assert_failure("let len: int = 1;");
}

#[test]
fn unknown_names_are_semantic_errors() {
    let e = assert_failure("print(missing);");

    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
    assert_eq!(e.message(), "Name 'missing' not found");
    assert_eq!(assert_failure("nothing(1);").kind(), Some(ErrorKind::Semantic));
}

#[test]
fn unsupported_operands_are_type_errors() {
    let e = assert_failure("let x: int = 1 + true;");

    assert_eq!(e.kind(), Some(ErrorKind::Type));
    assert_eq!(e.message(), "Unsupported operand types for '+': Int and Bool");

    assert_eq!(assert_failure("print(-true);").kind(), Some(ErrorKind::Type));
    assert_eq!(assert_failure("print(!1);").kind(), Some(ErrorKind::Type));
    assert_eq!(assert_failure("print(\"a\" < \"b\");").kind(), Some(ErrorKind::Type));
    assert_eq!(assert_failure("if (1) { }").kind(), Some(ErrorKind::Type));
}

#[test]
fn arithmetic_faults() {
    assert_eq!(assert_failure("print(1 / 0);").message(), "Division by zero");
    assert_eq!(assert_failure("print(1 % 0);").message(), "Division by zero");
    assert_eq!(assert_failure("print(1.0 / 0.0);").message(), "Division by zero");
    assert_eq!(assert_failure("print(9223372036854775807 + 1);").kind(),
               Some(ErrorKind::Semantic));
}

#[test]
fn declared_types_are_enforced() {
    assert_eq!(assert_failure("let x: int = 1.5;").kind(), Some(ErrorKind::Type));
    assert_eq!(assert_failure("let s: string = 1;").kind(), Some(ErrorKind::Type));
    assert_eq!(assert_failure("func f(): int { return true; } f();").kind(),
               Some(ErrorKind::Type));
    assert_eq!(assert_failure("func f(a: bool): int { return 1; } f(2);").kind(),
               Some(ErrorKind::Type));

    assert_eq!(output_of("let d: double = 2; print(d);"), "2.0\n");
}

#[test]
fn del_removes_a_variable() {
    let e = assert_failure("let x: int = 1; del x; print(x);");
    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
    assert_eq!(e.message(), "Name 'x' not found");

    let e = assert_failure("del never;");
    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
    assert_eq!(e.message(), "Name 'never' not found");
}

#[test]
fn switch_runs_the_first_matching_case() {
    let src = "let x: int = 2;
               switch (x) {
                   case (1) { print(\"one\"); }
                   case (2) { print(\"two\"); }
                   case (2) { print(\"again\"); }
                   default { print(\"other\"); }
               }";

    assert_eq!(output_of(src), "two\n");
}

#[test]
fn switch_falls_back_to_default() {
    let src = "switch (\"z\") {
                   case (\"a\") { print(1); }
                   default { print(0); }
               }";

    assert_eq!(output_of(src), "0\n");
    assert_eq!(output_of("switch (3) { case (1) { print(1); } } print(9);"), "9\n");
}

#[test]
fn break_in_a_case_leaves_the_enclosing_loop() {
    let src = "let i: int = 0;
               while (true) {
                   i++;
                   switch (i) { case (3) { break; } }
               }
               print(i);";

    assert_eq!(output_of(src), "3\n");
}

#[test]
fn structs_are_built_and_read() {
    let src = "struct Point { x: int; y: float; };
               let p: Point = Point { y: 2, x: 1 };
               print(p.x);
               print(p.y);
               print(p);";

    assert_eq!(output_of(src), "1\n2.0\nPoint { x: 1, y: 2.0 }\n");
}

#[test]
fn struct_literals_are_checked() {
    let decl = "struct P { x: int; };";

    assert_failure(&format!("{decl} let p: P = P {{ }};"));
    assert_failure(&format!("{decl} let p: P = P {{ x: 1, x: 2 }};"));
    assert_failure(&format!("{decl} let p: P = P {{ x: 1, z: 2 }};"));
    assert_eq!(assert_failure(&format!("{decl} let p: P = P {{ x: true }};")).kind(),
               Some(ErrorKind::Type));
    assert_eq!(assert_failure(&format!("{decl} let p: P = P {{ x: 1 }}; print(p.z);")).kind(),
               Some(ErrorKind::Semantic));
    assert_eq!(assert_failure("let n: int = 1; print(n.x);").kind(), Some(ErrorKind::Type));
}

#[test]
fn struct_types_are_nominal() {
    let src = "struct A { v: int; };
               struct B { v: int; };
               let b: B = A { v: 1 };";

    assert_eq!(assert_failure(src).kind(), Some(ErrorKind::Type));
}

#[test]
fn builtin_conversions() {
    assert_eq!(output_of("print(len(\"hello\"));"), "5\n");
    assert_eq!(output_of("print(to_int(3.9));"), "3\n");
    assert_eq!(output_of("print(to_int(\" 42 \"));"), "42\n");
    assert_eq!(output_of("print(to_float(2));"), "2.0\n");
    assert_eq!(output_of("print(to_float(\"0.25\"));"), "0.25\n");
    assert_failure("print(to_int(\"abc\"));");
    assert_failure("print(len(1));");
}

#[test]
fn math_builtins() {
    assert_eq!(output_of("print(sqrt(4.0));"), "2.0\n");
    assert_eq!(output_of("print(sqrt(9));"), "3.0\n");
    assert_eq!(output_of("print(abs(-2));"), "2\n");
    assert_eq!(output_of("print(abs(-2.5));"), "2.5\n");
    assert_eq!(output_of("print(pow(2, 3));"), "8.0\n");
    assert_eq!(output_of("print(sin(0));"), "0.0\n");
    assert_eq!(output_of("print(cos(0));"), "1.0\n");
    assert_eq!(output_of("print(tan(0.0));"), "0.0\n");
}

#[test]
fn min_and_max_keep_integers_unless_a_double_appears() {
    assert_eq!(output_of("print(max(1, 2));"), "2\n");
    assert_eq!(output_of("print(min(1, 2));"), "1\n");
    assert_eq!(output_of("print(max(4, 9, -3, 7));"), "9\n");
    assert_eq!(output_of("print(min(5));"), "5\n");
    assert_eq!(output_of("print(max(1, 2.5));"), "2.5\n");
    assert_eq!(output_of("print(min(1, 2.5));"), "1.0\n");
}

#[test]
fn math_builtin_errors() {
    let e = assert_failure("print(sqrt(-4));");
    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
    assert_eq!(e.message(), "Invalid argument: cannot take the square root of -4");

    assert_eq!(assert_failure("print(abs(true));").kind(), Some(ErrorKind::Type));
    assert_eq!(assert_failure("print(max(1, \"two\"));").kind(), Some(ErrorKind::Type));
    assert_eq!(assert_failure("print(abs(-9223372036854775807 - 1));").kind(),
               Some(ErrorKind::Semantic));
    assert_eq!(assert_failure("print(pow(2));").message(),
               "Function 'pow' expects 2 argument(s) but 1 were given");
    assert_eq!(assert_failure("print(max());").message(),
               "Function 'max' expects at least 1 argument(s) but 0 were given");
    assert_failure("func sqrt(x: float): float { return x; }");
}

#[test]
fn exit_stops_the_program_with_a_code() {
    let mut output = Vec::new();
    let outcome = run_source("print(1); exit 3; print(2);", &mut output).expect("runs");

    assert_eq!(outcome, Outcome::Exited(3));
    assert_eq!(output, b"1\n");
}

#[test]
fn exit_from_inside_a_function() {
    let src = "func quit(): void { exit 4; } quit(); print(1);";
    let outcome = run_source(src, &mut Vec::new()).expect("runs");

    assert_eq!(outcome, Outcome::Exited(4));
}

#[test]
fn exit_needs_an_int() {
    assert_eq!(assert_failure("exit true;").kind(), Some(ErrorKind::Type));
}

#[test]
fn programs_without_exit_complete() {
    assert_eq!(run_source("let x: int = 1;", &mut Vec::new()).expect("runs"),
               Outcome::Completed);
    assert_success("");
    assert_success("// nothing but a comment\n/* and a block */");
}

#[test]
fn missing_import_is_reported() {
    let e = assert_failure("import \"definitely/not/here.rss\";");

    assert_eq!(e.kind(), Some(ErrorKind::Semantic));
    assert!(e.message().starts_with("File does not exist: "));
}

#[test]
fn errors_render_with_position() {
    let e = assert_failure("let x: int = 1;\nprint(x + true);");
    let rendered = e.to_string();
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines[0], "Unsupported operand types for '+': Int and Bool");
    assert_eq!(lines[1], "Type error at line 2, column 9");
    assert_eq!(lines[2], "print(x + true);");
    assert_eq!(lines[3], "        ^ Unsupported operand types for '+': Int and Bool");
}

#[test]
fn syntax_errors_stop_before_execution() {
    let mut output = Vec::new();
    let e = run_source("print(1);\nlet x: int = ;", &mut output).expect_err("bad syntax");

    assert_eq!(e.kind(), Some(ErrorKind::Syntactic));
    assert!(output.is_empty());
}

#[test]
fn lexical_errors_are_reported() {
    assert_eq!(assert_failure("let x: int = 1 @ 2;").kind(), Some(ErrorKind::Lexical));
    assert_eq!(assert_failure("print(\"open);").kind(), Some(ErrorKind::Lexical));
}

#[test]
fn reparsing_the_lexemes_gives_the_same_tree() {
    let src = "struct P { x: int; };
               func f(a: int, b: float): float { return a ^ b; }
               let p: P = P { x: 1 };
               let i: int = 0;
               for (i; i < 3; i++) { if (i == 1) { continue; } elif (!true) { } else { break; } }
               switch (p.x) { case (1) { print(\"one\"); } default { } }
               while (i > 0) { i -= 1; }
               print(f(2, 0.5) * -3);
               exit 0;";

    let original = parse_program(src).expect("parses");
    let lexemes: Vec<_> = tokenize(src).expect("tokenizes")
                                       .into_iter()
                                       .map(|t| t.lexeme)
                                       .collect();
    let reparsed = parse_program(&lexemes.join(" ")).expect("reparses");

    let render = |program: &[russet::ast::Statement]| -> Vec<String> {
        program.iter().map(ToString::to_string).collect()
    };
    assert_eq!(render(&original), render(&reparsed));
}
