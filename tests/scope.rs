use std::rc::Rc;

use russet::{
    ast::{DeclaredType, FunctionDef, Position, StructDef, TypeName},
    interpreter::{
        scope::{Entry, LookupError, Scope},
        value::core::Value,
    },
};

fn function(name: &str) -> Rc<FunctionDef> {
    Rc::new(FunctionDef { name:        name.to_string(),
                          params:      Vec::new(),
                          return_type: DeclaredType::Builtin(TypeName::Void),
                          body:        Vec::new(),
                          position:    Position::default(), })
}

fn structure(name: &str) -> Rc<StructDef> {
    Rc::new(StructDef { name:     name.to_string(),
                        fields:   Vec::new(),
                        position: Position::default(), })
}

#[test]
fn new_scope_has_only_the_root_frame() {
    let mut scope = Scope::new();
    assert_eq!(scope.depth(), 1);

    scope.pop_scope();
    assert_eq!(scope.depth(), 1);
}

#[test]
fn inner_frames_shadow_and_then_vanish() {
    let mut scope = Scope::new();
    scope.declare_variable("x", Value::Integer(1));

    scope.push_scope();
    scope.declare_variable("x", Value::Integer(2));
    scope.declare_variable("only_inner", Value::Bool(true));
    assert_eq!(scope.depth(), 2);
    assert_eq!(scope.lookup_variable("x"), Ok(&Value::Integer(2)));

    scope.pop_scope();
    assert_eq!(scope.lookup_variable("x"), Ok(&Value::Integer(1)));
    assert_eq!(scope.lookup_variable("only_inner"),
               Err(LookupError::NotFound("only_inner".to_string())));
}

#[test]
fn outer_bindings_are_visible_from_inner_frames() {
    let mut scope = Scope::new();
    scope.declare_variable("x", Value::Integer(1));
    scope.push_scope();
    scope.push_scope();

    assert_eq!(scope.lookup_variable("x"), Ok(&Value::Integer(1)));
}

#[test]
fn redeclaring_in_the_same_frame_replaces() {
    let mut scope = Scope::new();
    scope.declare_variable("x", Value::Integer(1));
    scope.declare_variable("x", Value::from("now a string"));

    assert_eq!(scope.lookup_variable("x"), Ok(&Value::from("now a string")));
}

#[test]
fn assignment_updates_the_nearest_binding() {
    let mut scope = Scope::new();
    scope.declare_variable("x", Value::Integer(1));
    scope.push_scope();

    assert_eq!(scope.assign_variable("x", Value::Integer(5)), Ok(()));
    scope.pop_scope();
    assert_eq!(scope.lookup_variable("x"), Ok(&Value::Integer(5)));
}

#[test]
fn assignment_never_creates_a_binding() {
    let mut scope = Scope::new();

    assert_eq!(scope.assign_variable("ghost", Value::Integer(1)),
               Err(LookupError::NotFound("ghost".to_string())));
    assert_eq!(scope.lookup("ghost"), None);
}

#[test]
fn names_share_one_namespace_per_frame() {
    let mut scope = Scope::new();
    scope.declare_function(function("thing"));
    assert!(matches!(scope.lookup("thing"), Some(Entry::Function(_))));

    scope.declare_variable("thing", Value::Integer(0));
    assert_eq!(scope.lookup("thing"), Some(&Entry::Variable(Value::Integer(0))));
}

#[test]
fn lookups_check_the_entry_kind() {
    let mut scope = Scope::new();
    scope.declare_function(function("f"));
    scope.declare_struct_type(structure("P"));
    scope.declare_variable("v", Value::Unit);

    assert_eq!(scope.lookup_function("f").map(|def| def.name.clone()), Ok("f".to_string()));
    assert_eq!(scope.lookup_struct_type("P").map(|def| def.name.clone()), Ok("P".to_string()));
    assert_eq!(scope.lookup_variable("f"),
               Err(LookupError::WrongKind { name:     "f".to_string(),
                                            expected: "variable",
                                            found:    "function", }));
    assert!(matches!(scope.lookup_function("v"), Err(LookupError::WrongKind { .. })));
    assert!(matches!(scope.assign_variable("P", Value::Unit),
                     Err(LookupError::WrongKind { .. })));
}

#[test]
fn delete_removes_only_the_nearest_variable() {
    let mut scope = Scope::new();
    scope.declare_variable("x", Value::Integer(1));
    scope.push_scope();
    scope.declare_variable("x", Value::Integer(2));

    assert_eq!(scope.delete_variable("x"), Ok(Value::Integer(2)));
    assert_eq!(scope.lookup_variable("x"), Ok(&Value::Integer(1)));
}

#[test]
fn delete_leaves_non_variables_in_place() {
    let mut scope = Scope::new();
    scope.declare_function(function("f"));

    assert!(matches!(scope.delete_variable("f"), Err(LookupError::WrongKind { .. })));
    assert!(scope.lookup_function("f").is_ok());
    assert_eq!(scope.delete_variable("missing"),
               Err(LookupError::NotFound("missing".to_string())));
}

#[test]
fn lookup_errors_become_positioned_runtime_errors() {
    let position = Position::new(4, 2, "  y;");
    let error = LookupError::NotFound("y".to_string()).at(&position);

    assert_eq!(error.message(), "Name 'y' not found");
    assert_eq!(error.position(), &position);
}

#[test]
fn call_frames_hide_the_callers_locals() {
    let mut scope = Scope::new();
    scope.declare_variable("global", Value::Integer(0));
    scope.push_scope();
    scope.declare_variable("local", Value::Integer(1));

    scope.push_call_scope();
    assert_eq!(scope.lookup_variable("global"), Ok(&Value::Integer(0)));
    assert_eq!(scope.lookup_variable("local"),
               Err(LookupError::NotFound("local".to_string())));
    assert_eq!(scope.assign_variable("local", Value::Integer(9)),
               Err(LookupError::NotFound("local".to_string())));
    assert_eq!(scope.delete_variable("local"),
               Err(LookupError::NotFound("local".to_string())));

    scope.pop_scope();
    assert_eq!(scope.lookup_variable("local"), Ok(&Value::Integer(1)));
}

#[test]
fn frames_inside_a_call_stay_visible_to_it() {
    let mut scope = Scope::new();
    scope.push_call_scope();
    scope.declare_variable("param", Value::Integer(1));
    scope.push_scope();

    assert_eq!(scope.assign_variable("param", Value::Integer(2)), Ok(()));
    assert_eq!(scope.lookup_variable("param"), Ok(&Value::Integer(2)));
}

#[test]
fn nested_calls_only_see_their_own_frames_and_the_root() {
    let mut scope = Scope::new();
    scope.declare_variable("root", Value::Bool(true));
    scope.push_call_scope();
    scope.declare_variable("outer_param", Value::Integer(1));
    scope.push_call_scope();

    assert_eq!(scope.lookup_variable("root"), Ok(&Value::Bool(true)));
    assert_eq!(scope.lookup("outer_param"), None);
    assert_eq!(scope.depth(), 3);
}
