use std::{fmt, rc::Rc, sync::Arc};

/// A location in the source text.
///
/// Every token and every AST node carries one of these so that any error
/// raised later can point back at the line it came from. `column` is 1-based
/// and counted in characters. `snippet` is the full text of the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line:    usize,
    /// 1-based column number.
    pub column:  usize,
    /// The complete source line the position falls on.
    pub snippet: Arc<str>,
}

impl Position {
    /// Creates a position from its parts.
    ///
    /// # Example
    /// ```
    /// use russet::ast::Position;
    ///
    /// let position = Position::new(3, 7, "let x: int = 1;");
    ///
    /// assert_eq!(position.line, 3);
    /// assert_eq!(&*position.snippet, "let x: int = 1;");
    /// ```
    #[must_use]
    pub fn new(line: usize, column: usize, snippet: &str) -> Self {
        Self { line,
               column,
               snippet: Arc::from(snippet) }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line:    0,
               column:  0,
               snippet: Arc::from(""), }
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code. The evaluator turns each into the matching runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Double(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal, without its quotes.
    String(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// The builtin type names that may appear in declarations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeName {
    /// `int`
    Int,
    /// `float` or `double`
    Double,
    /// `bool`
    Bool,
    /// `string`
    String,
    /// `void`, only meaningful as a function return type.
    Void,
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Double => "float",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Void => "void",
        };
        write!(f, "{name}")
    }
}

/// A type annotation as written in a `let`, a parameter list, a return type
/// or a struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// One of the builtin type names.
    Builtin(TypeName),
    /// The name of a user-declared struct type.
    Struct(String),
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(name) => write!(f, "{name}"),
            Self::Struct(name) => write!(f, "{name}"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Each variant models a distinct syntactic construct and owns its operands
/// outright. Every node carries the [`Position`] of the token that introduced
/// it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean).
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Where the literal starts.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Where the name appears.
        position: Position,
    },
    /// A prefix unary operation (`-x`, `!x`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// `name++` or `name--`.
    Postfix {
        /// The variable being stepped.
        name:     String,
        /// Increment or decrement.
        op:       PostfixOperator,
        /// Position of the variable name.
        position: Position,
    },
    /// Plain (`=`) or compound (`+=`, `-=`, ...) assignment.
    Assign {
        /// The variable being assigned.
        name:     String,
        /// `=` or one of the compound forms.
        op:       AssignOperator,
        /// The right-hand side.
        value:    Box<Self>,
        /// Position of the assignment operator.
        position: Position,
    },
    /// Function call expression (e.g. `add(1, 2)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Position of the function name.
        position:  Position,
    },
    /// Struct literal, `Point { x: 1, y: 2 }`.
    StructLiteral {
        /// Name of the struct type.
        name:     String,
        /// Field initialisers in source order.
        fields:   Vec<(String, Self)>,
        /// Position of the type name.
        position: Position,
    },
    /// Field access, `p.x`.
    FieldAccess {
        /// The struct-valued expression.
        object:   Box<Self>,
        /// The field name.
        field:    String,
        /// Position of the `.`.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    ///
    /// ## Example
    /// ```
    /// use russet::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: Position::new(5, 1, "x"), };
    ///
    /// assert_eq!(expr.position().line, 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> &Position {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Postfix { position, .. }
            | Self::Assign { position, .. }
            | Self::Call { position, .. }
            | Self::StructLiteral { position, .. }
            | Self::FieldAccess { position, .. } => position,
        }
    }
}

/// A declared parameter or struct field: a name and its annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedName {
    /// The bound name.
    pub name:          String,
    /// The declared type.
    pub declared_type: DeclaredType,
}

/// Represents a user-defined function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:        String,
    /// Parameters in declaration order.
    pub params:      Vec<TypedName>,
    /// The declared return type.
    pub return_type: DeclaredType,
    /// The statements executed when the function is called.
    pub body:        Vec<Statement>,
    /// Position of the `func` keyword.
    pub position:    Position,
}

/// Represents a user-defined struct type.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    /// The name of the struct type.
    pub name:     String,
    /// Fields in declaration order.
    pub fields:   Vec<TypedName>,
    /// Position of the `struct` keyword.
    pub position: Position,
}

/// A condition paired with the statements it guards. Used for `elif` arms
/// and `case` arms.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// The guard expression.
    pub condition: Expr,
    /// The statements run when the guard matches.
    pub body:      Vec<Statement>,
}

/// Represents a statement.
///
/// Statements are executed for their effect. Composite statements own their
/// bodies as plain statement lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name: type = value;`
    Let {
        /// The name of the variable.
        name:          String,
        /// The annotated type.
        declared_type: DeclaredType,
        /// The initial value of the variable.
        value:         Expr,
        /// Position of `let`.
        position:      Position,
    },
    /// `del name;`
    Del {
        /// The variable to remove.
        name:     String,
        /// Position of `del`.
        position: Position,
    },
    /// `if (c) { } elif (c) { } else { }`
    If {
        /// The `if` condition.
        condition: Expr,
        /// The `if` body.
        body:      Vec<Self>,
        /// Any number of `elif` arms, tried in order.
        elifs:     Vec<Branch>,
        /// The `else` body, empty when absent.
        else_body: Vec<Self>,
        /// Position of `if`.
        position:  Position,
    },
    /// `for (name; condition; increment) { }`
    For {
        /// The pre-declared loop variable.
        variable:  String,
        /// Checked before every iteration.
        condition: Expr,
        /// Evaluated after every iteration, including ones cut short by
        /// `continue`.
        increment: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Position of `for`.
        position:  Position,
    },
    /// `while (condition) { }`
    While {
        /// Checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Position of `while`.
        position:  Position,
    },
    /// `break;`
    Break {
        /// Position of `break`.
        position: Position,
    },
    /// `continue;`
    Continue {
        /// Position of `continue`.
        position: Position,
    },
    /// `return expr;` or `return;`
    Return {
        /// The returned expression, if any.
        value:    Option<Expr>,
        /// Position of `return`.
        position: Position,
    },
    /// `exit expr;`
    Exit {
        /// The exit code expression.
        value:    Expr,
        /// Position of `exit`.
        position: Position,
    },
    /// A user-defined function declaration.
    Function(Rc<FunctionDef>),
    /// `switch (value) { case (c) { } default { } }`
    Switch {
        /// Evaluated once.
        value:    Expr,
        /// Case arms in declaration order.
        cases:    Vec<Branch>,
        /// The `default` body, empty when absent.
        default:  Vec<Self>,
        /// Position of `switch`.
        position: Position,
    },
    /// `import "path";`
    Import {
        /// The path as written.
        path:     String,
        /// Position of `import`.
        position: Position,
    },
    /// A struct type declaration.
    Struct(Rc<StructDef>),
    /// A standalone expression evaluated for its effect.
    Expression {
        /// The expression to evaluate.
        expr:     Expr,
        /// Position of the first token.
        position: Position,
    },
}

impl Statement {
    /// Gets the source position of `self`.
    #[must_use]
    pub fn position(&self) -> &Position {
        match self {
            Self::Let { position, .. }
            | Self::Del { position, .. }
            | Self::If { position, .. }
            | Self::For { position, .. }
            | Self::While { position, .. }
            | Self::Break { position }
            | Self::Continue { position }
            | Self::Return { position, .. }
            | Self::Exit { position, .. }
            | Self::Switch { position, .. }
            | Self::Import { position, .. }
            | Self::Expression { position, .. } => position,
            Self::Function(def) => &def.position,
            Self::Struct(def) => &def.position,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a prefix unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

/// Represents an assignment operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AssignOperator {
    /// Plain assignment (`=`).
    Assign,
    /// Compound assignment such as `+=`: the current value and the right-hand
    /// side are combined with the operator before storing.
    Compound(BinaryOperator),
}

/// Represents a postfix step operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl fmt::Display for AssignOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign => write!(f, "="),
            Self::Compound(op) => write!(f, "{op}="),
        }
    }
}

impl fmt::Display for PostfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}

/// Writes `items` separated by `", "`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Writes a statement list as `[a, b, c]`.
fn write_body(f: &mut fmt::Formatter<'_>, body: &[Statement]) -> fmt::Result {
    write!(f, "[")?;
    write_joined(f, body)?;
    write!(f, "]")
}

/// Writes branch arms as `[(cond, [..]), ...]`.
fn write_branches(f: &mut fmt::Formatter<'_>, branches: &[Branch]) -> fmt::Result {
    write!(f, "[")?;
    for (index, branch) in branches.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "({}, ", branch.condition)?;
        write_body(f, &branch.body)?;
        write!(f, ")")?;
    }
    write!(f, "]")
}

impl fmt::Display for TypedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.name, self.declared_type)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => match value {
                LiteralValue::Integer(n) => write!(f, "Int({n})"),
                LiteralValue::Double(d) => write!(f, "Float({d:?})"),
                LiteralValue::Bool(b) => write!(f, "Bool({b})"),
                LiteralValue::String(s) => write!(f, "String({s})"),
            },
            Self::Variable { name, .. } => write!(f, "Var({name})"),
            Self::UnaryOp { op, expr, .. } => write!(f, "UnaryOp({op}, {expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "BinOp({op}, {left}, {right})"),
            Self::Postfix { name, op, .. } => write!(f, "Postfix({op}, {name})"),
            Self::Assign { name, op, value, .. } => write!(f, "Set({op}, {name}, {value})"),
            Self::Call { name, arguments, .. } => {
                write!(f, "Call({name}, [")?;
                write_joined(f, arguments)?;
                write!(f, "])")
            },
            Self::StructLiteral { name, fields, .. } => {
                write!(f, "StructLit({name}, [")?;
                for (index, (field, value)) in fields.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "({field}, {value})")?;
                }
                write!(f, "])")
            },
            Self::FieldAccess { object, field, .. } => write!(f, "Field({object}, {field})"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name,
                        declared_type,
                        value,
                        .. } => write!(f, "Let({name}, {declared_type}, {value})"),
            Self::Del { name, .. } => write!(f, "Del({name})"),
            Self::If { condition,
                       body,
                       elifs,
                       else_body,
                       .. } => {
                write!(f, "IEE({condition}, ")?;
                write_body(f, body)?;
                write!(f, ", ")?;
                write_branches(f, elifs)?;
                write!(f, ", ")?;
                write_body(f, else_body)?;
                write!(f, ")")
            },
            Self::For { variable,
                        condition,
                        increment,
                        body,
                        .. } => {
                write!(f, "For({variable}, {condition}, {increment}, ")?;
                write_body(f, body)?;
                write!(f, ")")
            },
            Self::While { condition, body, .. } => {
                write!(f, "While({condition}, ")?;
                write_body(f, body)?;
                write!(f, ")")
            },
            Self::Break { .. } => write!(f, "Break()"),
            Self::Continue { .. } => write!(f, "Continue()"),
            Self::Return { value: Some(value),
                           .. } => write!(f, "Return({value})"),
            Self::Return { value: None, .. } => write!(f, "Return()"),
            Self::Exit { value, .. } => write!(f, "Exit({value})"),
            Self::Function(def) => {
                write!(f, "Func({}, {}, [", def.name, def.return_type)?;
                write_joined(f, &def.params)?;
                write!(f, "], ")?;
                write_body(f, &def.body)?;
                write!(f, ")")
            },
            Self::Switch { value,
                           cases,
                           default,
                           .. } => {
                write!(f, "SCD({value}, ")?;
                write_branches(f, cases)?;
                write!(f, ", ")?;
                write_body(f, default)?;
                write!(f, ")")
            },
            Self::Import { path, .. } => write!(f, "Import({path})"),
            Self::Struct(def) => {
                write!(f, "Struct({}, [", def.name)?;
                write_joined(f, &def.fields)?;
                write!(f, "])")
            },
            Self::Expression { expr, .. } => write!(f, "Expr({expr})"),
        }
    }
}
