use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{FunctionDef, Position, StructDef},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// What a name is bound to within one frame.
///
/// Variables, functions and struct types share a single namespace per frame:
/// declaring any of them replaces whatever the frame held under that name.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A variable binding.
    Variable(Value),
    /// A function declaration.
    Function(Rc<FunctionDef>),
    /// A struct type declaration.
    StructType(Rc<StructDef>),
}

impl Entry {
    /// A short description of the entry kind, used in diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Variable(_) => "variable",
            Self::Function(_) => "function",
            Self::StructType(_) => "struct type",
        }
    }
}

/// Why a scope lookup failed. Converted into a positioned
/// [`RuntimeError`] by the evaluator with [`LookupError::at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No frame binds the name.
    NotFound(String),
    /// The nearest binding is of a different kind.
    WrongKind {
        /// The name that was looked up.
        name:     String,
        /// The entry kind that was required.
        expected: &'static str,
        /// The entry kind that was found.
        found:    &'static str,
    },
}

impl LookupError {
    /// Attaches a source position.
    #[must_use]
    pub fn at(self, position: &Position) -> RuntimeError {
        let position = position.clone();
        match self {
            Self::NotFound(name) => RuntimeError::NameNotFound { name, position },
            Self::WrongKind { name,
                              expected,
                              found, } => RuntimeError::WrongEntryKind { name,
                                                                         expected,
                                                                         found,
                                                                         position },
        }
    }
}

/// One level of the stack.
#[derive(Debug, Clone, Default)]
struct Frame {
    entries:       HashMap<String, Entry>,
    /// Set on the outermost frame of a function call.
    call_boundary: bool,
}

/// A stack of lexical frames, innermost last.
///
/// Names resolve from the innermost frame outward and the first match wins,
/// so an inner declaration shadows an outer one until its frame is popped.
/// The root frame is created with the stack and is never popped.
///
/// A frame pushed with [`push_call_scope`](Self::push_call_scope) marks a
/// call boundary: while it is on the stack, lookups, assignments and
/// deletions see the frames from the innermost down to that boundary and
/// then the root frame. The caller's locals stay out of reach.
///
/// # Example
/// ```
/// use russet::interpreter::{scope::Scope, value::core::Value};
///
/// let mut scope = Scope::new();
/// scope.declare_variable("x", Value::Integer(1));
///
/// scope.push_scope();
/// scope.declare_variable("x", Value::Integer(2));
/// assert_eq!(scope.lookup_variable("x"), Ok(&Value::Integer(2)));
///
/// scope.push_call_scope();
/// assert_eq!(scope.lookup_variable("x"), Ok(&Value::Integer(1)));
/// scope.pop_scope();
///
/// scope.pop_scope();
/// assert_eq!(scope.lookup_variable("x"), Ok(&Value::Integer(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Scope {
    frames: Vec<Frame>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Creates a stack holding only the root frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::default()] }
    }

    /// Number of frames currently on the stack, the root frame included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Pushes a fresh, empty innermost frame.
    pub fn push_scope(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Pushes a fresh frame that starts a function call.
    pub fn push_call_scope(&mut self) {
        self.frames.push(Frame { entries:       HashMap::new(),
                                 call_boundary: true, });
    }

    /// Discards the innermost frame and every binding in it.
    ///
    /// The root frame is kept: popping a stack of depth one does nothing.
    pub fn pop_scope(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Index of the outermost frame the current call may see besides the
    /// root, `0` outside any call.
    fn call_start(&self) -> usize {
        self.frames
            .iter()
            .rposition(|frame| frame.call_boundary)
            .unwrap_or(0)
    }

    /// Visible frames, innermost first.
    fn visible(&self) -> impl Iterator<Item = &HashMap<String, Entry>> {
        let (head, tail) = self.frames.split_at(self.call_start());
        tail.iter()
            .rev()
            .chain(head.iter().take(1))
            .map(|frame| &frame.entries)
    }

    /// Visible frames, innermost first, mutably.
    fn visible_mut(&mut self) -> impl Iterator<Item = &mut HashMap<String, Entry>> {
        let start = self.call_start();
        let (head, tail) = self.frames.split_at_mut(start);
        tail.iter_mut()
            .rev()
            .chain(head.iter_mut().take(1))
            .map(|frame| &mut frame.entries)
    }

    /// Binds `name` in the innermost frame, replacing any entry the frame
    /// already holds under that name.
    pub fn declare(&mut self, name: &str, entry: Entry) {
        if let Some(frame) = self.frames.last_mut() {
            frame.entries.insert(name.to_string(), entry);
        }
    }

    /// Declares a variable in the innermost frame.
    pub fn declare_variable(&mut self, name: &str, value: Value) {
        self.declare(name, Entry::Variable(value));
    }

    /// Declares a function in the innermost frame.
    pub fn declare_function(&mut self, def: Rc<FunctionDef>) {
        let name = def.name.clone();
        self.declare(&name, Entry::Function(def));
    }

    /// Declares a struct type in the innermost frame.
    pub fn declare_struct_type(&mut self, def: Rc<StructDef>) {
        let name = def.name.clone();
        self.declare(&name, Entry::StructType(def));
    }

    /// Returns the nearest visible entry bound to `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.visible().find_map(|frame| frame.get(name))
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// [`LookupError::NotFound`] if no visible frame binds `name`, or
    /// [`LookupError::WrongKind`] if the nearest binding is not a variable.
    pub fn lookup_variable(&self, name: &str) -> Result<&Value, LookupError> {
        match self.lookup(name) {
            Some(Entry::Variable(value)) => Ok(value),
            Some(other) => Err(wrong_kind(name, "variable", other)),
            None => Err(LookupError::NotFound(name.to_string())),
        }
    }

    /// Looks up a function.
    ///
    /// # Errors
    /// As for [`lookup_variable`](Self::lookup_variable).
    pub fn lookup_function(&self, name: &str) -> Result<Rc<FunctionDef>, LookupError> {
        match self.lookup(name) {
            Some(Entry::Function(def)) => Ok(Rc::clone(def)),
            Some(other) => Err(wrong_kind(name, "function", other)),
            None => Err(LookupError::NotFound(name.to_string())),
        }
    }

    /// Looks up a struct type.
    ///
    /// # Errors
    /// As for [`lookup_variable`](Self::lookup_variable).
    pub fn lookup_struct_type(&self, name: &str) -> Result<Rc<StructDef>, LookupError> {
        match self.lookup(name) {
            Some(Entry::StructType(def)) => Ok(Rc::clone(def)),
            Some(other) => Err(wrong_kind(name, "struct type", other)),
            None => Err(LookupError::NotFound(name.to_string())),
        }
    }

    /// Overwrites the variable in the nearest visible frame that binds
    /// `name`.
    ///
    /// Never creates a binding.
    ///
    /// # Errors
    /// [`LookupError::NotFound`] if no visible frame binds `name`, or
    /// [`LookupError::WrongKind`] if the nearest binding is not a variable.
    pub fn assign_variable(&mut self, name: &str, value: Value) -> Result<(), LookupError> {
        let entry = self.visible_mut()
                        .find_map(|frame| frame.get_mut(name))
                        .ok_or_else(|| LookupError::NotFound(name.to_string()))?;

        match entry {
            Entry::Variable(slot) => {
                *slot = value;
                Ok(())
            },
            other => Err(wrong_kind(name, "variable", other)),
        }
    }

    /// Removes the variable from the nearest visible frame that binds
    /// `name` and returns its value.
    ///
    /// # Errors
    /// [`LookupError::NotFound`] if no visible frame binds `name`, or
    /// [`LookupError::WrongKind`] if the nearest binding is not a variable.
    pub fn delete_variable(&mut self, name: &str) -> Result<Value, LookupError> {
        let frame = self.visible_mut()
                        .find(|frame| frame.contains_key(name))
                        .ok_or_else(|| LookupError::NotFound(name.to_string()))?;

        match frame.remove(name) {
            Some(Entry::Variable(value)) => Ok(value),
            Some(other) => {
                let error = wrong_kind(name, "variable", &other);
                frame.insert(name.to_string(), other);
                Err(error)
            },
            None => Err(LookupError::NotFound(name.to_string())),
        }
    }
}

fn wrong_kind(name: &str, expected: &'static str, found: &Entry) -> LookupError {
    LookupError::WrongKind { name: name.to_string(),
                             expected,
                             found: found.describe() }
}
