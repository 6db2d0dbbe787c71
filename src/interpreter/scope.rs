use std::{collections::HashMap, rc::Rc};

use crate::interpreter::{dispatcher::EvalResult, value::Value};

/// The stored form of a host-registered function callback.
///
/// A callback receives the evaluated argument values in input order and
/// returns a value, which the dispatcher discards.
pub type UserFn = Rc<dyn Fn(&[Value]) -> EvalResult<Value>>;

/// A named variable binding, pairing a name with a value.
///
/// A `Variable` exists between creation and insertion into a scope; after
/// `Scope::add_variable` the scope owns both parts.
pub struct Variable {
    /// The variable name.
    pub name:  String,
    /// The bound value.
    pub value: Value,
}

impl Variable {
    /// Creates a new variable binding.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::{scope::Variable, value::Value};
    ///
    /// let variable = Variable::new("x", Value::Integer(1));
    /// assert_eq!(variable.name, "x");
    /// ```
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self { name: name.into(),
               value }
    }
}

/// A function registered in a scope by the host program.
///
/// User functions take precedence over system functions when a call
/// resolves, which lets hosts override built-ins such as `print`.
pub struct UserFunction {
    name: String,
    func: UserFn,
}

impl UserFunction {
    /// Creates a user function from a name and a callback.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::{scope::UserFunction, value::Value};
    ///
    /// let first = UserFunction::new("first", |args: &[Value]| {
    ///     Ok(args.first().cloned().unwrap_or(Value::Undefined))
    /// });
    ///
    /// let result = first.run(&[Value::Integer(21), Value::Integer(2)]).unwrap();
    /// assert_eq!(result, Value::Integer(21));
    /// ```
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
        where F: Fn(&[Value]) -> EvalResult<Value> + 'static
    {
        Self { name: name.into(),
               func: Rc::new(func), }
    }

    /// Returns the name the function is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function with the given arguments.
    ///
    /// # Errors
    /// Propagates whatever error the callback returns.
    pub fn run(&self, args: &[Value]) -> EvalResult<Value> {
        (self.func)(args)
    }
}

/// Stores the mutable execution environment for dispatch.
///
/// A scope holds variable bindings and user functions. It lives at least as
/// long as the dispatch calls made against it; hosts typically create one
/// scope per script run.
pub struct Scope {
    variables: HashMap<String, Value>,
    functions: HashMap<String, UserFunction>,
}

#[allow(clippy::new_without_default)]
impl Scope {
    /// Creates an empty scope with no variables and no user functions.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(), }
    }

    /// Inserts a variable binding, replacing any existing binding of the
    /// same name.
    ///
    /// # Example
    /// ```
    /// use linescript::interpreter::{
    ///     scope::{Scope, Variable},
    ///     value::Value,
    /// };
    ///
    /// let mut scope = Scope::new();
    /// scope.add_variable(Variable::new("x", Value::Integer(1)));
    /// scope.add_variable(Variable::new("x", Value::Integer(2)));
    ///
    /// assert_eq!(scope.get_variable("x"), Some(&Value::Integer(2)));
    /// ```
    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.insert(variable.name, variable.value);
    }

    /// Looks up a variable by name.
    ///
    /// # Returns
    /// A reference to the value if found, otherwise `None`.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Registers a user function under its own name, replacing any existing
    /// function of the same name.
    pub fn add_function(&mut self, function: UserFunction) {
        self.functions.insert(function.name.clone(), function);
    }

    /// Tests whether a user function is registered under the given name.
    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Looks up a user function by name.
    #[must_use]
    pub fn find_function(&self, name: &str) -> Option<&UserFunction> {
        self.functions.get(name)
    }
}

/// Tests whether a name is acceptable as a variable name.
///
/// A valid name starts with an ASCII letter or underscore and continues with
/// ASCII letters, digits, or underscores. The empty string is rejected.
/// Every name the dispatcher inserts into a scope has passed this predicate.
///
/// # Example
/// ```
/// use linescript::interpreter::scope::is_valid_variable_name;
///
/// assert!(is_valid_variable_name("total_count"));
/// assert!(is_valid_variable_name("_x1"));
/// assert!(!is_valid_variable_name("1x"));
/// assert!(!is_valid_variable_name(""));
/// ```
#[must_use]
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        },
        _ => false,
    }
}
