use crate::{
    error::RuntimeError,
    interpreter::{
        dispatcher::EvalResult,
        function::{builtin, print},
        value::Value,
    },
};

/// Type alias for system function handlers.
///
/// A system function receives a slice of evaluated argument values and the
/// line number. It returns a value wrapped in `EvalResult`; the dispatcher
/// discards it, but hosts calling through the registry API can read it.
type SystemFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a system function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `Any` accepts every argument count, including zero.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    Any,
}

/// Defines system functions by generating a lookup table.
///
/// Each entry provides:
/// - a namespace and a name,
/// - an arity specification,
/// - a function pointer implementing the system function.
///
/// The macro produces:
/// - `SystemFunctionDef` (internal metadata),
/// - `SYSTEM_TABLE` (static table for lookup).
macro_rules! system_functions {
    (
        $(
            $namespace:literal / $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct SystemFunctionDef {
            namespace: &'static str,
            name:      &'static str,
            arity:     Arity,
            func:      SystemFn,
        }
        static SYSTEM_TABLE: &[SystemFunctionDef] = &[
            $(
                SystemFunctionDef { namespace: $namespace, name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

system_functions! {
    ""     / "print"  => { arity: Arity::Any, func: print::print },
    ""     / "assert" => { arity: Arity::Exact(1), func: builtin::assert_fn },
    ""     / "len"    => { arity: Arity::Exact(1), func: builtin::len },
    "math" / "sqrt"   => { arity: Arity::Exact(1), func: builtin::sqrt },
    "math" / "abs"    => { arity: Arity::Exact(1), func: builtin::abs },
    "math" / "floor"  => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("floor", args, line) },
    "math" / "ceil"   => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("ceil", args, line) },
    "math" / "round"  => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("round", args, line) },
    "math" / "min"    => { arity: Arity::Exact(2), func: |args, line| builtin::min_max("min", args, line) },
    "math" / "max"    => { arity: Arity::Exact(2), func: |args, line| builtin::min_max("max", args, line) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::Any => true,
        }
    }
}

/// Finds a registry entry by namespace and name.
fn lookup(namespace: &str, name: &str) -> Option<&'static SystemFunctionDef> {
    SYSTEM_TABLE.iter()
                .find(|def| def.namespace == namespace && def.name == name)
}

/// Tests whether a system function is registered under the given namespace
/// and name.
///
/// The dispatcher resolves script calls through the empty namespace only;
/// other namespaces are reachable through [`run_system_function`].
///
/// # Example
/// ```
/// use linescript::interpreter::function::core::system_function_exists;
///
/// assert!(system_function_exists("", "print"));
/// assert!(system_function_exists("math", "sqrt"));
/// assert!(!system_function_exists("", "sqrt"));
/// ```
#[must_use]
pub fn system_function_exists(namespace: &str, name: &str) -> bool {
    lookup(namespace, name).is_some()
}

/// Runs a system function by namespace and name.
///
/// The registry entry's arity is verified before the implementation runs.
///
/// # Parameters
/// - `namespace`: Registry namespace; the empty string for the default set.
/// - `name`: Function name.
/// - `args`: Evaluated argument values in input order.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The function result.
///
/// # Errors
/// - `RuntimeError::UnknownFunction` if no entry matches.
/// - `RuntimeError::ArgumentCountMismatch` if the arity check rejects the
///   argument count.
/// - Whatever error the implementation itself returns.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::core::run_system_function, value::Value};
///
/// let result = run_system_function("math", "sqrt", &[Value::Integer(9)], 1).unwrap();
/// assert_eq!(result, Value::Real(3.0));
/// ```
pub fn run_system_function(namespace: &str,
                           name: &str,
                           args: &[Value],
                           line: usize)
                           -> EvalResult<Value> {
    let Some(def) = lookup(namespace, name) else {
        return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                   line });
    };

    if !def.arity.check(args.len()) {
        return Err(RuntimeError::ArgumentCountMismatch { line });
    }

    (def.func)(args, line)
}

/// Checks if the argument list matches the expected count.
/// Returns an error if the argument count does not match.
///
/// ## Example
/// ```
/// use linescript::interpreter::{function::core::check_arity, value::Value};
///
/// let arg_vals = vec![Value::Integer(2), Value::Integer(1)];
/// let line = 15;
///
/// assert!(check_arity(&arg_vals, 2, line).is_ok()); // Requires exactly 2 arguments.
/// ```
pub const fn check_arity<T>(args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { line })
    }
}
