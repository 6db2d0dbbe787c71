use crate::{
    ast::Statement,
    error::{RuntimeError, ScriptError},
    interpreter::{
        function::core::{run_system_function, system_function_exists},
        parser::parse_value,
        scope::{Scope, Variable, is_valid_variable_name},
        value::Value,
    },
};

/// Result type used by functions and value conversions.
///
/// All function implementations return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result type used by dispatch and value parsing.
///
/// Dispatching can surface both parser and runtime faults, so these
/// functions return the combined [`ScriptError`].
pub type DispatchResult<T> = Result<T, ScriptError>;

/// Controls the optional dispatch behaviors.
///
/// The default options reproduce the language's permissive behavior exactly:
/// unclassifiable lines and unresolved calls are skipped, and an empty
/// argument region still passes one undefined argument. Both fields opt into
/// the stricter alternatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Report unclassifiable lines and unresolved calls as errors instead of
    /// skipping them.
    pub strict: bool,
    /// Treat an all-whitespace argument region as zero arguments instead of
    /// a single undefined one.
    pub zero_arity_calls: bool,
}

/// Classifies one trimmed line into its statement shape.
///
/// The rules are applied in order:
/// 1. An empty line is `Statement::Empty`.
/// 2. A line containing exactly one `=` (counted over the whole string) is
///    an assignment. The name is the trimmed text left of the `=`; the
///    expression right of it is kept verbatim.
/// 3. A line containing exactly one `(` and exactly one `)` is a call. The
///    callee is the untrimmed text before the `(`; the argument region runs
///    from after the `(` to the final character, which is assumed to be the
///    `)` and is not validated.
/// 4. Anything else is `Statement::Unrecognized`.
///
/// The ordering matters: `f(a=1)` contains one `=` and therefore classifies
/// as an assignment, and `a = b == c` contains three `=` and classifies as
/// nothing.
///
/// # Example
/// ```
/// use linescript::{ast::Statement, interpreter::dispatcher::classify};
///
/// assert_eq!(classify("x = 42"),
///            Statement::Assignment { name:       "x",
///                                    expression: " 42", });
/// assert_eq!(classify("print(1, 2)"),
///            Statement::Call { callee:    "print",
///                              arguments: "1, 2", });
/// assert_eq!(classify(""), Statement::Empty);
/// assert_eq!(classify("a == b"), Statement::Unrecognized);
/// ```
#[must_use]
pub fn classify(text: &str) -> Statement<'_> {
    if text.is_empty() {
        return Statement::Empty;
    }

    if text.chars().filter(|&c| c == '=').count() == 1
       && let Some((name, expression)) = text.split_once('=')
    {
        return Statement::Assignment { name: name.trim(),
                                       expression };
    }

    if text.chars().filter(|&c| c == '(').count() == 1
       && text.chars().filter(|&c| c == ')').count() == 1
       && let Some(open) = text.find('(')
       && let Some((last, _)) = text.char_indices().last()
    {
        // `last` is the byte index of the final character, so the region
        // below ends on a char boundary even for multi-byte input.
        let arguments = if open < last { &text[open + 1..last] } else { "" };

        return Statement::Call { callee: &text[..open],
                                 arguments };
    }

    Statement::Unrecognized
}

/// Dispatches one line with default options and no line numbering.
///
/// The line is trimmed, classified, and executed; at most one action is
/// performed. Errors report line 1. Use [`dispatch_with`] to thread real
/// line numbers and options.
///
/// # Errors
/// Returns an error for an invalid assignment name, a value that fails to
/// parse, or a function that fails. Unresolved calls and unclassifiable
/// lines are not errors.
///
/// # Example
/// ```
/// use linescript::interpreter::{dispatcher::dispatch, scope::Scope, value::Value};
///
/// let mut scope = Scope::new();
/// dispatch(&mut scope, "  x = 42  ").unwrap();
///
/// assert_eq!(scope.get_variable("x"), Some(&Value::Integer(42)));
/// ```
pub fn dispatch(scope: &mut Scope, text: &str) -> DispatchResult<()> {
    dispatch_with(scope, text, 1, DispatchOptions::default())
}

/// Dispatches one line with explicit line numbering and options.
///
/// # Parameters
/// - `scope`: The environment to execute against.
/// - `text`: The raw line, possibly surrounded by whitespace.
/// - `line`: Source line number carried into every error.
/// - `options`: Strictness and argument-cardinality switches.
///
/// # Errors
/// Returns an error for an invalid assignment name, a value that fails to
/// parse, or a function that fails. With `options.strict`, unresolved calls
/// and unclassifiable lines are also errors.
pub fn dispatch_with(scope: &mut Scope,
                     text: &str,
                     line: usize,
                     options: DispatchOptions)
                     -> DispatchResult<()> {
    match classify(text.trim()) {
        Statement::Empty => Ok(()),
        Statement::Assignment { name, expression } => {
            run_assignment(scope, name, expression, line)
        },
        Statement::Call { callee, arguments } => {
            run_call(scope, callee, arguments, line, options)
        },
        Statement::Unrecognized => {
            if options.strict {
                Err(RuntimeError::UnrecognizedStatement { line }.into())
            } else {
                Ok(())
            }
        },
    }
}

/// Executes an assignment statement.
///
/// The name must pass `is_valid_variable_name`; the expression is handed to
/// the value parser verbatim (trimming is the parser's job, not the
/// dispatcher's). The resulting binding replaces any existing one.
fn run_assignment(scope: &mut Scope,
                  name: &str,
                  expression: &str,
                  line: usize)
                  -> DispatchResult<()> {
    if !is_valid_variable_name(name) {
        return Err(RuntimeError::InvalidVariableName { name: name.to_string(),
                                                       line }.into());
    }

    let value = parse_value(scope, expression, line)?;
    scope.add_variable(Variable::new(name, value));

    Ok(())
}

/// Executes a call statement.
///
/// Arguments are parsed before the callee is resolved, so argument faults
/// surface even for a callee that resolves to nothing. Resolution tries the
/// scope's user functions first, then the system registry under the empty
/// namespace. A call that resolves to neither is skipped, or reported in
/// strict mode. Return values are discarded.
fn run_call(scope: &Scope,
            callee: &str,
            arguments: &str,
            line: usize,
            options: DispatchOptions)
            -> DispatchResult<()> {
    let values = parse_arguments(scope, arguments, line, options)?;

    if let Some(function) = scope.find_function(callee) {
        function.run(&values)?;
        return Ok(());
    }

    if system_function_exists("", callee) {
        run_system_function("", callee, &values, line)?;
        return Ok(());
    }

    if options.strict {
        return Err(RuntimeError::UnresolvedCall { name: callee.to_string(),
                                                  line }.into());
    }

    Ok(())
}

/// Parses the argument region of a call into values.
///
/// The region is split on `,` and each token is trimmed and parsed, so the
/// value count equals the token count and input order is preserved. An
/// empty region still splits into one empty token, which parses to
/// `Value::Undefined`; `options.zero_arity_calls` replaces that behavior
/// with an empty argument list for all-whitespace regions.
fn parse_arguments(scope: &Scope,
                   arguments: &str,
                   line: usize,
                   options: DispatchOptions)
                   -> DispatchResult<Vec<Value>> {
    if options.zero_arity_calls && arguments.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::new();

    for token in arguments.split(',') {
        values.push(parse_value(scope, token.trim(), line)?);
    }

    Ok(values)
}
