use crate::{
    error::RuntimeError,
    interpreter::{dispatcher::EvalResult, function::core::check_arity, value::Value},
    util::num::usize_to_i64_checked,
};

/// Asserts that a boolean argument is true.
///
/// Accepts exactly one argument.
/// If the value is false, an `AssertionFailed` error is returned.
/// If it is true, the function returns the value unchanged.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Bool(true)` on success.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::builtin::assert_fn, value::Value};
///
/// let r = assert_fn(&[Value::Bool(true)], 1).unwrap();
/// assert_eq!(r, Value::Bool(true));
/// ```
pub fn assert_fn(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;

    if !args[0].as_bool(line)? {
        return Err(RuntimeError::AssertionFailed { line });
    }
    Ok(args[0].clone())
}

/// Returns the character count of a string value.
///
/// Accepts exactly one argument, which must be a string.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer` containing the character count.
pub fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;

    let text = args[0].as_str(line)?;
    Ok(Value::Integer(usize_to_i64_checked(text.chars().count(), line)?))
}

/// Computes the real square root of a numeric value.
///
/// Accepts exactly one argument.
/// Integers are converted to real numbers first.
/// Negative input produces an `InvalidArgument` error; non-numeric input
/// produces an `ExpectedNumber` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Real` containing the square root.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::builtin::sqrt, value::Value};
///
/// let r = sqrt(&[Value::Real(9.0)], 1).unwrap();
/// assert_eq!(r, Value::Real(3.0));
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;

    let x = args[0].as_real(line)?;
    if x < 0.0 {
        return Err(RuntimeError::InvalidArgument { details:
                                                       "square root of a negative number".to_string(),
                                                   line });
    }
    Ok(Value::Real(x.sqrt()))
}

/// Returns the absolute value of a numeric value.
///
/// Integers stay integers and reals stay reals.
/// Non-numeric values cause an `ExpectedNumber` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer` or `Value::Real` depending on input type.
pub fn abs(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;

    match args[0] {
        Value::Integer(n) => n.checked_abs()
                              .map(Value::Integer)
                              .ok_or(RuntimeError::LiteralTooLarge { line }),
        Value::Real(r) => Ok(Value::Real(r.abs())),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Applies a rounding operation (`floor`, `ceil`, or `round`) to a numeric
/// value.
///
/// The operation is selected by name.
/// Integers are returned as-is.
/// Non-numeric values cause an `ExpectedNumber` error.
///
/// # Parameters
/// - `name`: Operation name (`floor`, `ceil`, `round`).
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Real` or `Value::Integer` depending on input.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::builtin::unary_round, value::Value};
///
/// let r = unary_round("floor", &[Value::Real(3.8)], 1).unwrap();
/// assert_eq!(r, Value::Real(3.0));
/// ```
pub fn unary_round(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 1, line)?;

    let op = match name {
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        "round" => f64::round,
        _ => unreachable!(),
    };

    match args[0] {
        Value::Integer(n) => Ok(Value::Integer(n)),
        Value::Real(r) => Ok(Value::Real(op(r))),
        _ => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Computes the minimum or maximum of two numeric values.
///
/// The operation is selected by the `name` parameter, which must be `"min"`
/// or `"max"`.
/// - If both arguments are integers, the result is an integer.
/// - Otherwise the comparison is performed on real values.
///
/// Any non-numeric argument produces an `ExpectedNumber` error.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing exactly two arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer` or `Value::Real` depending on input types.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::builtin::min_max, value::Value};
///
/// let r = min_max("min", &[Value::Integer(3), Value::Integer(7)], 1).unwrap();
/// assert_eq!(r, Value::Integer(3));
///
/// let r = min_max("max", &[Value::Real(2.5), Value::Integer(1)], 1).unwrap();
/// assert_eq!(r, Value::Real(2.5));
/// ```
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 2, line)?;

    if let (Value::Integer(a), Value::Integer(b)) = (&args[0], &args[1]) {
        let value = if name == "min" { (*a).min(*b) } else { (*a).max(*b) };
        return Ok(Value::Integer(value));
    }

    let left = args[0].as_real(line)?;
    let right = args[1].as_real(line)?;
    let value = if name == "min" { left.min(right) } else { left.max(right) };

    Ok(Value::Real(value))
}
