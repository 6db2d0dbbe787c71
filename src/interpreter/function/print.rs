use crate::interpreter::{dispatcher::EvalResult, value::Value};

/// Prints all arguments to standard output, space-separated, followed by a
/// newline.
///
/// Accepts any number of arguments, including none.
/// Each value is formatted using its `Display` implementation; printing
/// works for all `Value` variants.
///
/// # Parameters
/// - `args`: Slice of arguments in input order.
///
/// # Returns
/// The last argument, or `Value::Undefined` when called without any.
///
/// # Example
/// ```
/// use linescript::interpreter::{function::print::print, value::Value};
///
/// // The function prints the values to stdout, but the doctest
/// // only checks the returned result.
/// let result = print(&[Value::from("answer:"), Value::Integer(42)], 1).unwrap();
///
/// assert_eq!(result, Value::Integer(42));
/// ```
pub fn print(args: &[Value], _line: usize) -> EvalResult<Value> {
    let rendered = args.iter()
                       .map(ToString::to_string)
                       .collect::<Vec<_>>()
                       .join(" ");
    println!("{rendered}");

    Ok(args.last().cloned().unwrap_or(Value::Undefined))
}
