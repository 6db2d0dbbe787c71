use logos::Logos;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{dispatcher::DispatchResult, lexer::Token, scope::Scope, value::Value},
};

/// Parses the text of a value expression into a runtime value.
///
/// The text is trimmed first; an empty result parses to `Value::Undefined`.
/// Otherwise the text must contain exactly one token:
///
/// - integer, real, boolean, and string literals map to their `Value`
///   variants,
/// - an identifier resolves to a copy of the named variable's current value.
///
/// The single-token rule is what keeps operator expressions and nested calls
/// out of the language: `b == c` or `f(x)` on a right-hand side fail here.
///
/// # Parameters
/// - `scope`: Scope used to resolve variable references.
/// - `text`: The raw expression text.
/// - `line`: Source code line number for error reporting.
///
/// # Returns
/// The parsed value.
///
/// # Errors
/// - `ParseError::UnexpectedToken` for text no token rule matches.
/// - `ParseError::UnexpectedTrailingTokens` for more than one token.
/// - `RuntimeError::UnknownVariable` for an unresolved identifier.
///
/// # Example
/// ```
/// use linescript::interpreter::{parser::parse_value, scope::Scope, value::Value};
///
/// let scope = Scope::new();
///
/// assert_eq!(parse_value(&scope, "  42  ", 1).unwrap(), Value::Integer(42));
/// assert_eq!(parse_value(&scope, "\"hi\"", 1).unwrap(), Value::from("hi"));
/// assert_eq!(parse_value(&scope, "", 1).unwrap(), Value::Undefined);
/// assert!(parse_value(&scope, "missing", 1).is_err());
/// ```
pub fn parse_value(scope: &Scope, text: &str, line: usize) -> DispatchResult<Value> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Value::Undefined);
    }

    let mut lexer = Token::lexer(text);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line }.into());
        }
    }

    let mut tokens = tokens.into_iter();
    let Some(first) = tokens.next() else {
        return Ok(Value::Undefined);
    };
    if let Some(extra) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{extra:?}"),
                                                          line }.into());
    }

    match first {
        Token::Integer(n) => Ok(Value::Integer(n)),
        Token::Real(r) => Ok(Value::Real(r)),
        Token::Bool(b) => Ok(Value::Bool(b)),
        Token::Str(s) => Ok(Value::from(s)),
        Token::Identifier(name) => match scope.get_variable(&name) {
            Some(value) => Ok(value.clone()),
            None => Err(RuntimeError::UnknownVariable { name, line }.into()),
        },
    }
}
