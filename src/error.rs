/// Value parsing errors.
///
/// Defines all error types that can occur while turning the text of a value
/// expression into a runtime value. Parse errors include unrecognized
/// characters and leftover tokens after a complete value.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while dispatching a line or
/// running a function. Runtime errors include invalid variable names,
/// unresolved lookups, and type or arity mismatches inside built-ins.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error produced while dispatching a line.
///
/// Dispatching can fail in two ways: the value parser rejects a right-hand
/// side or argument, or the dispatch itself (or an invoked function) fails.
/// This wrapper carries either category so the public entry points return a
/// single error type.
pub enum ScriptError {
    /// A value expression failed to parse.
    Parse(ParseError),
    /// The dispatch or an invoked function failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for ScriptError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for ScriptError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
