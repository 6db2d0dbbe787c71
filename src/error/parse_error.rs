#[derive(Debug)]
/// Represents all errors that can occur while parsing a value expression.
pub enum ParseError {
    /// Found a character sequence that is not part of any value.
    UnexpectedToken {
        /// The offending text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after a complete value.
    ///
    /// A value expression is a single literal or variable name; anything
    /// beyond that (operators, further tokens) is rejected with this error.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after value. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
