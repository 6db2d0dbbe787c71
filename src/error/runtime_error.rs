#[derive(Debug)]
/// Represents all errors that can occur during dispatch and execution.
pub enum RuntimeError {
    /// Tried to assign to a name that is not a valid variable name.
    InvalidVariableName {
        /// The rejected name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Asked the registry to run a function it does not contain.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call resolved to neither a user function nor a system function.
    /// Raised only in strict mode; the default mode skips the call.
    UnresolvedCall {
        /// The callee name as written.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A line matched no statement shape.
    /// Raised only in strict mode; the default mode skips the line.
    UnrecognizedStatement {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string value was expected, but not found.
    ExpectedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An assertion failed during execution.
    AssertionFailed {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVariableName { name, line } => {
                write!(f, "Error on line {line}: Invalid variable name '{name}'.")
            },
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::UnresolvedCall { name, line } => write!(f,
                                                          "Error on line {line}: Call to '{name}' resolved to no function."),
            Self::UnrecognizedStatement { line } => write!(f,
                                                           "Error on line {line}: Line is neither an assignment nor a call."),

            Self::ArgumentCountMismatch { line } => {
                write!(f, "Error on line {line}: Argument count mismatch.")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::ExpectedBoolean { line } => write!(f, "Error on line {line}: Expected boolean."),
            Self::ExpectedString { line } => write!(f, "Error on line {line}: Expected string."),
            Self::AssertionFailed { line } => write!(f, "Error on line {line}: Assertion failed."),
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
