/// The dispatcher module classifies and executes single lines.
///
/// The dispatcher trims a line, counts its `=` and parenthesis characters to
/// decide whether it is an assignment, a call, or nothing, and performs at
/// most one action against the scope. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Classifies lines into statement shapes.
/// - Executes assignments and calls, resolving user functions before system
///   functions.
/// - Reports runtime errors, or stays silent where the language demands it.
pub mod dispatcher;
/// The function module holds the system-function registry.
///
/// System functions are built-in callables registered in a process-wide table
/// keyed by namespace and name. The dispatcher resolves script calls through
/// the empty namespace; host programs can reach every namespace through the
/// registry API.
///
/// # Responsibilities
/// - Declares the registry table and its arity rules.
/// - Implements the built-in functions.
pub mod function;
/// The lexer module tokenizes value expressions.
///
/// The lexer reads the text of a single value expression and produces
/// tokens for numeric, boolean, and string literals as well as identifiers.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Handles numeric and string literals, identifiers, and whitespace.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module turns value-expression text into runtime values.
///
/// A value expression is exactly one token: a literal or a variable name.
/// The parser tokenizes the text, enforces the single-token rule, and
/// resolves identifiers against the scope.
///
/// # Responsibilities
/// - Parses literals into `Value` variants.
/// - Resolves variable references to copies of their current values.
/// - Rejects operator expressions and other multi-token input.
pub mod parser;
/// The scope module holds the mutable execution environment.
///
/// A scope stores variable bindings and host-registered user functions for
/// the duration of a dispatch. It also defines the variable factory and the
/// name-validity predicate the dispatcher relies on.
///
/// # Responsibilities
/// - Stores and looks up variables and user functions.
/// - Defines `Variable` and `UserFunction`.
/// - Validates variable names.
pub mod scope;
/// The value module defines the runtime data types.
///
/// This module declares the `Value` enum used during execution: integers,
/// reals, booleans, strings, and the undefined value. It provides checked
/// conversion methods that report type mismatches with source line numbers.
pub mod value;
