//! # linescript
//!
//! linescript is a minimal line-oriented scripting language written in Rust.
//! Every line of a script is classified independently as either a single
//! assignment (`name = value`) or a single function call
//! (`name(arg, arg, ...)`), then executed against a mutable scope holding
//! variables and host-registered functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ScriptError,
    interpreter::{
        dispatcher::{DispatchOptions, dispatch_with},
        scope::Scope,
    },
};

/// Defines the classified shape of an input line.
///
/// This module declares the `Statement` enum produced by the line classifier.
/// A statement borrows from the line it was classified from and carries the
/// raw name, expression, and argument fragments for the dispatcher to act on.
///
/// # Responsibilities
/// - Defines the statement shapes the language recognizes.
/// - Keeps classification results cheap by borrowing from the input line.
pub mod ast;
/// Provides unified error types for value parsing and dispatch.
///
/// This module defines all errors that can be raised while parsing a value
/// expression or dispatching a line. It standardizes error reporting and
/// carries the source line number of every failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, dispatcher,
///   built-ins).
/// - Attaches line numbers and detailed messages for context.
/// - Wraps both categories in a single `ScriptError` for the public API.
pub mod error;
/// Orchestrates the classification and execution of script lines.
///
/// This module ties together the line dispatcher, the value parser, the
/// scope, the runtime value types, and the system-function registry to
/// provide a complete runtime for line-oriented scripts.
///
/// # Responsibilities
/// - Coordinates all core components: dispatcher, parser, scope, and
///   registry.
/// - Provides the entry points for dispatching single lines.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines used by the value types and
/// built-in functions to move between integer and floating-point
/// representations without silent data loss.
pub mod util;

/// Runs every line of a source text against a fresh scope.
///
/// Lines are dispatched in order and numbered from 1; the first failing line
/// aborts the run and its error is returned. Lines that classify as nothing
/// are skipped unless `options.strict` is set.
///
/// # Errors
/// Returns an error if any line fails to dispatch.
///
/// # Examples
/// ```
/// use linescript::interpreter::dispatcher::DispatchOptions;
///
/// let source = "x = 42\nassert(true)";
/// assert!(linescript::run_source(source, DispatchOptions::default()).is_ok());
///
/// // 'y' is not defined, so the assignment fails.
/// let source = "x = y";
/// assert!(linescript::run_source(source, DispatchOptions::default()).is_err());
/// ```
pub fn run_source(source: &str, options: DispatchOptions) -> Result<(), ScriptError> {
    let mut scope = Scope::new();

    run_with_scope(&mut scope, source, options)
}

/// Runs every line of a source text against a caller-provided scope.
///
/// This is the entry point for host programs that pre-register their own
/// functions or want to inspect the scope after the run.
///
/// # Errors
/// Returns an error if any line fails to dispatch.
///
/// # Examples
/// ```
/// use linescript::interpreter::{dispatcher::DispatchOptions, scope::Scope, value::Value};
///
/// let mut scope = Scope::new();
/// linescript::run_with_scope(&mut scope, "x = 1\ny = x", DispatchOptions::default()).unwrap();
///
/// assert_eq!(scope.get_variable("y"), Some(&Value::Integer(1)));
/// ```
pub fn run_with_scope(scope: &mut Scope,
                      source: &str,
                      options: DispatchOptions)
                      -> Result<(), ScriptError> {
    for (index, line) in source.lines().enumerate() {
        dispatch_with(scope, line, index + 1, options)?;
    }

    Ok(())
}
