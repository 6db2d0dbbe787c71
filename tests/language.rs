use std::{cell::RefCell, fs, rc::Rc};

use linescript::{
    error::{ParseError, RuntimeError, ScriptError},
    interpreter::{
        dispatcher::{DispatchOptions, dispatch, dispatch_with},
        function::core::{run_system_function, system_function_exists},
        scope::{Scope, UserFunction, is_valid_variable_name},
        value::Value,
    },
    run_source, run_with_scope,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_script_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_source(&code, DispatchOptions::default()) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_script_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```linescript") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = run_source(src, DispatchOptions::default()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_source(src, DispatchOptions::default()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Builds a scope with one recording user function that stores the argument
/// list of every call made to it.
fn scope_with_recorder(name: &str) -> (Scope, Rc<RefCell<Vec<Vec<Value>>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);

    let mut scope = Scope::new();
    scope.add_function(UserFunction::new(name, move |args: &[Value]| {
                           sink.borrow_mut().push(args.to_vec());
                           Ok(Value::Undefined)
                       }));

    (scope, calls)
}

fn strict() -> DispatchOptions {
    DispatchOptions { strict: true,
                      ..DispatchOptions::default() }
}

#[test]
fn assignment_binds_trimmed_name_and_parsed_value() {
    let mut scope = Scope::new();
    dispatch(&mut scope, "  x = 42  ").unwrap();

    assert_eq!(scope.get_variable("x"), Some(&Value::Integer(42)));
}

#[test]
fn assignment_parses_literal_kinds() {
    let mut scope = Scope::new();
    dispatch(&mut scope, "r = 3.5").unwrap();
    dispatch(&mut scope, "e = 1e3").unwrap();
    dispatch(&mut scope, "b = false").unwrap();
    dispatch(&mut scope, "n = -7").unwrap();
    dispatch(&mut scope, "s1 = \"double quoted\"").unwrap();
    dispatch(&mut scope, "s2 = 'single quoted'").unwrap();

    assert_eq!(scope.get_variable("r"), Some(&Value::Real(3.5)));
    assert_eq!(scope.get_variable("e"), Some(&Value::Real(1000.0)));
    assert_eq!(scope.get_variable("b"), Some(&Value::Bool(false)));
    assert_eq!(scope.get_variable("n"), Some(&Value::Integer(-7)));
    assert_eq!(scope.get_variable("s1"), Some(&Value::from("double quoted")));
    assert_eq!(scope.get_variable("s2"), Some(&Value::from("single quoted")));
}

#[test]
fn assignment_copies_the_source_variable() {
    let mut scope = Scope::new();
    dispatch(&mut scope, "x = 1").unwrap();
    dispatch(&mut scope, "y = x").unwrap();
    dispatch(&mut scope, "x = 2").unwrap();

    assert_eq!(scope.get_variable("x"), Some(&Value::Integer(2)));
    assert_eq!(scope.get_variable("y"), Some(&Value::Integer(1)));
}

#[test]
fn reassignment_replaces_the_binding() {
    let mut scope = Scope::new();
    dispatch(&mut scope, "x = 1").unwrap();
    dispatch(&mut scope, "x = \"now a string\"").unwrap();

    assert_eq!(scope.get_variable("x"), Some(&Value::from("now a string")));
}

#[test]
fn empty_right_hand_side_binds_undefined() {
    let mut scope = Scope::new();
    dispatch(&mut scope, "u =").unwrap();

    assert_eq!(scope.get_variable("u"), Some(&Value::Undefined));
}

#[test]
fn empty_and_whitespace_lines_are_noops() {
    let (mut scope, calls) = scope_with_recorder("record");
    dispatch(&mut scope, "").unwrap();
    dispatch(&mut scope, "   \t ").unwrap();
    // Empty lines are fine even in strict mode.
    dispatch_with(&mut scope, "   ", 1, strict()).unwrap();

    assert!(calls.borrow().is_empty());
}

#[test]
fn invalid_variable_name_is_error() {
    let mut scope = Scope::new();

    match dispatch(&mut scope, "1x = 5") {
        Err(ScriptError::Runtime(RuntimeError::InvalidVariableName { name, .. })) => {
            assert_eq!(name, "1x");
        },
        other => panic!("unexpected result: {other:?}"),
    }

    // An empty left-hand side is just as invalid.
    assert!(dispatch(&mut scope, "= 5").is_err());
    assert_eq!(scope.get_variable("x"), None);
}

#[test]
fn multiple_equals_lines_are_ignored() {
    let mut scope = Scope::new();
    dispatch(&mut scope, "a == b").unwrap();
    dispatch(&mut scope, "a = b == c").unwrap();

    assert_eq!(scope.get_variable("a"), None);
}

#[test]
fn unknown_variable_in_assignment_is_error() {
    let mut scope = Scope::new();

    match dispatch(&mut scope, "x = y") {
        Err(ScriptError::Runtime(RuntimeError::UnknownVariable { name, .. })) => {
            assert_eq!(name, "y");
        },
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn operator_expressions_are_rejected_by_the_value_parser() {
    let mut scope = Scope::new();

    assert!(matches!(dispatch(&mut scope, "x = 1 2"),
                     Err(ScriptError::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
    assert!(matches!(dispatch(&mut scope, "x = @"),
                     Err(ScriptError::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn call_passes_arguments_in_order() {
    let (mut scope, calls) = scope_with_recorder("record");
    dispatch(&mut scope, "count = 3").unwrap();
    dispatch(&mut scope, "record(1, 2.5, \"three\", count)").unwrap();

    assert_eq!(*calls.borrow(),
               vec![vec![Value::Integer(1),
                         Value::Real(2.5),
                         Value::from("three"),
                         Value::Integer(3)]]);
}

#[test]
fn empty_argument_region_passes_one_undefined() {
    let (mut scope, calls) = scope_with_recorder("record");
    dispatch(&mut scope, "record()").unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 1);
    assert!(calls[0][0].is_undefined());
}

#[test]
fn zero_arity_option_passes_no_arguments() {
    let options = DispatchOptions { zero_arity_calls: true,
                                    ..DispatchOptions::default() };

    let (mut scope, calls) = scope_with_recorder("record");
    dispatch_with(&mut scope, "record()", 1, options).unwrap();
    dispatch_with(&mut scope, "record(   )", 1, options).unwrap();

    assert_eq!(*calls.borrow(), vec![Vec::new(), Vec::new()]);
}

#[test]
fn scope_reports_registered_functions() {
    let (scope, _calls) = scope_with_recorder("record");

    assert!(scope.has_function("record"));
    assert!(!scope.has_function("ghost"));
    assert_eq!(scope.find_function("record").map(UserFunction::name),
               Some("record"));
    assert!(scope.find_function("ghost").is_none());
}

#[test]
fn user_function_shadows_system_function() {
    let (mut scope, calls) = scope_with_recorder("print");
    dispatch(&mut scope, "print(42)").unwrap();

    assert_eq!(*calls.borrow(), vec![vec![Value::Integer(42)]]);
}

#[test]
fn callee_name_is_not_trimmed() {
    let (mut scope, calls) = scope_with_recorder("record");
    // The space before '(' is part of the callee, so nothing resolves.
    dispatch(&mut scope, "record (1)").unwrap();

    assert!(calls.borrow().is_empty());
}

#[test]
fn unresolved_call_is_silent_by_default() {
    let mut scope = Scope::new();
    dispatch(&mut scope, "ghost(1)").unwrap();
}

#[test]
fn strict_mode_reports_unresolved_calls() {
    let mut scope = Scope::new();

    match dispatch_with(&mut scope, "ghost(1)", 1, strict()) {
        Err(ScriptError::Runtime(RuntimeError::UnresolvedCall { name, .. })) => {
            assert_eq!(name, "ghost");
        },
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn strict_mode_reports_unrecognized_statements() {
    let mut scope = Scope::new();

    assert!(matches!(dispatch_with(&mut scope, "a == b", 1, strict()),
                     Err(ScriptError::Runtime(RuntimeError::UnrecognizedStatement { .. }))));
}

#[test]
fn arguments_are_parsed_before_resolution() {
    let mut scope = Scope::new();

    // 'ghost' resolves to nothing, but its argument fault still surfaces.
    assert!(matches!(dispatch(&mut scope, "ghost(missing)"),
                     Err(ScriptError::Runtime(RuntimeError::UnknownVariable { .. }))));
}

#[test]
fn assignment_shape_wins_over_call_shape() {
    let (mut scope, calls) = scope_with_recorder("record");

    // One '=' makes this an assignment, and "record(a" is no variable name.
    assert!(matches!(dispatch(&mut scope, "record(a=1)"),
                     Err(ScriptError::Runtime(RuntimeError::InvalidVariableName { .. }))));
    assert!(calls.borrow().is_empty());
}

#[test]
fn assertions_succeed_and_fail() {
    assert_success("flag = true\nassert(flag)");
    assert_success("assert(true)");
    assert_failure("assert(false)");

    let mut scope = Scope::new();
    assert!(matches!(dispatch(&mut scope, "assert(1)"),
                     Err(ScriptError::Runtime(RuntimeError::ExpectedBoolean { .. }))));
}

#[test]
fn print_accepts_any_arity() {
    assert_success("print()");
    assert_success("print(\"hi\")");
    assert_success("x = 1\nprint(\"x is\", x, true)");
}

#[test]
fn registry_resolves_by_namespace_and_name() {
    assert!(system_function_exists("", "print"));
    assert!(system_function_exists("", "assert"));
    assert!(system_function_exists("math", "sqrt"));
    assert!(!system_function_exists("", "sqrt"));
    assert!(!system_function_exists("math", "print"));

    // The dispatcher only sees the empty namespace, so this line is an
    // unresolved call and does nothing.
    let mut scope = Scope::new();
    dispatch(&mut scope, "sqrt(9)").unwrap();
}

#[test]
fn math_namespace_functions_work() {
    let args = [Value::Integer(9)];
    assert_eq!(run_system_function("math", "sqrt", &args, 1).unwrap(),
               Value::Real(3.0));

    let args = [Value::Integer(-4)];
    assert_eq!(run_system_function("math", "abs", &args, 1).unwrap(),
               Value::Integer(4));

    let args = [Value::Real(3.8)];
    assert_eq!(run_system_function("math", "floor", &args, 1).unwrap(),
               Value::Real(3.0));

    let args = [Value::Integer(3), Value::Integer(7)];
    assert_eq!(run_system_function("math", "min", &args, 1).unwrap(),
               Value::Integer(3));

    let args = [Value::Real(2.5), Value::Integer(7)];
    assert_eq!(run_system_function("math", "max", &args, 1).unwrap(),
               Value::Real(7.0));
}

#[test]
fn registry_reports_unknown_functions_and_bad_arity() {
    assert!(matches!(run_system_function("", "ghost", &[], 1),
                     Err(RuntimeError::UnknownFunction { .. })));

    let args = [Value::Integer(1)];
    assert!(matches!(run_system_function("math", "min", &args, 1),
                     Err(RuntimeError::ArgumentCountMismatch { .. })));

    let args = [Value::Integer(-9)];
    assert!(matches!(run_system_function("math", "sqrt", &args, 1),
                     Err(RuntimeError::InvalidArgument { .. })));
}

#[test]
fn len_counts_characters() {
    let args = [Value::from("héllo")];
    assert_eq!(run_system_function("", "len", &args, 1).unwrap(),
               Value::Integer(5));

    let args = [Value::Integer(5)];
    assert!(matches!(run_system_function("", "len", &args, 1),
                     Err(RuntimeError::ExpectedString { .. })));
}

#[test]
fn errors_carry_line_numbers() {
    match run_source("x = 1\n1y = 2", DispatchOptions::default()) {
        Err(ScriptError::Runtime(RuntimeError::InvalidVariableName { name, line })) => {
            assert_eq!(name, "1y");
            assert_eq!(line, 2);
        },
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn run_with_scope_uses_registered_functions() {
    let (mut scope, calls) = scope_with_recorder("record");
    let source = "x = 10\nrecord(x)\nrecord(x, x)";
    run_with_scope(&mut scope, source, DispatchOptions::default()).unwrap();

    assert_eq!(*calls.borrow(),
               vec![vec![Value::Integer(10)],
                    vec![Value::Integer(10), Value::Integer(10)]]);
}

#[test]
fn variable_names_are_validated() {
    assert!(is_valid_variable_name("x"));
    assert!(is_valid_variable_name("_private"));
    assert!(is_valid_variable_name("snake_case_2"));
    assert!(!is_valid_variable_name("1x"));
    assert!(!is_valid_variable_name("with space"));
    assert!(!is_valid_variable_name("hy-phen"));
    assert!(!is_valid_variable_name(""));
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.lsc").expect("missing file");
    assert_success(&contents);
}
