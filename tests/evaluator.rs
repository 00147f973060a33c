use std::{cell::Cell, rc::Rc};

use sprout::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Lexer, Source},
        parser::{module::parse_module, statement::parse_statement},
        value::{
            core::Value,
            function::{Body, Function},
            record::Record,
        },
    },
};

/// Parses `text` as the body of a function with the given parameters.
fn function(params: &[&str], text: &str) -> Function {
    let source = Source::new(text);
    let module = parse_module(&mut Lexer::new(&source)).unwrap_or_else(|e| panic!("{e}"));
    let main = Value::from(module).member_function("main").unwrap();
    let Body::Script(body) = &main.body else {
        panic!("main is native");
    };
    Function::new(params.iter().map(ToString::to_string).collect(), body.clone())
}

/// Parses and evaluates one statement in `frame`.
fn eval(frame: &Context<'_>, text: &str) -> EvalResult<Value> {
    let source = Source::new(text);
    let node = parse_statement(&mut Lexer::new(&source)).unwrap_or_else(|e| panic!("{e}"));
    frame.eval(&node)
}

fn root() -> Context<'static> {
    Context::root(Record::new().into_shared())
}

fn bind(frame: &Context<'_>, name: &str, value: impl Into<Value>) {
    frame.locals().borrow_mut().set(name, value.into());
}

/// A native `next` answering "not done" `remaining` times, then "done".
fn countdown(remaining: usize, calls: &Rc<Cell<usize>>) -> Record {
    let calls = Rc::clone(calls);
    let next = Function::native(&[], move |_| {
        calls.set(calls.get() + 1);
        Ok(Value::Bool(calls.get() > remaining))
    });
    let mut range = Record::new();
    range.set("next", next.into());
    range
}

/// A native function counting its calls.
fn counter(calls: &Rc<Cell<usize>>) -> Function {
    let calls = Rc::clone(calls);
    Function::native(&[], move |_| {
        calls.set(calls.get() + 1);
        Ok(Value::Void)
    })
}

#[test]
fn duplicate_declaration_in_one_frame_fails() {
    let frame = root();
    eval(&frame, "let x;").unwrap();
    assert!(matches!(eval(&frame, "let x;"),
                     Err(RuntimeError::DuplicateDeclaration { ref name }) if name == "x"));
}

#[test]
fn declaration_may_shadow_an_outer_frame() {
    let outer = root();
    eval(&outer, "let x = 1;").unwrap();
    let inner = Context::with_parent(&outer, Record::new());
    eval(&inner, "let x = 2;").unwrap();

    assert_eq!(eval(&inner, "x;").unwrap(), Value::Int(2));
    assert_eq!(eval(&outer, "x;").unwrap(), Value::Int(1));
}

#[test]
fn repeated_assignment_never_fails() {
    let frame = root();
    eval(&frame, "x = 1;").unwrap();
    eval(&frame, "x = 2;").unwrap();
    assert_eq!(eval(&frame, "x;").unwrap(), Value::Int(2));
}

#[test]
fn assignment_returns_the_value_and_chains() {
    let frame = root();
    assert_eq!(eval(&frame, "a = b = 3;").unwrap(), Value::Int(3));
    assert_eq!(eval(&frame, "a;").unwrap(), Value::Int(3));
    assert_eq!(eval(&frame, "b;").unwrap(), Value::Int(3));
}

#[test]
fn assignment_writes_the_nearest_binding() {
    let outer = root();
    eval(&outer, "let x = 1;").unwrap();
    let inner = Context::with_parent(&outer, Record::new());

    eval(&inner, "x = 2;").unwrap();
    eval(&inner, "y = 3;").unwrap();

    assert_eq!(eval(&outer, "x;").unwrap(), Value::Int(2));
    assert!(!inner.locals().borrow().contains("x"));
    assert!(matches!(eval(&outer, "y;"), Err(RuntimeError::UnresolvedName { .. })));
}

#[test]
fn assigning_to_a_call_fails() {
    let frame = root();
    bind(&frame, "f", counter(&Rc::new(Cell::new(0))));
    assert!(matches!(eval(&frame, "f() = 1;"), Err(RuntimeError::NotAssignable)));
}

#[test]
fn unresolved_name_fails() {
    let frame = root();
    assert!(matches!(eval(&frame, "missing;"),
                     Err(RuntimeError::UnresolvedName { ref name }) if name == "missing"));
}

#[test]
fn literals_evaluate_to_their_values() {
    let frame = root();
    assert_eq!(eval(&frame, "\"a b\";").unwrap(), Value::from("a b"));
    assert_eq!(eval(&frame, "\"\";").unwrap(), Value::from(""));
    assert_eq!(eval(&frame, "7;").unwrap(), Value::Int(7));
    assert_eq!(eval(&frame, "0.5;").unwrap(), Value::Float(0.5));
    assert_eq!(eval(&frame, "false;").unwrap(), Value::Bool(false));

    let array = eval(&frame, "[];").unwrap();
    assert!(array.as_array().unwrap().borrow().is_empty());
    assert_ne!(array, eval(&frame, "[];").unwrap());
}

#[test]
fn arity_mismatch_never_fails_at_call_time() {
    let frame = root();
    let constant = function(&["a"], "1;");
    assert_eq!(frame.call(&constant, vec![], Value::Void).unwrap(), Value::Int(1));
    assert_eq!(frame.call(&constant,
                          vec![Value::Int(1), Value::Int(2), Value::Int(3)],
                          Value::Void)
                    .unwrap(),
               Value::Int(1));
}

#[test]
fn unbound_parameter_fails_on_access() {
    let frame = root();
    let identity = function(&["a"], "a;");

    assert!(matches!(frame.call(&identity, vec![], Value::Void),
                     Err(RuntimeError::UnresolvedName { ref name }) if name == "a"));
    assert_eq!(frame.call(&identity, vec![Value::Int(1), Value::Int(2)], Value::Void)
                    .unwrap(),
               Value::Int(1));
}

#[test]
fn empty_body_returns_void() {
    let frame = root();
    assert_eq!(frame.call(&function(&[], ""), vec![], Value::Void).unwrap(), Value::Void);
}

#[test]
fn callee_sees_bindings_of_its_caller() {
    let frame = root();
    bind(&frame, "show", function(&[], "x;"));
    let outer = function(&[], "let x = 7; show();");

    assert_eq!(frame.call(&outer, vec![], Value::Void).unwrap(), Value::Int(7));
}

#[test]
fn callee_does_not_see_bindings_of_finished_calls() {
    let frame = root();
    bind(&frame, "show", function(&[], "x;"));
    let setup = function(&[], "let x = 7;");

    frame.call(&setup, vec![], Value::Void).unwrap();
    assert!(matches!(eval(&frame, "show();"), Err(RuntimeError::UnresolvedName { .. })));
}

#[test]
fn parameter_is_visible_to_nested_calls() {
    let frame = root();
    bind(&frame, "inner", function(&[], "n;"));
    let outer = function(&["n"], "inner();");

    assert_eq!(frame.call(&outer, vec![Value::from("dynamic")], Value::Void).unwrap(),
               Value::from("dynamic"));
}

#[test]
fn declarations_inside_a_call_stay_local() {
    let frame = root();
    let declare = function(&[], "let local = 1;");
    frame.call(&declare, vec![], Value::Void).unwrap();
    assert!(!frame.locals().borrow().contains("local"));
}

#[test]
fn member_call_passes_the_receiver_as_this() {
    let frame = root();
    let receiver = Function::native(&["first"], |context: &Context<'_>| {
        Ok(Value::Bool(context.local("this")? == context.local("first")?))
    });
    let mut object = Record::new();
    object.set("same", receiver.into());
    bind(&frame, "object", object);

    assert_eq!(eval(&frame, "object.same(object);").unwrap(), Value::Bool(true));
    assert_eq!(eval(&frame, "object.same(1);").unwrap(), Value::Bool(false));
}

#[test]
fn plain_call_has_void_receiver() {
    let frame = root();
    bind(&frame, "me", function(&[], "this;"));
    assert_eq!(eval(&frame, "me();").unwrap(), Value::Void);
}

#[test]
fn native_reads_parameters_from_its_own_frame_only() {
    let frame = root();
    bind(&frame, "value", Value::Int(1));
    let native = Function::native(&["value"], |context: &Context<'_>| context.local("value"));
    bind(&frame, "native", native);

    assert_eq!(eval(&frame, "native(2);").unwrap(), Value::Int(2));
    assert!(matches!(eval(&frame, "native();"), Err(RuntimeError::MemberNotFound { .. })));
}

#[test]
fn calling_a_non_function_fails() {
    let frame = root();
    bind(&frame, "x", Value::Int(1));
    assert!(matches!(eval(&frame, "x();"),
                     Err(RuntimeError::TypeMismatch { expected: "Function",
                                                      found:    "Int", })));
    assert!(matches!(eval(&frame, "x.y();"), Err(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn missing_member_fails() {
    let frame = root();
    bind(&frame, "object", Record::new());
    assert!(matches!(eval(&frame, "object.nothing();"),
                     Err(RuntimeError::MemberNotFound { ref name }) if name == "nothing"));
}

#[test]
fn truthy_next_stops_the_loop_before_the_body() {
    let frame = root();
    let (next_calls, body_calls) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
    bind(&frame, "range", countdown(0, &next_calls));
    bind(&frame, "tick", counter(&body_calls));

    let result = eval(&frame, "for (let i in range) { tick(); }").unwrap();

    assert_eq!(result, Value::Void);
    assert_eq!(next_calls.get(), 1);
    assert_eq!(body_calls.get(), 0);
}

#[test]
fn falsy_next_runs_the_body_and_asks_again() {
    let frame = root();
    let (next_calls, body_calls) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
    bind(&frame, "range", countdown(1, &next_calls));
    bind(&frame, "tick", counter(&body_calls));

    eval(&frame, "for (let i in range) { tick(); }").unwrap();

    assert_eq!(next_calls.get(), 2);
    assert_eq!(body_calls.get(), 1);
}

#[test]
fn loop_returns_the_last_body_value() {
    let frame = root();
    let calls = Rc::new(Cell::new(0));
    bind(&frame, "range", countdown(3, &calls));

    assert_eq!(eval(&frame, "for (let i in range) { i = 5; \"done\" }").unwrap(),
               Value::from("done"));
    assert_eq!(calls.get(), 4);
}

#[test]
fn loop_frame_is_shared_across_iterations_and_discarded_after() {
    let frame = root();
    let calls = Rc::new(Cell::new(0));
    bind(&frame, "range", countdown(2, &calls));

    let result = eval(&frame, "for (let i in range) { i = i; let seen = 1; }");
    assert!(matches!(result, Err(RuntimeError::DuplicateDeclaration { ref name }) if name == "seen"));
    assert!(matches!(eval(&frame, "i;"), Err(RuntimeError::UnresolvedName { .. })));
}

#[test]
fn next_receives_the_range_as_argument_and_receiver() {
    let frame = root();
    let next = Function::native(&["range"], |context: &Context<'_>| {
        Ok(Value::Bool(context.local("range")? == context.local("this")?))
    });
    let mut range = Record::new();
    range.set("next", next.into());
    bind(&frame, "range", range);

    assert_eq!(eval(&frame, "for (let i in range) { 1; }").unwrap(), Value::Void);
}

#[test]
fn next_must_return_something_boolean() {
    let frame = root();
    let next = Function::native(&[], |_: &Context<'_>| Ok(Value::from("line")));
    let mut range = Record::new();
    range.set("next", next.into());
    bind(&frame, "range", range);

    assert!(matches!(eval(&frame, "for (let i in range);"),
                     Err(RuntimeError::NotConvertibleToBool { found: "String" })));
}

#[test]
fn range_without_next_fails() {
    let frame = root();
    bind(&frame, "range", Record::new());
    assert!(matches!(eval(&frame, "for (let i in range);"),
                     Err(RuntimeError::MemberNotFound { ref name }) if name == "next"));
    assert!(matches!(eval(&frame, "for (let i in 3);"), Err(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn frames_report_their_depth() {
    let outer = root();
    let inner = Context::with_parent(&outer, Record::new());
    assert_eq!(outer.depth(), 1);
    assert_eq!(inner.depth(), 2);
    assert!(inner.parent().is_some());
    assert!(outer.parent().is_none());
}
