use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            function::Function,
            record::{Record, RecordRef},
        },
    },
};

/// `abs`: absolute values.
pub mod abs;
/// `println`: printing scalars.
pub mod println;
/// `help`: describing values.
pub mod help;
/// `open`: line-by-line file reading.
pub mod file;

/// Where printing functions write to.
pub type Output = Rc<RefCell<dyn Write>>;

/// The parameter name every single-argument library function uses.
pub const VALUE: &str = "value";

/// An output sink writing to standard output.
#[must_use]
pub fn stdout() -> Output {
    Rc::new(RefCell::new(std::io::stdout()))
}

/// Builds the standard library record.
///
/// The record holds `abs`, `println`, `help` and `open`. Printing functions
/// write to `output`.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use sprout::interpreter::{
///     evaluator::core::Context,
///     stdlib,
///     value::{core::Value, record::Record},
/// };
///
/// let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
/// let std = stdlib::create(buffer.clone());
/// let println = Value::from(std).member_function("println").unwrap();
///
/// let root = Context::root(Record::new().into_shared());
/// root.call(&println, vec![Value::Int(3)], Value::Void).unwrap();
///
/// assert_eq!(String::from_utf8(buffer.borrow().clone()).unwrap(), "3\n");
/// ```
#[must_use]
pub fn create(output: Output) -> RecordRef {
    let mut std = Record::new();

    std.set("abs", Function::native(&[VALUE], abs::abs).into());

    let out = Rc::clone(&output);
    std.set("println",
            Function::native(&[VALUE], move |context| println::println(context, &out)).into());

    let out = output;
    std.set("help",
            Function::native(&[VALUE], move |context| help::help(context, &out)).into());

    std.set("open", Function::native(&[file::PATH], file::open).into());

    std.into_shared()
}

/// Writes one line to `output`.
pub(crate) fn write_line(output: &Output, line: &str) -> EvalResult<()> {
    writeln!(output.borrow_mut(), "{line}").map_err(RuntimeError::Output)
}
