use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    stdlib::{Output, VALUE, write_line},
    value::core::{Object, Value},
};

/// Prints a short description of a value and returns `Void`.
///
/// Scalars, arrays, functions and files print a one-line tag such as `[Int]`.
/// A record prints `[Record]{`, then each member name indented on its own
/// line in declaration order, then `}`.
///
/// # Errors
/// Fails with `RuntimeError::Output` if the output cannot be written.
pub fn help(context: &Context<'_>, output: &Output) -> EvalResult<Value> {
    let value = context.local(VALUE)?;
    match &value {
        Value::Object(Object::Record(record)) => {
            write_line(output, "[Record]{")?;
            for name in record.borrow().names() {
                write_line(output, &format!("  {name}"))?;
            }
            write_line(output, "}")?;
        },
        Value::Object(Object::Function(_)) => write_line(output, "[function]")?,
        other => write_line(output, &format!("[{}]", other.kind_name()))?,
    }
    Ok(Value::Void)
}
