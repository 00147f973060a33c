use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        stdlib::{Output, VALUE, write_line},
        value::core::Value,
    },
};

/// Prints an `Int`, `Float` or `String` on its own line and returns `Void`.
///
/// Strings are printed without quotes.
///
/// # Errors
/// Fails with `RuntimeError::TypeMismatch` for any other kind, and with
/// `RuntimeError::Output` if the output cannot be written.
pub fn println(context: &Context<'_>, output: &Output) -> EvalResult<Value> {
    let value = context.local(VALUE)?;
    match value {
        Value::Int(_) | Value::Float(_) | Value::String(_) => {
            write_line(output, &value.to_string())?;
            Ok(Value::Void)
        },
        other => Err(RuntimeError::TypeMismatch { expected: "Int, Float or String",
                                                  found:    other.kind_name(), }),
    }
}
