use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        stdlib::VALUE,
        value::core::Value,
    },
};

/// Returns the absolute value of an `Int` or a `Float`, keeping its kind.
///
/// # Errors
/// - `RuntimeError::TypeMismatch` for any other kind.
/// - `RuntimeError::Overflow` for the smallest `Int`, whose absolute value
///   does not fit.
///
/// # Example
/// ```
/// use sprout::interpreter::{
///     evaluator::core::Context,
///     stdlib::abs::abs,
///     value::{core::Value, record::Record},
/// };
///
/// let frame = Context::root(Record::new().into_shared());
/// frame.locals().borrow_mut().set("value", Value::Float(-1.0));
///
/// assert_eq!(abs(&frame).unwrap(), Value::Float(1.0));
/// ```
pub fn abs(context: &Context<'_>) -> EvalResult<Value> {
    match context.local(VALUE)? {
        Value::Int(n) => n.checked_abs().map(Value::Int).ok_or(RuntimeError::Overflow),
        Value::Float(x) => Ok(Value::Float(x.abs())),
        other => Err(RuntimeError::TypeMismatch { expected: "Int or Float",
                                                  found:    other.kind_name(), }),
    }
}
