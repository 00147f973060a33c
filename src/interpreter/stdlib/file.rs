use log::info;

use crate::interpreter::{
    evaluator::{
        core::{Context, EvalResult, THIS},
        for_loop::NEXT,
    },
    value::{core::Value, file::LineReader, function::Function, record::Record},
};

/// The parameter name of `open`.
pub const PATH: &str = "path";

/// The member holding the line reader.
pub const FILE: &str = "file";

/// Opens a text file for reading.
///
/// Returns a record with two members: `file`, the open reader, and `next`, a
/// function returning the following line of that reader each time it is
/// called on the record.
///
/// # Errors
/// Fails with `RuntimeError::TypeMismatch` if the path is not a string and
/// with `RuntimeError::Io` if the file cannot be opened.
pub fn open(context: &Context<'_>) -> EvalResult<Value> {
    let path = context.local(PATH)?;
    let path = path.as_str()?;

    let reader = LineReader::open(path)?;
    info!("opened file {path}");

    let mut handle = Record::new();
    handle.set(FILE, reader.into());
    handle.set(NEXT, Function::native(&[], next).into());
    Ok(handle.into())
}

/// Reads the next line from the `file` member of the receiver.
///
/// Returns the line, without its terminator, as a `String`, or `false` once
/// the file is exhausted.
///
/// # Errors
/// Fails if the receiver is not a record with a `file` member, or if reading
/// fails.
pub fn next(context: &Context<'_>) -> EvalResult<Value> {
    let this = context.local(THIS)?;
    let file = this.as_record()?.borrow().at(FILE)?.clone();
    let line = file.as_file()?.borrow_mut().read_line()?;
    Ok(line.map_or(Value::Bool(false), Value::String))
}
