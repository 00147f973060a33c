use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            array::Array,
            file::LineReader,
            function::Function,
            record::{Record, RecordRef},
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// Scalars are stored inline. Everything else is an [`Object`]: a shared,
/// reference-counted handle, so copying a value never copies a record,
/// function or array.
///
/// There is no cycle collection. A record that (directly or indirectly)
/// contains itself is never freed.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence of a value. Declared but unassigned slots hold `Void`.
    #[default]
    Void,
    /// `true` or `false`.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A double precision float.
    Float(f64),
    /// An owned string.
    String(String),
    /// A shared object.
    Object(Object),
}

/// A shared, heap-allocated runtime object.
#[derive(Debug, Clone)]
pub enum Object {
    /// An ordered record of named values.
    Record(RecordRef),
    /// A callable.
    Function(Rc<Function>),
    /// A sequence of values.
    Array(Rc<RefCell<Array>>),
    /// An open file, read line by line.
    File(Rc<RefCell<LineReader>>),
}

/// The runtime tag of an [`Object`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// See [`Object::Record`].
    Record,
    /// See [`Object::Function`].
    Function,
    /// See [`Object::Array`].
    Array,
    /// See [`Object::File`].
    File,
}

impl ObjectKind {
    /// The name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Record => "Record",
            Self::Function => "Function",
            Self::Array => "Array",
            Self::File => "File",
        }
    }
}

impl Object {
    /// The runtime tag of the object.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Record(_) => ObjectKind::Record,
            Self::Function(_) => ObjectKind::Function,
            Self::Array(_) => ObjectKind::Array,
            Self::File(_) => ObjectKind::File,
        }
    }

    /// Whether both handles refer to the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Record(a), Self::Record(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::File(a), Self::File(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    /// Scalars compare by value, objects by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Void, Self::Void) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            #[allow(clippy::float_cmp)]
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Object(Object::Record(Rc::new(RefCell::new(v))))
    }
}

impl From<RecordRef> for Value {
    fn from(v: RecordRef) -> Self {
        Self::Object(Object::Record(v))
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Self::Object(Object::Function(Rc::new(v)))
    }
}

impl From<Rc<Function>> for Value {
    fn from(v: Rc<Function>) -> Self {
        Self::Object(Object::Function(v))
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Object(Object::Array(Rc::new(RefCell::new(v))))
    }
}

impl From<LineReader> for Value {
    fn from(v: LineReader) -> Self {
        Self::Object(Object::File(Rc::new(RefCell::new(v))))
    }
}

impl Value {
    /// The name of the value's kind, such as `Int` or `Record`.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Void => "Void",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Object(object) => object.kind().name(),
        }
    }

    /// Interprets the value as a condition.
    ///
    /// `Bool` is taken as is, numbers are true when non-zero and `Void` is
    /// false.
    ///
    /// # Errors
    /// Strings and objects have no boolean interpretation and fail with
    /// `RuntimeError::NotConvertibleToBool`.
    ///
    /// # Example
    /// ```
    /// use sprout::interpreter::value::core::Value;
    ///
    /// assert!(Value::Int(2).truthy().unwrap());
    /// assert!(!Value::Float(0.0).truthy().unwrap());
    /// assert!(!Value::Void.truthy().unwrap());
    /// assert!(Value::from("text").truthy().is_err());
    /// ```
    pub fn truthy(&self) -> EvalResult<bool> {
        match self {
            Self::Void => Ok(false),
            Self::Bool(b) => Ok(*b),
            Self::Int(n) => Ok(*n != 0),
            Self::Float(x) => Ok(*x != 0.0),
            Self::String(_) | Self::Object(_) => {
                Err(RuntimeError::NotConvertibleToBool { found: self.kind_name() })
            },
        }
    }

    /// Returns the integer held by the value.
    pub const fn as_int(&self) -> EvalResult<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            _ => Err(self.mismatch("Int")),
        }
    }

    /// Returns the string held by the value.
    pub fn as_str(&self) -> EvalResult<&str> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(self.mismatch("String")),
        }
    }

    /// Returns the record held by the value.
    ///
    /// Downcasting requires an exact kind match; there is no conversion
    /// between object kinds.
    pub const fn as_record(&self) -> EvalResult<&RecordRef> {
        match self {
            Self::Object(Object::Record(record)) => Ok(record),
            _ => Err(self.mismatch("Record")),
        }
    }

    /// Returns the function held by the value.
    pub const fn as_function(&self) -> EvalResult<&Rc<Function>> {
        match self {
            Self::Object(Object::Function(function)) => Ok(function),
            _ => Err(self.mismatch("Function")),
        }
    }

    /// Returns the array held by the value.
    pub const fn as_array(&self) -> EvalResult<&Rc<RefCell<Array>>> {
        match self {
            Self::Object(Object::Array(array)) => Ok(array),
            _ => Err(self.mismatch("Array")),
        }
    }

    /// Returns the file reader held by the value.
    pub const fn as_file(&self) -> EvalResult<&Rc<RefCell<LineReader>>> {
        match self {
            Self::Object(Object::File(file)) => Ok(file),
            _ => Err(self.mismatch("File")),
        }
    }

    /// Fetches the function stored under `name` in a record value.
    ///
    /// # Errors
    /// Fails if the value is not a record, the record has no such member, or
    /// the member is not a function.
    pub fn member_function(&self, name: &str) -> EvalResult<Rc<Function>> {
        let record = self.as_record()?.borrow();
        record.at(name)?.as_function().map(Rc::clone)
    }

    const fn mismatch(&self, expected: &'static str) -> RuntimeError {
        RuntimeError::TypeMismatch { expected,
                                     found: self.kind_name() }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Object(object) => write!(f, "[{}]", object.kind().name()),
        }
    }
}
