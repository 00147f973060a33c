use std::{cell::RefCell, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// A shared, mutable record.
pub type RecordRef = Rc<RefCell<Record>>;

/// One named slot of a [`Record`].
#[derive(Debug, Clone)]
pub struct Declaration {
    /// The slot name.
    pub name:  String,
    /// The current value.
    pub value: Value,
}

/// An ordered sequence of named values.
///
/// Used as frame storage, as an object namespace and as a module's root
/// namespace. Names are compared by exact text and looked up by linear scan;
/// insertion order is preserved.
///
/// There are two ways to write:
/// - [`Record::declare`] creates a new slot and refuses a name that already
///   has one in this record.
/// - [`Record::set`] creates or overwrites a slot and never fails.
///
/// # Example
/// ```
/// use sprout::interpreter::value::{core::Value, record::Record};
///
/// let mut record = Record::new();
/// record.declare("a").unwrap();
/// record.set("b", Value::Int(2));
/// record.set("b", Value::Int(3));
///
/// assert!(record.declare("a").is_err());
/// assert_eq!(record.names().collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(record.at("b").unwrap(), &Value::Int(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record {
    declarations: Vec<Declaration>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { declarations: Vec::new() }
    }

    /// Wraps the record for sharing between frames and values.
    #[must_use]
    pub fn into_shared(self) -> RecordRef {
        Rc::new(RefCell::new(self))
    }

    /// Creates a new slot holding `Void` and returns it.
    ///
    /// # Errors
    /// Returns `RuntimeError::DuplicateDeclaration` if `name` already has a
    /// slot in this record. Slots of other records are not considered.
    pub fn declare(&mut self, name: &str) -> EvalResult<&mut Value> {
        if self.position(name).is_some() {
            return Err(RuntimeError::DuplicateDeclaration { name: name.to_string() });
        }
        Ok(self.push(name))
    }

    /// Writes `value` under `name`, creating the slot if needed.
    pub fn set(&mut self, name: &str, value: Value) {
        *self.slot(name) = value;
    }

    /// Returns the slot for `name`, creating it with `Void` if needed.
    pub fn slot(&mut self, name: &str) -> &mut Value {
        match self.position(name) {
            Some(index) => &mut self.declarations[index].value,
            None => self.push(name),
        }
    }

    /// Looks up `name`, returning `None` when it has no slot.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Value> {
        self.declarations
            .iter()
            .find(|declaration| declaration.name == name)
            .map(|declaration| &declaration.value)
    }

    /// Looks up `name` for writing, returning `None` when it has no slot.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.declarations
            .iter_mut()
            .find(|declaration| declaration.name == name)
            .map(|declaration| &mut declaration.value)
    }

    /// Looks up `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::MemberNotFound` when it has no slot.
    pub fn at(&self, name: &str) -> EvalResult<&Value> {
        self.find(name)
            .ok_or_else(|| RuntimeError::MemberNotFound { name: name.to_string() })
    }

    /// Whether `name` has a slot in this record.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Slot names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations
            .iter()
            .map(|declaration| declaration.name.as_str())
    }

    /// Slots in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    /// The number of slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the record has no slots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.declarations
            .iter()
            .position(|declaration| declaration.name == name)
    }

    fn push(&mut self, name: &str) -> &mut Value {
        self.declarations.push(Declaration { name:  name.to_string(),
                                             value: Value::Void, });
        let last = self.declarations.len() - 1;
        &mut self.declarations[last].value
    }
}

impl<'a> IntoIterator for &'a Record {
    type IntoIter = std::slice::Iter<'a, Declaration>;
    type Item = &'a Declaration;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
