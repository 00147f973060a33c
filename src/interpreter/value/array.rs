use crate::interpreter::value::core::Value;

/// A sequence of values.
///
/// Arrays are created by the `[]` literal. Scripts cannot index or mutate
/// them yet.
#[derive(Debug, Clone, Default)]
pub struct Array {
    values: Vec<Value>,
}

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Whether the array has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
