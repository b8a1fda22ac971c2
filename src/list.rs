//! The List and Set containers.

use crate::error::{Error, Result};
use crate::{Tag, Value};

/// An ordered sequence of values of a single element type.
///
/// The element type is fixed at construction with [`List::with_element`], or
/// inferred from the first push. Pushing a value of any other type fails
/// immediately rather than being deferred to write time. An empty list with
/// no established element type reports [`Tag::End`]'s id.
#[derive(Debug, Clone, Default)]
pub struct List {
    element: u8,
    values: Vec<Value>,
}

impl List {
    /// An empty list with the element type still undetermined.
    pub fn new() -> Self {
        List {
            element: Tag::End.into(),
            values: Vec::new(),
        }
    }

    /// An empty list fixed to the given element type.
    pub fn with_element(element: Tag) -> Self {
        Self::with_element_id(element.into())
    }

    /// An empty list fixed to the given element type id. Use this form for
    /// custom types, whose ids are not [`Tag`] variants.
    pub fn with_element_id(element: u8) -> Self {
        List {
            element,
            values: Vec::new(),
        }
    }

    /// Built by the decoder, which has already established homogeneity.
    pub(crate) fn from_parts(element: u8, values: Vec<Value>) -> Self {
        List { element, values }
    }

    /// The established element type id. [`Tag::End`]'s id until the first
    /// push on a list constructed with [`List::new`].
    pub fn element_id(&self) -> u8 {
        self.element
    }

    /// Append a value. Fails with a heterogeneous-list error if the value's
    /// type does not match the established element type.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let id = value.tag_id();

        if self.element == u8::from(Tag::End) && self.values.is_empty() {
            self.element = id;
        } else if id != self.element {
            return Err(Error::heterogeneous_list(self.element, id));
        }

        self.values.push(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// The elements as a slice.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

// Two empty lists are equal even if their declared element types differ,
// since the wire format writes an End placeholder for both.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
            && (self.values.is_empty() || self.element == other.element)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// A [`List`] that additionally enforces element uniqueness.
///
/// Pushing a value equal to an existing element is a silent no-op, never an
/// error; first-occurrence order is preserved. The wire shape is identical
/// to a list's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Set {
    inner: List,
}

impl Set {
    pub fn new() -> Self {
        Set { inner: List::new() }
    }

    pub fn with_element(element: Tag) -> Self {
        Set {
            inner: List::with_element(element),
        }
    }

    pub fn with_element_id(element: u8) -> Self {
        Set {
            inner: List::with_element_id(element),
        }
    }

    pub fn element_id(&self) -> u8 {
        self.inner.element_id()
    }

    /// Append a value unless an equal element is already present. Still
    /// fails on an element type mismatch.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if self.inner.values.contains(&value) {
            return Ok(());
        }
        self.inner.push(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.inner.values.contains(value)
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.inner.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.inner.iter()
    }

    pub fn values(&self) -> &[Value] {
        self.inner.values()
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
