//! Fluent construction sugar over the container mutation operations. No
//! effect on the wire format.

use crate::arrays::{Flags, PackedBoolArray};
use crate::compound::Compound;
use crate::error::Result;
use crate::list::{List, Set};
use crate::Value;

/// Builds a [`Compound`] fluently.
///
/// ```
/// use nbtx::CompoundBuilder;
///
/// let root = CompoundBuilder::new()
///     .string("Name", "Test")
///     .int("Patch", 7)
///     .boolean("Available", &[true, false, false])
///     .build();
/// assert_eq!(root.get_as::<i32>("Patch").unwrap(), 7);
/// ```
#[derive(Debug, Default)]
pub struct CompoundBuilder {
    compound: Compound,
}

impl CompoundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add any value. Later fields under the same name replace earlier
    /// ones, matching [`Compound::insert`].
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.compound.insert(name, value);
        self
    }

    pub fn byte(self, name: &str, v: i8) -> Self {
        self.field(name, v)
    }

    pub fn short(self, name: &str, v: i16) -> Self {
        self.field(name, v)
    }

    pub fn int(self, name: &str, v: i32) -> Self {
        self.field(name, v)
    }

    pub fn long(self, name: &str, v: i64) -> Self {
        self.field(name, v)
    }

    pub fn float(self, name: &str, v: f32) -> Self {
        self.field(name, v)
    }

    pub fn double(self, name: &str, v: f64) -> Self {
        self.field(name, v)
    }

    pub fn char(self, name: &str, v: u16) -> Self {
        self.field(name, v)
    }

    /// Up to 8 flags packed into a Boolean tag.
    pub fn boolean(self, name: &str, flags: &[bool]) -> Self {
        self.field(name, Flags::new(flags))
    }

    pub fn string(self, name: &str, v: &str) -> Self {
        self.field(name, v)
    }

    pub fn packed_booleans(self, name: &str, bools: &[bool]) -> Self {
        self.field(name, PackedBoolArray::from(bools))
    }

    pub fn compound(self, name: &str, compound: Compound) -> Self {
        self.field(name, compound)
    }

    pub fn list(self, name: &str, list: List) -> Self {
        self.field(name, list)
    }

    pub fn set(self, name: &str, set: Set) -> Self {
        self.field(name, set)
    }

    pub fn build(self) -> Compound {
        self.compound
    }
}

/// Builds a [`List`], deferring the homogeneity check to [`build`].
///
/// Collects values without failing per push; `build` performs the same
/// checks [`List::push`] would, so the first wrong-typed element fails the
/// whole build.
///
/// [`build`]: ListBuilder::build
#[derive(Debug, Default)]
pub struct ListBuilder {
    values: Vec<Value>,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn build(self) -> Result<List> {
        let mut list = List::new();
        for value in self.values {
            list.push(value)?;
        }
        Ok(list)
    }

    /// Build a [`Set`] instead, dropping duplicates silently.
    pub fn build_set(self) -> Result<Set> {
        let mut set = Set::new();
        for value in self.values {
            set.push(value)?;
        }
        Ok(set)
    }
}
