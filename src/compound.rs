//! The Compound container and its typed accessors.

use indexmap::IndexMap;

use crate::arrays::{Flags, PackedBoolArray};
use crate::error::{Error, Result};
use crate::list::{List, Set};
use crate::Value;

/// An insertion-ordered mapping from name to value with unique keys.
///
/// Iteration yields entries in insertion order, and that order is what gets
/// written to the wire, but equality ignores it. Inserting under an existing
/// key replaces the prior value without error; removing an absent key is a
/// no-op.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    map: IndexMap<String, Value>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing and returning any prior value under the
    /// same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.map.insert(name.into(), value.into())
    }

    /// Remove and return the value under `name`, keeping the order of the
    /// remaining entries. Absent keys are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.map.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.map.get_mut(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.map.iter()
    }

    /// Typed getter. Fails with a missing-key error when `name` is absent,
    /// and a type-mismatch error when the stored value's variant does not
    /// match `T`.
    ///
    /// ```
    /// use nbtx::Compound;
    ///
    /// let mut c = Compound::new();
    /// c.insert("Patch", 7i32);
    /// assert_eq!(c.get_as::<i32>("Patch").unwrap(), 7);
    /// assert!(c.get_as::<&str>("Patch").is_err());
    /// ```
    pub fn get_as<'a, T: FromValue<'a>>(&'a self, name: &str) -> Result<T> {
        match self.get(name) {
            None => Err(Error::missing_key(name)),
            Some(value) => T::from_value(value)
                .ok_or_else(|| Error::type_mismatch(name, T::EXPECTED, value.tag_name())),
        }
    }

    /// Typed getter with a default. The default is returned only when the
    /// key is absent; a present value of the wrong variant is still a
    /// type-mismatch error.
    pub fn get_or<'a, T: FromValue<'a>>(&'a self, name: &str, default: T) -> Result<T> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => T::from_value(value)
                .ok_or_else(|| Error::type_mismatch(name, T::EXPECTED, value.tag_name())),
        }
    }
}

// IndexMap equality is already order-insensitive.
impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl FromIterator<(String, Value)> for Compound {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Compound {
            map: iter.into_iter().collect(),
        }
    }
}

/// Conversion used by [`Compound::get_as`] and [`Compound::get_or`] to view
/// a [`Value`] as a concrete Rust type.
pub trait FromValue<'a>: Sized {
    /// Tag name reported in type-mismatch errors.
    const EXPECTED: &'static str;

    fn from_value(value: &'a Value) -> Option<Self>;
}

macro_rules! from_value_copy {
    ($($type:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> FromValue<'a> for $type {
                const EXPECTED: &'static str = stringify!($variant);

                fn from_value(value: &'a Value) -> Option<Self> {
                    match *value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_value_copy! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    u16 => Char,
    Flags => Boolean,
}

macro_rules! from_value_ref {
    ($($type:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> FromValue<'a> for &'a $type {
                const EXPECTED: &'static str = stringify!($variant);

                fn from_value(value: &'a Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_value_ref! {
    Vec<i8> => ByteArray,
    Vec<i16> => ShortArray,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
    Vec<f32> => FloatArray,
    Vec<f64> => DoubleArray,
    Vec<u16> => CharArray,
    Vec<bool> => BooleanArray,
    PackedBoolArray => PackedBooleanArray,
    List => List,
    Set => Set,
    Compound => Compound,
}

impl<'a> FromValue<'a> for &'a str {
    const EXPECTED: &'static str = "String";

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}
