//! The tag value model.

use crate::arrays::{Flags, PackedBoolArray};
use crate::compound::Compound;
use crate::list::{List, Set};
use crate::registry::CustomTag;
use crate::Tag;

/// A complete tag value. It owns its data. Compounds, lists and sets are
/// recursively materialized; there is no lazy decoding.
///
/// There is no `End` variant: End is a wire-only terminator and never
/// appears as a value. Runtime-registered types appear as
/// [`Value::Custom`].
///
/// ```
/// use nbtx::{Compound, Value};
///
/// let mut root = Compound::new();
/// root.insert("DataVersion", Value::Int(3465));
/// match root.get("DataVersion") {
///     Some(Value::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// A single UTF-16 code unit.
    Char(u16),
    /// Up to 8 boolean flags packed into one byte.
    Boolean(Flags),
    String(String),
    ByteArray(Vec<i8>),
    ShortArray(Vec<i16>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    FloatArray(Vec<f32>),
    DoubleArray(Vec<f64>),
    CharArray(Vec<u16>),
    /// One boolean per byte on the wire, for fast random access.
    BooleanArray(Vec<bool>),
    /// Eight booleans per byte on the wire, for compact storage.
    PackedBooleanArray(PackedBoolArray),
    List(List),
    Set(Set),
    Compound(Compound),
    /// A runtime-registered tag type.
    Custom(Box<dyn CustomTag>),
}

impl Value {
    /// The wire type identifier of this value. Always succeeds: built-ins
    /// know their [`Tag`], and a custom tag carries its own descriptor.
    pub fn tag_id(&self) -> u8 {
        match self {
            Value::Byte(_) => Tag::Byte.into(),
            Value::Short(_) => Tag::Short.into(),
            Value::Int(_) => Tag::Int.into(),
            Value::Long(_) => Tag::Long.into(),
            Value::Float(_) => Tag::Float.into(),
            Value::Double(_) => Tag::Double.into(),
            Value::Char(_) => Tag::Char.into(),
            Value::Boolean(_) => Tag::Boolean.into(),
            Value::String(_) => Tag::String.into(),
            Value::ByteArray(_) => Tag::ByteArray.into(),
            Value::ShortArray(_) => Tag::ShortArray.into(),
            Value::IntArray(_) => Tag::IntArray.into(),
            Value::LongArray(_) => Tag::LongArray.into(),
            Value::FloatArray(_) => Tag::FloatArray.into(),
            Value::DoubleArray(_) => Tag::DoubleArray.into(),
            Value::CharArray(_) => Tag::CharArray.into(),
            Value::BooleanArray(_) => Tag::BooleanArray.into(),
            Value::PackedBooleanArray(_) => Tag::PackedBooleanArray.into(),
            Value::List(_) => Tag::List.into(),
            Value::Set(_) => Tag::Set.into(),
            Value::Compound(_) => Tag::Compound.into(),
            Value::Custom(custom) => custom.tag_type().id,
        }
    }

    /// Human readable name of this value's tag type.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Value::Byte(_) => "Byte",
            Value::Short(_) => "Short",
            Value::Int(_) => "Int",
            Value::Long(_) => "Long",
            Value::Float(_) => "Float",
            Value::Double(_) => "Double",
            Value::Char(_) => "Char",
            Value::Boolean(_) => "Boolean",
            Value::String(_) => "String",
            Value::ByteArray(_) => "ByteArray",
            Value::ShortArray(_) => "ShortArray",
            Value::IntArray(_) => "IntArray",
            Value::LongArray(_) => "LongArray",
            Value::FloatArray(_) => "FloatArray",
            Value::DoubleArray(_) => "DoubleArray",
            Value::CharArray(_) => "CharArray",
            Value::BooleanArray(_) => "BooleanArray",
            Value::PackedBooleanArray(_) => "PackedBooleanArray",
            Value::List(_) => "List",
            Value::Set(_) => "Set",
            Value::Compound(_) => "Compound",
            Value::Custom(custom) => custom.tag_type().name,
        }
    }

    /// If this is an integral value, get it as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    /// If this is a floating point value, get it as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    /// If this is a string, get it as a str.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! value_from {
    ($($type:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    u16 => Char,
    Flags => Boolean,
    String => String,
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

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<Box<dyn CustomTag>> for Value {
    fn from(v: Box<dyn CustomTag>) -> Self {
        Value::Custom(v)
    }
}
