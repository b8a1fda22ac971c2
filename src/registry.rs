//! The type registry: the table of tag descriptors that makes the format
//! extensible without touching the codec.
//!
//! Every concrete tag variant has exactly one [`TagType`] descriptor. The
//! built-in descriptors are installed by [`Registry::new`]; custom types are
//! installed with [`Registry::register`] before any document referencing
//! them is decoded. The registry is plain shared state with no interior
//! locking: register everything up front, or guard it with your own lock if
//! you must register while decodes are in flight elsewhere.

use std::any::Any;
use std::io::{Read, Write};

use log::debug;

use crate::error::{Error, Result};
use crate::{de, Tag, Value};

/// Reconstruction function for one tag type: reads the payload of a value of
/// that type from the input. The `usize` is the current recursion depth,
/// which container types must propagate.
pub type ReadFn = fn(&mut dyn Read, &Registry, usize) -> Result<Value>;

/// Describes one concrete tag variant: its wire identifier, a human readable
/// name, and the function that reconstructs a value of the type from an
/// input channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagType {
    pub id: u8,
    pub name: &'static str,
    pub read: ReadFn,
}

/// The capability a runtime-registered tag type implements.
///
/// A custom tag knows its own descriptor, can write its payload, deep-copy
/// itself, compare itself against another custom tag, and expose itself for
/// downcasting. Decode goes through the descriptor's [`ReadFn`] instead, so
/// reading never needs a live instance.
pub trait CustomTag: std::fmt::Debug + Send + Sync {
    /// The descriptor for this type. Must be the same descriptor that was
    /// registered, or round-trips will not resolve.
    fn tag_type(&self) -> TagType;

    /// Write this tag's payload bytes. The type id and any entry name are
    /// written by the codec, not here.
    fn write_payload(&self, writer: &mut dyn Write) -> Result<()>;

    fn clone_tag(&self) -> Box<dyn CustomTag>;

    /// Value equality against another custom tag. Implementations should
    /// downcast via [`CustomTag::as_any`] and return false on a type
    /// mismatch.
    fn eq_tag(&self, other: &dyn CustomTag) -> bool;

    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn CustomTag> {
    fn clone(&self) -> Self {
        self.clone_tag()
    }
}

impl PartialEq for Box<dyn CustomTag> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_tag(other.as_ref())
    }
}

/// Table resolving wire type identifiers to [`TagType`] descriptors.
pub struct Registry {
    types: [Option<TagType>; 256],
}

impl Registry {
    /// A registry with all built-in tag types installed.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for tag_type in builtin_types() {
            // Built-in ids never collide with each other.
            registry
                .register(tag_type)
                .expect("built-in registration cannot fail");
        }
        registry
    }

    /// A registry with nothing installed, not even the built-ins. Only
    /// useful for exercising resolution failures.
    pub fn empty() -> Self {
        Registry {
            types: [None; 256],
        }
    }

    /// Install a descriptor under its id. Re-registering the identical
    /// descriptor is a no-op; a different descriptor on an occupied id is
    /// rejected and the prior one is preserved.
    pub fn register(&mut self, tag_type: TagType) -> Result<()> {
        match self.types[tag_type.id as usize] {
            Some(existing) if existing == tag_type => Ok(()),
            Some(existing) => Err(Error::duplicate_type(
                tag_type.id,
                existing.name,
                tag_type.name,
            )),
            None => {
                debug!("registered tag type {} = '{}'", tag_type.id, tag_type.name);
                self.types[tag_type.id as usize] = Some(tag_type);
                Ok(())
            }
        }
    }

    /// Look up the descriptor for a wire id.
    pub fn resolve(&self, id: u8) -> Result<&TagType> {
        self.types[id as usize]
            .as_ref()
            .ok_or_else(|| Error::unknown_type(id))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Descriptors for the 22 built-in tag types, in id order.
fn builtin_types() -> [TagType; 22] {
    fn t(tag: Tag, name: &'static str, read: ReadFn) -> TagType {
        TagType {
            id: tag.into(),
            name,
            read,
        }
    }

    [
        t(Tag::End, "End", de::read_end),
        t(Tag::Byte, "Byte", de::read_byte),
        t(Tag::Short, "Short", de::read_short),
        t(Tag::Int, "Int", de::read_int),
        t(Tag::Long, "Long", de::read_long),
        t(Tag::Float, "Float", de::read_float),
        t(Tag::Double, "Double", de::read_double),
        t(Tag::ByteArray, "ByteArray", de::read_byte_array),
        t(Tag::String, "String", de::read_string),
        t(Tag::List, "List", de::read_list),
        t(Tag::Compound, "Compound", de::read_compound),
        t(Tag::IntArray, "IntArray", de::read_int_array),
        t(Tag::LongArray, "LongArray", de::read_long_array),
        t(Tag::Char, "Char", de::read_char),
        t(Tag::Boolean, "Boolean", de::read_boolean),
        t(Tag::Set, "Set", de::read_set),
        t(Tag::ShortArray, "ShortArray", de::read_short_array),
        t(Tag::FloatArray, "FloatArray", de::read_float_array),
        t(Tag::DoubleArray, "DoubleArray", de::read_double_array),
        t(Tag::CharArray, "CharArray", de::read_char_array),
        t(Tag::BooleanArray, "BooleanArray", de::read_boolean_array),
        t(
            Tag::PackedBooleanArray,
            "PackedBooleanArray",
            de::read_packed_boolean_array,
        ),
    ]
}
