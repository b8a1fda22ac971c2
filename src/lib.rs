//! nbtx is an extensible superset of *Minecraft: Java Edition*'s NBT binary
//! format. Documents are trees of typed tags: primitives, arrays and
//! containers, encoded big-endian with a one-byte type id per entry. On top
//! of classic NBT it adds chars, bit-packed booleans, sets, the full family
//! of primitive arrays, and user-defined tag types resolved at decode time
//! through a [`Registry`].
//!
//! * For the tag value model see [`Value`].
//! * For the containers see [`Compound`], [`List`] and [`Set`].
//! * For registering your own tag types see [`Registry`] and [`CustomTag`].
//! * For reading and writing whole documents see [`io`].
//!
//! ```toml
//! [dependencies]
//! nbtx = "0.3"
//! ```
//!
//! # Quick example
//!
//! Build a small document, write it gzipped, and read it back:
//!
//! ```
//! use nbtx::{io, Compound, Compression, Registry};
//!
//! fn main() -> nbtx::error::Result<()> {
//!     let registry = Registry::new();
//!
//!     let mut root = Compound::new();
//!     root.insert("Name", "Test");
//!     root.insert("Patch", 7i32);
//!
//!     let mut buf = vec![];
//!     io::write(&mut buf, &root, Compression::Gzip)?;
//!
//!     let read_back = io::read(buf.as_slice(), Compression::Gzip, &registry)?;
//!     assert_eq!(root, read_back);
//!     Ok(())
//! }
//! ```
//!
//! # Wire compatibility
//!
//! Tag ids 0 through 12 are bit-compatible with classic NBT, so documents
//! using only those types can be exchanged with any NBT implementation. The
//! extended types (ids 13 and up) and any custom types require a consumer
//! with the same registry contents.

pub mod error;
pub mod io;

mod arrays;
mod builder;
mod compound;
mod de;
mod list;
mod registry;
mod ser;
mod value;

pub use arrays::{Flags, PackedBoolArray};
pub use builder::{CompoundBuilder, ListBuilder};
pub use compound::{Compound, FromValue};
pub use de::{from_bytes, from_reader, from_reader_named};
pub use io::Compression;
pub use list::{List, Set};
pub use registry::{CustomTag, ReadFn, Registry, TagType};
pub use ser::{to_bytes, to_writer, to_writer_named};
pub use value::Value;

#[cfg(test)]
mod test;

/// Nesting limit enforced by both the encoder and decoder, so a malicious
/// or corrupt document cannot exhaust the stack.
pub(crate) const MAX_DEPTH: usize = 512;

/// A built-in tag type id. This does not carry the value or the name of the
/// data. Ids 0 through 12 match classic NBT's assignments; the extended
/// types occupy 13 onwards in registration order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Marks the end of a Compound's entries. Zero payload, never a value.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8).
    ByteArray = 7,
    /// A Unicode string.
    String = 8,
    /// An ordered sequence of one element type.
    List = 9,
    /// A struct-like structure of named entries.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
    /// An array of Long (i64).
    LongArray = 12,
    /// A single UTF-16 code unit.
    Char = 13,
    /// Up to 8 boolean flags packed into one byte.
    Boolean = 14,
    /// A List whose elements are unique.
    Set = 15,
    /// An array of Short (i16).
    ShortArray = 16,
    /// An array of Float (f32).
    FloatArray = 17,
    /// An array of Double (f64).
    DoubleArray = 18,
    /// An array of Char (u16).
    CharArray = 19,
    /// A boolean array, one byte per element.
    BooleanArray = 20,
    /// A boolean array, eight elements per byte.
    PackedBooleanArray = 21,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The ids very rarely change so
// it isn't a massive burden, but saves a significant amount of compile time.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13 => Char,
            14 => Boolean,
            15 => Set,
            16 => ShortArray,
            17 => FloatArray,
            18 => DoubleArray,
            19 => CharArray,
            20 => BooleanArray,
            21 => PackedBooleanArray,
            22..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::End => 0,
            Tag::Byte => 1,
            Tag::Short => 2,
            Tag::Int => 3,
            Tag::Long => 4,
            Tag::Float => 5,
            Tag::Double => 6,
            Tag::ByteArray => 7,
            Tag::String => 8,
            Tag::List => 9,
            Tag::Compound => 10,
            Tag::IntArray => 11,
            Tag::LongArray => 12,
            Tag::Char => 13,
            Tag::Boolean => 14,
            Tag::Set => 15,
            Tag::ShortArray => 16,
            Tag::FloatArray => 17,
            Tag::DoubleArray => 18,
            Tag::CharArray => 19,
            Tag::BooleanArray => 20,
            Tag::PackedBooleanArray => 21,
        }
    }
}
