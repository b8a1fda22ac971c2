//! Binary decoding. Registry-driven: every type id encountered on the wire
//! is resolved to its descriptor, whose read function reconstructs the
//! value, recursing for containers.
//!
//! Any failure aborts the whole read. There is no skip-and-continue: a
//! document containing a single unresolvable or malformed tag cannot be
//! decoded at all.

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::arrays::{Flags, PackedBoolArray};
use crate::compound::Compound;
use crate::error::{Error, Result};
use crate::list::{List, Set};
use crate::registry::Registry;
use crate::{Tag, Value, MAX_DEPTH};

/// Decode a single document from a reader, discarding the root compound's
/// name. Bytes after the root compound are left unread.
pub fn from_reader<R: Read>(reader: R, registry: &Registry) -> Result<Compound> {
    from_reader_named(reader, registry).map(|(_, compound)| compound)
}

/// Decode a single document, also returning the root compound's name
/// (conventionally the empty string).
pub fn from_reader_named<R: Read>(mut reader: R, registry: &Registry) -> Result<(String, Compound)> {
    let reader: &mut dyn Read = &mut reader;

    let id = reader.read_u8()?;
    if id != u8::from(Tag::Compound) {
        return Err(Error::no_root_compound(id));
    }

    let name = read_string_payload(reader)?;
    match read_compound(reader, registry, 0)? {
        Value::Compound(compound) => Ok((name, compound)),
        _ => unreachable!("compound reader produced a non-compound"),
    }
}

/// Decode a single document from a byte slice.
pub fn from_bytes(bytes: &[u8], registry: &Registry) -> Result<Compound> {
    from_reader(bytes, registry)
}

/// Read the payload of the given type id, resolving it through the
/// registry.
pub(crate) fn read_payload(
    reader: &mut dyn Read,
    id: u8,
    registry: &Registry,
    depth: usize,
) -> Result<Value> {
    let tag_type = registry.resolve(id)?;
    (tag_type.read)(reader, registry, depth)
}

fn check_depth(depth: usize) -> Result<()> {
    if depth >= MAX_DEPTH {
        Err(Error::malformed("reached maximum nesting depth"))
    } else {
        Ok(())
    }
}

/// Element count prefix for arrays, lists and sets.
fn read_len(reader: &mut dyn Read) -> Result<usize> {
    let len = reader.read_i32::<BigEndian>()?;
    if len < 0 {
        return Err(Error::malformed(format!("negative element count: {}", len)));
    }
    Ok(len as usize)
}

fn read_string_payload(reader: &mut dyn Read) -> Result<String> {
    let len = reader.read_u16::<BigEndian>()? as usize;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;

    match cesu8::from_java_cesu8(&buf) {
        Ok(s) => Ok(s.into_owned()),
        Err(_) => Err(Error::nonunicode_string(&buf)),
    }
}

// Built-in payload readers. These are what the built-in descriptors point
// at; their shared signature is `registry::ReadFn`.

pub(crate) fn read_end(_: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    // End only terminates compounds; it never appears where a payload is
    // expected.
    Err(Error::malformed("End tag has no payload"))
}

pub(crate) fn read_byte(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    Ok(Value::Byte(reader.read_i8()?))
}

pub(crate) fn read_short(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    Ok(Value::Short(reader.read_i16::<BigEndian>()?))
}

pub(crate) fn read_int(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    Ok(Value::Int(reader.read_i32::<BigEndian>()?))
}

pub(crate) fn read_long(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    Ok(Value::Long(reader.read_i64::<BigEndian>()?))
}

pub(crate) fn read_float(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    Ok(Value::Float(reader.read_f32::<BigEndian>()?))
}

pub(crate) fn read_double(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    Ok(Value::Double(reader.read_f64::<BigEndian>()?))
}

pub(crate) fn read_char(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    Ok(Value::Char(reader.read_u16::<BigEndian>()?))
}

pub(crate) fn read_boolean(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    Ok(Value::Boolean(Flags::from_bits(reader.read_u8()?)))
}

pub(crate) fn read_string(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    Ok(Value::String(read_string_payload(reader)?))
}

pub(crate) fn read_byte_array(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    let len = read_len(reader)?;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    Ok(Value::ByteArray(buf.into_iter().map(|b| b as i8).collect()))
}

pub(crate) fn read_short_array(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    let len = read_len(reader)?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(reader.read_i16::<BigEndian>()?);
    }
    Ok(Value::ShortArray(values))
}

pub(crate) fn read_int_array(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    let len = read_len(reader)?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(reader.read_i32::<BigEndian>()?);
    }
    Ok(Value::IntArray(values))
}

pub(crate) fn read_long_array(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    let len = read_len(reader)?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(reader.read_i64::<BigEndian>()?);
    }
    Ok(Value::LongArray(values))
}

pub(crate) fn read_float_array(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    let len = read_len(reader)?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(reader.read_f32::<BigEndian>()?);
    }
    Ok(Value::FloatArray(values))
}

pub(crate) fn read_double_array(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    let len = read_len(reader)?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(reader.read_f64::<BigEndian>()?);
    }
    Ok(Value::DoubleArray(values))
}

pub(crate) fn read_char_array(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    let len = read_len(reader)?;
    let mut values = Vec::new();
    for _ in 0..len {
        values.push(reader.read_u16::<BigEndian>()?);
    }
    Ok(Value::CharArray(values))
}

pub(crate) fn read_boolean_array(reader: &mut dyn Read, _: &Registry, _: usize) -> Result<Value> {
    let len = read_len(reader)?;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    Ok(Value::BooleanArray(buf.into_iter().map(|b| b != 0).collect()))
}

pub(crate) fn read_packed_boolean_array(
    reader: &mut dyn Read,
    _: &Registry,
    _: usize,
) -> Result<Value> {
    let len = read_len(reader)?;
    let mut bits = vec![0u8; len.div_ceil(8)];
    reader.read_exact(&mut bits)?;

    // Zero any bits past the element count so equality is well defined.
    if len % 8 != 0 {
        if let Some(last) = bits.last_mut() {
            *last &= (1 << (len % 8)) - 1;
        }
    }

    Ok(Value::PackedBooleanArray(PackedBoolArray::from_parts(
        len, bits,
    )))
}

/// Shared wire shape of lists and sets: element id, count, then bare
/// payloads.
fn read_list_parts(
    reader: &mut dyn Read,
    registry: &Registry,
    depth: usize,
) -> Result<(u8, Vec<Value>)> {
    check_depth(depth)?;

    let element = reader.read_u8()?;
    let len = read_len(reader)?;

    if len == 0 {
        // The element id of an empty list is an unused placeholder,
        // conventionally End. It must not be resolved.
        return Ok((u8::from(Tag::End), Vec::new()));
    }

    if element == u8::from(Tag::End) {
        return Err(Error::malformed(
            "non-empty list with End element type",
        ));
    }

    // Resolve once: a declared element type unknown to the registry fails
    // the read before any element is attempted.
    registry.resolve(element)?;

    let mut values = Vec::new();
    for _ in 0..len {
        values.push(read_payload(reader, element, registry, depth + 1)?);
    }

    Ok((element, values))
}

pub(crate) fn read_list(reader: &mut dyn Read, registry: &Registry, depth: usize) -> Result<Value> {
    let (element, values) = read_list_parts(reader, registry, depth)?;
    Ok(Value::List(List::from_parts(element, values)))
}

pub(crate) fn read_set(reader: &mut dyn Read, registry: &Registry, depth: usize) -> Result<Value> {
    let (element, values) = read_list_parts(reader, registry, depth)?;

    // Re-apply uniqueness: a duplicate from a foreign writer collapses to
    // its first occurrence rather than producing an invalid set.
    let mut set = Set::with_element_id(element);
    for value in values {
        set.push(value)?;
    }
    Ok(Value::Set(set))
}

pub(crate) fn read_compound(
    reader: &mut dyn Read,
    registry: &Registry,
    depth: usize,
) -> Result<Value> {
    check_depth(depth)?;

    let mut compound = Compound::new();
    loop {
        let id = reader.read_u8()?;
        if id == u8::from(Tag::End) {
            return Ok(Value::Compound(compound));
        }

        let name = read_string_payload(reader)?;
        let value = read_payload(reader, id, registry, depth + 1)?;
        compound.insert(name, value);
    }
}
