//! Binary encoding. Walks the value tree recursively, emitting the wire
//! format described in the crate docs. The shape mirrors [`crate::de`] step
//! for step.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::compound::Compound;
use crate::error::{Error, Result};
use crate::{Tag, Value, MAX_DEPTH};

/// Encode a document to a writer with the conventional empty root name.
pub fn to_writer<W: Write>(writer: W, compound: &Compound) -> Result<()> {
    to_writer_named(writer, compound, "")
}

/// Encode a document to a writer, naming the root compound.
pub fn to_writer_named<W: Write>(mut writer: W, compound: &Compound, root_name: &str) -> Result<()> {
    writer.write_u8(Tag::Compound.into())?;
    write_string_payload(&mut writer, root_name)?;
    write_compound_payload(&mut writer, compound, 0)
}

/// Encode a document to a fresh byte buffer.
pub fn to_bytes(compound: &Compound) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    to_writer(&mut buf, compound)?;
    Ok(buf)
}

fn check_depth(depth: usize) -> Result<()> {
    if depth >= MAX_DEPTH {
        Err(Error::malformed("reached maximum nesting depth"))
    } else {
        Ok(())
    }
}

/// The i32 count prefix of arrays, lists and sets.
fn write_len<W: Write>(writer: &mut W, len: usize) -> Result<()> {
    match i32::try_from(len) {
        Ok(len) => Ok(writer.write_i32::<BigEndian>(len)?),
        Err(_) => Err(Error::malformed(format!(
            "element count {} exceeds i32::MAX",
            len
        ))),
    }
}

fn write_string_payload<W: Write>(writer: &mut W, s: &str) -> Result<()> {
    let encoded = cesu8::to_java_cesu8(s);
    match u16::try_from(encoded.len()) {
        Ok(len) => writer.write_u16::<BigEndian>(len)?,
        Err(_) => {
            return Err(Error::malformed(format!(
                "string of {} bytes exceeds u16::MAX",
                encoded.len()
            )))
        }
    }
    Ok(writer.write_all(&encoded)?)
}

pub(crate) fn write_payload<W: Write>(writer: &mut W, value: &Value, depth: usize) -> Result<()> {
    match value {
        Value::Byte(v) => Ok(writer.write_i8(*v)?),
        Value::Short(v) => Ok(writer.write_i16::<BigEndian>(*v)?),
        Value::Int(v) => Ok(writer.write_i32::<BigEndian>(*v)?),
        Value::Long(v) => Ok(writer.write_i64::<BigEndian>(*v)?),
        Value::Float(v) => Ok(writer.write_f32::<BigEndian>(*v)?),
        Value::Double(v) => Ok(writer.write_f64::<BigEndian>(*v)?),
        Value::Char(v) => Ok(writer.write_u16::<BigEndian>(*v)?),
        Value::Boolean(flags) => Ok(writer.write_u8(flags.bits())?),
        Value::String(s) => write_string_payload(writer, s),
        Value::ByteArray(values) => {
            write_len(writer, values.len())?;
            for v in values {
                writer.write_i8(*v)?;
            }
            Ok(())
        }
        Value::ShortArray(values) => {
            write_len(writer, values.len())?;
            for v in values {
                writer.write_i16::<BigEndian>(*v)?;
            }
            Ok(())
        }
        Value::IntArray(values) => {
            write_len(writer, values.len())?;
            for v in values {
                writer.write_i32::<BigEndian>(*v)?;
            }
            Ok(())
        }
        Value::LongArray(values) => {
            write_len(writer, values.len())?;
            for v in values {
                writer.write_i64::<BigEndian>(*v)?;
            }
            Ok(())
        }
        Value::FloatArray(values) => {
            write_len(writer, values.len())?;
            for v in values {
                writer.write_f32::<BigEndian>(*v)?;
            }
            Ok(())
        }
        Value::DoubleArray(values) => {
            write_len(writer, values.len())?;
            for v in values {
                writer.write_f64::<BigEndian>(*v)?;
            }
            Ok(())
        }
        Value::CharArray(values) => {
            write_len(writer, values.len())?;
            for v in values {
                writer.write_u16::<BigEndian>(*v)?;
            }
            Ok(())
        }
        Value::BooleanArray(values) => {
            write_len(writer, values.len())?;
            for v in values {
                writer.write_u8(*v as u8)?;
            }
            Ok(())
        }
        Value::PackedBooleanArray(arr) => {
            write_len(writer, arr.len())?;
            Ok(writer.write_all(arr.as_bytes())?)
        }
        Value::List(list) => {
            write_list_payload(writer, list.element_id(), list.values(), depth)
        }
        // Sets cannot hold duplicates, so the count written below already
        // reflects unique elements.
        Value::Set(set) => write_list_payload(writer, set.element_id(), set.values(), depth),
        Value::Compound(compound) => {
            check_depth(depth)?;
            write_compound_payload(writer, compound, depth)
        }
        Value::Custom(custom) => custom.write_payload(writer),
    }
}

/// Shared wire shape of lists and sets: element id, count, then bare
/// payloads with no per-element type byte or name.
fn write_list_payload<W: Write>(
    writer: &mut W,
    element: u8,
    values: &[Value],
    depth: usize,
) -> Result<()> {
    check_depth(depth)?;

    if values.is_empty() {
        // Placeholder element id; decoders must not resolve it.
        writer.write_u8(Tag::End.into())?;
        return write_len(writer, 0);
    }

    writer.write_u8(element)?;
    write_len(writer, values.len())?;
    for value in values {
        write_payload(writer, value, depth + 1)?;
    }
    Ok(())
}

pub(crate) fn write_compound_payload<W: Write>(
    writer: &mut W,
    compound: &Compound,
    depth: usize,
) -> Result<()> {
    for (name, value) in compound {
        writer.write_u8(value.tag_id())?;
        write_string_payload(writer, name)?;
        write_payload(writer, value, depth + 1)?;
    }
    Ok(writer.write_u8(Tag::End.into())?)
}
