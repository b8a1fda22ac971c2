//! Top-level document I/O: glues a byte channel, the compression adapter
//! and the codec together.

use std::io::{Read, Write};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use log::trace;

use crate::compound::Compound;
use crate::error::Result;
use crate::registry::Registry;
use crate::{de, ser};

/// How the document's byte stream is wrapped before the codec touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Raw, uncompressed bytes.
    None,
    /// GZip, the scheme classic NBT files on disk use.
    Gzip,
    /// Zlib, the scheme region-style storage uses.
    Zlib,
}

/// Decode exactly one document from the channel, decompressing with the
/// given scheme. Trailing bytes after the root compound are ignored. The
/// channel is consumed and dropped whether or not decoding succeeds.
pub fn read<R: Read>(reader: R, compression: Compression, registry: &Registry) -> Result<Compound> {
    trace!("reading document, compression {:?}", compression);
    match compression {
        Compression::None => de::from_reader(reader, registry),
        Compression::Gzip => de::from_reader(GzDecoder::new(reader), registry),
        Compression::Zlib => de::from_reader(ZlibDecoder::new(reader), registry),
    }
}

/// Encode one document to the channel, compressing with the given scheme.
/// The compression stream is finished and the channel flushed before
/// returning; the channel is dropped whether or not writing succeeds.
pub fn write<W: Write>(writer: W, compound: &Compound, compression: Compression) -> Result<()> {
    trace!("writing document, compression {:?}", compression);
    match compression {
        Compression::None => {
            let mut writer = writer;
            ser::to_writer(&mut writer, compound)?;
            Ok(writer.flush()?)
        }
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(writer, flate2::Compression::default());
            ser::to_writer(&mut encoder, compound)?;
            let mut writer = encoder.finish()?;
            Ok(writer.flush()?)
        }
        Compression::Zlib => {
            let mut encoder = ZlibEncoder::new(writer, flate2::Compression::default());
            ser::to_writer(&mut encoder, compound)?;
            let mut writer = encoder.finish()?;
            Ok(writer.flush()?)
        }
    }
}
