//! Encoding of NBT trees into their canonical byte form.
//!
//! The encoder mirrors the decoder: a depth-first walk writing tag byte,
//! name and payload for every named value. Compound members are written in
//! key order, so encoding is deterministic and round-trips.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Compound, List, Tag, Value, MAX_DEPTH};

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag.into())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let data = cesu8::to_java_cesu8(s);
        let len: u16 = data
            .len()
            .try_into()
            .map_err(|_| Error::bespoke("string too long for nbt"))?;
        self.write_u16::<BigEndian>(len)?;
        self.write_all(&data)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into().map_err(|_| Error::bespoke("len too large"))?,
        )?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}

/// Encode a named value to a byte buffer. Feeding the result back through
/// [`from_bytes`][`crate::from_bytes`] reconstructs a structurally equal
/// tree. The output is uncompressed; compress it before storage if the
/// consumer expects GZip/Zlib data.
pub fn to_bytes(name: &str, value: &Value) -> Result<Vec<u8>> {
    let mut result = Vec::new();
    to_writer(&mut result, name, value)?;
    Ok(result)
}

/// Encode a named value to a writer. See [`to_bytes`].
pub fn to_writer<W: Write>(writer: W, name: &str, value: &Value) -> Result<()> {
    let mut encoder = Encoder { writer };
    encoder.named_value(name, value, 0)
}

struct Encoder<W: Write> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    fn named_value(&mut self, name: &str, value: &Value, depth: usize) -> Result<()> {
        self.writer.write_tag(value.tag())?;
        self.writer.write_size_prefixed_str(name)?;
        self.payload(value, depth)
    }

    fn payload(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Byte(v) => self.writer.write_i8(*v)?,
            Value::Short(v) => self.writer.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.writer.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.writer.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.writer.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.writer.write_f64::<BigEndian>(*v)?,
            Value::ByteArray(v) => {
                self.writer.write_len(v.len())?;
                for b in v.iter() {
                    self.writer.write_i8(*b)?;
                }
            }
            Value::String(v) => self.writer.write_size_prefixed_str(v)?,
            Value::List(v) => self.list(v, depth)?,
            Value::Compound(v) => self.compound(v, depth)?,
            Value::IntArray(v) => {
                self.writer.write_len(v.len())?;
                for i in v.iter() {
                    self.writer.write_i32::<BigEndian>(*i)?;
                }
            }
        }
        Ok(())
    }

    fn list(&mut self, list: &List, depth: usize) -> Result<()> {
        if depth >= MAX_DEPTH {
            return Err(Error::depth_limit());
        }

        self.writer.write_tag(list.element_tag())?;
        self.writer.write_len(list.len())?;
        for value in list.iter() {
            // Element tags and names are implied by the list header.
            self.payload(value, depth + 1)?;
        }
        Ok(())
    }

    fn compound(&mut self, compound: &Compound, depth: usize) -> Result<()> {
        if depth >= MAX_DEPTH {
            return Err(Error::depth_limit());
        }

        for (name, value) in compound.iter() {
            self.named_value(name, value, depth + 1)?;
        }
        self.writer.write_tag(Tag::End)?;
        Ok(())
    }
}
