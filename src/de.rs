//! Decoding of NBT data from an uncompressed byte buffer.
//!
//! The decoder is a recursive descent over the input, driven entirely by the
//! one-byte tag read at the start of every named value. Children are fully
//! constructed before being attached to their parent, and any wire-format
//! error aborts the whole decode. No partial tree is ever returned.

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::input::{try_size, Slice};
use crate::{ByteArray, Compound, IntArray, List, Tag, Value, MAX_DEPTH};

/// Decode a single named value from an uncompressed buffer, typically the
/// root compound of a document. Returns the root's name and value.
///
/// The buffer must already be decompressed; trailing bytes after the root
/// value are ignored.
///
/// ```
/// use nbtree::{from_bytes, nbt, to_bytes};
///
/// let payload = to_bytes("", &nbt!({"score": 42})).unwrap();
/// let (name, value) = from_bytes(&payload).unwrap();
/// assert_eq!(name, "");
/// ```
pub fn from_bytes(input: &[u8]) -> Result<(String, Value)> {
    let mut decoder = Decoder {
        input: Slice::new(input),
    };

    match decoder.named_value(0)? {
        Some(root) => Ok(root),
        // End terminates compounds; it never appears as a named value.
        None => Err(Error::invalid_tag(Tag::End.into())),
    }
}

struct Decoder<'a> {
    input: Slice<'a>,
}

impl<'a> Decoder<'a> {
    /// Decode one `tag + name + payload` sequence. `None` is the End
    /// sentinel, which callers use to stop compound parsing.
    fn named_value(&mut self, depth: usize) -> Result<Option<(String, Value)>> {
        let tag = self.input.consume_tag()?;
        if tag == Tag::End {
            return Ok(None);
        }

        let name = self.input.consume_str()?;
        let value = self.payload(tag, depth)?;
        Ok(Some((name, value)))
    }

    fn payload(&mut self, tag: Tag, depth: usize) -> Result<Value> {
        match tag {
            // Unreachable through named_value and guarded in the List arm,
            // but an End payload is never decodable either way.
            Tag::End => Err(Error::invalid_tag(Tag::End.into())),
            Tag::Byte => Ok(Value::Byte(self.input.consume_byte()? as i8)),
            Tag::Short => Ok(Value::Short(self.input.consume_i16()?)),
            Tag::Int => Ok(Value::Int(self.input.consume_i32()?)),
            Tag::Long => Ok(Value::Long(self.input.consume_i64()?)),
            Tag::Float => Ok(Value::Float(self.input.consume_f32()?)),
            Tag::Double => Ok(Value::Double(self.input.consume_f64()?)),
            Tag::ByteArray => {
                let size = self.input.consume_i32()?;
                let bs = self.input.consume_bytes(try_size(size, 1)?)?;
                let data = bs.iter().map(|&b| b as i8).collect();
                Ok(Value::ByteArray(ByteArray::new(data)))
            }
            Tag::String => Ok(Value::String(self.input.consume_str()?)),
            Tag::List => {
                let element_tag = self.input.consume_tag()?;
                let len = try_size(self.input.consume_i32()?, 1)?;

                if element_tag == Tag::End && len > 0 {
                    return Err(Error::invalid_tag(Tag::End.into()));
                }
                if depth >= MAX_DEPTH {
                    return Err(Error::depth_limit());
                }

                let mut list = List::new(element_tag);
                for _ in 0..len {
                    // Elements are payload-only: the tag and name are implied
                    // by the list header.
                    list.push(self.payload(element_tag, depth + 1)?);
                }
                Ok(Value::List(list))
            }
            Tag::Compound => {
                if depth >= MAX_DEPTH {
                    return Err(Error::depth_limit());
                }

                let mut compound = Compound::new();
                while let Some((name, value)) = self.named_value(depth + 1)? {
                    compound.insert(name, value);
                }
                Ok(Value::Compound(compound))
            }
            Tag::IntArray => {
                let size = self.input.consume_i32()?;
                let count = try_size(size, 1)?;
                // Bounds-check the whole array before allocating for it.
                let mut bs = self
                    .input
                    .consume_bytes(try_size(size, std::mem::size_of::<i32>())?)?;

                let mut data = Vec::with_capacity(count);
                for _ in 0..count {
                    data.push(bs.read_i32::<BigEndian>()?);
                }
                Ok(Value::IntArray(IntArray::new(data)))
            }
        }
    }
}
