//! nbtree is an owned tag tree and binary codec for NBT data. This format is
//! used to store structured world and player state as a compact, big-endian
//! binary tree of named tags.
//!
//! * For the tree data model see [`Value`], [`Compound`] and [`List`].
//! * For decoding see [`from_bytes`], for encoding see [`to_bytes`] and
//!   [`to_writer`].
//! * For building trees in code see the [`nbt!`] macro.
//!
//! ```toml
//! [dependencies]
//! nbtree = "0.2"
//! ```
//!
//! The codec works on uncompressed buffers. NBT on disk is almost always
//! GZip or Zlib compressed, so decompression happens before [`from_bytes`]
//! and compression after [`to_bytes`]:
//!
//! ```no_run
//! use flate2::read::GzDecoder;
//! use nbtree::from_bytes;
//! use std::io::Read;
//!
//! fn main() {
//!     let args: Vec<_> = std::env::args().skip(1).collect();
//!     let file = std::fs::File::open(args[0].clone()).unwrap();
//!
//!     // Player dat files are compressed with GZip.
//!     let mut decoder = GzDecoder::new(file);
//!     let mut data = vec![];
//!     decoder.read_to_end(&mut data).unwrap();
//!
//!     let (name, player) = from_bytes(data.as_slice()).unwrap();
//!     println!("{}: {}", name, player);
//! }
//! ```
//!
//! # Building and inspecting trees
//!
//! ```
//! use nbtree::{nbt, from_bytes, to_bytes, Value};
//!
//! let pos = nbt!({
//!     "x": 120,
//!     "z": -42,
//!     "dimension": "overworld",
//! });
//!
//! let bs = to_bytes("Pos", &pos).unwrap();
//! let (name, decoded) = from_bytes(&bs).unwrap();
//!
//! assert_eq!(name, "Pos");
//! assert_eq!(decoded, pos);
//!
//! if let Value::Compound(pos) = decoded {
//!     assert_eq!(pos.int("x"), 120);
//!     assert_eq!(pos.string("dimension"), "overworld");
//! }
//! ```

pub mod error;

mod arrays;
mod compound;
mod de;
mod input;
mod list;
mod macros;
mod ser;
mod value;

pub use arrays::{ByteArray, IntArray};
pub use compound::Compound;
pub use de::from_bytes;
pub use list::List;
pub use ser::{to_bytes, to_writer};
pub use value::Value;

#[cfg(test)]
mod test;

use std::fmt;

/// Maximum container nesting the codec will recurse into. Both decode and
/// encode fail with [`error::ErrorKind::DepthLimit`] beyond this rather than
/// overflow the stack on adversarial input.
pub(crate) const MAX_DEPTH: usize = 512;

/// An NBT tag type. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
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
    /// Represents an array of Byte (i8).
    ByteArray = 7,
    /// Represents a string.
    String = 8,
    /// Represents a list of other values, all of one declared element type.
    List = 9,
    /// Represents a struct-like mapping from names to values.
    Compound = 10,
    /// Represents an array of Int (i32).
    IntArray = 11,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The tag set is fixed by the
// format and will never be extended, so this isn't a burden.
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
            12..=u8::MAX => return Err(()),
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
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::End => "TAG_End",
            Tag::Byte => "TAG_Byte",
            Tag::Short => "TAG_Short",
            Tag::Int => "TAG_Int",
            Tag::Long => "TAG_Long",
            Tag::Float => "TAG_Float",
            Tag::Double => "TAG_Double",
            Tag::ByteArray => "TAG_Byte_Array",
            Tag::String => "TAG_String",
            Tag::List => "TAG_List",
            Tag::Compound => "TAG_Compound",
            Tag::IntArray => "TAG_Int_Array",
        };
        f.write_str(name)
    }
}
