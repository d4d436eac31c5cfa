use std::fmt;

use crate::{ByteArray, Compound, IntArray, List, Tag};

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively owned, so cloning a value deep-copies the whole subtree and
/// dropping it releases every descendant.
///
/// Names are structural and live outside the node: a compound member's name
/// is its key in the [`Compound`], list elements are unnamed, and the root
/// value's name travels alongside it through
/// [`from_bytes`][`crate::from_bytes`] and [`to_bytes`][`crate::to_bytes`].
///
/// ```
/// # use nbtree::{from_bytes, Value};
/// # use nbtree::error::Result;
/// #
/// # fn main() -> Result<()> {
/// #   let buf = nbtree::to_bytes("", &nbtree::nbt!({"DataVersion": 2230}))?;
///     let (_, value) = from_bytes(buf.as_slice())?;
///     if let Value::Compound(level) = value {
///         println!("Version: {}", level.int("DataVersion"));
///     }
/// #   Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(ByteArray),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(IntArray),
}

impl Value {
    /// The tag discriminant of this value. Fixed for the value's lifetime.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Byte(v) => Some(v as u64),
            Value::Short(v) => Some(v as u64),
            Value::Int(v) => Some(v as u64),
            Value::Long(v) => Some(v as u64),
            Value::Float(v) => Some(v as u64),
            Value::Double(v) => Some(v as u64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(u8, Byte, as i8);
from!(i16, Short);
from!(u16, Short, as i16);
from!(i32, Int);
from!(u32, Int, as i32);
from!(i64, Long);
from!(u64, Long, as i64);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}
impl From<&bool> for Value {
    fn from(val: &bool) -> Self {
        Self::Byte(i8::from(*val))
    }
}

// ------------- Display -------------
//
// The classic rendering: `TAG_Kind("name"): payload`, containers with an
// entry count and a brace-delimited, indented body.

fn pad(f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        f.write_str("  ")?;
    }
    Ok(())
}

fn fmt_header(f: &mut fmt::Formatter<'_>, tag: Tag, name: &str) -> fmt::Result {
    write!(f, "{}", tag)?;
    if !name.is_empty() {
        write!(f, "(\"{}\")", name)?;
    }
    f.write_str(": ")
}

pub(crate) fn fmt_value(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    name: &str,
    indent: usize,
) -> fmt::Result {
    match value {
        Value::List(list) => return fmt_list(f, list, name, indent),
        Value::Compound(compound) => return fmt_compound(f, compound, name, indent),
        _ => {}
    }

    pad(f, indent)?;
    fmt_header(f, value.tag(), name)?;
    match value {
        Value::Byte(v) => write!(f, "{}", v),
        Value::Short(v) => write!(f, "{}", v),
        Value::Int(v) => write!(f, "{}", v),
        Value::Long(v) => write!(f, "{}", v),
        Value::Float(v) => write!(f, "{}", v),
        Value::Double(v) => write!(f, "{}", v),
        Value::ByteArray(v) => write!(f, "[{} bytes]", v.len()),
        Value::String(v) => f.write_str(v),
        Value::IntArray(v) => write!(f, "[{} ints]", v.len()),
        Value::List(_) | Value::Compound(_) => unreachable!("handled above"),
    }
}

pub(crate) fn fmt_list(
    f: &mut fmt::Formatter<'_>,
    list: &List,
    name: &str,
    indent: usize,
) -> fmt::Result {
    pad(f, indent)?;
    fmt_header(f, Tag::List, name)?;
    writeln!(
        f,
        "{} entries of type {}",
        list.len(),
        list.element_tag()
    )?;
    pad(f, indent)?;
    writeln!(f, "{{")?;
    for value in list.iter() {
        fmt_value(f, value, "", indent + 1)?;
        writeln!(f)?;
    }
    pad(f, indent)?;
    write!(f, "}}")
}

pub(crate) fn fmt_compound(
    f: &mut fmt::Formatter<'_>,
    compound: &Compound,
    name: &str,
    indent: usize,
) -> fmt::Result {
    pad(f, indent)?;
    fmt_header(f, Tag::Compound, name)?;
    writeln!(f, "{} entries", compound.len())?;
    pad(f, indent)?;
    writeln!(f, "{{")?;
    for (member_name, value) in compound.iter() {
        fmt_value(f, value, member_name, indent + 1)?;
        writeln!(f)?;
    }
    pad(f, indent)?;
    write!(f, "}}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_value(f, self, "", 0)
    }
}
