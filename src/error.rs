//! Contains the Error and Result type used by the decoder and encoder.

/// Errors that can occur while decoding or encoding NBT data.
#[derive(Debug, Clone)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// The category of an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A read would have consumed more bytes than remain in the buffer.
    UnexpectedEof,

    /// A type discriminant outside the twelve the format defines, at the
    /// root, inside a compound, or as a list's declared element type.
    InvalidTag,

    /// A negative or otherwise unusable declared length for a string, array
    /// or list.
    InvalidLength,

    /// Expected string data but it was not valid CESU-8. Contained bytes are
    /// the invalid data.
    Nonunicode(Vec<u8>),

    /// Container nesting exceeded the codec's recursion limit.
    DepthLimit,

    /// Any other errors. Users should not match on this variant and should
    /// instead use a wildcard `_`. Errors in this category may be moved to
    /// new variants.
    Other,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self {
            msg: "eof: unexpectedly ran out of input".into(),
            kind: ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn invalid_tag(t: u8) -> Self {
        Self {
            msg: format!("invalid nbt tag value: {}", t),
            kind: ErrorKind::InvalidTag,
        }
    }

    pub(crate) fn negative_size(size: i32) -> Self {
        Self {
            msg: format!("size was negative: {}", size),
            kind: ErrorKind::InvalidLength,
        }
    }

    pub(crate) fn size_too_large() -> Self {
        Self {
            msg: "size too large".into(),
            kind: ErrorKind::InvalidLength,
        }
    }

    pub(crate) fn nonunicode(data: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid nbt string, non-unicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::Nonunicode(data.to_vec()),
        }
    }

    pub(crate) fn depth_limit() -> Self {
        Self {
            msg: "nesting too deep".into(),
            kind: ErrorKind::DepthLimit,
        }
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Other,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: e.to_string(),
                kind: ErrorKind::UnexpectedEof,
            },
            _ => Self {
                msg: e.to_string(),
                kind: ErrorKind::Other,
            },
        }
    }
}
