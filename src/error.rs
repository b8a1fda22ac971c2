//! Contains the Error and Result type used throughout the crate.

/// Error produced while encoding, decoding, registering types, or using the
/// typed accessors. Carries a human readable message and a machine matchable
/// [`ErrorKind`].
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
    /// Underlying I/O failure. Propagated unchanged, never retried here.
    Io,

    /// EOF that occurred part way through some value. A truncated document.
    UnexpectedEof,

    /// A type id on the wire, or a declared list/set element type, has no
    /// registered descriptor. Contains the offending id.
    UnknownType(u8),

    /// Structural violation: negative counts, a non-empty list declared with
    /// the End element type, a missing compound terminator, excessive
    /// nesting, or a length that cannot be represented on the wire.
    Malformed,

    /// A second, distinct descriptor claimed an already-occupied type id.
    /// The prior descriptor is preserved. Contains the contested id.
    DuplicateType(u8),

    /// A typed accessor was invoked against a value of a different variant.
    TypeMismatch,

    /// An element pushed onto a list did not match the list's element type.
    HeterogeneousList,

    /// A non-defaulting typed accessor was invoked for an absent key.
    MissingKey,

    /// Expected unicode data but was not valid. Contained bytes are the
    /// invalid data.
    Nonunicode(Vec<u8>),
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn io(e: std::io::Error) -> Self {
        Self {
            msg: format!("io error: {}", e),
            kind: ErrorKind::Io,
        }
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self {
            msg: "eof: unexpectedly ran out of input".into(),
            kind: ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn unknown_type(id: u8) -> Self {
        Self {
            msg: format!("unknown tag type id: {}", id),
            kind: ErrorKind::UnknownType(id),
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Malformed,
        }
    }

    pub(crate) fn no_root_compound(id: u8) -> Self {
        Self {
            msg: format!("invalid document: root tag was {}, not a compound", id),
            kind: ErrorKind::Malformed,
        }
    }

    pub(crate) fn duplicate_type(id: u8, existing: &str, rejected: &str) -> Self {
        Self {
            msg: format!(
                "tag type id {} already registered as '{}', rejecting '{}'",
                id, existing, rejected
            ),
            kind: ErrorKind::DuplicateType(id),
        }
    }

    pub(crate) fn type_mismatch(name: &str, expected: &str, found: &str) -> Self {
        Self {
            msg: format!(
                "field '{}': expected {} tag, found {}",
                name, expected, found
            ),
            kind: ErrorKind::TypeMismatch,
        }
    }

    pub(crate) fn heterogeneous_list(expected: u8, found: u8) -> Self {
        Self {
            msg: format!(
                "list holds elements of type id {}, cannot add type id {}",
                expected, found
            ),
            kind: ErrorKind::HeterogeneousList,
        }
    }

    pub(crate) fn missing_key(name: &str) -> Self {
        Self {
            msg: format!("no field named '{}'", name),
            kind: ErrorKind::MissingKey,
        }
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid string, non-unicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::Nonunicode(data.to_vec()),
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
            std::io::ErrorKind::UnexpectedEof => Self::unexpected_eof(),
            _ => Self::io(e),
        }
    }
}
