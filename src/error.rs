use std::path::PathBuf;

/// Error type for `.SRCINFO` parsing and lookups.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A line could not be applied to the document.
    ///
    /// `line` is 1-based and `text` is the trimmed line as it appeared in
    /// the input.
    #[error("line {line}: {kind}: {text}")]
    Line {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        text: String,
        /// What went wrong.
        kind: LineError,
    },

    /// A required field is missing once the whole input has been read.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The requested split package is not declared by the package base.
    #[error("package \"{name}\" is not part of the package base \"{pkgbase}\"")]
    PackageNotFound {
        /// The requested `pkgname`.
        name: String,
        /// The `pkgbase` that was searched.
        pkgbase: String,
    },

    /// The input file could not be read.
    #[error("unable to read {}: {message}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error, rendered.
        message: String,
    },
}

/// Reason a single line was rejected.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LineError {
    /// The line has no `=` separator.
    #[error("line does not contain '='")]
    MissingEquals,

    /// The text before `=` is empty.
    #[error("key is empty")]
    EmptyKey,

    /// A key has an empty `_distro` or `_arch` qualifier, as in `depends_`.
    #[error("invalid key \"{0}\": empty qualifier")]
    EmptyQualifier(String),

    /// `pkgbase` appeared a second time.
    #[error("key \"pkgbase\" can not occur more than once")]
    DuplicatePkgbase,

    /// `pkgname` appeared before `pkgbase`.
    #[error("key \"pkgname\" can not occur before pkgbase")]
    PkgnameBeforePkgbase,

    /// A `pkgname` header with no name.
    #[error("pkgname can not be empty")]
    EmptyPkgname,

    /// The same `pkgname` was declared twice.
    #[error("pkgname \"{0}\" can not occur more than once")]
    DuplicatePkgname(String),

    /// A field that belongs to the package base appeared inside a
    /// `pkgname` section.
    #[error("key \"{0}\" can not occur after pkgname")]
    BaseFieldAfterPkgname(String),

    /// A field appeared before any `pkgbase`.
    #[error("key \"{0}\" can not occur before pkgbase")]
    FieldBeforePkgbase(String),

    /// The key carries an architecture the document does not declare.
    #[error("invalid key \"{key}\": unsupported arch \"{arch}\"")]
    UnsupportedArch {
        /// The full key as written.
        key: String,
        /// The architecture qualifier.
        arch: String,
    },

    /// The key is qualified with `any`, which is not a real architecture.
    #[error("invalid key \"{key}\": arch \"{arch}\" is not allowed")]
    ForbiddenArch {
        /// The full key as written.
        key: String,
        /// The architecture qualifier.
        arch: String,
    },

    /// The key is not a recognised `.SRCINFO` field.
    #[error("unknown key \"{0}\"")]
    UnknownKey(String),
}

impl LineError {
    /// Whether the line itself is malformed.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            LineError::MissingEquals | LineError::EmptyKey | LineError::EmptyQualifier(_)
        )
    }

    /// Whether a field or header appeared out of order.
    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            LineError::DuplicatePkgbase
                | LineError::PkgnameBeforePkgbase
                | LineError::EmptyPkgname
                | LineError::DuplicatePkgname(_)
                | LineError::BaseFieldAfterPkgname(_)
                | LineError::FieldBeforePkgbase(_)
        )
    }

    /// Whether an architecture qualifier was rejected.
    pub fn is_architecture(&self) -> bool {
        matches!(
            self,
            LineError::UnsupportedArch { .. } | LineError::ForbiddenArch { .. }
        )
    }
}

impl Error {
    /// The per-line reason, if this is a line error.
    pub fn line_error(&self) -> Option<&LineError> {
        match self {
            Error::Line { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Result type for srcinfo operations.
pub type Result<T> = std::result::Result<T, Error>;
