//! Error types for the few operations that can be misused.
//!
//! Most helpers in this crate never fail: an empty input yields `None` or a
//! default, and index problems are reported through outcome enums such as
//! [`SwapOutcome`](crate::SwapOutcome). [`CollectionError`] is reserved for
//! caller programming errors, where a required argument was missing.

/// Severity level of an error, used for categorization and logging priority.
///
/// - **Validation**: the call was rejected and nothing was mutated
/// - **CallerBug**: the caller broke a precondition that should never happen
///   in correct code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Input rejected; the container is untouched and the call can be retried
    /// with a valid argument.
    Validation,

    /// A required argument was absent. Indicates a bug at the call site.
    CallerBug,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::CallerBug => "caller_bug",
        }
    }

    /// Returns true if this error points at a bug in the calling code.
    pub const fn is_caller_bug(&self) -> bool {
        matches!(self, Self::CallerBug)
    }
}

/// Errors reported by collection helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// A map operation was given no key.
    ///
    /// The map is left unmodified.
    #[error("key was null")]
    NullKey,

    /// A required argument was absent.
    #[error("argument `{0}` was null")]
    NullArgument(&'static str),
}

impl CollectionError {
    /// Returns the severity level of this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NullKey => ErrorSeverity::Validation,
            Self::NullArgument(_) => ErrorSeverity::CallerBug,
        }
    }

    /// Returns a static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NullKey => "COLLECTION_NULL_KEY",
            Self::NullArgument(_) => "COLLECTION_NULL_ARGUMENT",
        }
    }
}

pub type Result<T> = core::result::Result<T, CollectionError>;
