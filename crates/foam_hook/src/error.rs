//! Error types for the interception fabric.

/// Boxed error raised by a host implementation.
pub type BoxedHostError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type returned by every hooked operation.
pub type HookResult<T> = Result<T, HookError>;

/// Errors raised while installing or dispatching hooked operations.
///
/// Installation errors are startup-time and fatal. [`HookError::Delegation`]
/// carries a host failure through any number of replacement layers unchanged.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// A replacement is already installed and the caller did not ask to compose.
    #[error("operation '{operation}' already has a replacement installed")]
    InstallConflict {
        /// Human-readable operation name.
        operation: String,
    },

    /// The host registered a native implementation twice.
    #[error("operation '{operation}' already has a native implementation")]
    DuplicateNative {
        /// Human-readable operation name.
        operation: String,
    },

    /// No native implementation was registered for the operation.
    #[error("operation '{operation}' is not registered")]
    NotRegistered {
        /// Human-readable operation name.
        operation: String,
    },

    /// The typed handle disagrees with the receiver, argument, or output
    /// types the operation was registered with.
    #[error("operation '{operation}' was registered with a different signature")]
    SignatureMismatch {
        /// Human-readable operation name.
        operation: String,
    },

    /// The host's own implementation failed.
    #[error("host operation failed: {source}")]
    Delegation {
        /// The host error.
        #[source]
        source: BoxedHostError,
    },
}

impl HookError {
    /// Wraps a host failure so it can travel through replacement layers.
    pub fn delegation(source: impl Into<BoxedHostError>) -> Self {
        Self::Delegation {
            source: source.into(),
        }
    }

    /// Returns `true` if this error originated in a host implementation.
    pub fn is_delegation(&self) -> bool {
        matches!(self, Self::Delegation { .. })
    }
}
