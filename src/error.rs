use nix::errno::Errno;
use thiserror::Error;

/// Result type for registration and configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the configuration stage.
///
/// Resolution failures are normally recovered inside the variable handler and
/// only show up here when [`resolve`](crate::resolve) is called directly.
#[derive(Debug, Error)]
pub enum Error {
    /// A variable with this name is already registered and is not changeable.
    #[error("duplicate variable \"${name}\"")]
    DuplicateVariable {
        /// The conflicting variable name
        name: String,
    },

    /// Resolving a variable failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Why a `$request_vrf` lookup produced no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The request pool could not provide the name buffer.
    #[error("could not allocate memory for $request_vrf: {0}")]
    AllocationExhausted(#[from] AllocError),

    /// `getsockopt(SO_BINDTODEVICE)` failed on the connection socket.
    #[error("could not get interface to which connection socket is bound: {errno}")]
    PlatformQueryFailed {
        /// The OS error reported by the query
        errno: Errno,
    },
}

impl ResolveError {
    /// Returns the OS error for query failures.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            Self::PlatformQueryFailed { errno } => Some(*errno),
            Self::AllocationExhausted(_) => None,
        }
    }
}

/// A request pool ran out of budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("requested {requested} bytes, {available} available")]
pub struct AllocError {
    /// Bytes asked for
    pub requested: usize,
    /// Bytes left in the pool at the time of the request
    pub available: usize,
}
