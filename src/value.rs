use std::fmt;

/// The value of a request variable as seen by its consumers.
///
/// A value is either resolved (`valid`) or not. Consumers must treat an
/// invalid value the same as an empty string; [`as_str`](Self::as_str) does
/// that for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableValue {
    data: Vec<u8>,
    valid: bool,
    cacheable: bool,
    not_found: bool,
}

impl VariableValue {
    /// Creates a valid, cacheable value from raw bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            valid: true,
            cacheable: true,
            not_found: false,
        }
    }

    /// Creates a value whose resolution failed.
    ///
    /// The value stays cacheable so the failure is not retried within the
    /// same request.
    pub fn unresolved() -> Self {
        Self {
            data: Vec::new(),
            valid: false,
            cacheable: true,
            not_found: false,
        }
    }

    /// Creates a value for a variable that is legitimately absent.
    pub fn not_found() -> Self {
        Self {
            data: Vec::new(),
            valid: false,
            cacheable: true,
            not_found: true,
        }
    }

    /// Marks the value as not reusable across lookups.
    pub fn no_cacheable(mut self) -> Self {
        self.cacheable = false;
        self
    }

    /// Raw bytes of the value. Empty when the value is not valid.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The value as text, or `""` when it is invalid or not UTF-8.
    pub fn as_str(&self) -> &str {
        if !self.valid {
            return "";
        }
        std::str::from_utf8(&self.data).unwrap_or("")
    }

    /// Length of the value in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the value holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if resolution succeeded.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns `true` if the value may be reused for later lookups.
    pub fn is_cacheable(&self) -> bool {
        self.cacheable
    }

    /// Returns `true` if the variable is absent rather than failed.
    pub fn is_not_found(&self) -> bool {
        self.not_found
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.data))
    }
}
