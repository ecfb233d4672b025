//! Parameter error types

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Name is empty or longer than the store allows
    InvalidName,
    /// No parameter registered under this name
    UnknownParameter,
    /// Store is full
    StoreFull,
    /// Read-only parameter cannot be modified
    ReadOnly,
    /// Value outside the registered bounds
    OutOfRange,
    /// Value is not a finite number
    InvalidValue,
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParameterError::InvalidName => write!(f, "invalid parameter name"),
            ParameterError::UnknownParameter => write!(f, "unknown parameter"),
            ParameterError::StoreFull => write!(f, "parameter store full"),
            ParameterError::ReadOnly => write!(f, "parameter is read-only"),
            ParameterError::OutOfRange => write!(f, "parameter value out of range"),
            ParameterError::InvalidValue => write!(f, "invalid parameter value"),
        }
    }
}
