/// Errors that can occur while decomposing a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Port is non-numeric, longer than five digits, or above 65535
    InvalidPort,
    /// Authority is present but the host is empty
    InvalidHost,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPort => "Invalid port",
            Self::InvalidHost => "Invalid host",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for link decomposition
pub type Result<T> = core::result::Result<T, ParseError>;
