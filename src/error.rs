//! Input error kinds.
//!
//! Every variant renders as the single line the CLI prints.

use thiserror::Error;

/// Errors raised while validating user input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Wrong number of arguments.
    #[error("Error: Usage: <program> <ip/cidr> OR <ip> <subnet mask> OR <ip> /cidr")]
    InvalidUsage,

    /// Single argument does not have the `IP/CIDR` shape.
    #[error("Error: Invalid input format. Expected IP/CIDR like '192.168.0.1/24'.")]
    InvalidInputFormat,

    /// Address octets out of range, non-numeric or with leading zeros.
    #[error("Error: Invalid IP format.")]
    InvalidAddressFormat,

    /// Neither a prefix length in 0-32 nor a contiguous dotted mask.
    #[error("Error: Invalid CIDR/mask format. Expected: /<0-32> or valid subnet mask.")]
    InvalidMaskFormat,
}

pub type Result<T> = std::result::Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::InvalidAddressFormat.to_string(),
            "Error: Invalid IP format."
        );
        assert!(InputError::InvalidMaskFormat
            .to_string()
            .starts_with("Error: Invalid CIDR/mask format."));
        assert!(InputError::InvalidUsage.to_string().starts_with("Error: Usage:"));
    }
}
