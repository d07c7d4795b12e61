use super::{ErrorCode, LicensingError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to LicensingError with context
    fn to_licensing(self, context: impl Into<String>) -> Result<T, LicensingError>;

    fn to_config_error(self, message: impl Into<String>) -> Result<T, LicensingError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_licensing(self, context: impl Into<String>) -> Result<T, LicensingError> {
        self.map_err(|e| LicensingError::other(context).with_source(e))
    }

    fn to_config_error(self, message: impl Into<String>) -> Result<T, LicensingError> {
        self.map_err(|e| LicensingError::config(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// No file was attached to the upload
    pub fn upload_missing() -> LicensingError {
        LicensingError::input_with_code(ErrorCode::INPUT_MISSING, "no file uploaded", None)
    }

    /// Uploaded filename does not carry an accepted extension
    pub fn upload_type_invalid(filename: &str, accepted: &[String]) -> LicensingError {
        LicensingError::input_with_code(
            ErrorCode::INPUT_TYPE_INVALID,
            format!("expected one of: {}", accepted.join(", ")),
            Some(filename.to_string()),
        )
    }

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<Path>) -> LicensingError {
        LicensingError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
    }

    /// Create an invalid-value error for a configuration field
    pub fn config_invalid_value(field: &str, reason: impl Into<String>) -> LicensingError {
        LicensingError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("{}: {}", field, reason.into()),
        )
    }

    /// Reference dataset file does not exist
    pub fn reference_not_found(path: impl AsRef<Path>) -> LicensingError {
        LicensingError::reference_with_code(
            ErrorCode::REFERENCE_NOT_FOUND,
            "reference dataset not found",
            Some(path.as_ref().to_path_buf()),
        )
    }
}
