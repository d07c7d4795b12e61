use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// The unified error type for agent-licensing
#[derive(Error, Debug)]
pub enum LicensingError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Upload error: {message}")]
    Input {
        code: u16,
        message: String,
        filename: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Parse error: {message}")]
    Parse {
        code: u16,
        message: String,
        line: Option<u64>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] Reference data error: {message}")]
    Reference {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl LicensingError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message)
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an upload input error with specific code
    pub fn input_with_code(
        code: u16,
        message: impl Into<String>,
        filename: Option<String>,
    ) -> Self {
        Self::Input {
            code,
            message: message.into(),
            filename,
            source: None,
        }
    }

    /// Create a parse error with specific code and line
    pub fn parse_with_code(code: u16, message: impl Into<String>, line: Option<u64>) -> Self {
        Self::Parse {
            code,
            message: message.into(),
            line,
            source: None,
        }
    }

    /// Create a reference data error with default code
    pub fn reference(message: impl Into<String>) -> Self {
        Self::reference_with_code(ErrorCode::REFERENCE_GENERIC, message, None)
    }

    /// Create a reference data error with specific code and path
    pub fn reference_with_code(
        code: u16,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Self {
        Self::Reference {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(mut self, source: impl Into<BoxedSource>) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Input { source: src, .. }
            | Self::Parse { source: src, .. }
            | Self::Reference { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Input { message, .. }
            | Self::Parse { message, .. }
            | Self::Reference { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Input { .. } => 3,
            Self::Parse { .. } => 4,
            Self::Reference { .. } => 5,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::Parse { code, .. }
            | Self::Reference { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Input {
                message, filename, ..
            } => match filename {
                Some(name) => format!("Upload '{}' rejected: {}", name, message),
                None => format!("Upload rejected: {}", message),
            },
            Self::Parse { message, line, .. } => match line {
                Some(line) => format!("CSV problem on line {}: {}", line, message),
                None => format!("CSV problem: {}", message),
            },
            Self::Reference { message, path, .. } => match path {
                Some(p) => format!("License data at {} unavailable: {}", p.display(), message),
                None => format!("License data unavailable: {}", message),
            },
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Whether this error was caused by the uploaded file rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, LicensingError>;
