/// Error code registry for agent-licensing
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Upload input errors
/// - 3000-3999: CSV parse errors
/// - 4000-4999: Reference data errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;

    // Input errors (2000-2999)
    pub const INPUT_MISSING: u16 = 2001;
    pub const INPUT_TYPE_INVALID: u16 = 2002;

    // Parse errors (3000-3999)
    pub const PARSE_GENERIC: u16 = 3000;
    pub const PARSE_MALFORMED_ROW: u16 = 3001;
    pub const PARSE_INVALID_UTF8: u16 = 3002;

    // Reference data errors (4000-4999)
    pub const REFERENCE_GENERIC: u16 = 4000;
    pub const REFERENCE_NOT_FOUND: u16 = 4001;
    pub const REFERENCE_IO_ERROR: u16 = 4002;
    pub const REFERENCE_MALFORMED: u16 = 4003;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
    pub const OTHER_EXPORT_FAILED: u16 = 9001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",
        1005 => "Invalid value in configuration",

        2001 => "No file was uploaded",
        2002 => "Uploaded file has an unsupported extension",

        3000 => "Generic CSV parse error",
        3001 => "CSV row does not match the header layout",
        3002 => "Uploaded file is not valid UTF-8",

        4000 => "Generic reference data error",
        4001 => "Reference dataset not found",
        4002 => "Reference dataset could not be read",
        4003 => "Reference dataset is malformed",

        9000 => "Generic error",
        9001 => "Result export failed",

        _ => "Unknown error code",
    }
}
