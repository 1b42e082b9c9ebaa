//! Helper module with this crate's error types.
//!
//! Tool errors are caller errors: a color string that does not parse, a batch
//! request that does not describe any pairs, or an argument out of range. The
//! server reports them as tool results flagged with `isError` and never
//! retries. Configuration errors stop the server before it starts.

use colormath::error::ColorFormatError;

/// The ways a batch contrast request can fail to describe a set of pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchShapeError {
    /// Neither `checks` nor the two cross-product lists are present.
    Missing,
    /// `checks` is present but empty, and there is no complete cross product.
    EmptyChecks,
    /// Only one of `foregrounds` and `backgrounds` has colors.
    IncompleteCrossProduct,
}

impl BatchShapeError {
    /// Turn the batch shape error into an error message.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => {
                "batch should provide either 'checks' or both 'foregrounds' and 'backgrounds'"
            }
            Self::EmptyChecks => {
                "batch 'checks' should have at least one pair when there is no cross product"
            }
            Self::IncompleteCrossProduct => {
                "batch should provide both 'foregrounds' and 'backgrounds' with at least one \
                color each"
            }
        }
    }
}

impl std::fmt::Display for BatchShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for BatchShapeError {}

/// An error invoking a tool.
#[derive(Debug)]
pub enum ToolError {
    /// A color string that does not parse. The field is the argument path,
    /// e.g., `checks[1].background`.
    InvalidColor {
        field: String,
        value: String,
        source: ColorFormatError,
    },
    /// A batch contrast request without pairs.
    InvalidBatch(BatchShapeError),
    /// Arguments that do not match the tool's input schema.
    MalformedArguments(serde_json::Error),
    /// An argument that is well-typed but out of range.
    InvalidArgument { field: String, message: String },
    /// A color space name that is not supported.
    UnsupportedSpace(String),
    /// A tool name that is not known.
    UnknownTool(String),
}

impl ToolError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColor {
                field,
                value,
                source,
            } => write!(
                f,
                "{} should be a color but \"{}\" is not: {}. Supported formats include \
                hex (#ff0000), named colors (red), rgb(255 0 0), hsl(0 100% 50%), \
                oklch(0.6 0.2 29), lab(), lch(), oklab(), and color(display-p3 ...); \
                use the 'colors_parse' tool to validate color strings",
                field, value, source
            ),
            Self::InvalidBatch(error) => write!(f, "{}", error),
            Self::MalformedArguments(error) => write!(f, "tool arguments are malformed: {}", error),
            Self::InvalidArgument { field, message } => write!(f, "{} {}", field, message),
            Self::UnsupportedSpace(name) => write!(
                f,
                "color space \"{}\" is not supported; supported spaces are {}",
                name,
                crate::engine::Space::SUPPORTED_NAMES.join(", ")
            ),
            Self::UnknownTool(name) => write!(f, "tool \"{}\" is unknown", name),
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColor { source, .. } => Some(source),
            Self::InvalidBatch(error) => Some(error),
            Self::MalformedArguments(error) => Some(error),
            _ => None,
        }
    }
}

impl From<BatchShapeError> for ToolError {
    fn from(value: BatchShapeError) -> Self {
        Self::InvalidBatch(value)
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedArguments(value)
    }
}

/// An erroneous configuration value, from either the environment or the
/// command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    key: String,
    value: String,
    expected: &'static str,
}

impl ConfigError {
    /// Create a new configuration error.
    pub fn new<K, V>(key: K, value: V, expected: &'static str) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
            expected,
        }
    }

    /// Get the name of the offending setting.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} should be {} but is \"{}\"",
            self.key, self.expected, self.value
        )
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for std::io::Error {
    fn from(value: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, value)
    }
}

#[cfg(test)]
mod test {
    use super::{BatchShapeError, ConfigError, ToolError};
    use colormath::error::ColorFormatError;
    use std::error::Error;

    #[test]
    fn test_messages() {
        let error = ToolError::InvalidColor {
            field: "checks[1].background".to_string(),
            value: "#ggg".to_string(),
            source: ColorFormatError::MalformedHex,
        };
        let message = error.to_string();
        assert!(message.starts_with("checks[1].background should be a color but \"#ggg\" is not"));
        assert!(message.contains("colors_parse"));
        assert!(error.source().is_some());

        let error = ToolError::from(BatchShapeError::Missing);
        assert_eq!(error.to_string(), BatchShapeError::Missing.as_str());

        let error = ToolError::UnsupportedSpace("cmyk".to_string());
        assert_eq!(
            error.to_string(),
            "color space \"cmyk\" is not supported; supported spaces are \
            hex, rgb, hsl, oklch, oklab, p3, lab, lch"
        );
        assert!(error.source().is_none());

        let error = ConfigError::new("COLORS_MCP_MAX_BATCH_SIZE", "lots", "a positive integer");
        assert_eq!(
            error.to_string(),
            "COLORS_MCP_MAX_BATCH_SIZE should be a positive integer but is \"lots\""
        );
        assert_eq!(error.key(), "COLORS_MCP_MAX_BATCH_SIZE");
    }
}
