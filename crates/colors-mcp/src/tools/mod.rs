//! The tools and their dispatch.
//!
//! Each tool has an input type, which rejects unknown fields, a JSON schema
//! advertised through `tools/list`, and a handler producing a [`ToolResult`].
//! [`Toolbox`] ties them together with the engine and server options.

mod accessibility;
mod conversion;
mod manipulation;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::{ServerOptions, DEFAULT_PRECISION, MAX_PRECISION};
use crate::engine::{ColorEngine, Space, StandardEngine};
use crate::error::ToolError;
use crate::format::truncate;

pub use accessibility::{BatchContrastInput, ContrastInput};
pub use conversion::{BatchConvertInput, ConvertInput, ParseInput};
pub use manipulation::{AdjustInput, DifferenceInput, MixInput, ScaleInput};

pub const CONVERT: &str = "colors_convert";
pub const BATCH_CONVERT: &str = "colors_batch_convert";
pub const PARSE: &str = "colors_parse";
pub const ADJUST: &str = "colors_adjust";
pub const MIX: &str = "colors_mix";
pub const SCALE: &str = "colors_scale";
pub const DIFFERENCE: &str = "colors_difference";
pub const CONTRAST: &str = "colors_contrast";
pub const BATCH_CONTRAST: &str = "colors_batch_contrast";

/// The names of all tools, in the order `tools/list` reports them.
pub const TOOL_NAMES: [&str; 9] = [
    CONVERT,
    BATCH_CONVERT,
    PARSE,
    ADJUST,
    MIX,
    SCALE,
    DIFFERENCE,
    CONTRAST,
    BATCH_CONTRAST,
];

const COLOR_DESCRIPTION: &str = "Color string in any supported format (e.g., \"#ff0000\", \
    \"red\", \"rgb(255, 0, 0)\", \"oklch(0.6 0.2 29)\")";

/// The outcome of a successful tool call.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolResult {
    /// The Markdown for display.
    pub text: String,
    /// The machine-readable result.
    pub structured: Value,
}

impl ToolResult {
    /// Create a new tool result.
    pub fn new(text: String, structured: Value) -> Self {
        Self { text, structured }
    }

    /// Convert to the protocol's representation of tool results.
    pub fn to_json(&self) -> Value {
        json!({
            "content": [{ "type": "text", "text": self.text }],
            "structuredContent": self.structured,
        })
    }
}

/// Convert a tool error to the protocol's representation of failed tool
/// calls.
pub fn error_result(error: &ToolError) -> Value {
    json!({
        "content": [{ "type": "text", "text": error.to_string() }],
        "isError": true,
    })
}

// ------------------------------------------------------------------------------------------------

/// The JSON schema for a color string.
pub(crate) fn color_schema(description: &str) -> Value {
    json!({ "type": "string", "minLength": 1, "description": description })
}

/// The JSON schema for a color string with the default description.
pub(crate) fn any_color_schema() -> Value {
    color_schema(COLOR_DESCRIPTION)
}

/// The JSON schema for a list of color strings.
pub(crate) fn colors_schema(min: usize, max: usize, description: &str) -> Value {
    json!({
        "type": "array",
        "items": any_color_schema(),
        "minItems": min,
        "maxItems": max,
        "description": description,
    })
}

/// The JSON schema for a color space name.
pub(crate) fn space_schema(description: &str) -> Value {
    json!({ "type": "string", "enum": Space::SUPPORTED_NAMES, "description": description })
}

/// The JSON schema for precision.
pub(crate) fn precision_schema() -> Value {
    json!({
        "type": "integer",
        "minimum": 0,
        "maximum": MAX_PRECISION,
        "default": DEFAULT_PRECISION,
        "description": "Decimal places for output values (0-10)",
    })
}

/// The JSON schema for an object with the given properties.
pub(crate) fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

// ------------------------------------------------------------------------------------------------

/// Validate the precision, filling in the default.
pub(crate) fn precision(value: Option<u8>) -> Result<u8, ToolError> {
    match value {
        None => Ok(DEFAULT_PRECISION),
        Some(digits) if digits <= MAX_PRECISION => Ok(digits),
        Some(_) => Err(ToolError::invalid_argument(
            "precision",
            format!("should be an integer between 0 and {}", MAX_PRECISION),
        )),
    }
}

/// Validate the length of a list argument.
pub(crate) fn check_length(
    field: &str,
    length: usize,
    min: usize,
    max: usize,
) -> Result<(), ToolError> {
    if length < min {
        Err(ToolError::invalid_argument(
            field,
            format!("should have at least {} colors but has {}", min, length),
        ))
    } else if max < length {
        Err(ToolError::invalid_argument(
            field,
            format!("should have at most {} colors but has {}", max, length),
        ))
    } else {
        Ok(())
    }
}

/// Parse the space name, filling in the default.
pub(crate) fn space_or(name: Option<&str>, default: Space) -> Result<Space, ToolError> {
    name.map_or(Ok(default), str::parse)
}

/// Parse all colors of a list argument, failing on the first bad one.
pub(crate) fn parse_all<E: ColorEngine>(
    engine: &E,
    field: &str,
    colors: &[String],
) -> Result<Vec<colormath::Color>, ToolError> {
    colors
        .iter()
        .enumerate()
        .map(|(index, color)| engine.parse(&format!("{}[{}]", field, index), color))
        .collect()
}

// ------------------------------------------------------------------------------------------------

/// The tools, bound to an engine and server options.
#[derive(Debug)]
pub struct Toolbox<E = StandardEngine> {
    engine: E,
    options: ServerOptions,
}

impl Default for Toolbox {
    fn default() -> Self {
        Self::new(StandardEngine, ServerOptions::default())
    }
}

impl<E: ColorEngine> Toolbox<E> {
    /// Create a new toolbox.
    pub fn new(engine: E, options: ServerOptions) -> Self {
        Self { engine, options }
    }

    /// Get the server options.
    pub fn options(&self) -> &ServerOptions {
        &self.options
    }

    /// Get the name, description, and input schema of every tool.
    pub fn definitions(&self) -> Vec<Value> {
        let options = &self.options;
        vec![
            json!({
                "name": CONVERT,
                "description": "Convert a color to a different color space",
                "inputSchema": conversion::convert_schema(),
            }),
            json!({
                "name": BATCH_CONVERT,
                "description": "Convert multiple colors to a target color space",
                "inputSchema": conversion::batch_convert_schema(options),
            }),
            json!({
                "name": PARSE,
                "description": "Parse and validate a color string",
                "inputSchema": conversion::parse_schema(),
            }),
            json!({
                "name": ADJUST,
                "description": "Adjust color properties (lightness, chroma, hue)",
                "inputSchema": manipulation::adjust_schema(),
            }),
            json!({
                "name": MIX,
                "description": "Mix two colors with perceptual interpolation",
                "inputSchema": manipulation::mix_schema(),
            }),
            json!({
                "name": SCALE,
                "description": "Generate a perceptually uniform color scale",
                "inputSchema": manipulation::scale_schema(options),
            }),
            json!({
                "name": DIFFERENCE,
                "description": "Calculate color difference (DeltaE) or contrast ratio",
                "inputSchema": manipulation::difference_schema(),
            }),
            json!({
                "name": CONTRAST,
                "description": "Check WCAG contrast ratio between foreground and background \
                    colors (AA, AAA, non-text)",
                "inputSchema": accessibility::contrast_schema(),
            }),
            json!({
                "name": BATCH_CONTRAST,
                "description": "Check WCAG contrast for many color pairs at once, given as \
                    explicit pairs or as the cross product of foregrounds and backgrounds",
                "inputSchema": accessibility::batch_contrast_schema(options),
            }),
        ]
    }

    /// Invoke the named tool with the given arguments.
    ///
    /// The display text of the result is truncated to the configured
    /// character limit.
    pub fn call(&self, name: &str, arguments: Value) -> Result<ToolResult, ToolError> {
        let engine = &self.engine;
        let options = &self.options;

        let result = match name {
            CONVERT => conversion::convert(engine, &input(arguments)?),
            BATCH_CONVERT => conversion::batch_convert(engine, options, &input(arguments)?),
            PARSE => conversion::parse(engine, &input(arguments)?),
            ADJUST => manipulation::adjust(engine, &input(arguments)?),
            MIX => manipulation::mix(engine, &input(arguments)?),
            SCALE => manipulation::scale(engine, options, &input(arguments)?),
            DIFFERENCE => manipulation::difference(engine, &input(arguments)?),
            CONTRAST => accessibility::contrast(engine, &input(arguments)?),
            BATCH_CONTRAST => accessibility::batch_contrast(engine, options, &input(arguments)?),
            _ => Err(ToolError::UnknownTool(name.to_owned())),
        }?;

        Ok(ToolResult {
            text: truncate(result.text, options.character_limit()),
            structured: result.structured,
        })
    }
}

fn input<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    // Tools without required arguments may be called without any.
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    Ok(serde_json::from_value(arguments)?)
}
