use colormath::ColorSpace;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    any_color_schema, check_length, colors_schema, object_schema, parse_all, precision,
    precision_schema, space_schema, ToolResult,
};
use crate::config::ServerOptions;
use crate::engine::{ColorEngine, Space};
use crate::error::ToolError;
use crate::format::{batch_conversion_report, conversion_summary, parse_summary};
use crate::value::{ColorValue, Mode};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertInput {
    pub color: String,
    pub to: String,
    pub precision: Option<u8>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConvertInput {
    pub colors: Vec<String>,
    pub to: String,
    pub precision: Option<u8>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseInput {
    pub color: String,
}

pub(super) fn convert_schema() -> Value {
    object_schema(
        json!({
            "color": any_color_schema(),
            "to": space_schema("Target color space"),
            "precision": precision_schema(),
        }),
        &["color", "to"],
    )
}

pub(super) fn batch_convert_schema(options: &ServerOptions) -> Value {
    object_schema(
        json!({
            "colors": colors_schema(1, options.max_batch_size(), "Colors to convert"),
            "to": space_schema("Target color space"),
            "precision": precision_schema(),
        }),
        &["colors", "to"],
    )
}

pub(super) fn parse_schema() -> Value {
    object_schema(json!({ "color": any_color_schema() }), &["color"])
}

pub(super) fn convert<E: ColorEngine>(
    engine: &E,
    input: &ConvertInput,
) -> Result<ToolResult, ToolError> {
    let space = input.to.parse::<Space>()?;
    let digits = precision(input.precision)?;
    let color = engine.parse("color", &input.color)?;

    let converted = engine.convert(&color, space, digits);
    let output = converted.css();

    Ok(ToolResult::new(
        conversion_summary(&input.color, &output),
        json!({
            "input": input.color,
            "output": output,
            "raw": converted,
            "space": space.name(),
        }),
    ))
}

pub(super) fn batch_convert<E: ColorEngine>(
    engine: &E,
    options: &ServerOptions,
    input: &BatchConvertInput,
) -> Result<ToolResult, ToolError> {
    check_length("colors", input.colors.len(), 1, options.max_batch_size())?;
    let space = input.to.parse::<Space>()?;
    let digits = precision(input.precision)?;
    let colors = parse_all(engine, "colors", &input.colors)?;

    let converted: Vec<_> = colors
        .iter()
        .map(|color| engine.convert(color, space, digits))
        .collect();
    let outputs: Vec<_> = converted.iter().map(|c| c.css()).collect();

    let text = batch_conversion_report(
        space.name(),
        input
            .colors
            .iter()
            .zip(outputs.iter())
            .map(|(input, output)| (input.as_str(), output.as_str())),
    );
    let results: Vec<_> = input
        .colors
        .iter()
        .zip(outputs.iter().zip(converted.iter()))
        .map(|(input, (output, raw))| json!({ "input": input, "output": output, "raw": raw }))
        .collect();

    Ok(ToolResult::new(
        text,
        json!({ "results": results, "space": space.name() }),
    ))
}

pub(super) fn parse<E: ColorEngine>(engine: &E, input: &ParseInput) -> Result<ToolResult, ToolError> {
    let color = engine.parse("color", &input.color)?;
    let raw = ColorValue::new(&color, Mode::for_space(color.space()));
    let normalized = raw.css();
    let in_gamut = color.to(ColorSpace::Srgb).in_gamut();
    let hex = color.to_hex_format();

    Ok(ToolResult::new(
        parse_summary(&input.color, &normalized, &hex, in_gamut),
        json!({
            "input": input.color,
            "normalized": normalized,
            "raw": raw,
            "valid": true,
            "inGamut": in_gamut,
            "hex": hex,
        }),
    ))
}
