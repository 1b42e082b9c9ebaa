use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    any_color_schema, check_length, colors_schema, object_schema, parse_all, space_or, ToolResult,
};
use crate::config::ServerOptions;
use crate::engine::{Adjustment, Channel, ColorEngine, Metric, Space};
use crate::error::ToolError;
use crate::format::{adjust_summary, difference_summary, mix_summary, scale_report};
use crate::value::{ColorValue, Mode};

const DEFAULT_STEPS: usize = 5;

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustInput {
    pub color: String,
    pub mode: Channel,
    pub amount: f64,
    #[serde(default)]
    pub relative: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MixInput {
    pub color1: String,
    pub color2: String,
    pub ratio: Option<f64>,
    pub mode: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleInput {
    pub colors: Vec<String>,
    pub steps: Option<usize>,
    pub mode: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DifferenceInput {
    pub color1: String,
    pub color2: String,
    #[serde(default)]
    pub metric: Metric,
}

fn mode_schema() -> Value {
    json!({
        "type": "string",
        "enum": Space::SUPPORTED_NAMES,
        "default": "oklch",
        "description": "Interpolation color space",
    })
}

pub(super) fn adjust_schema() -> Value {
    object_schema(
        json!({
            "color": any_color_schema(),
            "mode": {
                "type": "string",
                "enum": ["lightness", "chroma", "hue"],
                "description": "Oklch coordinate to adjust",
            },
            "amount": {
                "type": "number",
                "description": "Amount to add, or with relative, the fraction to scale by",
            },
            "relative": {
                "type": "boolean",
                "default": false,
                "description": "Scale the coordinate by 1 + amount instead of adding amount",
            },
        }),
        &["color", "mode", "amount"],
    )
}

pub(super) fn mix_schema() -> Value {
    object_schema(
        json!({
            "color1": any_color_schema(),
            "color2": any_color_schema(),
            "ratio": {
                "type": "number",
                "minimum": 0,
                "maximum": 1,
                "default": 0.5,
                "description": "Mix ratio, from 0 (first color) to 1 (second color)",
            },
            "mode": mode_schema(),
        }),
        &["color1", "color2"],
    )
}

pub(super) fn scale_schema(options: &ServerOptions) -> Value {
    object_schema(
        json!({
            "colors": colors_schema(2, options.max_batch_size(), "Color stops of the scale"),
            "steps": {
                "type": "integer",
                "minimum": 2,
                "maximum": options.max_scale_steps(),
                "default": DEFAULT_STEPS,
                "description": "Number of colors to generate",
            },
            "mode": mode_schema(),
        }),
        &["colors"],
    )
}

pub(super) fn difference_schema() -> Value {
    object_schema(
        json!({
            "color1": any_color_schema(),
            "color2": any_color_schema(),
            "metric": {
                "type": "string",
                "enum": ["deltaE", "contrast"],
                "default": "deltaE",
                "description": "Delta E OK or WCAG contrast ratio",
            },
        }),
        &["color1", "color2"],
    )
}

pub(super) fn adjust<E: ColorEngine>(engine: &E, input: &AdjustInput) -> Result<ToolResult, ToolError> {
    let color = engine.parse("color", &input.color)?;
    let adjusted = engine.adjust(
        &color,
        Adjustment {
            channel: input.mode,
            amount: input.amount,
            relative: input.relative,
        },
    );

    let raw = ColorValue::new(&adjusted, Mode::Oklch);
    let output = raw.css();

    Ok(ToolResult::new(
        adjust_summary(&input.color, input.mode.name(), input.amount, &output),
        json!({
            "input": input.color,
            "operation": "adjust",
            "params": {
                "mode": input.mode,
                "amount": input.amount,
                "relative": input.relative,
            },
            "output": output,
            "raw": raw,
        }),
    ))
}

pub(super) fn mix<E: ColorEngine>(engine: &E, input: &MixInput) -> Result<ToolResult, ToolError> {
    let ratio = input.ratio.unwrap_or(0.5);
    if !(0.0..=1.0).contains(&ratio) {
        return Err(ToolError::invalid_argument(
            "ratio",
            "should be a number between 0 and 1",
        ));
    }
    let space = space_or(input.mode.as_deref(), Space::Oklch)?;
    let color1 = engine.parse("color1", &input.color1)?;
    let color2 = engine.parse("color2", &input.color2)?;

    let mixed = engine.mix(&color1, &color2, ratio, space);
    let raw = ColorValue::new(&mixed, space.mode());
    let output = raw.css();

    Ok(ToolResult::new(
        mix_summary(&input.color1, &input.color2, ratio, &output),
        json!({
            "input": [input.color1, input.color2],
            "operation": "mix",
            "params": { "ratio": ratio, "mode": space.name() },
            "output": output,
            "raw": raw,
        }),
    ))
}

pub(super) fn scale<E: ColorEngine>(
    engine: &E,
    options: &ServerOptions,
    input: &ScaleInput,
) -> Result<ToolResult, ToolError> {
    check_length("colors", input.colors.len(), 2, options.max_batch_size())?;
    let steps = input.steps.unwrap_or(DEFAULT_STEPS);
    if !(2..=options.max_scale_steps()).contains(&steps) {
        return Err(ToolError::invalid_argument(
            "steps",
            format!("should be an integer between 2 and {}", options.max_scale_steps()),
        ));
    }
    let space = space_or(input.mode.as_deref(), Space::Oklch)?;
    let colors = parse_all(engine, "colors", &input.colors)?;

    let scale = engine.scale(&colors, steps, space)?;
    let hex: Vec<_> = scale.iter().map(|color| engine.hex(color)).collect();
    let raw: Vec<_> = scale
        .iter()
        .map(|color| ColorValue::new(color, space.mode()))
        .collect();

    Ok(ToolResult::new(
        scale_report(&hex),
        json!({
            "input": input.colors,
            "operation": "scale",
            "params": { "steps": steps, "mode": space.name() },
            "output": hex,
            "raw": raw,
        }),
    ))
}

pub(super) fn difference<E: ColorEngine>(
    engine: &E,
    input: &DifferenceInput,
) -> Result<ToolResult, ToolError> {
    let color1 = engine.parse("color1", &input.color1)?;
    let color2 = engine.parse("color2", &input.color2)?;
    let value = engine.difference(&color1, &color2, input.metric);

    Ok(ToolResult::new(
        difference_summary(input.metric.name(), value),
        json!({
            "input": [input.color1, input.color2],
            "operation": "difference",
            "params": { "metric": input.metric },
            "value": value,
        }),
    ))
}

#[cfg(test)]
mod test {
    use super::{adjust, difference, mix, scale, AdjustInput, DifferenceInput, MixInput, ScaleInput};
    use crate::config::ServerOptions;
    use crate::engine::{Channel, Metric, StandardEngine};
    use crate::error::ToolError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_adjust() -> Result<(), ToolError> {
        let input = AdjustInput {
            color: "oklch(0.5 0.1 120)".to_string(),
            mode: Channel::Lightness,
            amount: 0.1,
            relative: false,
        };
        let result = adjust(&StandardEngine, &input)?;
        assert_eq!(
            result.text,
            "Adjusted **oklch(0.5 0.1 120)** (lightness 0.1) -> **oklch(0.6 0.1 120)**"
        );
        assert_eq!(
            result.structured["params"],
            json!({ "mode": "lightness", "amount": 0.1, "relative": false })
        );
        assert_eq!(result.structured["raw"]["mode"], json!("oklch"));
        Ok(())
    }

    #[test]
    fn test_mix() -> Result<(), ToolError> {
        let input = MixInput {
            color1: "red".to_string(),
            color2: "blue".to_string(),
            ratio: None,
            mode: Some("rgb".to_string()),
        };
        let result = mix(&StandardEngine, &input)?;
        assert_eq!(result.text, "Mixed **red** + **blue** (0.5) -> **rgb(128, 0, 128)**");
        assert_eq!(result.structured["params"], json!({ "ratio": 0.5, "mode": "rgb" }));

        let input = MixInput {
            ratio: Some(0.0),
            mode: None,
            ..input
        };
        let result = mix(&StandardEngine, &input)?;
        let hue = result.structured["raw"]["h"].as_f64().unwrap_or_default();
        assert!((hue - 29.2339).abs() < 1e-4, "hue {}", hue);

        let input = MixInput {
            ratio: Some(0.1),
            ..input
        };
        let result = mix(&StandardEngine, &input)?;
        let hue = result.structured["raw"]["h"].as_f64().unwrap_or_default();
        assert!((hue - 16.7157).abs() < 1e-4, "hue {}", hue);

        let input = MixInput {
            ratio: Some(1.5),
            ..input
        };
        assert!(matches!(
            mix(&StandardEngine, &input),
            Err(ToolError::InvalidArgument { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_scale() -> Result<(), ToolError> {
        let options = ServerOptions::default();
        let input = ScaleInput {
            colors: vec!["#ff0000".to_string(), "#0000ff".to_string()],
            steps: Some(3),
            mode: Some("rgb".to_string()),
        };
        let result = scale(&StandardEngine, &options, &input)?;
        assert_eq!(result.text, "Generated Scale:\n#ff0000\n#800080\n#0000ff");
        assert_eq!(
            result.structured["output"],
            json!(["#ff0000", "#800080", "#0000ff"])
        );

        let input = ScaleInput {
            colors: vec!["#ff0000".to_string(), "#0000ff".to_string()],
            steps: None,
            mode: None,
        };
        let result = scale(&StandardEngine, &options, &input)?;
        assert_eq!(result.structured["output"].as_array().map(Vec::len), Some(5));
        assert_eq!(result.structured["params"], json!({ "steps": 5, "mode": "oklch" }));

        let input = ScaleInput {
            steps: Some(21),
            ..input
        };
        assert!(matches!(
            scale(&StandardEngine, &options, &input),
            Err(ToolError::InvalidArgument { .. })
        ));

        let input = ScaleInput {
            colors: vec!["red".to_string()],
            steps: None,
            mode: None,
        };
        assert!(matches!(
            scale(&StandardEngine, &options, &input),
            Err(ToolError::InvalidArgument { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_difference() -> Result<(), ToolError> {
        let input = DifferenceInput {
            color1: "black".to_string(),
            color2: "white".to_string(),
            metric: Metric::Contrast,
        };
        let result = difference(&StandardEngine, &input)?;
        assert_eq!(result.text, "Difference (contrast): **21.0000**");

        let input = DifferenceInput {
            metric: Metric::DeltaE,
            ..input
        };
        let result = difference(&StandardEngine, &input)?;
        assert_eq!(result.text, "Difference (deltaE): **1.0000**");
        assert_eq!(result.structured["params"], json!({ "metric": "deltaE" }));
        Ok(())
    }
}
