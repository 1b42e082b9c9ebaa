use serde::Deserialize;
use serde_json::{json, Value};

use super::{any_color_schema, check_length, color_schema, colors_schema, object_schema, ToolResult};
use crate::batch::{expand, BatchRequest, PairResult};
use crate::config::ServerOptions;
use crate::contrast::check;
use crate::engine::ColorEngine;
use crate::error::ToolError;
use crate::format::{batch_contrast_report, contrast_report};

/// The base for translucent backgrounds, unless a request says otherwise.
pub const DEFAULT_BASE: &str = "#ffffff";

const BASE_DESCRIPTION: &str =
    "Base color to blend transparent backgrounds over (default: \"#ffffff\")";

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContrastInput {
    pub foreground: String,
    pub background: String,
    pub base: Option<String>,
}

pub type BatchContrastInput = BatchRequest;

pub(super) fn contrast_schema() -> Value {
    object_schema(
        json!({
            "foreground": color_schema("Foreground (text) color"),
            "background": color_schema("Background color"),
            "base": color_schema(BASE_DESCRIPTION),
        }),
        &["foreground", "background"],
    )
}

pub(super) fn batch_contrast_schema(options: &ServerOptions) -> Value {
    let max = options.max_batch_size();
    let pair = object_schema(
        json!({
            "foreground": any_color_schema(),
            "background": any_color_schema(),
        }),
        &["foreground", "background"],
    );

    object_schema(
        json!({
            "base": color_schema(BASE_DESCRIPTION),
            "checks": {
                "type": "array",
                "items": pair,
                "maxItems": max,
                "description": "Explicit foreground/background pairs to check",
            },
            "foregrounds": colors_schema(1, max, "Foregrounds for a cross-product check"),
            "backgrounds": colors_schema(1, max, "Backgrounds for a cross-product check"),
        }),
        &[],
    )
}

pub(super) fn contrast<E: ColorEngine>(
    engine: &E,
    input: &ContrastInput,
) -> Result<ToolResult, ToolError> {
    let foreground = engine.parse("foreground", &input.foreground)?;
    let background = engine.parse("background", &input.background)?;
    let base = engine.parse("base", input.base.as_deref().unwrap_or(DEFAULT_BASE))?;

    let result = check(&foreground, &background, &base);

    Ok(ToolResult::new(
        contrast_report(&input.foreground, &input.background, &result),
        json!({
            "foreground": input.foreground,
            "background": input.background,
            "ratio": result.ratio,
            "aa": result.aa,
            "aaa": result.aaa,
            "nonText": result.non_text,
        }),
    ))
}

pub(super) fn batch_contrast<E: ColorEngine>(
    engine: &E,
    options: &ServerOptions,
    input: &BatchContrastInput,
) -> Result<ToolResult, ToolError> {
    let max = options.max_batch_size();
    if let Some(checks) = &input.checks {
        check_length("checks", checks.len(), 0, max)?;
    }
    if let Some(foregrounds) = &input.foregrounds {
        check_length("foregrounds", foregrounds.len(), 0, max)?;
    }
    if let Some(backgrounds) = &input.backgrounds {
        check_length("backgrounds", backgrounds.len(), 0, max)?;
    }

    let pairs = expand(input)?;
    let base_name = input.base.as_deref().unwrap_or(DEFAULT_BASE);
    let base = engine.parse("base", base_name)?;

    // Parse everything before evaluating anything, so that one bad color
    // fails the batch without partial results.
    let mut colors = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        let foreground = engine.parse(&pair.foreground_field, pair.foreground)?;
        let background = engine.parse(&pair.background_field, pair.background)?;
        colors.push((foreground, background));
    }

    let results: Vec<_> = pairs
        .iter()
        .zip(colors.iter())
        .map(|(pair, (foreground, background))| {
            let result = check(foreground, background, &base);
            PairResult {
                foreground: pair.foreground.to_owned(),
                background: pair.background.to_owned(),
                ratio: result.ratio,
                pass: result.aa.regular,
            }
        })
        .collect();

    Ok(ToolResult::new(
        batch_contrast_report(&results),
        json!({ "results": results, "base": base_name }),
    ))
}
