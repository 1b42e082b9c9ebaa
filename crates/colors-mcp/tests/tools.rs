use colors_mcp::error::{BatchShapeError, ToolError};
use colors_mcp::tools::Toolbox;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn call(name: &str, arguments: Value) -> Result<Value, ToolError> {
    let toolbox: Toolbox = Toolbox::default();
    toolbox.call(name, arguments).map(|result| result.structured)
}

#[test]
fn black_on_white_passes_everything() -> Result<(), ToolError> {
    let result = call(
        "colors_contrast",
        json!({ "foreground": "#000000", "background": "#ffffff", "base": "#ffffff" }),
    )?;
    assert_eq!(result["ratio"], json!(21.0));
    assert_eq!(result["aa"], json!({ "regular": true, "large": true }));
    assert_eq!(result["aaa"], json!({ "regular": true, "large": true }));
    assert_eq!(result["nonText"], json!(true));
    Ok(())
}

#[test]
fn white_on_white_fails_everything() -> Result<(), ToolError> {
    let result = call(
        "colors_contrast",
        json!({ "foreground": "#ffffff", "background": "#ffffff" }),
    )?;
    assert_eq!(result["ratio"], json!(1.0));
    assert_eq!(result["aa"], json!({ "regular": false, "large": false }));
    assert_eq!(result["aaa"], json!({ "regular": false, "large": false }));
    assert_eq!(result["nonText"], json!(false));
    Ok(())
}

#[test]
fn translucent_colors_are_composited() -> Result<(), ToolError> {
    let result = call(
        "colors_contrast",
        json!({ "foreground": "rgba(0,0,0,0.5)", "background": "#ffffff" }),
    )?;
    assert_eq!(result["ratio"], json!(3.98));
    assert_eq!(result["aa"], json!({ "regular": false, "large": true }));

    let result = call(
        "colors_contrast",
        json!({
            "foreground": "#000000",
            "background": "rgba(255,255,255,0.5)",
            "base": "#000000",
        }),
    )?;
    assert_eq!(result["ratio"], json!(5.28));

    let result = call(
        "colors_contrast",
        json!({ "foreground": "rgb(0 0 0 / 0)", "background": "navy" }),
    )?;
    assert_eq!(result["ratio"], json!(1.0));
    Ok(())
}

#[test]
fn explicit_checks_keep_their_order() -> Result<(), ToolError> {
    let result = call(
        "colors_batch_contrast",
        json!({
            "checks": [
                { "foreground": "#000000", "background": "#ffffff" },
                { "foreground": "#ffffff", "background": "#ffffff" },
            ],
            "foregrounds": ["red"],
            "backgrounds": ["blue"],
        }),
    )?;
    assert_eq!(
        result["results"],
        json!([
            { "foreground": "#000000", "background": "#ffffff", "ratio": 21.0, "pass": true },
            { "foreground": "#ffffff", "background": "#ffffff", "ratio": 1.0, "pass": false },
        ])
    );
    Ok(())
}

#[test]
fn cross_product_iterates_backgrounds_per_foreground() -> Result<(), ToolError> {
    let result = call(
        "colors_batch_contrast",
        json!({
            "foregrounds": ["#000000", "#ffffff"],
            "backgrounds": ["#ff0000", "#00ff00"],
        }),
    )?;
    let pairs: Vec<_> = result["results"]
        .as_array()
        .map(|results| {
            results
                .iter()
                .map(|r| format!("{} on {}", r["foreground"], r["background"]))
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(
        pairs,
        vec![
            "\"#000000\" on \"#ff0000\"",
            "\"#000000\" on \"#00ff00\"",
            "\"#ffffff\" on \"#ff0000\"",
            "\"#ffffff\" on \"#00ff00\"",
        ]
    );
    Ok(())
}

#[test]
fn malformed_batches_fail() {
    let shape = |arguments: Value| match call("colors_batch_contrast", arguments) {
        Err(ToolError::InvalidBatch(error)) => Some(error),
        _ => None,
    };

    assert_eq!(shape(json!({ "checks": [] })), Some(BatchShapeError::EmptyChecks));
    assert_eq!(shape(json!({})), Some(BatchShapeError::Missing));
    assert_eq!(
        shape(json!({ "backgrounds": ["white"] })),
        Some(BatchShapeError::IncompleteCrossProduct)
    );
    assert_eq!(
        shape(json!({ "foregrounds": ["black"], "backgrounds": [] })),
        Some(BatchShapeError::IncompleteCrossProduct)
    );
}

#[test]
fn invalid_colors_name_their_role() {
    let field = |name: &str, arguments: Value| match call(name, arguments) {
        Err(ToolError::InvalidColor { field, .. }) => field,
        _ => String::new(),
    };

    assert_eq!(
        field(
            "colors_contrast",
            json!({ "foreground": "ink", "background": "white" })
        ),
        "foreground"
    );
    assert_eq!(
        field(
            "colors_contrast",
            json!({ "foreground": "black", "background": "paper" })
        ),
        "background"
    );
    assert_eq!(
        field(
            "colors_batch_contrast",
            json!({ "foregrounds": ["black"], "backgrounds": ["white"], "base": "desk" })
        ),
        "base"
    );
    assert_eq!(
        field(
            "colors_batch_contrast",
            json!({ "foregrounds": ["black", "coal"], "backgrounds": ["white"] })
        ),
        "foregrounds[1]"
    );
}

#[test]
fn conversions() -> Result<(), ToolError> {
    let result = call("colors_convert", json!({ "color": "red", "to": "lab", "precision": 2 }))?;
    assert_eq!(result["raw"], json!({ "mode": "lab", "l": 54.29, "a": 80.8, "b": 69.89 }));

    let result = call(
        "colors_batch_convert",
        json!({ "colors": ["red", "#00ff00"], "to": "hex" }),
    )?;
    assert_eq!(
        result,
        json!({
            "results": [
                { "input": "red", "output": "#ff0000", "raw": "#ff0000" },
                { "input": "#00ff00", "output": "#00ff00", "raw": "#00ff00" },
            ],
            "space": "hex",
        })
    );

    let result = call("colors_parse", json!({ "color": "color(display-p3 0 1 0)" }))?;
    assert_eq!(result["valid"], json!(true));
    assert_eq!(result["inGamut"], json!(false));
    assert_eq!(result["hex"], json!("#00fb29"));
    Ok(())
}
