//! Display text for tool results.
//!
//! Tool results carry Markdown for people next to the structured content for
//! programs. Numbers print the way JavaScript prints them: `21` and `4.5`
//! rather than `21.0` and `4.50`.

use crate::batch::PairResult;
use crate::contrast::ContrastResult;

const PASS: &str = "✅ Pass";
const FAIL: &str = "❌ Fail";

/// Format the number with the shortest representation that round trips.
pub fn js_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

fn badge(pass: bool) -> &'static str {
    if pass {
        PASS
    } else {
        FAIL
    }
}

/// Format a contrast check as a Markdown table.
pub fn contrast_report(foreground: &str, background: &str, result: &ContrastResult) -> String {
    [
        format!(
            "### Contrast: {} vs {} — {}:1",
            foreground,
            background,
            js_number(result.ratio)
        ),
        String::new(),
        "| Level | Regular Text | Large Text |".to_string(),
        "|-------|-------------|------------|".to_string(),
        format!(
            "| AA (WCAG 1.4.3) | {} | {} |",
            badge(result.aa.regular),
            badge(result.aa.large)
        ),
        format!(
            "| AAA (WCAG 1.4.6) | {} | {} |",
            badge(result.aaa.regular),
            badge(result.aaa.large)
        ),
        String::new(),
        format!("**Non-text** (WCAG 1.4.11): {}", badge(result.non_text)),
    ]
    .join("\n")
}

/// Format the results of a batch contrast check as a Markdown table.
pub fn batch_contrast_report(results: &[PairResult]) -> String {
    let mut text = String::from("### Batch Contrast Check\n\n");
    text.push_str("| Foreground | Background | Ratio | AA Pass |\n");
    text.push_str("| :--- | :--- | :--- | :---: |\n");
    for result in results {
        text.push_str(&format!(
            "| **{}** | **{}** | {} | {} |\n",
            result.foreground,
            result.background,
            js_number(result.ratio),
            if result.pass { "✅" } else { "❌" }
        ));
    }
    text
}

/// Format a conversion.
pub fn conversion_summary(input: &str, output: &str) -> String {
    format!("Converted **{}** to **{}**", input, output)
}

/// Format a batch conversion as a Markdown list.
pub fn batch_conversion_report<'a, I>(space: &str, conversions: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let lines: Vec<_> = conversions
        .into_iter()
        .map(|(input, output)| format!("- **{}** → **{}**", input, output))
        .collect();
    format!("### Batch Conversion to {}\n\n{}", space, lines.join("\n"))
}

/// Format a successfully parsed color.
pub fn parse_summary(input: &str, normalized: &str, hex: &str, in_gamut: bool) -> String {
    let mut text = format!("Color **{}** is valid. Normalized: **{}**", input, normalized);
    if !in_gamut {
        text.push_str(&format!(
            "\n\nThe color is outside the sRGB gamut; its closest sRGB equivalent is **{}**.",
            hex
        ));
    }
    text
}

/// Format a color adjustment.
pub fn adjust_summary(input: &str, channel: &str, amount: f64, output: &str) -> String {
    format!(
        "Adjusted **{}** ({} {}) -> **{}**",
        input,
        channel,
        js_number(amount),
        output
    )
}

/// Format a mix of two colors.
pub fn mix_summary(color1: &str, color2: &str, ratio: f64, output: &str) -> String {
    format!(
        "Mixed **{}** + **{}** ({}) -> **{}**",
        color1,
        color2,
        js_number(ratio),
        output
    )
}

/// Format a color scale, one hex color per line.
pub fn scale_report(hex: &[String]) -> String {
    format!("Generated Scale:\n{}", hex.join("\n"))
}

/// Format a color difference with four decimal places.
pub fn difference_summary(metric: &str, value: f64) -> String {
    format!("Difference ({}): **{:.4}**", metric, value)
}

/// Limit the text to the given number of characters.
///
/// Text within the limit is returned as is. Longer text is cut at the limit
/// and followed by a notice.
pub fn truncate(text: String, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        None => text,
        Some((index, _)) => format!(
            "{}\n\n[Output truncated at {} characters. Request fewer colors to see all \
            results.]",
            &text[..index],
            limit
        ),
    }
}
