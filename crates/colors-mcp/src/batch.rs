//! Batch contrast requests and their expansion into pairs.
//!
//! A batch request names its pairs in one of two shapes: an explicit list of
//! `checks`, or a cross product of `foregrounds` and `backgrounds`. Explicit
//! checks take precedence. Expansion order is observable in the results and
//! either follows the checks or iterates backgrounds for each foreground.

use serde::{Deserialize, Serialize};

use crate::error::BatchShapeError;

/// A foreground and background to check.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairInput {
    pub foreground: String,
    pub background: String,
}

/// A batch contrast request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchRequest {
    /// The color all translucent backgrounds are blended over, white if
    /// absent.
    pub base: Option<String>,
    pub checks: Option<Vec<PairInput>>,
    pub foregrounds: Option<Vec<String>>,
    pub backgrounds: Option<Vec<String>>,
}

/// One expanded pair, with the argument paths of its colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check<'a> {
    pub foreground: &'a str,
    pub foreground_field: String,
    pub background: &'a str,
    pub background_field: String,
}

/// The contrast of one expanded pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PairResult {
    pub foreground: String,
    pub background: String,
    /// The contrast ratio, rounded to two decimal places.
    pub ratio: f64,
    /// Whether the pair passes AA for regular text.
    pub pass: bool,
}

fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|items| !items.is_empty())
}

/// Expand the batch request into its pairs.
///
/// Non-empty `checks` win, even if the cross-product lists are present, too.
/// Otherwise both `foregrounds` and `backgrounds` must have at least one color.
pub fn expand(request: &BatchRequest) -> Result<Vec<Check<'_>>, BatchShapeError> {
    if let Some(checks) = non_empty(&request.checks) {
        return Ok(checks
            .iter()
            .enumerate()
            .map(|(index, pair)| Check {
                foreground: &pair.foreground,
                foreground_field: format!("checks[{}].foreground", index),
                background: &pair.background,
                background_field: format!("checks[{}].background", index),
            })
            .collect());
    }

    match (
        non_empty(&request.foregrounds),
        non_empty(&request.backgrounds),
    ) {
        (Some(foregrounds), Some(backgrounds)) => {
            let mut pairs = Vec::with_capacity(foregrounds.len() * backgrounds.len());
            for (i, foreground) in foregrounds.iter().enumerate() {
                for (j, background) in backgrounds.iter().enumerate() {
                    pairs.push(Check {
                        foreground,
                        foreground_field: format!("foregrounds[{}]", i),
                        background,
                        background_field: format!("backgrounds[{}]", j),
                    });
                }
            }
            Ok(pairs)
        }
        _ if request.checks.is_some() => Err(BatchShapeError::EmptyChecks),
        (None, None) if request.foregrounds.is_none() && request.backgrounds.is_none() => {
            Err(BatchShapeError::Missing)
        }
        _ => Err(BatchShapeError::IncompleteCrossProduct),
    }
}

#[cfg(test)]
mod test {
    use super::{expand, BatchRequest, PairInput};
    use crate::error::BatchShapeError;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    fn pair(foreground: &str, background: &str) -> PairInput {
        PairInput {
            foreground: foreground.to_string(),
            background: background.to_string(),
        }
    }

    fn pairs(request: &BatchRequest) -> Vec<(&str, &str)> {
        expand(request)
            .unwrap_or_default()
            .into_iter()
            .map(|check| (check.foreground, check.background))
            .collect()
    }

    #[test]
    fn test_explicit() {
        let request = BatchRequest {
            checks: Some(vec![pair("#000000", "#ffffff")]),
            ..Default::default()
        };
        assert_eq!(pairs(&request), vec![("#000000", "#ffffff")]);

        // Checks win over cross-product lists.
        let request = BatchRequest {
            checks: Some(vec![pair("red", "blue"), pair("blue", "red")]),
            foregrounds: strings(&["black"]),
            backgrounds: strings(&["white"]),
            ..Default::default()
        };
        assert_eq!(pairs(&request), vec![("red", "blue"), ("blue", "red")]);

        let checks = expand(&request).unwrap_or_default();
        assert_eq!(checks[1].background_field, "checks[1].background");
    }

    #[test]
    fn test_cross_product() {
        let request = BatchRequest {
            foregrounds: strings(&["#000000", "#ffffff"]),
            backgrounds: strings(&["#ff0000", "#00ff00"]),
            ..Default::default()
        };
        assert_eq!(
            pairs(&request),
            vec![
                ("#000000", "#ff0000"),
                ("#000000", "#00ff00"),
                ("#ffffff", "#ff0000"),
                ("#ffffff", "#00ff00"),
            ]
        );

        let checks = expand(&request).unwrap_or_default();
        assert_eq!(checks[2].foreground_field, "foregrounds[1]");
        assert_eq!(checks[2].background_field, "backgrounds[0]");

        // Empty checks defer to a complete cross product.
        let request = BatchRequest {
            checks: Some(Vec::new()),
            ..request
        };
        assert_eq!(pairs(&request).len(), 4);
    }

    #[test]
    fn test_shapes() {
        assert_eq!(
            expand(&BatchRequest::default()),
            Err(BatchShapeError::Missing)
        );

        let request = BatchRequest {
            checks: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(expand(&request), Err(BatchShapeError::EmptyChecks));

        let request = BatchRequest {
            foregrounds: strings(&["black"]),
            ..Default::default()
        };
        assert_eq!(expand(&request), Err(BatchShapeError::IncompleteCrossProduct));

        let request = BatchRequest {
            foregrounds: strings(&["black"]),
            backgrounds: strings(&[]),
            ..Default::default()
        };
        assert_eq!(expand(&request), Err(BatchShapeError::IncompleteCrossProduct));
    }
}
