//! # colors-mcp
//!
//! This crate exposes **color conversion, mixing, and accessibility checks as
//! [MCP](https://modelcontextprotocol.io) tools**. The color science itself
//! lives in the [`colormath`] crate. This crate validates tool arguments,
//! dispatches to the color math through the [`engine::ColorEngine`] trait, and
//! formats results as Markdown plus structured content.
//!
//! Its one piece of genuine data-flow logic is the **contrast pipeline**:
//!
//!   * The [`composite`] module flattens a translucent foreground and
//!     background over a base color into an opaque pair.
//!   * The [`contrast`] module computes the WCAG 2 contrast ratio of that pair
//!     and classifies it against the AA, AAA, and non-text thresholds.
//!   * The [`batch`] module expands batch requests, given either as explicit
//!     pairs or as the cross product of foregrounds and backgrounds, into an
//!     ordered sequence of pairs.
//!
//! The [`tools`] module defines the nine tools and [`server::Server`] serves
//! them over JSON-RPC on standard I/O.
//!
//!
//! # Example
//!
//! ```
//! # use colors_mcp::tools::Toolbox;
//! # use serde_json::json;
//! let toolbox: Toolbox = Toolbox::default();
//! let result = toolbox.call("colors_contrast", json!({
//!     "foreground": "rgba(0, 0, 0, 0.5)",
//!     "background": "#ffffff",
//! }))?;
//!
//! assert_eq!(result.structured["ratio"], json!(3.98));
//! assert_eq!(result.structured["aa"]["regular"], json!(false));
//! assert_eq!(result.structured["aa"]["large"], json!(true));
//! # Ok::<(), colors_mcp::error::ToolError>(())
//! ```

pub mod batch;
pub mod composite;
pub mod config;
pub mod contrast;
pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod server;
pub mod tools;
pub mod value;
