//! The MCP server.
//!
//! The server speaks JSON-RPC 2.0 over newline-delimited standard I/O: one
//! request per input line, one response per output line. It handles one
//! request at a time and stops at end of input.
//!
//! Tool failures are results, not protocol errors. A tool call with an
//! invalid color produces a regular response whose result is flagged with
//! `isError`, so that the model invoking the tool gets to see the message.

use std::io::{BufRead, Write};

use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::engine::{ColorEngine, StandardEngine};
use crate::tools::{error_result, Toolbox};

/// The server's name as reported during initialization.
pub const SERVER_NAME: &str = "colors-mcp-server";

/// The protocol version reported to clients that do not ask for one.
pub const PROTOCOL_VERSION: &str = "2025-06-18";

/// JSON-RPC error codes.
pub mod code {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    })
}

fn response(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

/// An MCP server for the color tools.
#[derive(Debug)]
pub struct Server<E = StandardEngine> {
    toolbox: Toolbox<E>,
}

impl Default for Server {
    fn default() -> Self {
        Self::new(Toolbox::default())
    }
}

impl<E: ColorEngine> Server<E> {
    /// Create a new server.
    pub fn new(toolbox: Toolbox<E>) -> Self {
        Self { toolbox }
    }

    /// Serve requests read from the input until it is exhausted.
    ///
    /// Blank lines are skipped. Each response is flushed as soon as it has
    /// been written.
    pub fn serve<R, W>(&self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        info!(name = SERVER_NAME, "serving over standard I/O");

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line) {
                serde_json::to_writer(&mut output, &response)?;
                output.write_all(b"\n")?;
                output.flush()?;
            }
        }

        info!("input closed, shutting down");
        Ok(())
    }

    /// Handle one line of input, returning the response, if any.
    pub fn handle_line(&self, line: &str) -> Option<Value> {
        match serde_json::from_str::<Value>(line) {
            Ok(message) => self.handle(message),
            Err(error) => {
                warn!(%error, "malformed JSON");
                Some(error_response(Value::Null, code::PARSE_ERROR, "Parse error"))
            }
        }
    }

    /// Handle one message, returning the response, if any.
    ///
    /// Notifications, i.e., requests without id, and responses never get a
    /// response.
    pub fn handle(&self, message: Value) -> Option<Value> {
        let Value::Object(mut message) = message else {
            return Some(error_response(
                Value::Null,
                code::INVALID_REQUEST,
                "Invalid Request",
            ));
        };

        let id = message.remove("id");
        let method = match message.get("method") {
            Some(Value::String(method)) => method.clone(),
            Some(_) => {
                return Some(error_response(
                    id.unwrap_or(Value::Null),
                    code::INVALID_REQUEST,
                    "Invalid Request",
                ))
            }
            None => {
                // A response to a request we never sent.
                return None;
            }
        };

        if message.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
            return id.map(|id| error_response(id, code::INVALID_REQUEST, "Invalid Request"));
        }

        let params = message.remove("params").unwrap_or(Value::Null);
        let Some(id) = id else {
            debug!(method = %method, "notification");
            return None;
        };

        Some(self.dispatch(id, &method, params))
    }

    fn dispatch(&self, id: Value, method: &str, params: Value) -> Value {
        match method {
            "initialize" => {
                let version = params
                    .get("protocolVersion")
                    .and_then(Value::as_str)
                    .unwrap_or(PROTOCOL_VERSION);
                info!(version, "initializing");
                response(
                    id,
                    json!({
                        "protocolVersion": version,
                        "capabilities": { "tools": { "listChanged": false } },
                        "serverInfo": {
                            "name": SERVER_NAME,
                            "version": env!("CARGO_PKG_VERSION"),
                        },
                    }),
                )
            }
            "ping" => response(id, json!({})),
            "tools/list" => response(id, json!({ "tools": self.toolbox.definitions() })),
            "tools/call" => self.call_tool(id, params),
            _ => {
                warn!(method, "unknown method");
                error_response(id, code::METHOD_NOT_FOUND, "Method not found")
            }
        }
    }

    fn call_tool(&self, id: Value, params: Value) -> Value {
        let Value::Object(mut params) = params else {
            return error_response(id, code::INVALID_PARAMS, "Invalid params: expected an object");
        };
        let Some(Value::String(name)) = params.remove("name") else {
            return error_response(id, code::INVALID_PARAMS, "Invalid params: missing tool name");
        };
        if !crate::tools::TOOL_NAMES.contains(&name.as_str()) {
            warn!(tool = %name, "unknown tool");
            return error_response(
                id,
                code::INVALID_PARAMS,
                &format!("Unknown tool: {}", name),
            );
        }

        let arguments = params
            .remove("arguments")
            .unwrap_or_else(|| Value::Object(Map::new()));

        debug!(tool = %name, "calling tool");
        match self.toolbox.call(&name, arguments) {
            Ok(result) => response(id, result.to_json()),
            Err(error) => {
                warn!(tool = %name, %error, "tool failed");
                response(id, error_result(&error))
            }
        }
    }
}
