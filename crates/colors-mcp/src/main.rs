use clap::Parser;
use tracing::info;

use colors_mcp::config::{parse_count, Env, ServerOptions};
use colors_mcp::engine::StandardEngine;
use colors_mcp::server::Server;
use colors_mcp::tools::Toolbox;

/// Color conversion, mixing, and WCAG contrast checks as MCP tools.
///
/// The server reads JSON-RPC requests from standard input and writes responses
/// to standard output, one message per line. Diagnostic logging goes to
/// standard error.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Log filter, e.g., "debug" or "colors_mcp=trace" [env: COLORS_MCP_LOG]
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Maximum number of colors per list argument [env: COLORS_MCP_MAX_BATCH_SIZE]
    #[arg(long, value_name = "N", value_parser = count)]
    max_batch_size: Option<usize>,

    /// Maximum number of steps for color scales [env: COLORS_MCP_MAX_SCALE_STEPS]
    #[arg(long, value_name = "N", value_parser = count)]
    max_scale_steps: Option<usize>,

    /// Maximum number of characters of display text [env: COLORS_MCP_CHARACTER_LIMIT]
    #[arg(long, value_name = "N", value_parser = count)]
    character_limit: Option<usize>,
}

fn count(value: &str) -> Result<usize, String> {
    parse_count("value", value).map_err(|error| error.to_string())
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let mut builder = ServerOptions::builder();
    builder.environment(&Env::default())?;
    if let Some(filter) = &args.log_level {
        builder.log_filter(filter);
    }
    if let Some(size) = args.max_batch_size {
        builder.max_batch_size(size);
    }
    if let Some(steps) = args.max_scale_steps {
        builder.max_scale_steps(steps);
    }
    if let Some(limit) = args.character_limit {
        builder.character_limit(limit);
    }
    let options = builder.build();

    colors_mcp::logging::init(options.log_filter())?;
    info!(
        max_batch_size = options.max_batch_size(),
        max_scale_steps = options.max_scale_steps(),
        character_limit = options.character_limit(),
        "starting"
    );

    let server = Server::new(Toolbox::new(StandardEngine, options));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    server.serve(stdin.lock(), stdout.lock())
}
