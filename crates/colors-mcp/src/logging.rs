//! Diagnostic logging.
//!
//! Standard output carries protocol messages, so all log output goes to
//! standard error, without ANSI colors.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_VAR;
use crate::error::ConfigError;

/// Install the global subscriber with the given filter directives.
///
/// Installing a subscriber a second time is a no-op.
pub fn init(filter: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|_| ConfigError::new(LOG_VAR, filter, "a valid log filter"))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod test {
    use super::init;

    #[test]
    fn test_init() {
        assert!(init("debug").is_ok());
        assert!(init("colors_mcp=warn").is_ok());
        assert!(init("colors_mcp=loud").is_err());
    }
}
