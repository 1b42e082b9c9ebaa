//! Helper module with the server's options.
//!
//! This module provides the options for running the tool server, the
//! corresponding builder, and the environment abstraction used for reading
//! settings from environment variables.
//!
//!
//! # Example
//!
//! ```
//! # use colors_mcp::config::ServerOptions;
//! let options = ServerOptions::builder()
//!     .max_batch_size(10)
//!     .build();
//!
//! assert_eq!(options.max_batch_size(), 10);
//! assert_eq!(options.max_scale_steps(), 20);
//! ```

use crate::error::ConfigError;

/// The environment variable with the log filter.
pub const LOG_VAR: &str = "COLORS_MCP_LOG";
/// The environment variable with the maximum number of colors per batch.
pub const MAX_BATCH_SIZE_VAR: &str = "COLORS_MCP_MAX_BATCH_SIZE";
/// The environment variable with the maximum number of scale steps.
pub const MAX_SCALE_STEPS_VAR: &str = "COLORS_MCP_MAX_SCALE_STEPS";
/// The environment variable with the character limit for display text.
pub const CHARACTER_LIMIT_VAR: &str = "COLORS_MCP_CHARACTER_LIMIT";

/// The default number of decimal places for converted coordinates.
pub const DEFAULT_PRECISION: u8 = 3;
/// The maximum number of decimal places for converted coordinates.
pub const MAX_PRECISION: u8 = 10;

/// A trait to abstract over environment variable access.
///
/// The standard library is a bit spartan when it comes to environment variable
/// access. So this trait makes up for it yet still keeps things simple by only
/// requiring the implementation of one method.
pub trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable is defined with a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

fn read_count<E: Environment>(env: &E, key: &str) -> Result<Option<usize>, ConfigError> {
    if !env.is_non_empty(key) {
        return Ok(None);
    }

    let value = env.read(key).map_err(|error| match error {
        std::env::VarError::NotUnicode(s) => {
            ConfigError::new(key, s.to_string_lossy(), "a positive integer")
        }
        std::env::VarError::NotPresent => ConfigError::new(key, "", "a positive integer"),
    })?;

    parse_count(key, &value).map(Some)
}

/// Parse a strictly positive count.
pub fn parse_count(key: &str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if 0 < n => Ok(n),
        _ => Err(ConfigError::new(key, value, "a positive integer")),
    }
}

#[derive(Clone, Debug)]
struct OptionData {
    max_batch_size: usize,
    max_scale_steps: usize,
    character_limit: usize,
    log_filter: Option<String>,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            max_batch_size: 50,
            max_scale_steps: 20,
            character_limit: 25_000,
            log_filter: None,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the maximum number of colors per list argument.
    ///
    /// This method ensures that the size is at least one.
    pub fn max_batch_size(&mut self, size: usize) -> &mut Self {
        self.0.max_batch_size = size.max(1);
        self
    }

    /// Set the maximum number of steps for color scales.
    ///
    /// This method ensures that the maximum admits the smallest scale, which
    /// has two steps.
    pub fn max_scale_steps(&mut self, steps: usize) -> &mut Self {
        self.0.max_scale_steps = steps.max(2);
        self
    }

    /// Set the maximum number of characters for display text.
    pub fn character_limit(&mut self, limit: usize) -> &mut Self {
        self.0.character_limit = limit.max(1);
        self
    }

    /// Set the log filter, using [`tracing_subscriber::EnvFilter`] syntax.
    pub fn log_filter(&mut self, filter: &str) -> &mut Self {
        self.0.log_filter = Some(filter.to_owned());
        self
    }

    /// Update the options from the given environment.
    ///
    /// Variables that are undefined or empty leave the current value in
    /// place. Variables with malformed values are errors.
    pub fn environment<E: Environment>(&mut self, env: &E) -> Result<&mut Self, ConfigError> {
        if let Some(size) = read_count(env, MAX_BATCH_SIZE_VAR)? {
            self.max_batch_size(size);
        }
        if let Some(steps) = read_count(env, MAX_SCALE_STEPS_VAR)? {
            self.max_scale_steps(steps);
        }
        if let Some(limit) = read_count(env, CHARACTER_LIMIT_VAR)? {
            self.character_limit(limit);
        }
        if env.is_non_empty(LOG_VAR) {
            if let Ok(filter) = env.read(LOG_VAR) {
                self.log_filter(&filter);
            }
        }

        Ok(self)
    }

    /// Instantiate the options.
    pub fn build(&self) -> ServerOptions {
        ServerOptions(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct ServerOptions(OptionData);

impl Default for ServerOptions {
    fn default() -> Self {
        ServerOptions(OptionData::new())
    }
}

impl ServerOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Get the maximum number of colors per list argument, which also bounds
    /// the number of pairs in the explicit form of a batch contrast check.
    pub fn max_batch_size(&self) -> usize {
        self.0.max_batch_size
    }

    /// Get the maximum number of steps for color scales.
    pub fn max_scale_steps(&self) -> usize {
        self.0.max_scale_steps
    }

    /// Get the maximum number of characters for display text.
    pub fn character_limit(&self) -> usize {
        self.0.character_limit
    }

    /// Get the log filter, which defaults to `info`.
    pub fn log_filter(&self) -> &str {
        self.0.log_filter.as_deref().unwrap_or("info")
    }
}

#[cfg(test)]
mod test {
    use super::{Environment, ServerOptions, CHARACTER_LIMIT_VAR, LOG_VAR, MAX_BATCH_SIZE_VAR};
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set(&mut self, key: &str, value: &str) -> &mut Self {
            self.bindings.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    #[test]
    fn test_defaults() {
        let options = ServerOptions::default();
        assert_eq!(options.max_batch_size(), 50);
        assert_eq!(options.max_scale_steps(), 20);
        assert_eq!(options.character_limit(), 25_000);
        assert_eq!(options.log_filter(), "info");
    }

    #[test]
    fn test_builder_bounds() {
        let options = ServerOptions::builder()
            .max_batch_size(0)
            .max_scale_steps(1)
            .character_limit(0)
            .build();
        assert_eq!(options.max_batch_size(), 1);
        assert_eq!(options.max_scale_steps(), 2);
        assert_eq!(options.character_limit(), 1);
    }

    #[test]
    fn test_environment() {
        let mut env = FakeEnv::new();
        env.set(MAX_BATCH_SIZE_VAR, "12")
            .set(CHARACTER_LIMIT_VAR, "")
            .set(LOG_VAR, "debug");

        let mut builder = ServerOptions::builder();
        assert!(builder.environment(&env).is_ok());
        let options = builder.build();
        assert_eq!(options.max_batch_size(), 12);
        assert_eq!(options.max_scale_steps(), 20);
        assert_eq!(options.character_limit(), 25_000);
        assert_eq!(options.log_filter(), "debug");

        env.set(MAX_BATCH_SIZE_VAR, "0");
        let error = ServerOptions::builder().environment(&env).map(|_| ());
        assert!(error.is_err());

        env.set(MAX_BATCH_SIZE_VAR, "many");
        let result = ServerOptions::builder().environment(&env).map(|_| ());
        match result {
            Err(error) => assert_eq!(error.key(), MAX_BATCH_SIZE_VAR),
            Ok(()) => panic!("malformed batch size should be rejected"),
        }
    }
}
