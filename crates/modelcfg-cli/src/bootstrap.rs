//! CLI bootstrap - the composition root.
//!
//! Loads the environment, resolves the typed configuration handed to
//! handlers and installs the tracing subscriber. There is no other shared
//! state: handlers only see a [`CliConfig`].

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::parser::Cli;

/// How handlers render their results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines and tables
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

/// Configuration resolved from flags, environment and `.env`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub format: OutputFormat,
    /// Fail `list` on the first invalid entry.
    pub strict: bool,
    pub verbose: bool,
}

impl CliConfig {
    /// Resolve configuration from parsed arguments.
    ///
    /// Environment fallbacks are applied by clap during parsing, so this
    /// is a plain projection.
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            strict: cli.strict,
            verbose: cli.verbose,
        }
    }

    /// Default log directive when `RUST_LOG` is unset.
    pub const fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Load a `.env` file from the working directory, if there is one.
///
/// Must run before argument parsing so clap sees the variables.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so JSON output on stdout stays machine-readable.
/// `RUST_LOG` overrides the level derived from `--verbose`.
pub fn init_logging(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_level()));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
