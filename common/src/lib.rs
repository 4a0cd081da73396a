pub mod tracer;

use clap::Args;
use tracing::level_filters::LevelFilter;

/// Options shared by every binary in the workspace which control how
/// log output is filtered.
#[derive(Clone, Debug, Args)]
pub struct LoggingOpts {
    /// Level used when the `RUST_LOG` environment variable is not set
    #[clap(long, env, default_value = "info")]
    pub log_level: LevelFilter,
}
