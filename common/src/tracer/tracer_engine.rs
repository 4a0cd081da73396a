use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt};

pub struct TracerOptions {
    pub default_level: LevelFilter,
}

/// This object initialises the stderr tracer, given a TracerOptions struct.
/// Stdout is left free for the data written by the calling binary.
pub struct TracerEngine;

impl TracerEngine {
    /// Initialises the stderr tracer for the crate
    /// #Arguments
    /// * `options` - The caller-specified instance of TracerOptions.
    /// * `service_name` - The name of the binary being traced.
    /// * `module_name` - The name of the current module.
    /// #Returns
    /// An instance of TracerEngine
    pub fn new(options: TracerOptions, service_name: &str, module_name: &str) -> Self {
        let stderr_tracer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        // `RUST_LOG` takes precedence over the level given on the command line
        let log_filter = EnvFilter::builder()
            .with_default_directive(options.default_level.into())
            .from_env_lossy();

        let subscriber =
            tracing_subscriber::Registry::default().with(stderr_tracer.with_filter(log_filter));

        //  This is only called once, so will never panic
        tracing::subscriber::set_global_default(subscriber)
            .expect("tracing::subscriber::set_global_default should only be called once");

        debug!("Tracer initialised for {service_name} in {module_name}");

        Self
    }
}
