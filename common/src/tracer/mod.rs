mod tracer_engine;

pub use tracer_engine::{TracerEngine, TracerOptions};

/// Should be called at the start of each binary.
/// Takes a `&LoggingOpts` (or anything with a `log_level: LevelFilter` field)
/// and installs the global subscriber, naming the binary and calling module
/// in the startup message.
#[macro_export]
macro_rules! init_tracer {
    ($opts:expr) => {{
        $crate::tracer::TracerEngine::new(
            $crate::tracer::TracerOptions {
                default_level: $opts.log_level,
            },
            env!("CARGO_BIN_NAME"),
            module_path!(),
        )
    }};
}
