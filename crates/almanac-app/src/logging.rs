use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "almanac",
    "almanac_core",
    "almanac_expand",
    "almanac_service",
];

/// Lets the filter be swapped once settings are known.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

/// Maps CLI verbosity to a level.
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
const fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn crate_filter(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. Logs go to stderr; stdout carries output.
///
/// `RUST_LOG` wins over everything; otherwise `-v` flags set the level.
pub fn init(verbosity: u8) -> LogHandle {
    let from_env = std::env::var("RUST_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok());
    let pinned = from_env.is_some() || verbosity > 0;
    let filter =
        from_env.unwrap_or_else(|| EnvFilter::new(crate_filter(verbosity_level(verbosity))));

    let (filter_layer, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    LogHandle { handle, pinned }
}

impl LogHandle {
    /// Switches to the configured level unless `RUST_LOG` or `-v` chose one.
    pub fn apply_config_level(&self, level: &str) {
        if self.pinned {
            return;
        }

        if let Ok(filter) = EnvFilter::try_new(crate_filter(level)) {
            if let Err(e) = self.handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter from config");
            }
        } else {
            tracing::warn!(level = %level, "Invalid log level in config, keeping warn");
        }
    }
}
