use tracing_subscriber::filter::EnvFilter;

use crate::config;

/// Installs the global subscriber. `RUST_LOG` wins over `-v` when set.
pub fn set_up(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,{}={}", config::BIN_NAME, max_level(verbosity)))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
