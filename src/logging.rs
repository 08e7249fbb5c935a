use tracing_subscriber::{EnvFilter, fmt};

/// Installs the log subscriber. `RUST_LOG` wins; otherwise `debug` with
/// `--verbose` and `warn` without. Library code logs through the `log`
/// facade, which the subscriber picks up through its `tracing-log` bridge.
///
/// Call once at startup.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "studiehub=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();

    if installed.is_ok() {
        log::debug!("Logging initialized");
    }
}
