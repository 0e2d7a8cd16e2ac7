//! Console logging.
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber and routes `log` records into it.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init() -> anyhow::Result<()> {
    tracing_log::LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
