use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, defaulting to `info`. Must run after the `.env`
/// file is loaded so a `RUST_LOG` set there takes effect. Serenity's own spans are
/// noisy at debug level; narrow them with e.g. `RUST_LOG=info,wolfbot=debug`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
