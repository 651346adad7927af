pub mod alerts; // smart alert evaluation + client-side dismissal
pub mod appointment; // appointment classification and scheduling windows
pub mod config;
pub mod error;
pub mod medications; // dosing schedules and adherence
pub mod models;
pub mod scoring; // wellness score, trend, risk tier
pub mod seed; // initial dataset intake
pub mod store; // patient store — single source of truth
pub mod vitals; // vital-sign entry validation

use tracing_subscriber::EnvFilter;

/// Initialise tracing for an embedding application.
///
/// Honours `RUST_LOG` when set, otherwise falls back to the crate default.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    tracing::info!("Pulseboard core v{}", config::APP_VERSION);
}
