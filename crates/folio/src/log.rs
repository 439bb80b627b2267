pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

#[cfg(target_arch = "wasm32")]
/// Setup the logging system for the application for WASM.
/// Panics are forwarded to the browser console, and with the `dev-logging` feature
/// the [`tracing-web`] console writer and performance layer are installed.
pub fn setup() -> Result<(), LogError> {
    console_error_panic_hook::set_once();

    #[cfg(feature = "dev-logging")]
    {
        use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
        use tracing_subscriber::fmt::time::UtcTime;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_timer(UtcTime::rfc_3339())
            .with_writer(tracing_web::MakeConsoleWriter)
            .with_span_events(FmtSpan::ACTIVE);
        let perf_layer =
            tracing_web::performance_layer().with_details_from_fields(Pretty::default());

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(perf_layer)
            .try_init()
            .map_err(|e| LogError::TracingSubscriber(Box::new(e)))?;
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
/// Setup the logging system for native builds and tests.
/// This function will install the [`color_eyre`] error reporting system
/// and the [`tracing-subscriber`] logging system.
/// `RUST_LIB_BACKTRACE` defaults to `1` and `RUST_LOG` to debug output for the folio crates.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    color_eyre::install().map_err(LogError::ColorEyre)?;

    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", "folio=debug,folio_frontend=debug") }
    }
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
