//! Logging initialization module
//!
//! Provides a single initialization point for the tracing subscriber.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

const DEFAULT_DEV_FILTER: &str = "roster_core=debug,roster_engine=debug,roster_cli=debug";
const DEFAULT_PROD_FILTER: &str = "roster_core=info,roster_engine=info,roster_cli=info";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No-op registry for tests
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at application startup; later calls are no-ops. `RUST_LOG`
/// overrides the profile's default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DEV_FILTER)),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_PROD_FILTER)),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
