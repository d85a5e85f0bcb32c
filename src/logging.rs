//! Tracing subscriber setup for the `opj-api` binary.
//!
//! The library itself only emits events; installing a subscriber is the
//! embedding application's call.

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

/// Filter used when `RUST_LOG` is not set. `opj_api` is the binary's target.
pub fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "opj_api_client=debug,opj_api=debug,reqwest=info,warn",
        Environment::Staging => "opj_api_client=info,opj_api=info,warn",
        Environment::Prod => "opj_api_client=info,opj_api=info,error",
    }
}

/// Install the global subscriber: JSON lines in prod, compact text elsewhere.
/// Fails if a subscriber is already installed.
pub fn init_logging(env: &Environment) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(!env.is_prod());
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if env.is_prod() {
        registry.with(fmt_layer.json().flatten_event(true)).try_init()
    } else {
        registry.with(fmt_layer.compact()).try_init()
    };
    installed.map_err(|e| anyhow!("logging already initialised: {e}"))?;

    tracing::debug!(env = ?env, "Logging initialized");
    Ok(())
}
