//! Background maintenance tasks.
//!
//! The only recurring job is the session sweep: expired sessions are already
//! rejected at validation time, so the sweep exists to keep the table from
//! growing without bound.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::services::session;
use crate::state::AppState;

const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 3600;

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Spawn the periodic session sweep. Returns a handle for shutdown.
pub fn spawn_session_sweeper(state: AppState) -> JoinHandle<()> {
    let interval_secs = env_parse("SESSION_SWEEP_INTERVAL_SECS", DEFAULT_SESSION_SWEEP_INTERVAL_SECS);
    info!(interval_secs, "session sweeper configured");
    tokio::spawn(async move {
        loop {
            match session::purge_expired(&state.pool).await {
                Ok(0) => {}
                Ok(purged) => info!(purged, "expired sessions purged"),
                Err(e) => error!(error = %e, "session sweep failed"),
            }
            tokio::time::sleep(Duration::from_secs(interval_secs)).await;
        }
    })
}

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod tests;
