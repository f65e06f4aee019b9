//! Periodic liveness ping. Shares no state with attendance.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Spawns a task that GETs `url` every `interval`, starting one interval
/// after spawn.
pub fn spawn_heartbeat(url: String, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        // the first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            ping(&client, &url).await;
        }
    })
}

/// One ping. Any HTTP response counts as reachable.
pub async fn ping(client: &reqwest::Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) => {
            info!("Heartbeat pinged {} ({})", url, response.status());
            true
        }
        Err(e) => {
            warn!("Heartbeat failed: {}", e);
            false
        }
    }
}
