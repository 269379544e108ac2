//! Simulated "real-time" statistics for the per-request detail page.
//!
//! Nothing here talks to a real service. Values are random on every call and
//! an artificial delay stands in for upstream latency.

mod types;

pub use types::*;

use std::time::Duration;

use chrono::Local;
use rand::Rng;
use tracing::debug;

use crate::config::LiveConfig;
use crate::metrics::LIVE_STATS_GENERATED;

/// Generates [`LiveStats`] values.
#[derive(Debug, Clone)]
pub struct LiveStatsGenerator {
    latency: Duration,
}

impl Default for LiveStatsGenerator {
    fn default() -> Self {
        Self::new(LiveConfig::default())
    }
}

impl LiveStatsGenerator {
    pub fn new(config: LiveConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.latency_ms),
        }
    }

    /// Generator without the simulated delay.
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Fresh stats for `movie_id`. The id is not checked against any catalog.
    pub async fn fetch(&self, movie_id: i64) -> LiveStats {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let last_updated = Local::now().format("%-I:%M:%S %p").to_string();
        let stats = generate(movie_id, &mut rand::thread_rng(), last_updated);
        LIVE_STATS_GENERATED.inc();
        debug!(
            movie_id,
            viewers = stats.current_viewers,
            trending = stats.trending,
            "Generated live stats"
        );
        stats
    }
}

/// Draw one set of stats from `rng`.
pub fn generate<R: Rng>(movie_id: i64, rng: &mut R, last_updated: String) -> LiveStats {
    let providers = StreamingProvider::ALL;
    LiveStats {
        movie_id,
        current_viewers: rng.gen_range(VIEWERS_MIN..VIEWERS_MAX),
        last_updated,
        trending: rng.gen_bool(0.5),
        available_streaming: providers[rng.gen_range(0..providers.len())],
    }
}
