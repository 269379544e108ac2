//! Types for simulated live statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Streaming service a movie is "currently" available on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamingProvider {
    Netflix,
    #[serde(rename = "Amazon Prime")]
    AmazonPrime,
    Hulu,
}

impl StreamingProvider {
    /// The fixed set live stats draw from.
    pub const ALL: [StreamingProvider; 3] = [
        StreamingProvider::Netflix,
        StreamingProvider::AmazonPrime,
        StreamingProvider::Hulu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamingProvider::Netflix => "Netflix",
            StreamingProvider::AmazonPrime => "Amazon Prime",
            StreamingProvider::Hulu => "Hulu",
        }
    }
}

impl fmt::Display for StreamingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Randomly generated, non-persistent statistics for one movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStats {
    pub movie_id: i64,
    /// Always within [`VIEWERS_MIN`, `VIEWERS_MAX`).
    pub current_viewers: u32,
    /// Local wall-clock time the stats were generated, e.g. "3:04:05 PM".
    pub last_updated: String,
    pub trending: bool,
    pub available_streaming: StreamingProvider,
}

/// Lower bound (inclusive) of the simulated viewer count.
pub const VIEWERS_MIN: u32 = 100;
/// Upper bound (exclusive) of the simulated viewer count.
pub const VIEWERS_MAX: u32 = 1100;
