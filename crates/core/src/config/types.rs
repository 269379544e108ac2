use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub live: LiveConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    3000
}

/// Movie catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON data file with the movie records
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    /// Reuse parsed records until the file's modification time changes
    #[serde(default)]
    pub cache: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            cache: false,
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/movies.json")
}

/// Simulated live stats configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveConfig {
    /// Artificial delay before stats are returned (default: 200, 0 disables)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

fn default_latency_ms() -> u64 {
    200
}

/// Config as exposed over the API (no filesystem layout)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedCatalogConfig,
    pub live: LiveConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    /// File name of the data file, without its directory
    pub source: String,
    pub cache: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            catalog: SanitizedCatalogConfig {
                source: config
                    .catalog
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                cache: config.catalog.cache,
            },
            live: config.live.clone(),
        }
    }
}
