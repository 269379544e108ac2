pub mod catalog;
pub mod config;
pub mod live;
pub mod metrics;

pub use catalog::{
    create_catalog, CachedCatalog, CatalogError, JsonFileCatalog, MovieCatalog, MovieRecord,
    StaticCatalog, PLACEHOLDER_POSTER,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    LiveConfig, SanitizedConfig, ServerConfig,
};
pub use live::{LiveStats, LiveStatsGenerator, StreamingProvider};
