use std::sync::Arc;
use cinedeck_core::{Config, LiveStatsGenerator, MovieCatalog, SanitizedConfig};

use crate::prerender::PrerenderedPages;

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<dyn MovieCatalog>,
    live: LiveStatsGenerator,
    prerendered: PrerenderedPages,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Arc<dyn MovieCatalog>,
        live: LiveStatsGenerator,
        prerendered: PrerenderedPages,
    ) -> Self {
        Self {
            config,
            catalog,
            live,
            prerendered,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn catalog(&self) -> &dyn MovieCatalog {
        self.catalog.as_ref()
    }

    pub fn live(&self) -> &LiveStatsGenerator {
        &self.live
    }

    pub fn prerendered(&self) -> &PrerenderedPages {
        &self.prerendered
    }
}
