//! HTTP layer: application state, routing, and error mapping.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use db::DBService;
use services::services::studio::StudioService;

/// Shared application state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    db: DBService,
    studio: Arc<StudioService>,
}

impl AppState {
    pub fn new(db: DBService) -> Self {
        Self {
            db,
            studio: Arc::new(StudioService::new()),
        }
    }

    pub fn db(&self) -> &DBService {
        &self.db
    }

    pub fn studio(&self) -> &StudioService {
        &self.studio
    }
}
