//! Shared state handed to every handler.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::repository::MemberStore;
use crate::search::MemberSearchService;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<WebConfig>,
    pub search_service: MemberSearchService<dyn MemberStore>,
}

impl AppState {
    pub fn new(config: WebConfig, store: Arc<dyn MemberStore>) -> Self {
        Self {
            config: Arc::new(config),
            search_service: MemberSearchService::new(store),
        }
    }

    pub fn store(&self) -> &Arc<dyn MemberStore> {
        self.search_service.store()
    }
}
