use std::sync::Arc;

use crate::config::Config;
use crate::store::TenantSpace;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TenantSpace>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(TenantSpace::from_config(&config.store)),
            config,
        }
    }
}
