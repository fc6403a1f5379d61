use crate::backend::LookupBackend;
use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: Arc<dyn LookupBackend>,
}

impl AppState {
    pub fn new(config: AppConfig, backend: impl LookupBackend + 'static) -> Self {
        Self {
            config: Arc::new(config),
            backend: Arc::new(backend),
        }
    }
}
