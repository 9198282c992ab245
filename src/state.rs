use std::sync::Arc;

use crate::api::RegistrarApi;
use crate::cache::QueryCache;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn RegistrarApi>,
    pub cache: QueryCache,
}

impl AppState {
    pub fn new(api: Arc<dyn RegistrarApi>) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
        }
    }
}
