use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;

/// Shared per-process state, built once in `main` and cloned into every
/// worker. Holds nothing with request scope.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Config,
    pub http: reqwest::Client,
}
