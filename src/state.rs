use crate::config::Config;
use crate::deployment::Deployment;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deployment: Deployment,
    pub config: Arc<Config>,
}
