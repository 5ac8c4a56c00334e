// Application state for HTTP handlers
use crate::application::dashboard_source::DashboardSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DashboardSource>,
}
