// Application state for HTTP handlers
use crate::application::controller::DashboardController;
use crate::domain::layout::DashboardLayout;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub controller: DashboardController,
    pub layout: Arc<DashboardLayout>,
    pub index_html: Arc<str>,
}
