// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::export_service::ExportService;
use crate::application::request_service::RequestService;

pub struct AppState {
    pub dashboard_service: DashboardService,
    pub export_service: ExportService,
    pub request_service: RequestService,
}
