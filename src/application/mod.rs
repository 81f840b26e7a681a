// Application layer - Services and the repository seam
pub mod dashboard_service;
pub mod export_service;
pub mod request_service;
pub mod series_repository;
