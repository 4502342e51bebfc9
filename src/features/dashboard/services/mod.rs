pub mod chart_service;
pub mod dashboard_service;

pub use dashboard_service::DashboardService;
