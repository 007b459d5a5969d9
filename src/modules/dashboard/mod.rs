pub mod application;

// Re-exports for easy external access
pub use application::service::{DashboardAlerts, DashboardService, DashboardStats, DashboardSummary};
