pub mod stats;

pub use stats::DashboardStats;
