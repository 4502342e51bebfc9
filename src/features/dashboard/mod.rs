//! Admin reporting dashboard.
//!
//! Loads the complete (unfiltered) record sets and derives chart data in
//! memory: a trailing six-month submission series and per-category /
//! per-industry occurrence buckets with a fixed cyclic palette.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::DashboardService;
