pub mod dashboard_handler;

pub use dashboard_handler::{get_monthly, get_segments, get_summary};
