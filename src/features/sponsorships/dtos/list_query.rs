use serde::Deserialize;
use utoipa::IntoParams;

use crate::features::sponsorships::listing::{
    DateRangeFilter, ListFilter, SegmentFilter, StatusFilter,
};

fn default_segment() -> String {
    "all".to_string()
}

fn default_page() -> i64 {
    1
}

/// Query parameters for the admin request listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListRequestsQuery {
    /// Free-text search over name, email and project name
    #[serde(default)]
    pub search: String,

    /// Status selector ("all" or one status)
    #[serde(default)]
    pub status: StatusFilter,

    /// Category selector ("all" or one exact category)
    #[serde(default = "default_segment")]
    pub category: String,

    /// Date-range selector ("all", "today", "week", "month", "sixMonths", "year")
    #[serde(default)]
    pub range: DateRangeFilter,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

impl ListRequestsQuery {
    pub fn filter(&self) -> ListFilter {
        ListFilter {
            search: self.search.clone(),
            status: self.status,
            segment: SegmentFilter::from_param(&self.category),
            range: self.range,
        }
    }
}

/// Query parameters for the admin offer listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListOffersQuery {
    /// Free-text search over company name, contact person and email
    #[serde(default)]
    pub search: String,

    /// Status selector ("all" or one status)
    #[serde(default)]
    pub status: StatusFilter,

    /// Industry selector ("all" or one exact industry)
    #[serde(default = "default_segment")]
    pub industry: String,

    /// Date-range selector ("all", "today", "week", "month", "sixMonths", "year")
    #[serde(default)]
    pub range: DateRangeFilter,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

impl ListOffersQuery {
    pub fn filter(&self) -> ListFilter {
        ListFilter {
            search: self.search.clone(),
            status: self.status,
            segment: SegmentFilter::from_param(&self.industry),
            range: self.range,
        }
    }
}
