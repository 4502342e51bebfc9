//! In-memory filter and pagination pipeline for admin listings.
//!
//! The dashboard loads the full record set for a kind (ordered newest first)
//! and narrows it here. Four independent inputs compose by AND: free-text
//! search, status, category/industry, and a date range anchored to "now".
//! Filtering never re-sorts; the input order is preserved.

use chrono::{DateTime, Duration, FixedOffset, Months, NaiveTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use super::models::SponsorshipStatus;

/// Status selector: "all" or one exact status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl StatusFilter {
    fn matches(&self, status: SponsorshipStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == SponsorshipStatus::Pending,
            StatusFilter::Approved => status == SponsorshipStatus::Approved,
            StatusFilter::Rejected => status == SponsorshipStatus::Rejected,
            StatusFilter::Completed => status == SponsorshipStatus::Completed,
        }
    }
}

/// Category/industry selector: "all" or one exact value (case-sensitive)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SegmentFilter {
    #[default]
    All,
    Only(String),
}

impl SegmentFilter {
    pub fn from_param(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            SegmentFilter::All
        } else {
            SegmentFilter::Only(value.to_string())
        }
    }

    fn matches(&self, segment: &str) -> bool {
        match self {
            SegmentFilter::All => true,
            SegmentFilter::Only(value) => value == segment,
        }
    }
}

/// Date-range selector.
///
/// Only `today` anchors to midnight; every other option is a rolling offset
/// from the current instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DateRangeFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
    SixMonths,
    Year,
}

impl DateRangeFilter {
    /// Start of the accepted window, or None when everything matches
    fn start(&self, now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        match self {
            DateRangeFilter::All => None,
            DateRangeFilter::Today => Some(start_of_day(now)),
            DateRangeFilter::Week => Some(now - Duration::days(7)),
            DateRangeFilter::Month => Some(now.checked_sub_months(Months::new(1)).unwrap_or(now)),
            DateRangeFilter::SixMonths => {
                Some(now.checked_sub_months(Months::new(6)).unwrap_or(now))
            }
            DateRangeFilter::Year => Some(now.checked_sub_months(Months::new(12)).unwrap_or(now)),
        }
    }
}

fn start_of_day(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    now.date_naive()
        .and_time(NaiveTime::MIN)
        .and_local_timezone(*now.offset())
        .single()
        .unwrap_or(now)
}

/// The four filter inputs for one listing
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub search: String,
    pub status: StatusFilter,
    pub segment: SegmentFilter,
    pub range: DateRangeFilter,
}

/// Access to the fields the filter predicate reads, per record kind
pub trait ListRecord {
    /// Fields matched by the free-text search, any-of
    fn search_fields(&self) -> [&str; 3];
    fn status(&self) -> SponsorshipStatus;
    /// Category for requests, industry for offers
    fn segment(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

/// Narrow `items` to those matching every filter input, preserving order
pub fn apply_filter<T: ListRecord>(
    items: Vec<T>,
    filter: &ListFilter,
    now: DateTime<FixedOffset>,
) -> Vec<T> {
    let needle = filter.search.trim().to_lowercase();
    let window_start = filter.range.start(now);

    items
        .into_iter()
        .filter(|record| {
            let search_ok = needle.is_empty()
                || record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle));

            let range_ok = window_start.is_none_or(|start| {
                let ts = record.created_at().with_timezone(now.offset());
                ts >= start && ts <= now
            });

            search_ok
                && filter.status.matches(record.status())
                && filter.segment.matches(record.segment())
                && range_ok
        })
        .collect()
}

/// Pagination metadata for a listing response
#[derive(Debug, Clone, serde::Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

/// One page of a filtered listing
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Slice out the requested 1-indexed page.
///
/// The requested page is clamped into `[1, max(total_pages, 1)]`, so a page
/// index that outlives a deletion moves back to the new last page instead of
/// pointing past the end.
pub fn paginate<T>(items: Vec<T>, requested_page: i64, page_size: i64) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len() as i64;
    let total_pages = total_items.div_ceil(page_size);
    let page = requested_page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * page_size) as usize;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Page {
        items,
        meta: PageMeta {
            page,
            page_size,
            total_items,
            total_pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct TestRecord {
        name: String,
        email: String,
        project: String,
        status: SponsorshipStatus,
        segment: String,
        created_at: DateTime<Utc>,
    }

    impl ListRecord for TestRecord {
        fn search_fields(&self) -> [&str; 3] {
            [&self.name, &self.email, &self.project]
        }

        fn status(&self) -> SponsorshipStatus {
            self.status
        }

        fn segment(&self) -> &str {
            &self.segment
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    fn record(name: &str, created_at: DateTime<Utc>) -> TestRecord {
        TestRecord {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            project: format!("{} project", name),
            status: SponsorshipStatus::Pending,
            segment: "Technology".to_string(),
            created_at,
        }
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap()
    }

    fn now_fixed() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 10, 12, 0, 0)
            .single()
            .unwrap()
    }

    #[test]
    fn test_noop_filter_is_identity() {
        let items = vec![
            record("Charlie", utc(2026, 3, 9, 8, 0)),
            record("Alpha", utc(2026, 3, 8, 8, 0)),
            record("Bravo", utc(2026, 3, 7, 8, 0)),
        ];

        let filtered = apply_filter(items, &ListFilter::default(), now_fixed());

        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut acme = record("Acme Corp", utc(2026, 3, 9, 8, 0));
        acme.email = "contact@acme.io".to_string();
        let beta = record("Beta LLC", utc(2026, 3, 8, 8, 0));

        let filter = ListFilter {
            search: "aCmE".to_string(),
            ..Default::default()
        };
        let filtered = apply_filter(vec![acme, beta], &filter, now_fixed());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Acme Corp");
    }

    #[test]
    fn test_search_matches_any_field() {
        let mut by_email = record("Quiet Name", utc(2026, 3, 9, 8, 0));
        by_email.email = "hello@skyline.dev".to_string();
        let other = record("Other", utc(2026, 3, 8, 8, 0));

        let filter = ListFilter {
            search: "skyline".to_string(),
            ..Default::default()
        };
        let filtered = apply_filter(vec![by_email, other], &filter, now_fixed());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Quiet Name");
    }

    #[test]
    fn test_status_filter_is_exact() {
        let mut approved = record("Approved One", utc(2026, 3, 9, 8, 0));
        approved.status = SponsorshipStatus::Approved;
        let pending = record("Pending One", utc(2026, 3, 8, 8, 0));

        let filter = ListFilter {
            status: StatusFilter::Approved,
            ..Default::default()
        };
        let filtered = apply_filter(vec![approved, pending], &filter, now_fixed());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Approved One");
    }

    #[test]
    fn test_segment_filter_is_exact_and_case_sensitive() {
        let tech = record("Tech", utc(2026, 3, 9, 8, 0));
        let mut sports = record("Sports", utc(2026, 3, 8, 8, 0));
        sports.segment = "Sports".to_string();
        let mut lower = record("Lower", utc(2026, 3, 7, 8, 0));
        lower.segment = "technology".to_string();

        let filter = ListFilter {
            segment: SegmentFilter::from_param("Technology"),
            ..Default::default()
        };
        let filtered = apply_filter(vec![tech, sports, lower], &filter, now_fixed());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Tech");
    }

    #[test]
    fn test_segment_param_all_matches_everything() {
        assert_eq!(SegmentFilter::from_param("all"), SegmentFilter::All);
        assert_eq!(SegmentFilter::from_param(""), SegmentFilter::All);
        assert_eq!(
            SegmentFilter::from_param("Sports"),
            SegmentFilter::Only("Sports".to_string())
        );
    }

    #[test]
    fn test_today_range_anchors_to_midnight() {
        // now is 2026-03-10 12:00 UTC
        let yesterday_late = record("Yesterday", utc(2026, 3, 9, 23, 59));
        let today_early = record("Today", utc(2026, 3, 10, 0, 1));

        let filter = ListFilter {
            range: DateRangeFilter::Today,
            ..Default::default()
        };
        let filtered = apply_filter(vec![yesterday_late, today_early], &filter, now_fixed());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Today");
    }

    #[test]
    fn test_rolling_ranges_use_the_current_instant() {
        let now = now_fixed();
        let inside_week = record("Inside", utc(2026, 3, 4, 13, 0));
        let outside_week = record("Outside", utc(2026, 3, 3, 11, 0));

        let filter = ListFilter {
            range: DateRangeFilter::Week,
            ..Default::default()
        };
        let filtered = apply_filter(vec![inside_week, outside_week], &filter, now);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Inside");
    }

    #[test]
    fn test_month_range_walks_the_calendar() {
        let now = now_fixed();
        // One month before 2026-03-10 12:00 is 2026-02-10 12:00
        let inside = record("Inside", utc(2026, 2, 10, 13, 0));
        let outside = record("Outside", utc(2026, 2, 10, 11, 0));

        let filter = ListFilter {
            range: DateRangeFilter::Month,
            ..Default::default()
        };
        let filtered = apply_filter(vec![inside, outside], &filter, now);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Inside");
    }

    #[test]
    fn test_future_records_are_excluded_from_ranged_windows() {
        let future = record("Future", utc(2026, 3, 11, 8, 0));

        let filter = ListFilter {
            range: DateRangeFilter::Year,
            ..Default::default()
        };
        let filtered = apply_filter(vec![future], &filter, now_fixed());

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filters_compose_by_and() {
        let mut matching = record("Acme Corp", utc(2026, 3, 10, 8, 0));
        matching.status = SponsorshipStatus::Approved;
        let mut wrong_status = record("Acme Corp", utc(2026, 3, 10, 9, 0));
        wrong_status.status = SponsorshipStatus::Pending;

        let filter = ListFilter {
            search: "acme".to_string(),
            status: StatusFilter::Approved,
            segment: SegmentFilter::from_param("Technology"),
            range: DateRangeFilter::Today,
        };
        let filtered = apply_filter(vec![matching, wrong_status], &filter, now_fixed());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].status, SponsorshipStatus::Approved);
    }

    #[test]
    fn test_pagination_slices_23_items_into_3_pages() {
        let items: Vec<i64> = (1..=23).collect();

        let first = paginate(items.clone(), 1, 10);
        assert_eq!(first.items, (1..=10).collect::<Vec<_>>());
        assert_eq!(first.meta.total_pages, 3);
        assert_eq!(first.meta.total_items, 23);

        let last = paginate(items, 3, 10);
        assert_eq!(last.items, vec![21, 22, 23]);
        assert_eq!(last.meta.page, 3);
    }

    #[test]
    fn test_page_past_the_end_clamps_to_last_page() {
        // 21 items put one item on page 3; after deleting it the same page
        // index must fall back to page 2
        let items: Vec<i64> = (1..=20).collect();

        let page = paginate(items, 3, 10);
        assert_eq!(page.meta.page, 2);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_never_drops_below_one() {
        let empty: Vec<i64> = Vec::new();

        let page = paginate(empty, 5, 10);
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.total_pages, 0);
        assert!(page.items.is_empty());

        let page = paginate(vec![1, 2, 3], 0, 10);
        assert_eq!(page.meta.page, 1);
    }
}
