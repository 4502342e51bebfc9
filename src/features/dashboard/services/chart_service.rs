//! Chart data derivation over the full record sets.
//!
//! Both derivations read the unfiltered lists: the listing filters never
//! narrow what the charts see.

use chrono::{DateTime, Datelike, FixedOffset, Months, Utc};

use crate::features::dashboard::dtos::{MonthlyBucketDto, SegmentBucketDto, SegmentSeriesDto};
use crate::features::sponsorships::models::{SponsorshipOffer, SponsorshipRequest};

/// Fixed cyclic palette for segment buckets, indexed by first appearance
pub const SEGMENT_PALETTE: [&str; 7] = [
    "#3b82f6", "#22c55e", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6",
];

/// Derive the trailing six-month submission series.
///
/// Always exactly six buckets, ascending from (now - 5 months) to the month
/// of `now`, counting records whose creation instant falls in that calendar
/// month by the wall-clock date of `now`'s offset. Months with no records
/// still appear with zero counts.
pub fn monthly_buckets(
    requests: &[SponsorshipRequest],
    offers: &[SponsorshipOffer],
    now: DateTime<FixedOffset>,
) -> Vec<MonthlyBucketDto> {
    let today = now.date_naive();
    let anchor = today.with_day(1).unwrap_or(today);

    (0..6u32)
        .rev()
        .map(|back| {
            let month_start = anchor
                .checked_sub_months(Months::new(back))
                .unwrap_or(anchor);
            let key = (month_start.year(), month_start.month());

            MonthlyBucketDto {
                label: month_start.format("%b").to_string(),
                requests: count_in_month(requests.iter().map(|r| r.created_at), key, now.offset()),
                offers: count_in_month(offers.iter().map(|o| o.created_at), key, now.offset()),
            }
        })
        .collect()
}

fn count_in_month(
    timestamps: impl Iterator<Item = DateTime<Utc>>,
    key: (i32, u32),
    offset: &FixedOffset,
) -> i64 {
    timestamps
        .filter(|ts| {
            let local = ts.with_timezone(offset).date_naive();
            (local.year(), local.month()) == key
        })
        .count() as i64
}

/// Derive category and industry buckets as two labeled series.
///
/// Buckets keep first-appearance order; the palette index continues from the
/// category series into the industry series and wraps modulo the palette
/// length.
pub fn segment_series(
    requests: &[SponsorshipRequest],
    offers: &[SponsorshipOffer],
) -> SegmentSeriesDto {
    let categories = bucketize(requests.iter().map(|r| r.category.as_str()), 0);
    let industries = bucketize(offers.iter().map(|o| o.industry.as_str()), categories.len());

    SegmentSeriesDto {
        categories,
        industries,
    }
}

fn bucketize<'a>(
    labels: impl Iterator<Item = &'a str>,
    palette_offset: usize,
) -> Vec<SegmentBucketDto> {
    let mut buckets: Vec<SegmentBucketDto> = Vec::new();

    for label in labels {
        if let Some(bucket) = buckets.iter_mut().find(|b| b.label == label) {
            bucket.count += 1;
        } else {
            let color = SEGMENT_PALETTE[(palette_offset + buckets.len()) % SEGMENT_PALETTE.len()];
            buckets.push(SegmentBucketDto {
                label: label.to_string(),
                count: 1,
                color: color.to_string(),
            });
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::sponsorships::models::SponsorshipStatus;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn request_at(category: &str, created_at: DateTime<Utc>) -> SponsorshipRequest {
        SponsorshipRequest {
            id: Uuid::new_v4(),
            name: "Test Person".to_string(),
            email: "person@example.com".to_string(),
            phone: None,
            project_name: "Test project".to_string(),
            category: category.to_string(),
            amount: Decimal::new(1000, 0),
            description: "A project".to_string(),
            benefits: None,
            age: None,
            gender: None,
            city: None,
            social_platform: None,
            follower_count: None,
            social_link: None,
            status: SponsorshipStatus::Pending,
            created_at,
        }
    }

    fn offer_at(industry: &str, created_at: DateTime<Utc>) -> SponsorshipOffer {
        SponsorshipOffer {
            id: Uuid::new_v4(),
            company_name: "Test Co".to_string(),
            contact_person: "Contact".to_string(),
            email: "co@example.com".to_string(),
            phone: None,
            industry: industry.to_string(),
            budget: Decimal::new(5000, 0),
            interests: None,
            requirements: None,
            status: SponsorshipStatus::Pending,
            created_at,
        }
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap()
    }

    fn now_fixed() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 15, 10, 0, 0)
            .single()
            .unwrap()
    }

    #[test]
    fn test_empty_input_still_yields_six_buckets() {
        let buckets = monthly_buckets(&[], &[], now_fixed());

        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
        assert!(buckets.iter().all(|b| b.requests == 0 && b.offers == 0));
    }

    #[test]
    fn test_counts_land_in_their_calendar_month() {
        let requests = vec![
            request_at("Technology", utc(2026, 3, 1, 0, 0)),
            request_at("Technology", utc(2026, 3, 14, 23, 59)),
            request_at("Technology", utc(2026, 1, 20, 12, 0)),
        ];
        let offers = vec![
            offer_at("Media", utc(2025, 10, 1, 0, 0)),
            offer_at("Media", utc(2026, 2, 28, 23, 59)),
        ];

        let buckets = monthly_buckets(&requests, &offers, now_fixed());

        assert_eq!(buckets[0].label, "Oct");
        assert_eq!(buckets[0].offers, 1);
        assert_eq!(buckets[3].label, "Jan");
        assert_eq!(buckets[3].requests, 1);
        assert_eq!(buckets[4].label, "Feb");
        assert_eq!(buckets[4].offers, 1);
        assert_eq!(buckets[5].label, "Mar");
        assert_eq!(buckets[5].requests, 2);
    }

    #[test]
    fn test_records_outside_the_window_are_ignored() {
        let requests = vec![
            request_at("Technology", utc(2025, 9, 30, 23, 59)),
            request_at("Technology", utc(2026, 4, 1, 0, 0)),
        ];

        let buckets = monthly_buckets(&requests, &[], now_fixed());

        assert_eq!(buckets.len(), 6);
        assert!(buckets.iter().all(|b| b.requests == 0));
    }

    #[test]
    fn test_category_buckets_count_by_first_appearance() {
        let requests = vec![
            request_at("Technology", utc(2026, 3, 1, 0, 0)),
            request_at("Sports", utc(2026, 3, 2, 0, 0)),
            request_at("Technology", utc(2026, 3, 3, 0, 0)),
            request_at("Technology", utc(2026, 3, 4, 0, 0)),
        ];

        let series = segment_series(&requests, &[]);

        assert_eq!(series.categories.len(), 2);
        assert_eq!(series.categories[0].label, "Technology");
        assert_eq!(series.categories[0].count, 3);
        assert_eq!(series.categories[0].color, SEGMENT_PALETTE[0]);
        assert_eq!(series.categories[1].label, "Sports");
        assert_eq!(series.categories[1].count, 1);
        assert_eq!(series.categories[1].color, SEGMENT_PALETTE[1]);
        assert!(series.industries.is_empty());
    }

    #[test]
    fn test_industry_palette_continues_after_categories() {
        let requests = vec![
            request_at("Technology", utc(2026, 3, 1, 0, 0)),
            request_at("Sports", utc(2026, 3, 2, 0, 0)),
        ];
        let offers = vec![
            offer_at("Media", utc(2026, 3, 3, 0, 0)),
            offer_at("Finance", utc(2026, 3, 4, 0, 0)),
        ];

        let series = segment_series(&requests, &offers);

        assert_eq!(series.industries[0].color, SEGMENT_PALETTE[2]);
        assert_eq!(series.industries[1].color, SEGMENT_PALETTE[3]);
    }

    #[test]
    fn test_palette_wraps_modulo_seven() {
        let requests = vec![
            request_at("Technology", utc(2026, 3, 1, 0, 0)),
            request_at("Sports", utc(2026, 3, 2, 0, 0)),
        ];
        let offers: Vec<SponsorshipOffer> = ["Media", "Finance", "Retail", "Energy", "Gaming", "Travel"]
            .iter()
            .map(|industry| offer_at(industry, utc(2026, 3, 5, 0, 0)))
            .collect();

        let series = segment_series(&requests, &offers);

        // 2 categories + 6 industries = 8 buckets; the 8th wraps to index 0
        assert_eq!(series.industries[5].color, SEGMENT_PALETTE[0]);
    }

    #[test]
    fn test_duplicate_labels_do_not_advance_the_palette() {
        let offers = vec![
            offer_at("Media", utc(2026, 3, 1, 0, 0)),
            offer_at("Media", utc(2026, 3, 2, 0, 0)),
            offer_at("Finance", utc(2026, 3, 3, 0, 0)),
        ];

        let series = segment_series(&[], &offers);

        assert_eq!(series.industries.len(), 2);
        assert_eq!(series.industries[0].count, 2);
        assert_eq!(series.industries[1].color, SEGMENT_PALETTE[1]);
    }
}
