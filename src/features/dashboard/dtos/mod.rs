pub mod dashboard_dto;

pub use dashboard_dto::{
    DashboardSummaryDto, MonthlyBucketDto, SegmentBucketDto, SegmentSeriesDto,
};
