/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - can review submissions, change statuses and manage the dashboard
pub const ROLE_ADMIN: &str = "admin";

/// Member role - any signed-in user who can submit requests and offers
#[allow(dead_code)]
pub const ROLE_MEMBER: &str = "member";
