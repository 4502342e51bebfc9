use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::sponsorships::models::SponsorshipStatus;

/// Request DTO for changing a record's status.
///
/// Serde rejects anything outside the fixed status set, so no other value
/// can ever be written through this surface.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    pub status: SponsorshipStatus,
}
