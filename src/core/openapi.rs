use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::assistant::{dtos as assistant_dtos, handlers as assistant_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::sponsorships::{
    dtos as sponsorships_dtos, handlers as sponsorships_handlers, listing,
    models as sponsorships_models,
};
use crate::features::stats::{dtos as stats_dtos, handlers as stats_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::auth_handler::get_me,
        // Requests
        sponsorships_handlers::request_handler::create_request,
        sponsorships_handlers::request_handler::list_requests,
        sponsorships_handlers::request_handler::update_request_status,
        sponsorships_handlers::request_handler::delete_request,
        // Offers
        sponsorships_handlers::offer_handler::create_offer,
        sponsorships_handlers::offer_handler::list_offers,
        sponsorships_handlers::offer_handler::update_offer_status,
        sponsorships_handlers::offer_handler::delete_offer,
        // Dashboard (admin)
        dashboard_handlers::dashboard_handler::get_summary,
        dashboard_handlers::dashboard_handler::get_monthly,
        dashboard_handlers::dashboard_handler::get_segments,
        // Stats (public)
        stats_handlers::stats_handler::get_stats,
        // Assistant
        assistant_handlers::chat_handler::chat,
    ),
    components(
        schemas(
            Meta,
            // Auth
            auth_dtos::ProfileDto,
            ApiResponse<auth_dtos::ProfileDto>,
            // Sponsorships
            sponsorships_models::SponsorshipStatus,
            listing::PageMeta,
            sponsorships_dtos::CreateRequestDto,
            sponsorships_dtos::RequestResponseDto,
            sponsorships_dtos::RequestListDto,
            sponsorships_dtos::CreateOfferDto,
            sponsorships_dtos::OfferResponseDto,
            sponsorships_dtos::OfferListDto,
            sponsorships_dtos::UpdateStatusDto,
            ApiResponse<sponsorships_dtos::RequestResponseDto>,
            ApiResponse<sponsorships_dtos::RequestListDto>,
            ApiResponse<sponsorships_dtos::OfferResponseDto>,
            ApiResponse<sponsorships_dtos::OfferListDto>,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            dashboard_dtos::MonthlyBucketDto,
            dashboard_dtos::SegmentBucketDto,
            dashboard_dtos::SegmentSeriesDto,
            ApiResponse<dashboard_dtos::DashboardSummaryDto>,
            ApiResponse<Vec<dashboard_dtos::MonthlyBucketDto>>,
            ApiResponse<dashboard_dtos::SegmentSeriesDto>,
            // Stats
            stats_dtos::StatsResponseDto,
            ApiResponse<stats_dtos::StatsResponseDto>,
            // Assistant
            assistant_dtos::ChatRole,
            assistant_dtos::ChatMessageDto,
            assistant_dtos::ChatRequestDto,
            assistant_dtos::ChatResponseDto,
            ApiResponse<assistant_dtos::ChatResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Authenticated user profile"),
        (name = "requests", description = "Sponsorship requests (submission and admin review)"),
        (name = "offers", description = "Sponsorship offers (submission and admin review)"),
        (name = "dashboard", description = "Admin reporting dashboard"),
        (name = "stats", description = "Aggregate platform counters (public)"),
        (name = "assistant", description = "Chat assistant proxy"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "SponsorHub API",
        version = "0.1.0",
        description = "API documentation for SponsorHub",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
