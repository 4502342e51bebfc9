pub mod list_query;
pub mod offer_dto;
pub mod request_dto;
pub mod status_dto;

pub use list_query::{ListOffersQuery, ListRequestsQuery};
pub use offer_dto::{CreateOfferDto, OfferListDto, OfferResponseDto};
pub use request_dto::{CreateRequestDto, RequestListDto, RequestResponseDto};
pub use status_dto::UpdateStatusDto;
