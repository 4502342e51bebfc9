pub mod offer_service;
pub mod request_service;

pub use offer_service::OfferService;
pub use request_service::RequestService;
