pub mod offer_handler;
pub mod request_handler;

pub use offer_handler::{create_offer, delete_offer, list_offers, update_offer_status};
pub use request_handler::{
    create_request, delete_request, list_requests, update_request_status,
};
