//! Sponsorship submissions, the record kinds at the center of the platform.
//!
//! Two kinds exist: requests (parties seeking funds) and offers (companies
//! providing funds). Both are created by authenticated form submission, are
//! immutable afterwards except for their status field, and are listed for
//! admins through the in-memory filter/paginate pipeline in [`listing`].

pub mod dtos;
pub mod handlers;
pub mod listing;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{OfferService, RequestService};
