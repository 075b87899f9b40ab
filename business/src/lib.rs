//! Business logic for the Parkdesk admin client.
//!
//! This crate is IO-free: wire contracts for the document store, the
//! attendant domain model and panel state, page routing and environment
//! configuration. Network plumbing lives in `parkdesk-ui`.

mod attendants;
mod config;
mod route;
pub mod store;

pub use attendants::{ATTENDANTS_COLLECTION, Attendant, AttendantsState};
pub use config::AppConfig;
pub use route::Route;
