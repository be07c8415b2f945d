//! # Chronicle Shared
//!
//! DTOs and response envelopes shared between the API server and clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
