//! # Chronicle Core
//!
//! Domain entities, access rules and ports for the Chronicle blog API.
//! This crate holds the business logic only - no I/O, no framework types.

pub mod access;
pub mod domain;
pub mod error;
pub mod feed;
pub mod ports;
