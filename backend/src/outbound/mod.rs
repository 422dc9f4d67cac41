//! Outbound adapters implementing the driven domain ports.
//!
//! - **persistence**: contact repositories (PostgreSQL via Diesel, in-memory).
//! - **storage**: avatar object stores (S3-compatible, in-memory, disabled).
//!
//! Adapters translate between domain types and infrastructure representations
//! and hold no business rules.

pub mod persistence;
pub mod storage;
