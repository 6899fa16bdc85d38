//! Backend Services Module
//!
//! Typed access to the remote restaurant, menu, order, review and delivery
//! services:
//! - Wire models (requests, responses, collection envelopes)
//! - The HTTP client issuing one request per operation

pub mod client;
pub mod models;

pub use client::BackendClient;
