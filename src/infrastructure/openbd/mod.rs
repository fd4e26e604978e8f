//! openBD lookup API integration.

pub mod client;

pub use client::OpenBdClient;
