//! Rakuten Books API integration.

pub mod client;

pub use client::RakutenBooksClient;
