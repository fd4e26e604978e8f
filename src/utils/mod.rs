//! Utility functions for text normalization and cover image URLs.
//!
//! This module provides helper functions used across the application:
//!
//! - [`char_width`] - Full-width to half-width character folding
//! - [`cover`] - Cover image URL convention

pub mod char_width;
pub mod cover;
