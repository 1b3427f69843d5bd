//! Utility functions for token generation, validation, and fingerprinting.
//!
//! This module provides helper functions used across the application:
//!
//! - [`token_generator`] - Tracking token generation
//! - [`validators`] - Email and URL shape validation
//! - [`click_hash`] - Click deduplication fingerprints
//! - [`clock`] - Wall-clock helpers

pub mod click_hash;
pub mod clock;
pub mod token_generator;
pub mod validators;
