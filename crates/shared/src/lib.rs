//! Shared utilities and common types for the car rental backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Calendar-date parsing and normalization
//! - Cursor-based pagination
//! - Common validation logic

pub mod dates;
pub mod pagination;
pub mod validation;
