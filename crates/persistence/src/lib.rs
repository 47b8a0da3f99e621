//! Persistence layer for the car rental backend.
//!
//! This crate contains:
//! - The in-memory store standing in for a database
//! - Repository implementations over that store
//!
//! The repository seam is the unit of replaceability: swapping the in-memory
//! store for a real datastore changes this crate only.

pub mod repositories;
pub mod store;

pub use store::{Store, StoreError};
