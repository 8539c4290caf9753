//! # bix-core
//!
//! Categories, inspection records, and error types for bix.
//!
//! This crate provides the types shared across all bix crates:
//! - The closed `Category` enumeration
//! - Per-category inspection records and the `CatalogEntry` tagged union
//! - Summary and listing response types consumed by reporters
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod records;
pub mod responses;
