//! # devlog-core
//!
//! Core types and error types for devlog.
//!
//! This crate provides the foundational types shared across all devlog crates:
//! - Entity structs for developers and daily log records
//! - The closed `Mood` set with its canonical display labels
//! - Report format, ordering, and date style enums
//! - ID prefix constants
//! - The `LogStore` contract consumed by the report engine
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod store;
