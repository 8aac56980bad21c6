//! Persistence contracts for the durable document slot.
//!
//! # Responsibility
//! - Keep SQL details behind a narrow load/save interface.
//! - Let services stay storage-agnostic and unit-testable.

pub mod slot_repo;
