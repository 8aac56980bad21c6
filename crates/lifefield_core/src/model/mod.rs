//! In-memory state for the field kit.
//!
//! # Responsibility
//! - Hold the authoritative per-section values and pending list drafts.
//! - Route every mutation through named operations so callers can persist
//!   exactly when something changed.
//!
//! # Invariants
//! - `StateStore` keys mirror the schema registry at all times; no extra
//!   keys survive into application state.
//! - Drafts exist only for list sections and are never serialized.

pub mod store;
