//! Use-case services for the field kit.
//!
//! # Responsibility
//! - Provide the stable entry points front ends call.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Services never bypass the merge boundary when ingesting documents.
//! - Storage trouble degrades to defaults, never to a crash.

pub mod journal_service;
