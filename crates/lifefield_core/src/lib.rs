//! Core domain logic for the Life Field journaling kit.
//! This crate is the single source of truth for the schema and its
//! persistence invariants.

pub mod db;
pub mod logging;
pub mod merge;
pub mod model;
pub mod repo;
pub mod schema;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use merge::{merge_with_defaults, MergeOutcome};
pub use model::store::{DraftStore, SectionValue, StateStore};
pub use repo::slot_repo::{
    RepoError, RepoResult, SlotRepository, SqliteSlotRepository, SLOT_KEY,
};
pub use schema::{ModuleDef, SectionDef, SectionType};
pub use service::journal_service::{
    ImportOutcome, JournalService, ServiceError, ServiceResult, EXPORT_FILE_NAME,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
