//! Journal use-case service.
//!
//! # Responsibility
//! - Own the state and draft stores for one session.
//! - Persist the full document after every successful mutation.
//! - Run export/import through the merge boundary.
//!
//! # Invariants
//! - A failed slot read or write degrades silently to defaults; only an
//!   import parse failure surfaces as an error.
//! - Import replaces the whole state store atomically or not at all.

use crate::merge::{merge_with_defaults, MergeOutcome};
use crate::model::store::{DraftStore, SectionValue, StateStore};
use crate::repo::slot_repo::SlotRepository;
use log::{error, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Conventional filename for exported documents.
pub const EXPORT_FILE_NAME: &str = "lifefield.json";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors the service surfaces to callers.
///
/// Slot storage failures are deliberately absent: those degrade to defaults
/// inside the service and are only logged.
#[derive(Debug)]
pub enum ServiceError {
    /// Import text was not valid JSON. State is untouched.
    ImportParse(serde_json::Error),
    /// Export document could not be written to disk.
    Io(std::io::Error),
    /// State store failed to serialize. Should not happen for well-typed
    /// stores; kept explicit rather than panicking.
    Serialize(serde_json::Error),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImportParse(err) => write!(f, "import is not valid JSON: {err}"),
            Self::Io(err) => write!(f, "export file write failed: {err}"),
            Self::Serialize(err) => write!(f, "document serialization failed: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ImportParse(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    /// True when the document parsed but carried no usable object, so the
    /// store was reset to defaults.
    pub fell_back_to_defaults: bool,
}

/// Session-owning service over one durable slot.
pub struct JournalService<R: SlotRepository> {
    repo: R,
    store: StateStore,
    drafts: DraftStore,
}

impl<R: SlotRepository> JournalService<R> {
    /// Opens a session: loads the slot, merges against the schema, and keeps
    /// defaults when the slot is absent, unreadable, or unparseable.
    pub fn open(repo: R) -> Self {
        let candidate = match repo.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(
                        "event=journal_open module=service status=fallback reason=unparseable_slot error={err}"
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(
                    "event=journal_open module=service status=fallback reason=storage_unavailable error={err}"
                );
                None
            }
        };

        let MergeOutcome {
            store,
            fell_back_to_defaults,
        } = merge_with_defaults(candidate.as_ref());
        info!(
            "event=journal_open module=service status=ok defaults={}",
            fell_back_to_defaults
        );

        Self {
            repo,
            store,
            drafts: DraftStore::empty(),
        }
    }

    /// Read access to the current state store.
    pub fn state(&self) -> &StateStore {
        &self.store
    }

    /// Current value of one section.
    pub fn value(&self, module_key: &str, section_id: &str) -> Option<&SectionValue> {
        self.store.value(module_key, section_id)
    }

    /// Pending draft text of a list section.
    pub fn draft(&self, module_key: &str, section_id: &str) -> Option<&str> {
        self.drafts.get(module_key, section_id)
    }

    /// Overwrites a text section and persists on change.
    pub fn set_text(&mut self, module_key: &str, section_id: &str, value: &str) -> bool {
        let changed = self.store.set_text(module_key, section_id, value);
        if changed {
            self.persist();
        }
        changed
    }

    /// Overwrites the pending draft text. Never persists.
    pub fn set_draft(&mut self, module_key: &str, section_id: &str, value: &str) -> bool {
        self.drafts.set(module_key, section_id, value)
    }

    /// Commits the pending draft as a new list item and persists on change.
    ///
    /// A whitespace-only draft changes nothing, including the draft itself.
    pub fn add_list_item(&mut self, module_key: &str, section_id: &str) -> bool {
        let changed = self.drafts.commit(&mut self.store, module_key, section_id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Removes the list item at `index` and persists on change.
    pub fn remove_list_item(&mut self, module_key: &str, section_id: &str, index: usize) -> bool {
        let changed = self.store.remove_list_item(module_key, section_id, index);
        if changed {
            self.persist();
        }
        changed
    }

    /// Renders the current store as a pretty-printed JSON document.
    pub fn export_json(&self) -> ServiceResult<String> {
        serde_json::to_string_pretty(&self.store).map_err(ServiceError::Serialize)
    }

    /// Writes the export document to `path`.
    ///
    /// Callers picking a default location should use [`EXPORT_FILE_NAME`].
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> ServiceResult<()> {
        let document = self.export_json()?;
        std::fs::write(path.as_ref(), document).map_err(ServiceError::Io)?;
        info!(
            "event=export module=service status=ok path={}",
            path.as_ref().display()
        );
        Ok(())
    }

    /// Imports a raw JSON document, replacing the entire state store.
    ///
    /// Parse failure returns [`ServiceError::ImportParse`] and leaves every
    /// store untouched. Shape mismatches are absorbed per field by the merge
    /// boundary and never error.
    pub fn import_text(&mut self, raw: &str) -> ServiceResult<ImportOutcome> {
        let candidate: Value = serde_json::from_str(raw).map_err(|err| {
            warn!("event=import module=service status=error reason=parse error={err}");
            ServiceError::ImportParse(err)
        })?;

        let MergeOutcome {
            store,
            fell_back_to_defaults,
        } = merge_with_defaults(Some(&candidate));
        self.store = store;
        self.persist();
        info!(
            "event=import module=service status=ok defaults={}",
            fell_back_to_defaults
        );
        Ok(ImportOutcome {
            fell_back_to_defaults,
        })
    }

    // Full re-serialization after every mutation. Write failures are logged
    // and swallowed: the in-memory store stays authoritative for the session.
    fn persist(&self) {
        let document = match serde_json::to_string(&self.store) {
            Ok(document) => document,
            Err(err) => {
                error!("event=persist module=service status=error reason=serialize error={err}");
                return;
            }
        };
        if let Err(err) = self.repo.save(&document) {
            error!("event=persist module=service status=error reason=storage error={err}");
        }
    }
}
