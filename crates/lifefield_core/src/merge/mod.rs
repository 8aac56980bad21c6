//! Schema-bounded reconciliation of untrusted documents.
//!
//! # Responsibility
//! - Fold an arbitrary JSON value against the schema registry into an
//!   always-well-typed [`StateStore`].
//! - Absorb every shape mismatch silently, per field.
//!
//! # Invariants
//! - The result's key set equals the registry's, for any input whatsoever.
//! - A list section is copied all-or-nothing: one non-string element rejects
//!   the whole section back to its default.
//! - Never returns an error; malformed input only flips the fallback flag.

use crate::model::store::{SectionValue, StateStore};
use crate::schema::{self, SectionType};
use log::info;
use serde_json::Value;
use std::collections::BTreeMap;

/// Result of a merge: the reconciled store plus a diagnostic flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub store: StateStore,
    /// True when the candidate was absent or not a JSON object, so nothing
    /// of it survived. Per-field rejections do not set this.
    pub fell_back_to_defaults: bool,
}

/// Reconciles a candidate document against the schema registry.
///
/// Every section takes its schema default unless the candidate holds a value
/// of the statically expected type at the same module key and section id, in
/// which case that value is copied verbatim. Unknown keys in the candidate
/// are ignored. Idempotent: merging a merged store changes nothing.
pub fn merge_with_defaults(candidate: Option<&Value>) -> MergeOutcome {
    let Some(Value::Object(root)) = candidate else {
        info!("event=merge module=merge status=fallback reason=top_level_not_object");
        return MergeOutcome {
            store: StateStore::empty(),
            fell_back_to_defaults: true,
        };
    };

    let mut modules = BTreeMap::new();
    for module in schema::registry() {
        let module_state = root.get(module.key).and_then(Value::as_object);
        let mut sections = BTreeMap::new();
        for section in module.sections {
            let candidate_value = module_state.and_then(|fields| fields.get(section.id));
            sections.insert(
                section.id.to_string(),
                accept_or_default(section.section_type, candidate_value),
            );
        }
        modules.insert(module.key.to_string(), sections);
    }

    MergeOutcome {
        store: StateStore::from_parts(modules),
        fell_back_to_defaults: false,
    }
}

fn accept_or_default(section_type: SectionType, candidate: Option<&Value>) -> SectionValue {
    match (section_type, candidate) {
        (SectionType::Text, Some(Value::String(value))) => SectionValue::Text(value.clone()),
        (SectionType::List, Some(Value::Array(items))) => {
            let strings: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect();
            match strings {
                Some(items) => SectionValue::List(items),
                // One bad element rejects the whole section.
                None => SectionValue::List(Vec::new()),
            }
        }
        (section_type, _) => match section_type {
            SectionType::Text => SectionValue::Text(String::new()),
            SectionType::List => SectionValue::List(Vec::new()),
        },
    }
}
