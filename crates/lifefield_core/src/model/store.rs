//! State and draft stores plus their mutation operations.
//!
//! # Responsibility
//! - Keep one well-typed value per schema section.
//! - Implement the list add/remove and text overwrite semantics.
//!
//! # Invariants
//! - Every mutation against an unknown module/section is a no-op, never a
//!   panic.
//! - Mutations report whether the store changed; the owner persists only on
//!   `true`.

use crate::schema::{self, SectionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of one section: free text or an ordered string list.
///
/// Untagged so the serialized document is a plain string or string array,
/// matching the portable export shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionValue {
    Text(String),
    List(Vec<String>),
}

impl SectionValue {
    fn default_for(section_type: SectionType) -> Self {
        match section_type {
            SectionType::Text => Self::Text(String::new()),
            SectionType::List => Self::List(Vec::new()),
        }
    }

    /// Returns the text content, or `None` for list values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Returns the list items, or `None` for text values.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }
}

/// Authoritative value store: module key -> section id -> value.
///
/// Constructed only through [`StateStore::empty`] or the merge boundary, so
/// its key set always equals the schema registry's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateStore {
    modules: BTreeMap<String, BTreeMap<String, SectionValue>>,
}

impl StateStore {
    /// Creates a store seeded with schema defaults: empty text, empty lists.
    pub fn empty() -> Self {
        let mut modules = BTreeMap::new();
        for module in schema::registry() {
            let mut sections = BTreeMap::new();
            for section in module.sections {
                sections.insert(
                    section.id.to_string(),
                    SectionValue::default_for(section.section_type),
                );
            }
            modules.insert(module.key.to_string(), sections);
        }
        Self { modules }
    }

    /// Returns the current value of a section, or `None` for unknown keys.
    pub fn value(&self, module_key: &str, section_id: &str) -> Option<&SectionValue> {
        self.modules.get(module_key)?.get(section_id)
    }

    /// Overwrites a text section. Any string is accepted, including empty.
    ///
    /// Returns `true` when the stored value changed. Unknown keys and
    /// list-typed sections are no-ops.
    pub fn set_text(&mut self, module_key: &str, section_id: &str, value: &str) -> bool {
        if !matches!(
            schema::section(module_key, section_id).map(|s| s.section_type),
            Some(SectionType::Text)
        ) {
            return false;
        }
        match self.entry(module_key, section_id) {
            Some(SectionValue::Text(current)) if current.as_str() != value => {
                *current = value.to_string();
                true
            }
            _ => false,
        }
    }

    /// Appends a trimmed item to a list section.
    ///
    /// Returns `true` when an item was appended; a whitespace-only or empty
    /// item is a no-op. Callers normally go through the draft workflow in
    /// [`DraftStore`], which also resets the pending text.
    pub fn append_list_item(&mut self, module_key: &str, section_id: &str, item: &str) -> bool {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            return false;
        }
        if !matches!(
            schema::section(module_key, section_id).map(|s| s.section_type),
            Some(SectionType::List)
        ) {
            return false;
        }
        match self.entry(module_key, section_id) {
            Some(SectionValue::List(items)) => {
                items.push(trimmed.to_string());
                true
            }
            _ => false,
        }
    }

    /// Removes the list item at `index`, shifting later items down.
    ///
    /// Out-of-range indices and non-list sections are no-ops.
    pub fn remove_list_item(&mut self, module_key: &str, section_id: &str, index: usize) -> bool {
        match self.entry(module_key, section_id) {
            Some(SectionValue::List(items)) if index < items.len() => {
                items.remove(index);
                true
            }
            _ => false,
        }
    }

    fn entry(&mut self, module_key: &str, section_id: &str) -> Option<&mut SectionValue> {
        self.modules.get_mut(module_key)?.get_mut(section_id)
    }

    pub(crate) fn from_parts(modules: BTreeMap<String, BTreeMap<String, SectionValue>>) -> Self {
        Self { modules }
    }
}

/// Pending, uncommitted input text for list sections.
///
/// Ephemeral by contract: reset to `""` after each successful commit and
/// never written to the durable slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftStore {
    drafts: BTreeMap<String, BTreeMap<String, String>>,
}

impl DraftStore {
    /// Creates drafts for every list section, all empty.
    pub fn empty() -> Self {
        let mut drafts = BTreeMap::new();
        for module in schema::registry() {
            let mut sections = BTreeMap::new();
            for section in module.sections {
                if section.section_type == SectionType::List {
                    sections.insert(section.id.to_string(), String::new());
                }
            }
            drafts.insert(module.key.to_string(), sections);
        }
        Self { drafts }
    }

    /// Returns the pending text for a list section.
    pub fn get(&self, module_key: &str, section_id: &str) -> Option<&str> {
        self.drafts
            .get(module_key)?
            .get(section_id)
            .map(String::as_str)
    }

    /// Overwrites the pending text. No-op for unknown or text-typed sections.
    pub fn set(&mut self, module_key: &str, section_id: &str, value: &str) -> bool {
        match self
            .drafts
            .get_mut(module_key)
            .and_then(|sections| sections.get_mut(section_id))
        {
            Some(current) => {
                *current = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Commits the pending text into the state store.
    ///
    /// Trims the draft first; an empty result leaves both stores untouched,
    /// including the draft itself. On success the draft resets to `""`.
    /// Returns `true` when the state store changed.
    pub fn commit(&mut self, store: &mut StateStore, module_key: &str, section_id: &str) -> bool {
        let Some(pending) = self.get(module_key, section_id).map(str::to_string) else {
            return false;
        };
        if !store.append_list_item(module_key, section_id, &pending) {
            return false;
        }
        self.set(module_key, section_id, "");
        true
    }
}
