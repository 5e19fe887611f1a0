//! Keyed context store with opaque handles and per-context versioning
//!
//! This module provides:
//! - `ContextHandle`: opaque unique token identifying one context
//! - `ContextStore`: process-wide store of named key/value contexts
//!
//! Each context is an insertion-ordered key/value mapping plus a version
//! counter that increments on every mutation. Versions let external
//! consumers detect staleness without snapshotting values.

use super::error::{LoggerError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Insertion-ordered key/value mapping held by one context.
pub type ContextMap = serde_json::Map<String, Value>;

/// Opaque unique token identifying one context.
///
/// Handles are random v4 UUIDs, so a deleted handle is never reused for
/// the lifetime of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextHandle(Uuid);

impl ContextHandle {
    pub(crate) fn generate() -> Self {
        ContextHandle(Uuid::new_v4())
    }
}

impl fmt::Display for ContextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
struct ContextSlot {
    fields: ContextMap,
    version: u64,
}

impl ContextSlot {
    fn bump(&mut self) {
        self.version += 1;
    }
}

/// Store of named contexts, shared by cloning.
///
/// Clones share the same interior state, so a logger holding a clone
/// observes every mutation made through any other clone. The reference
/// usage model is a single logical thread of control; the interior lock
/// only makes sharing safe, it does not order concurrent mutations.
///
/// # Example
///
/// ```
/// use context_logger::core::ContextStore;
/// use serde_json::json;
///
/// let store = ContextStore::new();
/// let handle = store.create();
/// store.put(handle, "service", json!("api-gateway")).unwrap();
/// assert_eq!(store.version(handle).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextStore {
    contexts: Arc<RwLock<HashMap<ContextHandle, ContextSlot>>>,
}

impl ContextStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            contexts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Allocate a fresh context: empty mapping, version 0
    pub fn create(&self) -> ContextHandle {
        let handle = ContextHandle::generate();
        self.contexts
            .write()
            .insert(handle, ContextSlot::default());
        handle
    }

    /// Create a context and `put` every entry of `initial` into it.
    ///
    /// Equivalent to `create` followed by one `put` per entry, so the new
    /// context's version equals the number of entries.
    pub fn create_filled<I, K>(&self, initial: I) -> ContextHandle
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let handle = self.create();
        let mut contexts = self.contexts.write();
        let slot = contexts
            .get_mut(&handle)
            .expect("context inserted by create above");
        for (key, value) in initial {
            put_field(slot, key.into(), value);
        }
        handle
    }

    /// Delete a context and its version counter.
    ///
    /// Returns whether the context existed. Never fails; the handle is
    /// permanently invalid afterwards.
    pub fn delete(&self, handle: ContextHandle) -> bool {
        self.contexts.write().remove(&handle).is_some()
    }

    /// Empty a context's mapping and bump its version
    pub fn clear(&self, handle: ContextHandle) -> Result<()> {
        let mut contexts = self.contexts.write();
        let slot = lookup_mut(&mut contexts, handle)?;
        slot.fields.clear();
        slot.bump();
        Ok(())
    }

    /// Upsert a key, or remove it when `value` is null.
    ///
    /// Setting a field to null is equivalent to unsetting it; there is no
    /// separate unset operation. Bumps the version either way.
    pub fn put(&self, handle: ContextHandle, key: impl Into<String>, value: Value) -> Result<()> {
        let mut contexts = self.contexts.write();
        let slot = lookup_mut(&mut contexts, handle)?;
        put_field(slot, key.into(), value);
        Ok(())
    }

    /// Remove a key, bumping the version regardless of prior presence.
    ///
    /// Returns whether the key existed.
    pub fn remove(&self, handle: ContextHandle, key: &str) -> Result<bool> {
        let mut contexts = self.contexts.write();
        let slot = lookup_mut(&mut contexts, handle)?;
        let existed = slot.fields.remove(key).is_some();
        slot.bump();
        Ok(existed)
    }

    /// Read a key's value, `None` when absent.
    ///
    /// A key that was set to null and a key that was never set are
    /// indistinguishable: both read as `None`.
    pub fn get_optional(&self, handle: ContextHandle, key: &str) -> Result<Option<Value>> {
        let contexts = self.contexts.read();
        let slot = lookup(&contexts, handle)?;
        Ok(slot.fields.get(key).cloned())
    }

    /// Read a key's value, failing with `MissingValue` when absent
    pub fn get_required(&self, handle: ContextHandle, key: &str) -> Result<Value> {
        self.get_optional(handle, key)?
            .ok_or_else(|| LoggerError::missing_value(handle, key))
    }

    /// Current version counter of a context.
    ///
    /// Starts at 0 and increments on every `put`, `remove`, and `clear`.
    /// Reads never change it.
    pub fn version(&self, handle: ContextHandle) -> Result<u64> {
        let contexts = self.contexts.read();
        Ok(lookup(&contexts, handle)?.version)
    }

    /// Whether a handle refers to a live context
    pub fn contains(&self, handle: ContextHandle) -> bool {
        self.contexts.read().contains_key(&handle)
    }

    /// Clone of one context's mapping; a read, no version bump
    pub fn snapshot(&self, handle: ContextHandle) -> Result<ContextMap> {
        let contexts = self.contexts.read();
        Ok(lookup(&contexts, handle)?.fields.clone())
    }

    /// Flatten several contexts into one mapping.
    ///
    /// Handles are visited in the given order and every pair is copied
    /// into the result, overwriting on collision, so the last-listed
    /// context's keys win ties. Pure read: sources and versions are
    /// untouched. Fails with `ContextNotFound` if any handle is dead.
    pub fn merge_all(&self, handles: &[ContextHandle]) -> Result<ContextMap> {
        let contexts = self.contexts.read();
        let mut merged = ContextMap::new();
        for &handle in handles {
            let slot = lookup(&contexts, handle)?;
            for (key, value) in &slot.fields {
                merged.insert(key.clone(), value.clone());
            }
        }
        Ok(merged)
    }

    /// Number of live contexts
    pub fn len(&self) -> usize {
        self.contexts.read().len()
    }

    /// Whether the store holds no contexts
    pub fn is_empty(&self) -> bool {
        self.contexts.read().is_empty()
    }

    /// Discard every context. Outstanding handles all become invalid.
    pub fn clear_all(&self) {
        self.contexts.write().clear();
    }
}

fn lookup(
    contexts: &HashMap<ContextHandle, ContextSlot>,
    handle: ContextHandle,
) -> Result<&ContextSlot> {
    contexts
        .get(&handle)
        .ok_or_else(|| LoggerError::not_found(handle))
}

fn lookup_mut(
    contexts: &mut HashMap<ContextHandle, ContextSlot>,
    handle: ContextHandle,
) -> Result<&mut ContextSlot> {
    contexts
        .get_mut(&handle)
        .ok_or_else(|| LoggerError::not_found(handle))
}

fn put_field(slot: &mut ContextSlot, key: String, value: Value) {
    if value.is_null() {
        slot.fields.remove(&key);
    } else {
        slot.fields.insert(key, value);
    }
    slot.bump();
}
