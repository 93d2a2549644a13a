//! Reference table

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A registered reference value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefValue {
    /// Text, dereferenced by `desc` and `pattern`
    Text(String),
    /// Allowed values, dereferenced by `enum`
    List(Vec<serde_json::Value>),
}

impl RefValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RefValue::Text(text) => Some(text),
            RefValue::List(_) => None,
        }
    }

    /// List content, if this is a list value
    pub fn as_list(&self) -> Option<&[serde_json::Value]> {
        match self {
            RefValue::List(values) => Some(values),
            RefValue::Text(_) => None,
        }
    }
}

impl From<&str> for RefValue {
    fn from(text: &str) -> Self {
        RefValue::Text(text.to_string())
    }
}

impl From<String> for RefValue {
    fn from(text: String) -> Self {
        RefValue::Text(text)
    }
}

impl<T: Into<serde_json::Value>> From<Vec<T>> for RefValue {
    fn from(values: Vec<T>) -> Self {
        RefValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Registration phase of a reference table
#[derive(Debug, Clone, Default)]
pub struct ReferencesBuilder {
    entries: HashMap<String, RefValue>,
}

impl ReferencesBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value under `key`
    ///
    /// Fails if `key` is already registered.
    pub fn define(
        &mut self,
        key: impl Into<String>,
        value: impl Into<RefValue>,
    ) -> Result<&mut Self> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(Error::duplicate_reference(key));
        }
        debug!("Registered reference {}", key);
        self.entries.insert(key, value.into());
        Ok(self)
    }

    /// Register every entry of an iterator, stopping at the first duplicate
    pub fn define_all<K, V, I>(&mut self, entries: I) -> Result<&mut Self>
    where
        K: Into<String>,
        V: Into<RefValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.define(key, value)?;
        }
        Ok(self)
    }

    /// Freeze the table
    pub fn build(self) -> References {
        References {
            entries: Arc::new(self.entries),
        }
    }
}

/// Immutable reference table
#[derive(Debug, Clone, Default)]
pub struct References {
    entries: Arc<HashMap<String, RefValue>>,
}

impl References {
    /// Start a registration phase
    pub fn builder() -> ReferencesBuilder {
        ReferencesBuilder::new()
    }

    /// An empty table
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a reference
    pub fn get(&self, key: &str) -> Option<&RefValue> {
        self.entries.get(key)
    }

    /// Check whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up a text reference on behalf of `directive`
    ///
    /// `Ok(None)` when the key is not registered; an error when it is
    /// registered with a list.
    pub fn text(&self, key: &str, directive: &str) -> Result<Option<&str>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_text()
                .map(Some)
                .ok_or_else(|| Error::reference_type(key, directive, "a string")),
        }
    }

    /// Look up a list reference on behalf of `directive`
    ///
    /// `Ok(None)` when the key is not registered; an error when it is
    /// registered with text.
    pub fn list(&self, key: &str, directive: &str) -> Result<Option<&[serde_json::Value]>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_list()
                .map(Some)
                .ok_or_else(|| Error::reference_type(key, directive, "a list")),
        }
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no keys are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
