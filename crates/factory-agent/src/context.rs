//! Shared project context threaded through a pipeline run.
//!
//! The context is a string-keyed map of JSON values. The orchestrator owns
//! it for the lifetime of a run and is the only writer; agents receive a
//! read-only borrow when generating tasks. Every accessor tolerates missing
//! keys by substituting a defined placeholder, so prompt construction is
//! best-effort and never fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder used when no project name is present.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Recognized context keys.
pub mod keys {
    /// Human-readable project name.
    pub const PROJECT_NAME: &str = "project_name";
    /// Business requirements mapping.
    pub const REQUIREMENTS: &str = "requirements";
    /// Architecture document produced by the architecture phase.
    pub const ARCHITECTURE: &str = "architecture";
    /// API specification produced by the planning phase.
    pub const API_SPEC: &str = "api_spec";
    /// UI design specification.
    pub const DESIGN_SPEC: &str = "design_spec";
    /// List of API endpoints.
    pub const API_ENDPOINTS: &str = "api_endpoints";
    /// Data model description.
    pub const DATA_MODEL: &str = "data_model";
}

/// Project information shared across phases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectContext {
    values: BTreeMap<String, Value>,
}

impl ProjectContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a project name.
    pub fn with_project_name(name: impl Into<String>) -> Self {
        let mut ctx = Self::new();
        ctx.insert(keys::PROJECT_NAME, Value::String(name.into()));
        ctx
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the context is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Project name, or the defined placeholder when absent.
    pub fn project_name(&self) -> String {
        match self.values.get(keys::PROJECT_NAME) {
            Some(Value::String(name)) => name.clone(),
            Some(other) => render(other),
            None => UNKNOWN_PROJECT.to_string(),
        }
    }

    /// Render the value under `key` as prompt text, falling back to
    /// `fallback` when the key is absent.
    ///
    /// Strings are used verbatim; other values are rendered as compact JSON.
    pub fn section(&self, key: &str, fallback: &str) -> String {
        match self.values.get(key) {
            Some(value) => render(value),
            None => fallback.to_string(),
        }
    }

    /// Iterate over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl FromIterator<(String, Value)> for ProjectContext {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
