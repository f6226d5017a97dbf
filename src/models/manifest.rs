//! Loosely-typed access to rendered Kubernetes manifests
//!
//! Chart output is schema-less: any field may be missing or carry an
//! unexpected type. [`ManifestRecord`] wraps the parsed document and exposes
//! path-based getters that return `None` instead of failing, so callers can
//! default missing structure to "empty".

use serde_json::{Map, Value};

/// One parsed Kubernetes object from the chart output
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestRecord {
    value: Value,
}

impl ManifestRecord {
    /// Wrap a parsed document
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The raw document
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// `kind`, if present and a non-empty string
    pub fn kind(&self) -> Option<&str> {
        non_empty(self.lookup_str(&["kind"]))
    }

    /// `metadata.name`, if present and a non-empty string
    pub fn name(&self) -> Option<&str> {
        non_empty(self.lookup_str(&["metadata", "name"]))
    }

    /// Follow `path` through nested mappings
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        lookup(&self.value, path)
    }

    /// Follow `path` and return the string found there
    pub fn lookup_str(&self, path: &[&str]) -> Option<&str> {
        self.lookup(path).and_then(Value::as_str)
    }

    /// Follow `path` and return the mapping found there
    pub fn lookup_object(&self, path: &[&str]) -> Option<&Map<String, Value>> {
        self.lookup(path).and_then(Value::as_object)
    }

    /// Follow `path` and return the sequence found there, empty when absent
    pub fn lookup_array(&self, path: &[&str]) -> &[Value] {
        self.lookup(path)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pod template labels of a workload (`spec.template.metadata.labels`)
    pub fn template_labels(&self) -> Option<&Map<String, Value>> {
        self.lookup_object(&["spec", "template", "metadata", "labels"])
    }

    /// Label selector of a Service (`spec.selector`)
    pub fn service_selector(&self) -> Option<&Map<String, Value>> {
        self.lookup_object(&["spec", "selector"])
    }
}

impl From<Value> for ManifestRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Follow `path` through nested mappings of an arbitrary value
///
/// Returns `None` as soon as a segment is missing or the current value is not
/// a mapping. An empty path returns the value itself.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, segment| current.as_object()?.get(*segment))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
