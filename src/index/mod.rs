//! Resource indexing
//!
//! Groups parsed manifests by `kind` and keeps a `(kind, name)` lookup over
//! the same records. Documents that are not mappings, or that lack a kind or
//! a name, are skipped rather than reported.

use crate::models::ManifestRecord;
use serde_json::Value;
use std::collections::HashMap;

/// All records of one kind, in document order
#[derive(Debug, Clone)]
struct KindBucket {
    kind: String,
    records: Vec<ManifestRecord>,
}

/// Manifests grouped by kind
///
/// Buckets keep first-seen kind order. The `(kind, name)` lookup stores
/// positions into the buckets, so every record is owned exactly once. The
/// fields are only changed through [`ResourceIndex::insert`].
#[derive(Debug, Clone, Default)]
pub struct ResourceIndex {
    /// Kind buckets in first-seen order
    buckets: Vec<KindBucket>,
    /// Map from kind to index in `buckets`
    kind_index: HashMap<String, usize>,
    /// Map from (kind, name) to (bucket, record) position; last write wins
    name_index: HashMap<(String, String), (usize, usize)>,
}

impl ResourceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under `kind`/`name`
    pub fn insert(&mut self, kind: &str, name: &str, record: ManifestRecord) {
        let bucket_idx = match self.kind_index.get(kind) {
            Some(&idx) => idx,
            None => {
                let idx = self.buckets.len();
                self.kind_index.insert(kind.to_string(), idx);
                self.buckets.push(KindBucket {
                    kind: kind.to_string(),
                    records: Vec::new(),
                });
                idx
            }
        };

        let bucket = &mut self.buckets[bucket_idx];
        let record_idx = bucket.records.len();
        bucket.records.push(record);

        if self
            .name_index
            .insert((kind.to_string(), name.to_string()), (bucket_idx, record_idx))
            .is_some()
        {
            tracing::debug!("Duplicate {} '{}', later document wins lookup", kind, name);
        }
    }

    /// Records of one kind in document order, empty if the kind never appeared
    pub fn bucket(&self, kind: &str) -> &[ManifestRecord] {
        self.kind_index
            .get(kind)
            .map(|&idx| self.buckets[idx].records.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a record by kind and name
    pub fn get(&self, kind: &str, name: &str) -> Option<&ManifestRecord> {
        self.name_index
            .get(&(kind.to_string(), name.to_string()))
            .map(|&(bucket, record)| &self.buckets[bucket].records[record])
    }

    /// Kinds in first-seen order
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.kind.as_str())
    }

    /// Number of distinct kinds
    pub fn kind_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of indexed records
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Index a sequence of parsed documents
///
/// Never fails: non-mapping documents and mappings without a kind or
/// `metadata.name` are dropped.
pub fn index_resources<I>(documents: I) -> ResourceIndex
where
    I: IntoIterator<Item = Value>,
{
    let mut index = ResourceIndex::new();
    let mut skipped = 0usize;

    for document in documents {
        if !document.is_object() {
            skipped += 1;
            continue;
        }

        let record = ManifestRecord::new(document);
        let (kind, name) = match (record.kind(), record.name()) {
            (Some(kind), Some(name)) => (kind.to_string(), name.to_string()),
            _ => {
                tracing::debug!("Skipping manifest without kind or metadata.name");
                skipped += 1;
                continue;
            }
        };

        index.insert(&kind, &name, record);
    }

    tracing::debug!(
        "Indexed {} resources across {} kinds ({} documents skipped)",
        index.len(),
        index.kind_count(),
        skipped
    );
    index
}
