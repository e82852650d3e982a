//! Assessment record storage.
//!
//! The store is the only shared mutable state in the service. Records enter
//! it fully built and are handed out as shared `Arc`s, so a reader sees
//! either the whole record or nothing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::error::{AssessorError, Result};
use crate::record::AssessmentRecord;

/// Storage backend for assessment records.
///
/// Implementations must give read-after-write visibility: once `insert`
/// returns, every `get` of that id observes the record.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a new record. Ids are never overwritten.
    async fn insert(&self, record: AssessmentRecord) -> Result<Arc<AssessmentRecord>>;

    /// Fetch a record by id.
    async fn get(&self, id: &str) -> Option<Arc<AssessmentRecord>>;

    /// Number of stored records.
    async fn len(&self) -> usize;

    async fn contains(&self, id: &str) -> bool;
}

/// Process-local store backed by a concurrent map.
pub struct InMemoryRecordStore {
    records: DashMap<String, Arc<AssessmentRecord>>,
    /// Records stored or reserved
    count: AtomicUsize,
    max_records: Option<usize>,
}

impl InMemoryRecordStore {
    /// An unbounded store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            count: AtomicUsize::new(0),
            max_records: None,
        }
    }

    /// A store that rejects inserts once `max_records` are held.
    pub fn with_capacity(max_records: usize) -> Self {
        Self {
            records: DashMap::with_capacity(max_records),
            count: AtomicUsize::new(0),
            max_records: Some(max_records),
        }
    }

    pub fn max_records(&self) -> Option<usize> {
        self.max_records
    }

    fn reserve_slot(&self) -> Result<()> {
        let Some(capacity) = self.max_records else {
            self.count.fetch_add(1, Ordering::AcqRel);
            return Ok(());
        };
        self.count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < capacity).then_some(n + 1)
            })
            .map(|_| ())
            .map_err(|_| AssessorError::StoreFull { capacity })
    }

    fn release_slot(&self) {
        self.count.fetch_sub(1, Ordering::AcqRel);
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, record: AssessmentRecord) -> Result<Arc<AssessmentRecord>> {
        self.reserve_slot()?;

        match self.records.entry(record.id.clone()) {
            Entry::Occupied(existing) => {
                let id = existing.key().clone();
                drop(existing);
                self.release_slot();
                Err(AssessorError::DuplicateRecord(id))
            }
            Entry::Vacant(slot) => {
                let record = Arc::new(record);
                slot.insert(Arc::clone(&record));
                debug!(
                    assessment_id = %record.id,
                    count = self.count.load(Ordering::Acquire),
                    "Stored assessment record"
                );
                Ok(record)
            }
        }
    }

    async fn get(&self, id: &str) -> Option<Arc<AssessmentRecord>> {
        self.records.get(id).map(|entry| Arc::clone(entry.value()))
    }

    async fn len(&self) -> usize {
        self.records.len()
    }

    async fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordHeader;
    use chrono::Utc;
    use rmf_scoring::{evaluate, AnswerSet};
    use rmf_taxonomy::{Playbook, TaxonomyRegistry};

    fn record(id: &str) -> AssessmentRecord {
        let registry = TaxonomyRegistry::nist_ai_rmf().unwrap();
        let answers = AnswerSet::empty();
        let evaluation = evaluate(&registry, &Playbook::nist_ai_rmf(), &answers).unwrap();
        AssessmentRecord::assemble(
            RecordHeader {
                id: id.to_string(),
                organization_name: "Acme".to_string(),
                industry: "energy".to_string(),
                created_at: Utc::now(),
            },
            &registry,
            &answers,
            evaluation,
        )
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = InMemoryRecordStore::new();
        let stored = store.insert(record("a")).await.unwrap();

        let fetched = store.get("a").await.unwrap();
        assert!(Arc::ptr_eq(&stored, &fetched));
        assert!(store.contains("a").await);
        assert_eq!(store.len().await, 1);
        assert!(store.get("b").await.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_never_overwritten() {
        let store = InMemoryRecordStore::new();
        store.insert(record("a")).await.unwrap();

        let mut replacement = record("a");
        replacement.organization_name = "Other".to_string();
        let err = store.insert(replacement).await.unwrap_err();
        assert!(matches!(err, AssessorError::DuplicateRecord(_)));

        assert_eq!(store.get("a").await.unwrap().organization_name, "Acme");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_capacity_rejects_without_eviction() {
        let store = InMemoryRecordStore::with_capacity(2);
        store.insert(record("a")).await.unwrap();
        store.insert(record("b")).await.unwrap();

        let err = store.insert(record("c")).await.unwrap_err();
        assert!(matches!(err, AssessorError::StoreFull { capacity: 2 }));
        assert!(store.contains("a").await);
        assert!(store.contains("b").await);
        assert!(!store.contains("c").await);
    }

    #[tokio::test]
    async fn test_duplicate_does_not_consume_capacity() {
        let store = InMemoryRecordStore::with_capacity(2);
        store.insert(record("a")).await.unwrap();
        assert!(store.insert(record("a")).await.is_err());
        store.insert(record("b")).await.unwrap();
        assert_eq!(store.len().await, 2);
    }
}
