//! In-memory user store.
//!
//! Records live in a `BTreeMap` keyed by identifier, so list operations visit
//! them in ascending identifier order.
//!
//! # Performance Characteristics
//!
//! * Create: O(log n) plus the identifier probe, O(capacity) in the worst case
//! * Get/Patch/Replace/Delete: O(log n)
//! * GetAll: O(n)

use crate::config::{ReplaceMetadataPolicy, StoreConfig};
use crate::error::{ScimError, ScimResult};
use crate::filter::Filter;
use crate::patch::{PatchOperation, apply_operations, is_noop_request};
use crate::resource::{
    Attributes, ListPage, ListParams, Meta, PatchOutcome, ResourceProvider, UserResource,
};
use crate::storage::id::{IdGenerator, format_id, generator_for};
use chrono::Utc;
use log::{debug, info, trace, warn};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

const RESOURCE_TYPE: &str = "User";

#[derive(Debug, Clone)]
struct StoredUser {
    attributes: Attributes,
    meta: Meta,
}

impl StoredUser {
    fn view(&self, id: &str) -> UserResource {
        UserResource::new(id, self.attributes.clone(), Some(self.meta.clone()))
    }
}

/// Thread-safe in-memory store of user records.
///
/// Cloning is cheap and clones share the same records.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    records: Arc<RwLock<BTreeMap<String, StoredUser>>>,
    ids: Arc<dyn IdGenerator>,
    config: StoreConfig,
}

impl InMemoryUserStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        let config = StoreConfig::default();
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            ids: generator_for(config.id_strategy),
            config,
        }
    }

    /// Create an empty store with the given settings.
    pub fn with_config(config: StoreConfig) -> ScimResult<Self> {
        let ids = generator_for(config.id_strategy);
        Self::with_id_generator(config, ids)
    }

    /// Create an empty store that draws identifier candidates from `ids`.
    pub fn with_id_generator(config: StoreConfig, ids: Arc<dyn IdGenerator>) -> ScimResult<Self> {
        config.validate()?;
        Ok(Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            ids,
            config,
        })
    }

    /// The store's settings.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Record counts for debugging and monitoring.
    pub async fn stats(&self) -> StoreStats {
        let records = self.records.read().await;
        StoreStats {
            total_records: records.len(),
            id_capacity: self.config.id_capacity(),
        }
    }

    /// Remove every record (useful for testing).
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    // Start from the generator's candidate and take the next free identifier,
    // wrapping at the capacity.
    fn allocate_id(&self, records: &BTreeMap<String, StoredUser>) -> ScimResult<String> {
        let capacity = self.config.id_capacity();
        if records.len() as u64 >= capacity {
            return Err(ScimError::IdentifierSpaceExhausted { capacity });
        }

        let start = self.ids.candidate(capacity) % capacity;
        for offset in 0..capacity {
            let id = format_id((start + offset) % capacity, self.config.id_width);
            if !records.contains_key(&id) {
                if offset > 0 {
                    trace!("Identifier candidate collided, probed {} slots", offset);
                }
                return Ok(id);
            }
        }
        Err(ScimError::IdentifierSpaceExhausted { capacity })
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub total_records: usize,
    pub id_capacity: u64,
}

impl ResourceProvider for InMemoryUserStore {
    type Error = ScimError;

    async fn create(&self, attributes: Attributes) -> ScimResult<UserResource> {
        info!("Creating {} resource", RESOURCE_TYPE);
        trace!(
            "Create data: {}",
            serde_json::to_string(&attributes).unwrap_or_else(|_| "invalid json".to_string())
        );

        let mut records = self.records.write().await;
        let id = self.allocate_id(&records)?;
        let record = StoredUser {
            attributes,
            meta: Meta::for_new_record(&id, Utc::now()),
        };
        let view = record.view(&id);
        records.insert(id.clone(), record);

        debug!("Created {} resource with ID '{}'", RESOURCE_TYPE, id);
        Ok(view)
    }

    async fn get(&self, id: &str) -> ScimResult<UserResource> {
        debug!("Getting {} resource with ID '{}'", RESOURCE_TYPE, id);

        let records = self.records.read().await;
        match records.get(id) {
            Some(record) => {
                trace!("Resource found and returned");
                Ok(record.view(id))
            }
            None => {
                debug!("Resource not found");
                Err(ScimError::resource_not_found(RESOURCE_TYPE, id))
            }
        }
    }

    async fn get_all(&self, params: &ListParams, raw_filter: Option<&str>) -> ScimResult<ListPage> {
        debug!(
            "Listing {} resources (count: {}, startIndex: {}, filter: {:?})",
            RESOURCE_TYPE, params.count, params.start_index, raw_filter
        );

        if params.count == 0 {
            let total_results = self.records.read().await.len();
            return Ok(ListPage {
                total_results,
                resources: Vec::new(),
            });
        }

        let filter = match raw_filter.filter(|raw| !raw.is_empty()) {
            Some(raw) => {
                let filter = Filter::parse(raw)?;
                filter.ensure_supported()?;
                trace!("Parsed filter: {}", filter);
                Some(filter)
            }
            None => None,
        };

        let records = self.records.read().await;
        let mut resources = Vec::new();
        // The position counts every visited record, filtered out or not.
        for (position, (id, record)) in (1..).zip(records.iter()) {
            if let Some(filter) = &filter {
                if !filter.matches(&record.attributes) {
                    continue;
                }
            }
            if position >= params.start_index {
                resources.push(UserResource::new(id.clone(), record.attributes.clone(), None));
            }
        }

        debug!(
            "Listed {} of {} {} resources",
            resources.len(),
            records.len(),
            RESOURCE_TYPE
        );
        Ok(ListPage {
            total_results: records.len(),
            resources,
        })
    }

    async fn patch(&self, id: &str, operations: &[PatchOperation]) -> ScimResult<PatchOutcome> {
        info!(
            "Patching {} resource with ID '{}' ({} operations)",
            RESOURCE_TYPE,
            id,
            operations.len()
        );

        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(id) else {
            warn!(
                "Attempted to patch non-existent {} resource with ID '{}'",
                RESOURCE_TYPE, id
            );
            return Err(ScimError::resource_not_found(RESOURCE_TYPE, id));
        };

        if is_noop_request(Some(&record.attributes), operations) {
            debug!("Patch of '{}' changes nothing, skipping", id);
            return Ok(PatchOutcome::NoContent);
        }

        let mut working = record.attributes.clone();
        apply_operations(&mut working, operations)?;
        record.attributes = working;
        record.meta = record.meta.patched(Utc::now());

        debug!(
            "Patched {} resource with ID '{}' to version '{}'",
            RESOURCE_TYPE, id, record.meta.version
        );
        Ok(PatchOutcome::Modified(record.view(id)))
    }

    async fn replace(&self, id: &str, attributes: Attributes) -> ScimResult<UserResource> {
        info!("Replacing {} resource with ID '{}'", RESOURCE_TYPE, id);
        trace!(
            "Replace data: {}",
            serde_json::to_string(&attributes).unwrap_or_else(|_| "invalid json".to_string())
        );

        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(id) else {
            warn!(
                "Attempted to replace non-existent {} resource with ID '{}'",
                RESOURCE_TYPE, id
            );
            return Err(ScimError::resource_not_found(RESOURCE_TYPE, id));
        };

        let now = Utc::now();
        record.attributes = attributes;
        let view = match self.config.replace_metadata {
            ReplaceMetadataPolicy::Refresh => {
                record.meta = record.meta.replaced(now);
                record.view(id)
            }
            ReplaceMetadataPolicy::Clear => {
                record.meta = Meta::for_new_record(id, now);
                UserResource::new(id, record.attributes.clone(), None)
            }
        };

        debug!("Replaced {} resource with ID '{}'", RESOURCE_TYPE, id);
        Ok(view)
    }

    async fn delete(&self, id: &str) -> ScimResult<()> {
        info!("Deleting {} resource with ID '{}'", RESOURCE_TYPE, id);

        let removed = self.records.write().await.remove(id);
        if removed.is_none() {
            warn!(
                "Attempted to delete non-existent {} resource with ID '{}'",
                RESOURCE_TYPE, id
            );
            return Err(ScimError::resource_not_found(RESOURCE_TYPE, id));
        }

        debug!("Successfully deleted {} resource with ID '{}'", RESOURCE_TYPE, id);
        Ok(())
    }
}
