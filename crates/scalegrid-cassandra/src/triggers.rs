//! Per-trigger lifecycle for parsed Cassandra metadata.
//!
//! A trigger's metadata is parsed once when the trigger is defined, replaced
//! when it is re-parsed, and dropped when the trigger is removed.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use anyhow::Context;
use tracing::{debug, info, warn};

use scalegrid_core::{MetricSpec, ScalerConfig};

use crate::metadata::CassandraMetadata;

struct TriggerEntry {
    metadata: CassandraMetadata,
    scaler_index: usize,
}

/// Parsed Cassandra triggers keyed by trigger name.
#[derive(Default)]
pub struct CassandraTriggers {
    entries: BTreeMap<String, TriggerEntry>,
}

impl CassandraTriggers {
    /// An empty set of triggers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `config` and store it under `name`, replacing any previous entry.
    ///
    /// On failure the previous entry, if any, is kept.
    pub fn upsert(
        &mut self,
        name: &str,
        config: &ScalerConfig,
    ) -> anyhow::Result<&CassandraMetadata> {
        let metadata = match CassandraMetadata::from_scaler_config(config) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(trigger = %name, key = e.key(), error = %e, "rejected cassandra trigger");
                return Err(e)
                    .with_context(|| format!("invalid cassandra trigger metadata for {name}"));
            }
        };

        let entry = TriggerEntry {
            metadata,
            scaler_index: config.scaler_index,
        };
        let entry = match self.entries.entry(name.to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(entry);
                info!(trigger = %name, "cassandra trigger re-parsed");
                slot.into_mut()
            }
            Entry::Vacant(slot) => {
                info!(trigger = %name, "cassandra trigger registered");
                slot.insert(entry)
            }
        };
        debug!(
            trigger = %name,
            metric = %entry.metadata.metric_name(),
            metadata = ?entry.metadata,
            "cassandra trigger metadata"
        );

        Ok(&entry.metadata)
    }

    /// Drop the trigger's metadata. Returns it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<CassandraMetadata> {
        let removed = self.entries.remove(name).map(|entry| entry.metadata);
        if removed.is_some() {
            info!(trigger = %name, "cassandra trigger removed");
        }
        removed
    }

    /// The parsed metadata for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<&CassandraMetadata> {
        self.entries.get(name).map(|entry| &entry.metadata)
    }

    /// Number of registered triggers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no triggers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// External metric specs for every trigger, ordered by trigger name.
    pub fn metric_specs(&self) -> Vec<(String, MetricSpec)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.metadata.metric_spec(entry.scaler_index)))
            .collect()
    }
}
