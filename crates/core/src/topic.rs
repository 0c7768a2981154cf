//! Topic descriptions exchanged with the broker.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A requested topic. Forwarded to the broker as given; partition counts,
/// replication bounds, and config keys are validated broker-side only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSpec {
    pub name: String,
    #[serde(default = "default_partitions")]
    pub partitions: i32,
    #[serde(default = "default_replication_factor")]
    pub replication_factor: i32,
    /// Topic-level overrides (e.g. "cleanup.policy"), forwarded verbatim.
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

fn default_partitions() -> i32 {
    1
}

fn default_replication_factor() -> i32 {
    1
}

impl TopicSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partitions: default_partitions(),
            replication_factor: default_replication_factor(),
            config: BTreeMap::new(),
        }
    }

    pub fn with_partitions(mut self, partitions: i32) -> Self {
        self.partitions = partitions;
        self
    }

    pub fn with_replication(mut self, factor: i32) -> Self {
        self.replication_factor = factor;
        self
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }
}

/// What the broker reported for one topic at listing time. There is no
/// caching and no consistency guarantee across repeated listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDescriptor {
    pub name: String,
    pub partitions: Vec<PartitionInfo>,
}

impl TopicDescriptor {
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }
}

/// Per-partition placement as reported by the broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionInfo {
    pub id: i32,
    pub leader: i32,
    pub replicas: Vec<i32>,
    pub in_sync_replicas: Vec<i32>,
}
