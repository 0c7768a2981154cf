//! Topic administration: create, update, delete, and list.
//!
//! Every operation is a single pass-through round trip. Partition counts,
//! replication factors, and config keys are validated by the broker alone,
//! and broker outcomes surface unchanged: creating an existing topic fails
//! with the broker's already-exists code, deleting a missing topic reports
//! whatever the broker reports. No retry, no backoff, no existence
//! pre-checks.

use crate::config::ClusterConfig;
use admin_core::{Error, PartitionInfo, Result, TopicDescriptor, TopicSpec};
use async_trait::async_trait;
use rdkafka::admin::{
    AdminClient, AdminOptions, AlterConfig, AlterConfigsResult, NewPartitions, NewTopic,
    OwnedResourceSpecifier, ResourceSpecifier, TopicReplication, TopicResult,
};
use rdkafka::client::DefaultClientContext;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Administrative surface for broker-side topics. One implementation per
/// backend, chosen at configuration time.
#[async_trait]
pub trait TopicAdmin: Send + Sync {
    async fn create_topic(&self, spec: &TopicSpec) -> Result<()>;
    async fn update_topic(&self, spec: &TopicSpec) -> Result<()>;
    async fn delete_topic(&self, name: &str) -> Result<()>;
    async fn list_topics(&self) -> Result<BTreeMap<String, TopicDescriptor>>;
}

/// [`TopicAdmin`] backed by librdkafka.
pub struct KafkaAdmin {
    admin: AdminClient<DefaultClientContext>,
    config: ClusterConfig,
}

impl KafkaAdmin {
    /// Connects with the given settings. Malformed settings fail here, at
    /// client construction, and propagate unchanged.
    pub fn connect(config: ClusterConfig) -> Result<Self> {
        let admin = config.client_config().create()?;
        Ok(Self { admin, config })
    }

    fn options(&self) -> AdminOptions {
        let timeout = self.config.request_timeout();
        AdminOptions::new()
            .request_timeout(Some(timeout))
            .operation_timeout(Some(timeout))
    }

    /// Current partition count from a single-topic metadata fetch, or None
    /// when the broker does not know the topic.
    fn partition_count(&self, name: &str) -> Result<Option<usize>> {
        let metadata = self
            .admin
            .inner()
            .fetch_metadata(Some(name), self.config.request_timeout())?;
        Ok(metadata
            .topics()
            .iter()
            .find(|t| t.name() == name && t.error().is_none())
            .map(|t| t.partitions().len()))
    }
}

#[async_trait]
impl TopicAdmin for KafkaAdmin {
    async fn create_topic(&self, spec: &TopicSpec) -> Result<()> {
        let mut topic = NewTopic::new(
            &spec.name,
            spec.partitions,
            TopicReplication::Fixed(spec.replication_factor),
        );
        for (key, value) in &spec.config {
            topic = topic.set(key, value);
        }

        info!(
            topic = %spec.name,
            partitions = spec.partitions,
            replication = spec.replication_factor,
            "creating topic"
        );
        let results = self.admin.create_topics([&topic], &self.options()).await?;
        first_topic_error(results)
    }

    async fn update_topic(&self, spec: &TopicSpec) -> Result<()> {
        if !spec.config.is_empty() {
            let mut alter = AlterConfig::new(ResourceSpecifier::Topic(&spec.name));
            for (key, value) in &spec.config {
                alter = alter.set(key, value);
            }

            info!(topic = %spec.name, overrides = spec.config.len(), "altering topic config");
            let results = self.admin.alter_configs([&alter], &self.options()).await?;
            first_config_error(results)?;
        }

        // Partition counts only grow. When the topic is unknown the request
        // is forwarded anyway so the broker reports it.
        let grow = match self.partition_count(&spec.name)? {
            Some(current) => (spec.partitions as usize) > current,
            None => true,
        };
        if grow {
            info!(topic = %spec.name, partitions = spec.partitions, "growing partition count");
            let partitions = NewPartitions::new(&spec.name, spec.partitions as usize);
            let results = self
                .admin
                .create_partitions([&partitions], &self.options())
                .await?;
            first_topic_error(results)?;
        }

        Ok(())
    }

    async fn delete_topic(&self, name: &str) -> Result<()> {
        info!(topic = %name, "deleting topic");
        let results = self.admin.delete_topics(&[name], &self.options()).await?;
        first_topic_error(results)
    }

    async fn list_topics(&self) -> Result<BTreeMap<String, TopicDescriptor>> {
        let metadata = self
            .admin
            .inner()
            .fetch_metadata(None, self.config.request_timeout())?;

        let mut topics = BTreeMap::new();
        for topic in metadata.topics() {
            let partitions = topic
                .partitions()
                .iter()
                .map(|p| PartitionInfo {
                    id: p.id(),
                    leader: p.leader(),
                    replicas: p.replicas().to_vec(),
                    in_sync_replicas: p.isr().to_vec(),
                })
                .collect();
            topics.insert(
                topic.name().to_string(),
                TopicDescriptor {
                    name: topic.name().to_string(),
                    partitions,
                },
            );
        }

        debug!(topics = topics.len(), "listed topics");
        Ok(topics)
    }
}

/// Surfaces the first per-topic failure of an admin batch unchanged.
fn first_topic_error(results: Vec<TopicResult>) -> Result<()> {
    for result in results {
        if let Err((topic, code)) = result {
            return Err(Error::topic_operation(topic, code));
        }
    }
    Ok(())
}

fn first_config_error(results: Vec<AlterConfigsResult>) -> Result<()> {
    for result in results {
        if let Err((specifier, code)) = result {
            let topic = match specifier {
                OwnedResourceSpecifier::Topic(name) => name,
                other => format!("{:?}", other),
            };
            return Err(Error::topic_operation(topic, code));
        }
    }
    Ok(())
}
