//! Broker connectivity checks.

use crate::config::ClusterConfig;
use rdkafka::consumer::{BaseConsumer, Consumer};
use tracing::{debug, error};

/// Check broker reachability with a metadata fetch.
pub fn check_connection(config: &ClusterConfig) -> bool {
    let consumer: BaseConsumer = match config.client_config().create() {
        Ok(consumer) => consumer,
        Err(e) => {
            error!("failed to create consumer: {}", e);
            return false;
        }
    };

    match consumer.fetch_metadata(None, config.request_timeout()) {
        Ok(metadata) => {
            debug!(brokers = metadata.brokers().len(), "broker connection healthy");
            true
        }
        Err(e) => {
            error!("failed to fetch cluster metadata: {}", e);
            false
        }
    }
}
