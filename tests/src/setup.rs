//! Common test setup functions.

use kafka::{ClusterConfig, KafkaAdmin};

use crate::containers::TestBroker;

/// Test context with a disposable broker and a connected admin client.
pub struct TestContext {
    #[allow(dead_code)]
    pub broker: TestBroker,
    pub admin: KafkaAdmin,
}

impl TestContext {
    pub async fn new() -> Self {
        let broker = TestBroker::start().await;
        let config = ClusterConfig::from_bootstrap(broker.bootstrap_servers.clone());
        let admin = KafkaAdmin::connect(config).expect("Failed to create admin client");
        Self { broker, admin }
    }
}
