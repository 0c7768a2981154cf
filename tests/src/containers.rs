//! Testcontainer setup for a disposable Kafka broker.

use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::kafka::apache;

/// Container handle for Kafka.
pub struct TestBroker {
    #[allow(dead_code)]
    kafka: Option<ContainerAsync<apache::Kafka>>,
    pub bootstrap_servers: String,
}

impl TestBroker {
    /// Start a Kafka container, or target an external broker when
    /// KAFKA_ADMIN_TEST_BROKER is set.
    pub async fn start() -> Self {
        if let Some(bootstrap) = std::env::var("KAFKA_ADMIN_TEST_BROKER")
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            return Self {
                kafka: None,
                bootstrap_servers: bootstrap,
            };
        }

        let kafka = apache::Kafka::default()
            .start()
            .await
            .expect("Failed to start Kafka container");
        let port = kafka
            .get_host_port_ipv4(apache::KAFKA_PORT)
            .await
            .expect("Failed to resolve mapped Kafka port");

        Self {
            kafka: Some(kafka),
            bootstrap_servers: format!("127.0.0.1:{port}"),
        }
    }
}
