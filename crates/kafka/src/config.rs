//! Cluster connection settings.

use rdkafka::ClientConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Connection settings forwarded to the admin client constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Bootstrap broker addresses
    pub brokers: Vec<String>,
    /// Request timeout in milliseconds, forwarded to the client
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Optional SASL/SSL settings
    #[serde(default)]
    pub security: Option<SecurityConfig>,
    /// Additional librdkafka properties, forwarded verbatim
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

fn default_request_timeout_ms() -> u64 {
    30000
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            brokers: vec!["localhost:9092".to_string()],
            request_timeout_ms: default_request_timeout_ms(),
            security: None,
            properties: BTreeMap::new(),
        }
    }
}

/// SASL/SSL settings applied to the client when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// security.protocol (plaintext, ssl, sasl_plaintext, sasl_ssl)
    pub protocol: String,
    #[serde(default)]
    pub sasl_mechanism: Option<String>,
    #[serde(default)]
    pub sasl_username: Option<String>,
    #[serde(default)]
    pub sasl_password: Option<String>,
}

impl ClusterConfig {
    pub fn new(brokers: Vec<String>) -> Self {
        Self {
            brokers,
            ..Default::default()
        }
    }

    /// Single bootstrap server convenience, mostly for tests.
    pub fn from_bootstrap(server: impl Into<String>) -> Self {
        Self::new(vec![server.into()])
    }

    /// Returns the broker list as a comma-separated string.
    pub fn broker_string(&self) -> String {
        self.brokers.join(",")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Builds the librdkafka configuration. Settings are forwarded as
    /// given; anything malformed is rejected by the client constructor.
    pub fn client_config(&self) -> ClientConfig {
        let mut cfg = ClientConfig::new();
        cfg.set("bootstrap.servers", self.broker_string());

        if let Some(security) = &self.security {
            cfg.set("security.protocol", &security.protocol);
            if let Some(mechanism) = &security.sasl_mechanism {
                cfg.set("sasl.mechanisms", mechanism);
            }
            if let Some(username) = &security.sasl_username {
                cfg.set("sasl.username", username);
            }
            if let Some(password) = &security.sasl_password {
                cfg.set("sasl.password", password);
            }
        }

        for (key, value) in &self.properties {
            cfg.set(key, value);
        }

        cfg
    }
}
