//! Topic administration over the rdkafka admin client.

pub mod admin;
pub mod config;
pub mod health;

pub use admin::{KafkaAdmin, TopicAdmin};
pub use config::{ClusterConfig, SecurityConfig};
