//! Unified error type for the admin layer.
//!
//! Domain errors (topic-already-exists, unknown topic, authorization
//! failures) originate from librdkafka and the broker; nothing here catches,
//! translates, or retries them.

use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Client or broker error, passed through untouched.
    #[error(transparent)]
    Kafka(#[from] KafkaError),

    /// Per-topic outcome of an admin batch, carrying the broker's code
    /// verbatim.
    #[error("topic '{topic}': {code}")]
    TopicOperation {
        topic: String,
        code: RDKafkaErrorCode,
    },

    /// Configuration loading or malformed connection settings.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    pub fn topic_operation(topic: impl Into<String>, code: RDKafkaErrorCode) -> Self {
        Self::TopicOperation {
            topic: topic.into(),
            code,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The broker error code, if this error originated from the broker.
    pub fn kafka_code(&self) -> Option<RDKafkaErrorCode> {
        match self {
            Self::Kafka(e) => e.rdkafka_error_code(),
            Self::TopicOperation { code, .. } => Some(*code),
            Self::Config(_) => None,
        }
    }
}
