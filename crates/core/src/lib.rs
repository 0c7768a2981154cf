//! Core types for the Kafka admin layer.

pub mod error;
pub mod topic;

pub use error::{Error, Result};
pub use topic::*;
