//! Kafka topic administration CLI.
//!
//! A thin wrapper over the broker's admin API: requests are forwarded as
//! given and broker outcomes are reported unchanged.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use admin_core::TopicSpec;
use kafka::{ClusterConfig, KafkaAdmin, TopicAdmin};
use telemetry::init_logging_from_env;
use tracing::info;

#[derive(Parser)]
#[command(name = "kafka-admin", about = "Administrative layer for Kafka topics", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a topic
    Create {
        name: String,
        #[arg(long, default_value_t = 1)]
        partitions: i32,
        #[arg(long, default_value_t = 1)]
        replication: i32,
        /// Topic config override as key=value; repeatable
        #[arg(long = "config", value_parser = parse_key_value)]
        config: Vec<(String, String)>,
    },
    /// Update configs and partition count of an existing topic
    Update {
        name: String,
        #[arg(long, default_value_t = 1)]
        partitions: i32,
        /// Topic config override as key=value; repeatable
        #[arg(long = "config", value_parser = parse_key_value)]
        config: Vec<(String, String)>,
    },
    /// Delete a topic
    Delete { name: String },
    /// List topics with partition counts
    List,
    /// Check broker connectivity
    Health,
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_logging_from_env();

    let cli = Cli::parse();
    let cluster = load_config()?;

    info!(brokers = ?cluster.brokers, "connecting to cluster");
    let admin = KafkaAdmin::connect(cluster.clone()).context("failed to create admin client")?;

    match cli.command {
        Command::Create {
            name,
            partitions,
            replication,
            config,
        } => {
            let spec = TopicSpec {
                name,
                partitions,
                replication_factor: replication,
                config: config.into_iter().collect(),
            };
            admin.create_topic(&spec).await?;
            info!(topic = %spec.name, "topic created");
        }
        Command::Update {
            name,
            partitions,
            config,
        } => {
            let spec = TopicSpec {
                name,
                partitions,
                replication_factor: 1,
                config: config.into_iter().collect(),
            };
            admin.update_topic(&spec).await?;
            info!(topic = %spec.name, "topic updated");
        }
        Command::Delete { name } => {
            admin.delete_topic(&name).await?;
            info!(topic = %name, "topic deleted");
        }
        Command::List => {
            let topics = admin.list_topics().await?;
            for (name, descriptor) in &topics {
                println!("{}\t{}", name, descriptor.partition_count());
            }
        }
        Command::Health => {
            if !kafka::health::check_connection(&cluster) {
                anyhow::bail!("broker connection unhealthy");
            }
            info!("broker connection healthy");
        }
    }

    Ok(())
}

/// Load connection settings from file and environment.
fn load_config() -> Result<ClusterConfig> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&ClusterConfig::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("KAFKA_ADMIN")
                .try_parsing(true),
        )
        .build()
        .context("failed to build configuration")?;

    let mut cluster: ClusterConfig = config
        .try_deserialize()
        .context("failed to deserialize configuration")?;

    // Comma-separated broker list straight from the environment; the config
    // crate does not split list values itself.
    if let Ok(brokers) = std::env::var("KAFKA_ADMIN_BROKERS") {
        cluster.brokers = brokers.split(',').map(|s| s.trim().to_string()).collect();
    }

    Ok(cluster)
}
