//! Topic create/update/delete/list against a disposable Kafka broker.
//!
//! Requires Docker for testcontainers. Set KAFKA_ADMIN_TEST_BROKER to run
//! against an external broker instead.

use std::time::Duration;

use admin_core::TopicSpec;
use integration_tests::setup::TestContext;
use kafka::{health, ClusterConfig, TopicAdmin};
use rdkafka::error::RDKafkaErrorCode;

#[tokio::test]
async fn create_topic_appears_in_listing() {
    let ctx = TestContext::new().await;

    ctx.admin
        .create_topic(&TopicSpec::new("dummy-no-settings"))
        .await
        .expect("create failed");

    let topics = ctx.admin.list_topics().await.expect("list failed");
    assert!(topics.contains_key("dummy-no-settings"));
    assert_eq!(topics["dummy-no-settings"].partition_count(), 1);
}

#[tokio::test]
async fn create_topic_with_cleanup_policies() {
    let ctx = TestContext::new().await;

    for (name, policy) in [
        ("dummy-compacted", "compact"),
        ("dummy-deleted", "delete"),
        ("dummy-delete-compact", "compact,delete"),
    ] {
        let spec = TopicSpec::new(name).with_config("cleanup.policy", policy);
        ctx.admin
            .create_topic(&spec)
            .await
            .unwrap_or_else(|e| panic!("create {name} failed: {e}"));
    }

    let topics = ctx.admin.list_topics().await.expect("list failed");
    assert!(topics.contains_key("dummy-compacted"));
    assert!(topics.contains_key("dummy-deleted"));
    assert!(topics.contains_key("dummy-delete-compact"));
}

#[tokio::test]
async fn create_duplicate_topic_surfaces_broker_error() {
    let ctx = TestContext::new().await;

    let spec = TopicSpec::new("dummy-no-settings");
    ctx.admin
        .create_topic(&spec)
        .await
        .expect("first create failed");

    let err = ctx
        .admin
        .create_topic(&spec)
        .await
        .expect_err("duplicate create should fail");
    assert_eq!(err.kafka_code(), Some(RDKafkaErrorCode::TopicAlreadyExists));
}

#[tokio::test]
async fn delete_topic_removes_it_from_listing() {
    let ctx = TestContext::new().await;

    ctx.admin
        .create_topic(&TopicSpec::new("dummy-to-delete"))
        .await
        .expect("create failed");
    let topics = ctx.admin.list_topics().await.expect("list failed");
    assert!(topics.contains_key("dummy-to-delete"));

    ctx.admin
        .delete_topic("dummy-to-delete")
        .await
        .expect("delete failed");

    // Deletion completes asynchronously on the broker; poll the listing.
    for _ in 0..20 {
        let topics = ctx.admin.list_topics().await.expect("list failed");
        if !topics.contains_key("dummy-to-delete") {
            return;
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
    panic!("topic still listed after delete");
}

#[tokio::test]
async fn delete_missing_topic_leaves_listing_unchanged() {
    let ctx = TestContext::new().await;

    let topics = ctx.admin.list_topics().await.expect("list failed");
    assert!(!topics.contains_key("dummy-to-delete"));

    // The outcome of deleting a missing topic is broker-defined; only the
    // listing matters here.
    let _ = ctx.admin.delete_topic("dummy-to-delete").await;

    let topics = ctx.admin.list_topics().await.expect("list failed");
    assert!(!topics.contains_key("dummy-to-delete"));
}

#[tokio::test]
async fn update_topic_grows_partitions_and_alters_config() {
    let ctx = TestContext::new().await;

    ctx.admin
        .create_topic(&TopicSpec::new("dummy-resize"))
        .await
        .expect("create failed");

    let spec = TopicSpec::new("dummy-resize")
        .with_partitions(3)
        .with_config("retention.ms", "60000");
    ctx.admin.update_topic(&spec).await.expect("update failed");

    // Partition growth shows up in metadata after propagation.
    for _ in 0..20 {
        let topics = ctx.admin.list_topics().await.expect("list failed");
        if topics["dummy-resize"].partition_count() == 3 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
    panic!("partition count never reached 3");
}

#[tokio::test]
async fn health_check_distinguishes_reachable_brokers() {
    let ctx = TestContext::new().await;

    let reachable = ClusterConfig::from_bootstrap(ctx.broker.bootstrap_servers.clone());
    assert!(health::check_connection(&reachable));

    // Nothing listens on a reserved port; keep the timeout short so the
    // failure path returns promptly.
    let mut unreachable = ClusterConfig::from_bootstrap("127.0.0.1:1");
    unreachable.request_timeout_ms = 2000;
    assert!(!health::check_connection(&unreachable));
}

#[tokio::test]
async fn update_missing_topic_surfaces_broker_error() {
    let ctx = TestContext::new().await;

    let spec = TopicSpec::new("dummy-missing").with_config("retention.ms", "60000");
    let err = ctx
        .admin
        .update_topic(&spec)
        .await
        .expect_err("update of missing topic should fail");
    assert!(err.kafka_code().is_some());
}
