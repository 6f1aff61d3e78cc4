//! Session state machine, devnet gate, telemetry, and wallet operations.

mod common;

use common::{refused_url, MockNode, Reply};
use parthenon_client::session::NetworkSession;
use parthenon_types::error::ClientError;
use parthenon_types::network::{DevNetAccess, NetworkKey, DEVNET_ROLES, LATENCY_UNKNOWN};
use parthenon_types::wallet::Asset;
use serde_json::json;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

fn session() -> NetworkSession {
    NetworkSession::with_timeout(NetworkKey::Mainnet, TIMEOUT).unwrap()
}

#[tokio::test]
async fn connect_stores_height_and_marks_connected() {
    let node = MockNode::start(vec![Reply::Result(json!(42))]).await;
    let session = session();

    assert!(session.connect(Some(&node.url())).await);
    assert!(session.is_connected());
    assert_eq!(session.block_height(), 42);
    assert_eq!(node.requests()[0]["method"], "getblockcount");
}

#[tokio::test]
async fn connect_returns_false_on_transport_fault() {
    let session = session();
    assert!(!session.connect(Some(&refused_url())).await);
    assert!(!session.is_connected());
}

#[tokio::test]
async fn connect_returns_false_on_http_failure() {
    let node = MockNode::start(vec![Reply::Status(401)]).await;
    let session = session();
    assert!(!session.connect(Some(&node.url())).await);
    assert!(!session.is_connected());
}

#[tokio::test]
async fn connect_records_the_override_url() {
    let node = MockNode::start(vec![Reply::Result(json!(10))]).await;
    let session = session();
    session.connect(Some(&node.url())).await;
    assert_eq!(session.transport().endpoint(), node.url());
}

#[tokio::test]
async fn set_network_str_rejects_unknown_keys_without_state_change() {
    let node = MockNode::start(vec![Reply::Result(json!(7))]).await;
    let session = session();
    assert!(session.connect(Some(&node.url())).await);

    let err = session.set_network_str("bogus").await.unwrap_err();
    assert!(matches!(err, ClientError::UnknownNetwork(_)));
    assert_eq!(err.to_string(), "Unknown network: bogus");

    // Nothing moved: same network, same endpoint, still connected.
    let status = session.status();
    assert_eq!(status.network, NetworkKey::Mainnet);
    assert!(status.connected);
    assert_eq!(session.transport().endpoint(), node.url());
}

#[tokio::test]
async fn failed_switch_does_not_restore_the_previous_network() {
    let node = MockNode::start(vec![Reply::Result(json!(7))]).await;
    let session = session();
    assert!(session.connect(Some(&node.url())).await);

    // Nothing listens on the testnet default port in this environment.
    let connected = session.set_network(NetworkKey::Testnet).await;
    assert!(!connected);

    let status = session.status();
    assert_eq!(status.network, NetworkKey::Testnet);
    assert_eq!(status.network_name, "Testnet");
    assert!(!status.connected);
    assert_eq!(
        session.transport().endpoint(),
        NetworkKey::Testnet.profile().endpoint_url
    );
}

#[tokio::test]
async fn devnet_access_passes_the_node_answer_through_for_each_role() {
    let script = DEVNET_ROLES
        .iter()
        .map(|role| Reply::Result(json!({ "granted": true, "role": role })))
        .collect();
    let node = MockNode::start(script).await;
    let session = session();
    session.transport().set_endpoint(&node.url());

    for role in DEVNET_ROLES {
        let access = session.check_devnet_access("aabbcc").await;
        assert!(access.granted);
        assert_eq!(access.role, role);
    }
    let body = &node.requests()[0];
    assert_eq!(body["method"], "network/check_dev_access");
    assert_eq!(body["params"][0]["address"], "aabbcc");
}

#[tokio::test]
async fn devnet_access_fails_closed() {
    // Transport fault.
    let session = session();
    session.transport().set_endpoint(&refused_url());
    assert_eq!(
        session.check_devnet_access("aabbcc").await,
        DevNetAccess::denied()
    );

    // Protocol error, then an answer with no grant fields.
    let node = MockNode::start(vec![
        Reply::Error("internal"),
        Reply::Result(json!({})),
    ])
    .await;
    session.transport().set_endpoint(&node.url());
    assert_eq!(
        session.check_devnet_access("aabbcc").await,
        DevNetAccess::denied()
    );
    assert_eq!(
        session.check_devnet_access("aabbcc").await,
        DevNetAccess::denied()
    );
}

#[tokio::test]
async fn refresh_status_updates_telemetry_and_keeps_cache_on_failure() {
    let node = MockNode::start(vec![
        Reply::Result(json!({ "peer_count": 8, "latency_ms": 42, "version": "1.2.3" })),
        Reply::Error("unavailable"),
        Reply::Result(json!({ "peer_count": 9 })),
    ])
    .await;
    let session = session();
    session.transport().set_endpoint(&node.url());

    let initial = session.status();
    assert_eq!(initial.peer_count, 0);
    assert_eq!(initial.latency_ms, LATENCY_UNKNOWN);

    let status = session.refresh_status().await;
    assert_eq!(status.peer_count, 8);
    assert_eq!(status.latency_ms, 42);
    assert_eq!(status.node_version, "1.2.3");

    // Failure leaves the cached snapshot untouched.
    let status = session.refresh_status().await;
    assert_eq!(status.peer_count, 8);
    assert_eq!(status.node_version, "1.2.3");

    // Partial answers only overwrite the fields they carry.
    let status = session.refresh_status().await;
    assert_eq!(status.peer_count, 9);
    assert_eq!(status.latency_ms, 42);
    assert_eq!(status.node_version, "1.2.3");
}

#[tokio::test]
async fn overlapping_refreshes_are_deduplicated() {
    let node = MockNode::start(vec![Reply::Delayed(
        Duration::from_millis(300),
        json!({ "peer_count": 5 }),
    )])
    .await;
    let session = std::sync::Arc::new(session());
    session.transport().set_endpoint(&node.url());

    let slow = {
        let session = std::sync::Arc::clone(&session);
        tokio::spawn(async move { session.refresh_status().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    // Second caller while the first is outstanding: cached answer, no RPC.
    let cached = session.refresh_status().await;
    assert_eq!(cached.peer_count, 0);

    let refreshed = slow.await.unwrap();
    assert_eq!(refreshed.peer_count, 5);
    assert_eq!(node.requests().len(), 1);
}

#[tokio::test]
async fn update_block_height_returns_cache_on_failure() {
    let node = MockNode::start(vec![
        Reply::Result(json!(500)),
        Reply::Error("unavailable"),
    ])
    .await;
    let session = session();
    session.transport().set_endpoint(&node.url());

    assert_eq!(session.update_block_height().await, 500);
    assert_eq!(session.update_block_height().await, 500);
}

#[tokio::test]
async fn balances_zero_on_failure() {
    let node = MockNode::start(vec![Reply::Result(
        json!({ "TALN": 10.5, "DRM": 200.0, "OBL": 50.0 }),
    )])
    .await;
    let session = session();
    session.transport().set_endpoint(&node.url());

    let balances = session.get_balances().await;
    assert_eq!(balances.taln, 10.5);
    assert_eq!(balances.drm, 200.0);

    session.transport().set_endpoint(&refused_url());
    let balances = session.get_balances().await;
    assert_eq!(balances.taln, 0.0);
    assert_eq!(balances.obl, 0.0);
}

#[tokio::test]
async fn transactions_empty_on_failure() {
    let node = MockNode::start(vec![Reply::Result(json!([
        { "asset": "TALN", "amount": 1.0, "time": 1_700_000_000u64 },
        { "asset": "DRM", "amount": -0.5, "time": 1_700_001_000u64 },
    ]))])
    .await;
    let session = session();
    session.transport().set_endpoint(&node.url());

    let rows = session.get_transactions(10).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].asset, "TALN");
    assert_eq!(node.requests()[0]["params"], json!([10]));

    session.transport().set_endpoint(&refused_url());
    assert!(session.get_transactions(10).await.is_empty());
}

#[tokio::test]
async fn send_transaction_returns_txid_and_encodes_memo() {
    let node = MockNode::start(vec![
        Reply::Result(json!("abc123def456")),
        Reply::Result(json!("txid-with-memo")),
    ])
    .await;
    let session = session();
    session.transport().set_endpoint(&node.url());

    let txid = session
        .send_transaction(Asset::Taln, "parthenon1qabc", 5.0, None)
        .await
        .unwrap();
    assert_eq!(txid, "abc123def456");

    session
        .send_transaction(Asset::Drm, "parthenon1qdef", 1.0, Some("payment"))
        .await
        .unwrap();

    let bodies = node.requests();
    assert_eq!(bodies[0]["method"], "sendtoaddress");
    assert_eq!(bodies[0]["params"], json!(["TALN", "parthenon1qabc", 5.0]));
    assert_eq!(
        bodies[1]["params"],
        json!(["DRM", "parthenon1qdef", 1.0, "payment"])
    );
}

#[tokio::test]
async fn send_transaction_propagates_node_errors_verbatim() {
    let node = MockNode::start(vec![Reply::Error("Insufficient funds")]).await;
    let session = session();
    session.transport().set_endpoint(&node.url());

    let err = session
        .send_transaction(Asset::Taln, "parthenon1qabc", 9_999_999.0, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Insufficient funds");
}

#[tokio::test]
async fn new_address_propagates_failures() {
    let node = MockNode::start(vec![Reply::Result(json!("parthenon1qnewaddr0000000000000000000000000"))]).await;
    let session = session();
    session.transport().set_endpoint(&node.url());
    let address = session.get_new_address().await.unwrap();
    assert!(address.starts_with("parthenon1q"));

    session.transport().set_endpoint(&refused_url());
    assert!(session.get_new_address().await.is_err());
}

#[tokio::test]
async fn status_is_a_pure_read_of_profile_metadata() {
    let session = session();
    let status = session.status();
    assert_eq!(status.network, NetworkKey::Mainnet);
    assert_eq!(status.network_name, "Mainnet");
    assert_eq!(status.network_color, "#1f2a44");
    assert!(!status.connected);
    assert_eq!(status.block_height, 0);
}
