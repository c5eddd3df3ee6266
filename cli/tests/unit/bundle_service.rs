//! Unit tests for bundle resolution and typed queries.

#![allow(clippy::expect_used)]

use holo_cli::application::services::bundle::resolve_bundle;
use holo_cli::application::services::query::installed_dnas;
use holo_cli::domain::RemoteError;
use holo_common::ContentHash;
use serde_json::json;

use crate::mocks::{RecordingGateway, get_app_response};

#[tokio::test]
async fn test_resolve_queries_the_given_registry_once() {
    let gateway = RecordingGateway::new().reply(
        "my-store/happs/get_app",
        get_app_response("Chat", &[("QmA", "http://dl/A")]),
    );

    let bundle = resolve_bundle(&gateway, "my-store", &"QmH".into())
        .await
        .expect("resolve");

    assert_eq!(bundle.hash, ContentHash::from("QmH"));
    assert_eq!(bundle.title, "Chat");
    assert_eq!(bundle.modules.len(), 1);
    assert_eq!(gateway.methods(), ["my-store/happs/get_app"]);
    assert_eq!(gateway.calls()[0].rpc().params["args"], json!({ "app_hash": "QmH" }));
}

#[tokio::test]
async fn test_resolve_collapses_duplicate_dnas() {
    let gateway = RecordingGateway::new().reply(
        "happ-store/happs/get_app",
        get_app_response(
            "Chat",
            &[("QmA", "http://dl/A"), ("QmB", "http://dl/B"), ("QmA", "http://mirror/A")],
        ),
    );

    let bundle = resolve_bundle(&gateway, "happ-store", &"QmH".into())
        .await
        .expect("resolve");

    let hashes: Vec<&str> = bundle.modules.iter().map(|m| m.hash.as_str()).collect();
    assert_eq!(hashes, ["QmA", "QmB"]);
    assert_eq!(bundle.modules[0].location, "http://dl/A");
}

#[tokio::test]
async fn test_resolve_err_envelope_is_zome_error() {
    let gateway = RecordingGateway::new().reply(
        "happ-store/happs/get_app",
        json!({ "Err": { "Internal": "No entry at this address" } }),
    );

    let err = resolve_bundle(&gateway, "happ-store", &"QmBad".into())
        .await
        .expect_err("unknown hash");

    match err.downcast_ref::<RemoteError>() {
        Some(RemoteError::Zome { call, payload }) => {
            assert_eq!(call, "happ-store/happs/get_app");
            assert_eq!(payload["Internal"], "No entry at this address");
        }
        other => panic!("expected zome error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_list_shape_is_decode_error() {
    let gateway = RecordingGateway::new().reply("admin/dna/list", json!({ "dnas": [] }));

    let err = installed_dnas(&gateway).await.expect_err("object, not array");

    assert!(matches!(
        err.downcast_ref::<RemoteError>(),
        Some(RemoteError::Decode { method, .. }) if method == "admin/dna/list"
    ));
}
