//! Unit tests for the activation (`admin init`) workflow.

#![allow(clippy::expect_used)]

use holo_cli::application::services::activate::{ActivateOptions, activate_bundle};
use holo_cli::domain::WorkflowAborted;
use holo_common::ConductorRequest;
use serde_json::json;

use crate::mocks::{
    NoopReporter, RecordingGateway, RecordingReporter, get_app_response, instance_list, nack,
};

const GET_APP: &str = "happ-store/happs/get_app";
const LIST_INSTANCES: &str = "admin/instance/list";
const ADD: &str = "admin/instance/add";
const BIND: &str = "admin/interface/add_instance";
const START: &str = "admin/instance/start";

const OPTS: ActivateOptions<'static> = ActivateOptions {
    registry: "happ-store",
    host_agent: "host-agent",
    interface: "internal-interface",
};

fn bundle(hashes: &[&str]) -> RecordingGateway {
    let dnas: Vec<(&str, &str)> = hashes.iter().map(|h| (*h, "http://unused")).collect();
    RecordingGateway::new().reply(GET_APP, get_app_response("Logger", &dnas))
}

#[tokio::test]
async fn test_each_dna_is_added_bound_and_started_in_order() {
    let gateway = bundle(&["QmA", "QmB"])
        .reply(LIST_INSTANCES, instance_list(&[]))
        .reply(ADD, json!({ "success": true, "instance": "A" }))
        .reply(ADD, json!({ "success": true, "instance": "B" }));

    let results = activate_bundle(&gateway, &NoopReporter, &"QmH".into(), &OPTS)
        .await
        .expect("activate");

    assert_eq!(
        results,
        [
            json!({ "success": true, "instance": "A" }),
            json!({ "success": true, "instance": "B" }),
        ]
    );
    let methods: Vec<String> = gateway.mutations().iter().map(ToString::to_string).collect();
    assert_eq!(methods, [ADD, BIND, START, ADD, BIND, START]);
}

#[tokio::test]
async fn test_instance_id_is_derived_from_dna_hash() {
    let gateway = bundle(&["QmA"]).reply(LIST_INSTANCES, instance_list(&[]));

    activate_bundle(&gateway, &NoopReporter, &"QmH".into(), &OPTS)
        .await
        .expect("activate");

    let mutations = gateway.mutations();
    assert_eq!(
        mutations[0],
        ConductorRequest::AddInstance {
            id: "servicelogger-QmA".to_string(),
            agent_id: "host-agent".to_string(),
            dna_id: "QmA".into(),
        }
    );
    assert_eq!(
        mutations[1],
        ConductorRequest::AddInstanceToInterface {
            interface_id: "internal-interface".to_string(),
            instance_id: "servicelogger-QmA".to_string(),
        }
    );
    assert_eq!(
        mutations[2],
        ConductorRequest::StartInstance {
            id: "servicelogger-QmA".to_string()
        }
    );
}

#[tokio::test]
async fn test_existing_instance_is_skipped_without_resume() {
    let gateway = bundle(&["QmA", "QmB"]).reply(LIST_INSTANCES, instance_list(&["servicelogger-QmA"]));
    let reporter = RecordingReporter::default();

    let results = activate_bundle(&gateway, &reporter, &"QmH".into(), &OPTS)
        .await
        .expect("activate");

    assert_eq!(results.len(), 1);
    assert!(
        gateway
            .mutations()
            .iter()
            .all(|req| !req.rpc().params.to_string().contains("servicelogger-QmA"))
    );
    assert_eq!(
        reporter.infos(),
        ["Skipping servicelogger-QmA because instance already initiated"]
    );
}

#[tokio::test]
async fn test_failed_bind_aborts_batch_and_keeps_add_response() {
    let gateway = bundle(&["QmA", "QmB"])
        .reply(LIST_INSTANCES, instance_list(&[]))
        .reply(ADD, json!({ "success": true }))
        .reply(BIND, nack());
    let reporter = RecordingReporter::default();

    let err = activate_bundle(&gateway, &reporter, &"QmH".into(), &OPTS)
        .await
        .expect_err("bind fails");

    assert_eq!(
        err.to_string(),
        "Failed to add instance servicelogger-QmA to interface internal-interface"
    );
    let aborted = err.downcast_ref::<WorkflowAborted>().expect("aborted");
    assert_eq!(aborted.completed, [json!({ "success": true })]);

    // Neither a start for A nor anything for B.
    let methods: Vec<String> = gateway.mutations().iter().map(ToString::to_string).collect();
    assert_eq!(methods, [ADD, BIND]);
    assert_eq!(reporter.warnings(), ["instance servicelogger-QmA left instantiated"]);
}

#[tokio::test]
async fn test_failed_start_stops_before_next_dna() {
    let gateway = bundle(&["QmA", "QmB"])
        .reply(LIST_INSTANCES, instance_list(&[]))
        .reply(START, json!({ "success": false }));

    let err = activate_bundle(&gateway, &NoopReporter, &"QmH".into(), &OPTS)
        .await
        .expect_err("start fails");

    assert_eq!(err.to_string(), "Failed to start instance servicelogger-QmA");
    assert_eq!(gateway.mutations().len(), 3);
}

#[tokio::test]
async fn test_non_object_ack_counts_as_failure() {
    let gateway = bundle(&["QmA"])
        .reply(LIST_INSTANCES, instance_list(&[]))
        .reply(BIND, json!("ok"));

    let err = activate_bundle(&gateway, &NoopReporter, &"QmH".into(), &OPTS)
        .await
        .expect_err("bind response is not an ack");

    assert!(err.to_string().starts_with("Failed to add instance"));
}

#[tokio::test]
async fn test_add_transport_failure_records_nothing() {
    let gateway = bundle(&["QmA"])
        .reply(LIST_INSTANCES, instance_list(&[]))
        .fail(ADD, "connection reset");
    let reporter = RecordingReporter::default();

    let err = activate_bundle(&gateway, &reporter, &"QmH".into(), &OPTS)
        .await
        .expect_err("add fails");

    let aborted = err.downcast_ref::<WorkflowAborted>().expect("aborted");
    assert!(aborted.completed.is_empty());
    assert!(reporter.warnings().is_empty());
}
