//! Unit tests for the install workflow.

#![allow(clippy::expect_used)]

use std::path::Path;

use holo_cli::application::services::install::{InstallOptions, install_bundle};
use holo_cli::domain::WorkflowAborted;
use holo_common::{ConductorRequest, ContentHash};
use serde_json::json;

use crate::mocks::{
    NoopReporter, RecordingFetcher, RecordingGateway, RecordingReporter, dna_list,
    get_app_response,
};

const GET_APP: &str = "happ-store/happs/get_app";
const LIST_DNAS: &str = "admin/dna/list";

fn opts(dir: &Path) -> InstallOptions<'_> {
    InstallOptions {
        registry: "happ-store",
        download_dir: dir,
    }
}

fn two_dna_bundle() -> RecordingGateway {
    RecordingGateway::new().reply(
        GET_APP,
        get_app_response("Chat", &[("QmA", "http://dl/A"), ("QmB", "http://dl/B")]),
    )
}

fn installed_ids(gateway: &RecordingGateway) -> Vec<String> {
    gateway
        .mutations()
        .into_iter()
        .filter_map(|req| match req {
            ConductorRequest::InstallDna { id, .. } => Some(id.to_string()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_fresh_install_installs_every_dna_in_order() {
    let gateway = two_dna_bundle().reply(LIST_DNAS, dna_list(&[]));
    let fetcher = RecordingFetcher::default();
    let dir = Path::new("/var/dnas");

    let results = install_bundle(&gateway, &fetcher, &NoopReporter, &"QmH".into(), &opts(dir))
        .await
        .expect("install");

    assert_eq!(results.len(), 2);
    assert_eq!(installed_ids(&gateway), ["QmA", "QmB"]);
    assert_eq!(fetcher.urls(), ["http://dl/A", "http://dl/B"]);
    assert_eq!(
        gateway.mutations()[0],
        ConductorRequest::InstallDna {
            id: "QmA".into(),
            path: "/var/dnas/QmA.dna.json".to_string(),
            expected_hash: "QmA".into(),
        }
    );
}

#[tokio::test]
async fn test_already_installed_dna_is_skipped_and_reported() {
    let gateway = two_dna_bundle().reply(LIST_DNAS, dna_list(&["QmA"]));
    let fetcher = RecordingFetcher::default();
    let reporter = RecordingReporter::default();

    let results = install_bundle(&gateway, &fetcher, &reporter, &"QmH".into(), &opts(Path::new("/d")))
        .await
        .expect("install");

    assert_eq!(results.len(), 1);
    assert_eq!(installed_ids(&gateway), ["QmB"]);
    assert_eq!(fetcher.urls(), ["http://dl/B"]);
    assert_eq!(reporter.infos(), ["Skipping QmA because DNA already installed"]);
}

#[tokio::test]
async fn test_second_run_is_a_no_op() {
    let gateway = two_dna_bundle().reply(LIST_DNAS, dna_list(&["QmB", "QmA"]));
    let fetcher = RecordingFetcher::default();

    let results = install_bundle(&gateway, &fetcher, &NoopReporter, &"QmH".into(), &opts(Path::new("/d")))
        .await
        .expect("install");

    assert!(results.is_empty());
    assert!(gateway.mutations().is_empty());
    assert!(fetcher.urls().is_empty());
}

#[tokio::test]
async fn test_fetch_failure_stops_batch_and_keeps_earlier_results() {
    let gateway = two_dna_bundle().reply(LIST_DNAS, dna_list(&[]));
    let fetcher = RecordingFetcher::failing_on("http://dl/A");

    let err = install_bundle(&gateway, &fetcher, &NoopReporter, &"QmH".into(), &opts(Path::new("/d")))
        .await
        .expect_err("fetch of A fails");

    let aborted = err.downcast_ref::<WorkflowAborted>().expect("aborted");
    assert!(aborted.completed.is_empty());
    assert!(gateway.mutations().is_empty());
    assert_eq!(fetcher.urls(), ["http://dl/A"]);
}

#[tokio::test]
async fn test_install_rejection_mid_batch_reports_completed() {
    let gateway = two_dna_bundle()
        .reply(LIST_DNAS, dna_list(&[]))
        .reply("admin/dna/install_from_file", json!({ "success": true }))
        .fail("admin/dna/install_from_file", "hash mismatch");
    let fetcher = RecordingFetcher::default();

    let err = install_bundle(&gateway, &fetcher, &NoopReporter, &"QmH".into(), &opts(Path::new("/d")))
        .await
        .expect_err("second install fails");

    let aborted = err.downcast_ref::<WorkflowAborted>().expect("aborted");
    assert_eq!(aborted.completed, [json!({ "success": true })]);
    assert!(format!("{err:#}").contains("hash mismatch"));
}

#[tokio::test]
async fn test_unknown_bundle_fails_before_any_change() {
    let gateway = RecordingGateway::new().reply(GET_APP, json!({ "Err": "NotFound" }));
    let fetcher = RecordingFetcher::default();

    let err = install_bundle(
        &gateway,
        &fetcher,
        &NoopReporter,
        &ContentHash::from("QmMissing"),
        &opts(Path::new("/d")),
    )
    .await
    .expect_err("lookup fails");

    assert!(err.to_string().contains("NotFound"), "{err}");
    assert_eq!(gateway.methods(), [GET_APP]);
    assert!(fetcher.urls().is_empty());
}
