//! JSON operator API.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let resp = app.get("/api/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_scenarios_listed_in_catalog_order() {
    let app = TestApp::new();
    let body = app.get("/api/scenarios").await.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Live Migration",
            "User Reboot",
            "Host Agent Maintenance",
            "Redeploy",
            "User Redeploy",
            "Canceled Maintenance",
        ]
    );
    assert_eq!(body["data"][5]["statuses"], json!(["Scheduled", "Canceled"]));
}

#[tokio::test]
async fn test_state_reports_terminal_event() {
    let app = TestApp::new();
    app.select("User Redeploy").await;
    app.generate("Completed").await;

    let body = app.get("/api/state").await.json();
    let data = &body["data"];
    assert_eq!(data["selected_scenario"], "User Redeploy");
    assert_eq!(
        data["valid_statuses"],
        json!(["Scheduled", "Started", "Completed"])
    );
    assert_eq!(data["active_event"]["status"], "Completed");
    assert_eq!(data["active_event"]["scenario"], "User Redeploy");
    assert_eq!(data["document_incarnation"], 2);
    assert_eq!(data["document"]["Events"], json!([]));
}

#[tokio::test]
async fn test_state_initially_empty() {
    let app = TestApp::new();
    let body = app.get("/api/state").await.json();
    assert_eq!(body["data"]["selected_scenario"], json!(null));
    assert_eq!(body["data"]["active_event"], json!(null));
    assert_eq!(body["data"]["valid_statuses"], json!([]));
    assert_eq!(body["data"]["document_incarnation"], 1);
}

#[tokio::test]
async fn test_apps_do_not_share_state() {
    let a = TestApp::new();
    let b = TestApp::new();
    a.select("User Reboot").await;
    a.generate("Scheduled").await;
    assert_eq!(b.poll().await, json!({"DocumentIncarnation": 1, "Events": []}));
}
