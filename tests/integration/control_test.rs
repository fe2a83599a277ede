//! Operator form endpoints: redirects, notices and rejected operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_unknown_scenario_redirects_without_state_change() {
    let app = TestApp::new();
    let resp = app
        .post_form("/set-scenario", &[("scenario", "NonExistentScenario")])
        .await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(resp.location(), Some("/"));
    assert!(app.state.events.snapshot().selected.is_none());

    // Still no scenario, so generation is rejected too.
    let resp = app
        .post_form("/generate-event", &[("event_status", "Scheduled")])
        .await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(app.poll().await, json!({"DocumentIncarnation": 1, "Events": []}));
}

#[tokio::test]
async fn test_invalid_status_is_rejected() {
    let app = TestApp::new();
    app.select("Live Migration").await;
    let resp = app
        .post_form("/generate-event", &[("event_status", "InvalidStatus")])
        .await;
    assert_eq!(resp.status, StatusCode::FOUND);

    let doc = app.poll().await;
    assert_eq!(doc["Events"], json!([]));
    assert_eq!(doc["DocumentIncarnation"], 1);
}

#[tokio::test]
async fn test_status_from_other_scenario_leaves_event_unchanged() {
    let app = TestApp::new();
    app.select("Live Migration").await;
    app.generate("Started").await;
    let before = app.poll().await;

    let resp = app
        .post_form("/generate-event", &[("event_status", "Canceled")])
        .await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(app.poll().await, before);
}

#[tokio::test]
async fn test_missing_form_fields_are_treated_as_unknown() {
    let app = TestApp::new();
    let resp = app.post_form("/set-scenario", &[]).await;
    assert_eq!(resp.status, StatusCode::FOUND);

    app.select("User Reboot").await;
    let resp = app.post_form("/generate-event", &[]).await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(app.poll().await["DocumentIncarnation"], 1);
}

#[tokio::test]
async fn test_bodiless_posts_redirect_without_state_change() {
    let app = TestApp::new();

    let resp = app.post_empty("/set-scenario").await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(resp.location(), Some("/"));
    assert!(app.state.events.snapshot().selected.is_none());

    let resp = app.post_empty("/generate-event").await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(resp.location(), Some("/"));
    assert_eq!(app.poll().await, json!({"DocumentIncarnation": 1, "Events": []}));

    app.select("User Reboot").await;
    app.generate("Scheduled").await;
    let before = app.state.events.snapshot();

    assert_eq!(app.post_empty("/set-scenario").await.status, StatusCode::FOUND);
    assert_eq!(app.post_empty("/generate-event").await.status, StatusCode::FOUND);

    let after = app.state.events.snapshot();
    assert_eq!(after.selected.unwrap().name, "User Reboot");
    assert_eq!(after.document_incarnation, before.document_incarnation);
    assert_eq!(
        after.active.unwrap().event_id,
        before.active.unwrap().event_id
    );
}

#[tokio::test]
async fn test_non_form_body_takes_notice_path() {
    let app = TestApp::new();
    let resp = app
        .post_raw("/generate-event", "text/plain", "Scheduled".to_string())
        .await;
    assert_eq!(resp.status, StatusCode::FOUND);

    let cookie = resp.cookie("imds_notice").expect("notice cookie");
    let page = app.get_with_cookie("/", Some(&cookie)).await;
    assert!(
        page.body
            .contains("No active scenario. Please set a scenario first.")
    );
}

#[tokio::test]
async fn test_reset_clears_event_but_keeps_incarnation() {
    let app = TestApp::new();
    app.select("Redeploy").await;
    app.generate("Scheduled").await;

    let resp = app.post_empty("/stop-auto-run").await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(app.poll().await, json!({"DocumentIncarnation": 2, "Events": []}));

    app.generate("Started").await;
    assert_eq!(app.poll().await["DocumentIncarnation"], 3);

    let resp = app.post_empty("/reset").await;
    assert_eq!(resp.status, StatusCode::FOUND);
    assert_eq!(app.poll().await["Events"], json!([]));
}

#[tokio::test]
async fn test_reset_without_event() {
    let app = TestApp::new();
    app.post_empty("/stop-auto-run").await;
    assert_eq!(app.poll().await, json!({"DocumentIncarnation": 1, "Events": []}));
}

#[tokio::test]
async fn test_error_notice_is_shown_once() {
    let app = TestApp::new();
    let resp = app
        .post_form("/generate-event", &[("event_status", "Scheduled")])
        .await;
    let cookie = resp.cookie("imds_notice").expect("notice cookie");

    let page = app.get_with_cookie("/", Some(&cookie)).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(
        page.body
            .contains("No active scenario. Please set a scenario first.")
    );
    assert!(page.body.contains("class=\"notice error\""));

    // The page clears the cookie it consumed.
    let cleared = page.cookie("imds_notice").expect("removal cookie");
    assert_eq!(cleared, "imds_notice=");
}

#[tokio::test]
async fn test_success_notice_after_generation() {
    let app = TestApp::new();
    app.select("User Reboot").await;
    let resp = app
        .post_form("/generate-event", &[("event_status", "Scheduled")])
        .await;
    let cookie = resp.cookie("imds_notice").expect("notice cookie");

    let page = app.get_with_cookie("/", Some(&cookie)).await;
    assert!(page.body.contains("New event generated"));
    assert!(page.body.contains("class=\"notice success\""));
}

#[tokio::test]
async fn test_page_without_notice() {
    let app = TestApp::new();
    let page = app.get("/").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("No scenario selected."));
    assert!(!page.body.contains("class=\"notice"));
}
