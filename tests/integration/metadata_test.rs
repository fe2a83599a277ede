//! Poll endpoint behaviour across scenario lifecycles.

use std::collections::HashSet;

use chrono::{NaiveDateTime, Utc};
use serde_json::json;

use crate::helpers::TestApp;

const MOCK_RESOURCE: &str =
    "/subscriptions/mock/resourceGroups/mock/providers/Microsoft.Compute/virtualMachines/mockvm";

#[tokio::test]
async fn test_poll_without_scenario_returns_empty_document() {
    let app = TestApp::new();
    let doc = app.poll().await;
    assert_eq!(doc, json!({"DocumentIncarnation": 1, "Events": []}));
}

#[tokio::test]
async fn test_user_reboot_scheduled() {
    let app = TestApp::new();
    app.select("User Reboot").await;
    app.generate("Scheduled").await;

    let before = Utc::now();
    let doc = app.poll().await;
    assert_eq!(doc["DocumentIncarnation"], 2);

    let events = doc["Events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event["EventStatus"], "Scheduled");
    assert_eq!(event["EventType"], "Reboot");
    assert_eq!(event["EventSource"], "User");
    assert_eq!(event["ResourceType"], "VirtualMachine");
    assert_eq!(event["Resources"], json!([MOCK_RESOURCE]));
    assert_eq!(event["Description"], "Simulates a user-initiated reboot");
    assert_eq!(event["DurationInSeconds"], -1);
    assert!(!event["EventId"].as_str().unwrap().is_empty());

    let not_before = event["NotBefore"].as_str().unwrap();
    assert!(not_before.ends_with('Z'));
    let parsed = NaiveDateTime::parse_from_str(not_before, "%Y-%m-%dT%H:%M:%SZ")
        .unwrap()
        .and_utc();
    let offset = parsed - before;
    assert!(offset.num_seconds() >= 14 * 60 + 58);
    assert!(offset.num_seconds() <= 15 * 60 + 2);
}

#[tokio::test]
async fn test_completed_hides_event_and_bumps_incarnation() {
    let app = TestApp::new();
    app.select("User Reboot").await;
    app.generate("Scheduled").await;
    let first = app.poll().await;

    app.generate("Completed").await;
    let second = app.poll().await;
    assert_eq!(second["Events"], json!([]));
    assert_eq!(
        second["DocumentIncarnation"].as_u64().unwrap(),
        first["DocumentIncarnation"].as_u64().unwrap() + 1
    );
}

#[tokio::test]
async fn test_canceled_maintenance_is_suppressed() {
    let app = TestApp::new();
    app.select("Canceled Maintenance").await;
    app.generate("Canceled").await;
    let doc = app.poll().await;
    assert_eq!(doc["Events"], json!([]));
    assert_eq!(doc["DocumentIncarnation"], 2);
}

#[tokio::test]
async fn test_every_scenario_and_status() {
    let app = TestApp::new();
    let catalog = app.get("/api/scenarios").await.json();

    for scenario in catalog["data"].as_array().unwrap() {
        let name = scenario["name"].as_str().unwrap();
        app.select(name).await;

        for status in scenario["statuses"].as_array().unwrap() {
            let status = status.as_str().unwrap();
            app.generate(status).await;
            let doc = app.poll().await;

            if status == "Completed" || status == "Canceled" {
                assert_eq!(doc["Events"], json!([]), "{name}/{status}");
                continue;
            }

            let event = &doc["Events"][0];
            assert_eq!(event["EventStatus"], status);
            assert_eq!(event["EventType"], scenario["event_type"]);
            assert_eq!(event["EventSource"], scenario["event_source"]);
            assert_eq!(event["Description"], scenario["description"]);
            assert_eq!(event["DurationInSeconds"], scenario["duration_in_seconds"]);
            match status {
                "Scheduled" => assert_ne!(event["NotBefore"], ""),
                _ => assert_eq!(event["NotBefore"], ""),
            }
        }
    }
}

#[tokio::test]
async fn test_polling_is_idempotent_for_started() {
    let app = TestApp::new();
    app.select("Live Migration").await;
    app.generate("Started").await;

    let first = app.get("/metadata/scheduledevents").await;
    let second = app.get("/metadata/scheduledevents").await;
    assert_eq!(first.body, second.body);
    assert_eq!(first.json()["Events"][0]["NotBefore"], "");
}

#[tokio::test]
async fn test_polling_twice_keeps_incarnation_while_scheduled() {
    let app = TestApp::new();
    app.select("Host Agent Maintenance").await;
    app.generate("Scheduled").await;

    let first = app.poll().await;
    let second = app.poll().await;
    assert_eq!(first["DocumentIncarnation"], second["DocumentIncarnation"]);
    assert_eq!(first["Events"][0]["EventId"], second["Events"][0]["EventId"]);
}

#[tokio::test]
async fn test_event_ids_are_unique_across_generations() {
    let app = TestApp::new();
    app.select("Live Migration").await;

    let mut ids = HashSet::new();
    for _ in 0..5 {
        for status in ["Scheduled", "Started"] {
            app.generate(status).await;
            let doc = app.poll().await;
            let id = doc["Events"][0]["EventId"].as_str().unwrap().to_string();
            assert!(ids.insert(id));
        }
    }
}

#[tokio::test]
async fn test_query_parameters_are_ignored() {
    let app = TestApp::new();
    let resp = app
        .get("/metadata/scheduledevents?api-version=2020-07-01")
        .await;
    assert_eq!(resp.status, http::StatusCode::OK);
    assert_eq!(resp.json()["Events"], json!([]));
}
