//! Integration tests for the session read-side endpoints.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn test_seat_map_shows_occupancy() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 3, 0).await;
    app.seed_row(session_id, "B", 2, 1).await;
    app.seed_attendee(session_id, "Jamie Park", "01012345678", 2)
        .await;
    app.register(session_id, "Jamie Park", "01012345678", 2).await;

    let response = app
        .request("GET", &format!("/api/sessions/{session_id}/seat-map"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["capacity"], 5);
    assert_eq!(data["occupied_seats"], 2);

    let rows = data["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["row_label"], "A");
    let seats = rows[0]["seats"].as_array().unwrap();
    assert_eq!(seats[0]["seat"], "A-01");
    assert_eq!(seats[0]["occupied"], true);
    assert_eq!(seats[0]["occupant"], "Jamie Park");
    assert_eq!(seats[2]["occupied"], false);
}

#[tokio::test]
async fn test_stats_reports_counts() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 10, 0).await;
    app.seed_attendee(session_id, "Jamie Park", "01012345678", 2)
        .await;
    app.seed_attendee(session_id, "Robin Lee", "01087654321", 3)
        .await;
    app.register(session_id, "Jamie Park", "01012345678", 2).await;

    let response = app
        .request("GET", &format!("/api/sessions/{session_id}/stats"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["session"]["name"], "Launch Day");
    assert_eq!(data["total_attendees"], 2);
    assert_eq!(data["assigned_attendees"], 1);
    assert_eq!(data["requested_heads"], 5);
    assert_eq!(data["capacity"], 10);
    assert_eq!(data["occupied_seats"], 2);
    assert_eq!(data["available_seats"], 8);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let app = TestApp::new();
    let missing = Uuid::new_v4();

    for path in [
        format!("/api/sessions/{missing}/seat-map"),
        format!("/api/sessions/{missing}/stats"),
        format!("/api/sessions/{missing}/logs"),
        format!("/api/sessions/{missing}/logs/summary"),
    ] {
        let response = app.request("GET", &path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(response.body["error"].as_str().is_some());
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
