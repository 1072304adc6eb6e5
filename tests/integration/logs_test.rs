//! Integration tests for the assignment log endpoints and the
//! one-entry-per-request contract.

mod helpers;

use http::StatusCode;

use seatflow_database::AttendeeStore;

use helpers::TestApp;

#[tokio::test]
async fn test_every_registration_branch_appends_one_entry() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 3, 0).await;
    app.seed_attendee(session_id, "Jamie Park", "01012345678", 2)
        .await;
    app.seed_attendee(session_id, "Robin Lee", "01087654321", 3)
        .await;

    // success, retry, error (not registered), error (insufficient)
    app.register(session_id, "Jamie Park", "01012345678", 2).await;
    app.register(session_id, "Jamie Park", "01012345678", 2).await;
    app.register(session_id, "Nobody Here", "01000000000", 1).await;
    app.register(session_id, "Robin Lee", "01087654321", 3).await;

    let entries = app.logs.entries().await;
    assert_eq!(entries.len(), 4);

    let events: Vec<&str> = entries.iter().map(|e| e.event.as_str()).collect();
    assert_eq!(events, vec!["success", "retry", "error", "error"]);

    // Every entry carries a latency measurement.
    assert!(entries.iter().all(|e| e.processing_time_ms >= 0));
}

#[tokio::test]
async fn test_log_search_filters_and_paginates() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 10, 0).await;
    app.seed_attendee(session_id, "Jamie Park", "01012345678", 1)
        .await;

    app.register(session_id, "Jamie Park", "01012345678", 1).await;
    app.register(session_id, "Jamie Park", "01012345678", 1).await;
    app.register(session_id, "Nobody Here", "01000000000", 1).await;

    let response = app
        .request("GET", &format!("/api/sessions/{session_id}/logs"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["total_items"], 3);
    // Newest first.
    assert_eq!(data["items"][0]["event"], "error");
    assert_eq!(data["items"][2]["event"], "success");

    let response = app
        .request(
            "GET",
            &format!("/api/sessions/{session_id}/logs?event=retry"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_items"], 1);
    assert_eq!(response.body["data"]["items"][0]["event"], "retry");

    let response = app
        .request(
            "GET",
            &format!("/api/sessions/{session_id}/logs?page=2&per_page=2"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["page"], 2);
    assert_eq!(data["items"].as_array().unwrap().len(), 1);

    // Unknown event kinds are a validation error, not an empty result.
    let response = app
        .request(
            "GET",
            &format!("/api/sessions/{session_id}/logs?event=granted"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_log_summary_counts_by_event() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 10, 0).await;
    app.seed_attendee(session_id, "Jamie Park", "01012345678", 1)
        .await;

    app.register(session_id, "Jamie Park", "01012345678", 1).await;
    app.register(session_id, "Jamie Park", "01012345678", 1).await;
    app.register(session_id, "Nobody Here", "01000000000", 1).await;

    let response = app
        .request(
            "GET",
            &format!("/api/sessions/{session_id}/logs/summary"),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["total"], 3);
    assert_eq!(data["success"], 1);
    assert_eq!(data["retry"], 1);
    assert_eq!(data["error"], 1);
    assert_eq!(data["conflict"], 0);
    assert!(data["avg_processing_time_ms"].is_number());
}

#[tokio::test]
async fn test_double_assignment_is_detectable_in_the_log() {
    // The documented cross-attendee window: occupancy snapshots taken
    // before either commit let two parties land on the same seats. The
    // log makes this detectable as two success entries sharing seats.
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 5, 0).await;
    let first = app
        .seed_attendee(session_id, "Jamie Park", "01012345678", 2)
        .await;
    let second = app
        .seed_attendee(session_id, "Robin Lee", "01087654321", 2)
        .await;

    // Simulate interleaved requests: both commit against the same
    // pre-commit occupancy snapshot.
    app.attendees
        .commit_seats(first.id, 0, "A-01, A-02")
        .await
        .unwrap()
        .expect("first commit");
    app.attendees
        .commit_seats(second.id, 0, "A-01, A-02")
        .await
        .unwrap()
        .expect("second commit");

    // Replays through the API record both assignments in the log.
    app.register(session_id, "Jamie Park", "01012345678", 2).await;
    app.register(session_id, "Robin Lee", "01087654321", 2).await;

    let entries = app.logs.entries().await;
    let seat_bearing: Vec<&str> = entries
        .iter()
        .filter_map(|e| e.assigned_seats.as_deref())
        .collect();
    assert_eq!(seat_bearing, vec!["A-01, A-02", "A-01, A-02"]);
}
