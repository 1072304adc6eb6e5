//! Integration tests for the attendee lookup endpoint.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_lookup_returns_record_before_assignment() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_attendee(session_id, "Jamie Park", "01012345678", 2)
        .await;

    let response = app
        .request(
            "POST",
            "/api/attendees/lookup",
            Some(serde_json::json!({
                "phone": "01012345678",
                "name": "Jamie Park",
                "session_id": session_id.to_string(),
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["name"], "Jamie Park");
    assert!(response.body["data"]["seat_number"].is_null());

    // Lookups leave no trace in the assignment log.
    assert!(app.logs.entries().await.is_empty());
}

#[tokio::test]
async fn test_lookup_unknown_identity_is_not_found() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;

    let response = app
        .request(
            "POST",
            "/api/attendees/lookup",
            Some(serde_json::json!({
                "phone": "01012345678",
                "name": "Jamie Park",
                "session_id": session_id.to_string(),
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lookup_rejects_missing_fields() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/attendees/lookup", Some(serde_json::json!({})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/attendees/lookup",
            Some(serde_json::json!({
                "phone": "01012345678",
                "name": "Jamie Park",
                "session_id": "not-a-uuid",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
