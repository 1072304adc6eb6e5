//! Integration tests for the registration endpoint.

mod helpers;

use http::StatusCode;

use seatflow_database::AttendeeStore;

use helpers::TestApp;

#[tokio::test]
async fn test_register_assigns_earliest_consecutive_run() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 20, 0).await;
    app.seed_row(session_id, "B", 20, 1).await;
    app.seed_attendee(session_id, "Jamie Park", "01012345678", 3)
        .await;

    let response = app.register(session_id, "Jamie Park", "01012345678", 3).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    assert!(response.body.get("already_assigned").is_none());
    assert_eq!(response.body["data"]["seat_number"], "A-01, A-02, A-03");
    assert_eq!(response.body["data"]["version"], 1);
}

#[tokio::test]
async fn test_register_skips_isolated_pair_for_full_run() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 20, 0).await;
    app.seed_row(session_id, "B", 20, 1).await;

    // Row A keeps only A-05/A-06 and A-15..A-20 free.
    let blocker = app
        .seed_attendee(session_id, "Row Blocker", "01099998888", 12)
        .await;
    let taken = "A-01, A-02, A-03, A-04, A-07, A-08, A-09, A-10, A-11, A-12, A-13, A-14";
    app.attendees
        .commit_seats(blocker.id, 0, taken)
        .await
        .unwrap()
        .expect("seeding commit");

    app.seed_attendee(session_id, "Jamie Park", "01012345678", 3)
        .await;
    let response = app.register(session_id, "Jamie Park", "01012345678", 3).await;

    assert_eq!(response.status, StatusCode::OK);
    // A-15..A-20 is the earliest run of three in row A, ahead of row B.
    assert_eq!(response.body["data"]["seat_number"], "A-15, A-16, A-17");
}

#[tokio::test]
async fn test_register_falls_to_next_row_when_first_has_no_run() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 6, 0).await;
    app.seed_row(session_id, "B", 6, 1).await;

    // Row A free only at A-02 and A-05: no run of three anywhere in it.
    let blocker = app
        .seed_attendee(session_id, "Row Blocker", "01099998888", 4)
        .await;
    app.attendees
        .commit_seats(blocker.id, 0, "A-01, A-03, A-04, A-06")
        .await
        .unwrap()
        .expect("seeding commit");

    app.seed_attendee(session_id, "Jamie Park", "01012345678", 3)
        .await;
    let response = app.register(session_id, "Jamie Park", "01012345678", 3).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["seat_number"], "B-01, B-02, B-03");
}

#[tokio::test]
async fn test_register_replay_is_idempotent() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 5, 0).await;
    app.seed_attendee(session_id, "Jamie Park", "01012345678", 2)
        .await;

    let first = app.register(session_id, "Jamie Park", "01012345678", 2).await;
    let second = app.register(session_id, "Jamie Park", "01012345678", 2).await;
    let third = app.register(session_id, "Jamie Park", "01012345678", 2).await;

    assert_eq!(first.status, StatusCode::OK);
    for replay in [&second, &third] {
        assert_eq!(replay.status, StatusCode::OK);
        assert_eq!(replay.body["success"], true);
        assert_eq!(replay.body["already_assigned"], true);
        assert_eq!(
            replay.body["data"]["seat_number"],
            first.body["data"]["seat_number"]
        );
        // Replays never advance the version.
        assert_eq!(replay.body["data"]["version"], first.body["data"]["version"]);
    }
}

#[tokio::test]
async fn test_register_unknown_identity_is_client_error() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 5, 0).await;

    let response = app.register(session_id, "Nobody Here", "01000000000", 1).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["error"]
            .as_str()
            .unwrap()
            .contains("not on the registration list")
    );
    assert!(response.body.get("conflict").is_none());

    // No record was created as a side effect.
    assert!(
        app.attendees
            .find_by_identity(session_id, "01000000000", "Nobody Here")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_register_for_unknown_session_still_leaves_audit_row() {
    let app = TestApp::new();
    // Syntactically valid session id with no session, rows, or attendees
    // behind it.
    let phantom_session = uuid::Uuid::new_v4();

    let response = app
        .register(phantom_session, "Jamie Park", "01012345678", 1)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["error"]
            .as_str()
            .unwrap()
            .contains("not on the registration list")
    );

    // The invocation is audited even though the session reference
    // resolves to nothing.
    let entries = app.logs.entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].session_id, Some(phantom_session));
    assert_eq!(entries[0].attendee_id, None);
}

#[tokio::test]
async fn test_register_validation_failures() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;

    // Phone too short.
    let response = app.register(session_id, "Jamie Park", "123", 1).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Party size of zero.
    let response = app.register(session_id, "Jamie Park", "01012345678", 0).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Negative party size gets the same response shape, not a bare
    // deserialization rejection.
    let response = app.register(session_id, "Jamie Park", "01012345678", -3).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].as_str().unwrap().contains("Party size"));

    // Missing fields entirely.
    let response = app
        .request("POST", "/api/register", Some(serde_json::json!({})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Unparseable session id.
    let response = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "phone": "01012345678",
                "name": "Jamie Park",
                "attendee_count": 1,
                "session_id": "not-a-uuid",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_insufficient_seats() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 2, 0).await;
    let requester = app
        .seed_attendee(session_id, "Jamie Park", "01012345678", 3)
        .await;

    let response = app.register(session_id, "Jamie Park", "01012345678", 3).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["error"]
            .as_str()
            .unwrap()
            .contains("Not enough seats")
    );

    // Nothing was partially assigned.
    let current = app.attendees.get(requester.id).await.unwrap();
    assert!(current.seat_number.is_none());
    assert_eq!(current.version, 0);
}

#[tokio::test]
async fn test_register_store_failure_is_generic_500() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 5, 0).await;
    app.seed_attendee(session_id, "Jamie Park", "01012345678", 1)
        .await;
    app.attendees.set_failing(true);

    let response = app.register(session_id, "Jamie Park", "01012345678", 1).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    // Store detail must not leak to the caller.
    let message = response.body["error"].as_str().unwrap();
    assert!(!message.contains("Simulated"));
}

#[tokio::test]
async fn test_concurrent_same_attendee_requests_commit_once() {
    let app = TestApp::new();
    let session_id = app.seed_session("Launch Day").await;
    app.seed_row(session_id, "A", 10, 0).await;
    let attendee = app
        .seed_attendee(session_id, "Jamie Park", "01012345678", 2)
        .await;

    let (first, second) = tokio::join!(
        app.register(session_id, "Jamie Park", "01012345678", 2),
        app.register(session_id, "Jamie Park", "01012345678", 2),
    );

    // Whatever the interleaving, both callers end up with the same seats
    // and the version advanced exactly once in total. A true commit race
    // surfaces as one 409; serialized interleavings surface as a replay.
    let current = app.attendees.get(attendee.id).await.unwrap();
    assert_eq!(current.version, 1);
    let seats = current.seat_number.as_deref().unwrap();

    for response in [&first, &second] {
        match response.status {
            StatusCode::OK => assert_eq!(response.body["data"]["seat_number"], seats),
            StatusCode::CONFLICT => assert_eq!(response.body["conflict"], true),
            other => panic!("unexpected status {other}: {:?}", response.body),
        }
    }
    assert!(first.status == StatusCode::OK || second.status == StatusCode::OK);
}
