//! Shared test helpers for integration tests.
//!
//! Drives the real router over the in-memory stores, so the full HTTP
//! surface can be exercised without PostgreSQL.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use seatflow_api::app::{build_app, build_state_with_stores};
use seatflow_core::config::AppConfig;
use seatflow_database::memory::{
    MemoryAssignmentLogStore, MemoryAttendeeStore, MemorySeatLayoutStore, MemorySessionStore,
};
use seatflow_database::store::{
    AssignmentLogStore, AttendeeStore, SeatLayoutStore, SessionStore,
};
use seatflow_entity::attendee::{Attendee, CreateAttendee};
use seatflow_entity::seat::CreateSeatRow;
use seatflow_entity::session::EventSession;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Attendee store, for seeding and direct assertions.
    pub attendees: Arc<MemoryAttendeeStore>,
    /// Seat layout store, for seeding.
    pub layouts: Arc<MemorySeatLayoutStore>,
    /// Assignment log store, for assertions on the audit trail.
    pub logs: Arc<MemoryAssignmentLogStore>,
    /// Session store, for seeding.
    pub sessions: Arc<MemorySessionStore>,
}

impl TestApp {
    /// Create a new test application over empty in-memory stores.
    pub fn new() -> Self {
        let attendees = Arc::new(MemoryAttendeeStore::new());
        let layouts = Arc::new(MemorySeatLayoutStore::new());
        let logs = Arc::new(MemoryAssignmentLogStore::new());
        let sessions = Arc::new(MemorySessionStore::new());

        let state = build_state_with_stores(
            Arc::new(AppConfig::default()),
            Arc::clone(&attendees) as Arc<dyn AttendeeStore>,
            Arc::clone(&layouts) as Arc<dyn SeatLayoutStore>,
            Arc::clone(&logs) as Arc<dyn AssignmentLogStore>,
            Arc::clone(&sessions) as Arc<dyn SessionStore>,
        );
        let router = build_app(state);

        Self {
            router,
            attendees,
            layouts,
            logs,
            sessions,
        }
    }

    /// Seed an active session and return its id.
    pub async fn seed_session(&self, name: &str) -> Uuid {
        let session = EventSession {
            id: Uuid::new_v4(),
            name: name.to_string(),
            session_date: None,
            location: None,
            is_active: true,
            created_at: Utc::now(),
        };
        let id = session.id;
        self.sessions.insert(session).await;
        id
    }

    /// Seed an active seat row.
    pub async fn seed_row(&self, session_id: Uuid, label: &str, seat_count: i32, order: i32) {
        self.layouts
            .insert(CreateSeatRow {
                session_id,
                row_label: label.to_string(),
                seat_count,
                display_order: order,
                is_active: true,
            })
            .await;
    }

    /// Seed a pre-registered attendee without seats.
    pub async fn seed_attendee(
        &self,
        session_id: Uuid,
        name: &str,
        phone: &str,
        count: i32,
    ) -> Attendee {
        self.attendees
            .insert(CreateAttendee {
                session_id,
                name: name.to_string(),
                phone: phone.to_string(),
                attendee_count: count,
                is_onsite: false,
            })
            .await
    }

    /// Make an HTTP request to the test app.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Shorthand for the registration call.
    pub async fn register(
        &self,
        session_id: Uuid,
        name: &str,
        phone: &str,
        count: i32,
    ) -> TestResponse {
        self.request(
            "POST",
            "/api/register",
            Some(serde_json::json!({
                "phone": phone,
                "name": name,
                "attendee_count": count,
                "session_id": session_id.to_string(),
            })),
        )
        .await
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
