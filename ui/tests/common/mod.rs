#![allow(dead_code)]

use egui_kittest::Harness;
use parkdesk_ui::ParkdeskApp;
use parkdesk_ui::state::State;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Query endpoint for the attendants collection.
pub const QUERY_PATH: &str = "/api/collections/parking_attendants/documents/query";

/// Document endpoint for one attendant.
pub fn document_path(id: &str) -> String {
    format!("/api/collections/parking_attendants/documents/{id}")
}

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    pub mock_server: MockServer,
    harness: Harness<'a, ParkdeskApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, ParkdeskApp> {
        &mut self.harness
    }

    pub fn harness(&self) -> &Harness<'a, ParkdeskApp> {
        &self.harness
    }
}

/// The soft-delete filter every roster query must carry. Mocks match on it,
/// so a query without the filter gets no response and the test fails.
pub fn non_deleted_filter() -> serde_json::Value {
    serde_json::json!({ "filter": { "field": "deleted_at", "op": "is_null" } })
}

/// Documents payload for the standard three-attendant roster.
pub fn roster_body() -> serde_json::Value {
    serde_json::json!({
        "documents": [
            { "id": "u1", "fields": { "name": "Siti Rahma", "email": "siti@parkdesk.app" } },
            { "id": "u2", "fields": { "name": "Budi Santoso", "email": "budi@parkdesk.app" } },
            { "id": "u3", "fields": { "name": "Agus Wijaya", "email": "agus@parkdesk.app" } }
        ]
    })
}

/// Mounts a roster query mock answering `body`.
pub async fn mock_roster(mock_server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_json(non_deleted_filter()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Builds the app harness against an already-configured mock server.
pub fn app_ctx<'a>(mock_server: MockServer) -> TestCtx<'a> {
    let state = State::test(mock_server.uri());
    let app = ParkdeskApp::new(state);
    let harness = Harness::new_eframe(|_| app);

    TestCtx {
        mock_server,
        harness,
    }
}

/// Standard setup: mock server answering the roster query with three
/// attendants, app pointed at it.
pub async fn setup_roster_test<'a>() -> TestCtx<'a> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;
    mock_roster(&mock_server, roster_body()).await;
    app_ctx(mock_server)
}

/// Steps frames with a short sleep so in-flight requests can complete.
pub async fn settle(harness: &mut Harness<'_, ParkdeskApp>) {
    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }
}
