#![allow(dead_code)]

use std::fs;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const PAGE_SIZE: usize = 10;

/// Helper struct to run ticketdesk commands in an isolated temp directory
pub struct TicketDeskTest {
    pub temp_dir: TempDir,
    api_url: Option<String>,
}

impl TicketDeskTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TicketDeskTest {
            temp_dir,
            api_url: None,
        }
    }

    /// Point every command at `url` through the environment
    pub fn with_api(mut self, url: &str) -> Self {
        self.api_url = Some(url.to_string());
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ticketdesk"));
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("TICKETDESK_ROOT")
            .env_remove("TICKETDESK_API_URL")
            .env_remove("TICKETDESK_API_TOKEN")
            .env_remove("TICKETDESK_LOG")
            .env("NO_PROXY", "127.0.0.1,localhost");
        if let Some(url) = &self.api_url {
            cmd.env("TICKETDESK_API_URL", url);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute ticketdesk command")
    }

    /// Run off the async runtime so an in-process mock server keeps serving
    pub async fn run_async(&self, args: &[&str]) -> Output {
        let mut cmd = self.command(args);
        tokio::task::spawn_blocking(move || cmd.output())
            .await
            .expect("join blocking task")
            .expect("Failed to execute ticketdesk command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        check_success(args, self.run(args))
    }

    pub async fn run_success_async(&self, args: &[&str]) -> Output {
        let output = self.run_async(args).await;
        check_success(args, output.clone());
        output
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".ticketdesk").join("config.yaml")
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }
}

fn check_success(args: &[&str], output: Output) -> String {
    if !output.status.success() {
        panic!(
            "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A ticket as the REST API serves it
pub fn ticket_json(id: u64, status: &str) -> Value {
    json!({
        "id": id,
        "owner": {"username": format!("user{id}"), "first_name": "Ann", "last_name": format!("Lee{id}")},
        "created_at": "2021-03-04T10:20:00Z",
        "ticket_status": status,
        "appointment_date": null,
        "phone_number": format!("555-{id:04}"),
        "intake_call_date": null,
        "is_intake_call": false,
        "pro": null,
        "pro_detail": null,
        "connector_detail": {"first_name": "Cara", "last_name": "Connor", "phone_number": "555-0300", "email": "cara@example.com"},
    })
}

/// State behind the in-process ticket API
#[derive(Default)]
pub struct MockState {
    pub tickets: Vec<Value>,
    /// Every PATCH body received, by ticket id
    pub patches: Vec<(u64, Value)>,
    /// Authorization header of every request
    pub auth: Vec<Option<String>>,
    /// Answer the list endpoint with this status instead
    pub list_status: Option<u16>,
    /// Answer the list endpoint with a body that is not JSON
    pub malformed: bool,
    /// Answer PATCH requests with this status instead
    pub patch_status: Option<u16>,
}

#[derive(Clone, Default)]
pub struct MockApi {
    pub state: Arc<Mutex<MockState>>,
}

impl MockApi {
    pub fn with_tickets(tickets: Vec<Value>) -> Self {
        let api = MockApi::default();
        api.state.lock().unwrap().tickets = tickets;
        api
    }

    /// Serve on a loopback port; returns the API base URL
    pub async fn spawn(&self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let app = Router::new()
            .route("/api/ticket/ticket-list/", get(list_tickets))
            .route("/api/ticket/:id/", get(get_ticket).patch(patch_ticket))
            .with_state(self.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/api/")
    }
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

fn record_auth(state: &mut MockState, headers: &HeaderMap) {
    state.auth.push(
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
}

fn status(code: u16) -> Response {
    StatusCode::from_u16(code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}

async fn list_tickets(
    State(api): State<MockApi>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let mut state = api.state.lock().unwrap();
    record_auth(&mut state, &headers);
    if let Some(code) = state.list_status {
        return status(code);
    }
    if state.malformed {
        return "<html>oops</html>".into_response();
    }
    let page = query.page.unwrap_or(1).max(1);
    let results: Vec<Value> = state
        .tickets
        .iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    Json(json!({"results": results, "count": state.tickets.len()})).into_response()
}

async fn get_ticket(
    State(api): State<MockApi>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    let mut state = api.state.lock().unwrap();
    record_auth(&mut state, &headers);
    match state.tickets.iter().find(|t| t["id"] == id) {
        Some(ticket) => Json(ticket.clone()).into_response(),
        None => status(404),
    }
}

async fn patch_ticket(
    State(api): State<MockApi>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = api.state.lock().unwrap();
    record_auth(&mut state, &headers);
    if let Some(code) = state.patch_status {
        return status(code);
    }
    state.patches.push((id, body.clone()));
    let Some(ticket) = state.tickets.iter_mut().find(|t| t["id"] == id) else {
        return status(404);
    };
    if let (Some(ticket), Some(fields)) = (ticket.as_object_mut(), body.as_object()) {
        for (key, value) in fields {
            ticket.insert(key.clone(), value.clone());
        }
    }
    Json(ticket.clone()).into_response()
}
