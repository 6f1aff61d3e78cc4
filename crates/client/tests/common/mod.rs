//! A scripted in-process node for driving the client end to end.
//!
//! Each incoming JSON-RPC request consumes the next reply in the script and
//! is recorded for later body assertions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted answer from the mock node.
#[allow(dead_code)]
pub enum Reply {
    /// `{"result": <v>, "error": null}` with HTTP 200.
    Result(Value),
    /// `{"result": null, "error": {"message": <msg>}}` with HTTP 200.
    Error(&'static str),
    /// An empty body with the given HTTP status.
    Status(u16),
    /// Sleep, then answer with the value. For timeout tests.
    Delayed(Duration, Value),
}

struct MockState {
    script: Mutex<VecDeque<Reply>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// Handle to a running mock node.
pub struct MockNode {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockNode {
    /// Starts a mock node that answers requests from `script` in order.
    pub async fn start(script: Vec<Reply>) -> MockNode {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(MockState {
            script: Mutex::new(script.into()),
            requests: Arc::clone(&requests),
        });
        let app = Router::new().route("/", post(handle)).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        MockNode { addr, requests }
    }

    /// Base URL of the node.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request body received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

/// A URL that refuses connections (nothing listens on port 1).
#[allow(dead_code)]
pub fn refused_url() -> String {
    "http://127.0.0.1:1".to_string()
}

async fn handle(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.requests.lock().unwrap().push(body);
    let reply = state.script.lock().unwrap().pop_front();
    match reply {
        Some(Reply::Result(value)) => Json(json!({ "result": value, "error": null })).into_response(),
        Some(Reply::Error(message)) => {
            Json(json!({ "result": null, "error": { "message": message } })).into_response()
        }
        Some(Reply::Status(code)) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, String::new()).into_response()
        }
        Some(Reply::Delayed(wait, value)) => {
            tokio::time::sleep(wait).await;
            Json(json!({ "result": value, "error": null })).into_response()
        }
        None => Json(json!({ "result": null, "error": { "message": "mock script exhausted" } }))
            .into_response(),
    }
}
