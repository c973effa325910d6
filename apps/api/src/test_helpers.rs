use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::generation::generator::{CountPolicy, GenerationService};
use crate::llm_client::{InferenceClient, InferenceError, InferenceParameters};
use crate::routes::build_router;
use crate::state::AppState;

enum Script {
    Payload(Value),
    Status(u16, String),
}

/// Inference backend that replays a fixed outcome and records every call.
pub struct ScriptedInference {
    script: Script,
    calls: AtomicUsize,
    last_call: Mutex<Option<(String, InferenceParameters)>>,
}

impl ScriptedInference {
    pub fn ok(payload: Value) -> Arc<Self> {
        Self::new(Script::Payload(payload))
    }

    pub fn status(status: u16, body: &str) -> Arc<Self> {
        Self::new(Script::Status(status, body.to_string()))
    }

    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<(String, InferenceParameters)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for ScriptedInference {
    async fn generate(
        &self,
        inputs: &str,
        parameters: &InferenceParameters,
    ) -> Result<Value, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((inputs.to_string(), parameters.clone()));
        match &self.script {
            Script::Payload(payload) => Ok(payload.clone()),
            Script::Status(status, body) => Err(InferenceError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// Wraps text the way the endpoint does: `[{"generated_text": ...}]`.
pub fn generated(text: &str) -> Value {
    json!([{ "generated_text": text }])
}

/// Router backed by the given scripted inference backend.
pub fn test_router(backend: Arc<ScriptedInference>, count_policy: CountPolicy) -> Router {
    let generator = GenerationService::with_client(backend, count_policy);
    build_router(AppState {
        generator: Some(generator),
    })
}

/// Router with no credential configured.
pub fn test_router_without_credential() -> Router {
    build_router(AppState { generator: None })
}

/// Authorization header and raw body of the last request a stub endpoint saw.
pub type CapturedRequest = Arc<Mutex<Option<(Option<String>, String)>>>;

#[derive(Clone)]
struct StubEndpoint {
    status: StatusCode,
    body: &'static str,
    captured: CapturedRequest,
}

async fn stub_inference(
    State(stub): State<StubEndpoint>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *stub.captured.lock().unwrap() = Some((auth, body));
    (stub.status, stub.body)
}

/// Serves a fixed status and body on a local port, standing in for the
/// hosted inference endpoint. Returns the endpoint URL.
pub async fn spawn_inference_endpoint(
    status: StatusCode,
    body: &'static str,
) -> (String, CapturedRequest) {
    let captured: CapturedRequest = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/models/test-model", post(stub_inference))
        .with_state(StubEndpoint {
            status,
            body,
            captured: captured.clone(),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/models/test-model"), captured)
}

/// Nothing listens on port 1, so connections are refused.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1/models/test-model";
