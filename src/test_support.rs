//! In-process HTTP stub for exercising the reqwest clients.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: &'static str,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<String>>,
}

pub struct StubServer {
    pub url: String,
    stub: Stub,
}

impl StubServer {
    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.stub.hits.load(Ordering::SeqCst)
    }

    /// Request line, headers and body of the most recent request.
    pub fn last_request(&self) -> String {
        self.stub
            .last_request
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

async fn record(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    stub.hits.fetch_add(1, Ordering::SeqCst);

    let mut request = format!("{} {} HTTP/1.1\r\n", method, uri);
    for (name, value) in &headers {
        request.push_str(&format!(
            "{}: {}\r\n",
            name,
            value.to_str().unwrap_or_default()
        ));
    }
    request.push_str("\r\n");
    request.push_str(&body);
    if let Ok(mut slot) = stub.last_request.lock() {
        *slot = request;
    }

    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body,
    )
}

/// Serve every request with the same status and JSON body.
pub async fn serve(status: u16, body: &'static str) -> StubServer {
    let stub = Stub {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        hits: Arc::new(AtomicUsize::new(0)),
        last_request: Arc::new(Mutex::new(String::new())),
    };
    let app = Router::new().fallback(record).with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubServer {
        url: format!("http://{}", addr),
        stub,
    }
}
