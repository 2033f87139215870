//! In-process countries feed for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Response, StatusCode};
use axum::routing::get;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const TESTLAND_JSON: &str =
    r#"[{"name":"Testland","region":"Testregion","code":"TL","capital":"Test City"}]"#;

/// A canned response for the next feed request.
#[derive(Debug, Clone)]
pub struct FeedResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay: Duration,
}

impl Default for FeedResponse {
    fn default() -> Self {
        Self::json(TESTLAND_JSON)
    }
}

impl FeedResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: br#"{"error":"boom"}"#.to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn empty() -> Self {
        Self {
            status: 200,
            body: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct FeedState {
    responses: Arc<Mutex<VecDeque<FeedResponse>>>,
    hits: Arc<AtomicUsize>,
}

/// Serves `/countries.json` from a queue of canned responses.
///
/// When the queue is empty the Testland feed is returned.
pub struct MockFeed {
    pub addr: SocketAddr,
    state: FeedState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockFeed {
    pub async fn start() -> Self {
        let state = FeedState {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            hits: Arc::new(AtomicUsize::new(0)),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/countries.json", get(serve_feed))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock feed");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub async fn enqueue(&self, response: FeedResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn url(&self) -> String {
        format!("http://{}/countries.json", self.addr)
    }
}

impl Drop for MockFeed {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn serve_feed(State(state): State<FeedState>) -> Response<Body> {
    let response = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_default();
    state.hits.fetch_add(1, Ordering::SeqCst);

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .unwrap()
}
