// In-process stand-in for a deployment's `/auth/bootstrap-admin` endpoint.
#![allow(dead_code)]

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::any,
};
use bootstrap_admin::{Client, Invoker, Notification};
use parking_lot::Mutex;
use std::{io, sync::Arc};
use tracing::subscriber::DefaultGuard;
use url::Url;

pub const PATH: &str = "/auth/bootstrap-admin";

/// A request as the endpoint saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct Endpoint {
    pub url: Url,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Endpoint {
    /// Serves `body` with `status` on an ephemeral local port for every request to [`PATH`].
    pub async fn serve(status: StatusCode, body: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new().route(PATH, any(respond)).with_state(Canned {
            status,
            body,
            requests: Arc::clone(&requests),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral test port");
        let addr = listener.local_addr().expect("get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server failed");
        });

        Self {
            url: Url::parse(&format!("http://{addr}{PATH}")).expect("valid endpoint url"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }
}

async fn respond(
    State(canned): State<Canned>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    canned.requests.lock().push(Recorded {
        method,
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body,
    });

    (
        canned.status,
        [(CONTENT_TYPE, "application/json")],
        canned.body,
    )
}

/// A port nothing listens on.
pub async fn refused() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);

    Url::parse(&format!("http://{addr}{PATH}")).expect("valid endpoint url")
}

pub fn client(url: &Url) -> Client {
    Client::builder()
        .endpoint(url.clone())
        .https_only(false)
        .no_proxy()
        .build()
        .expect("client should build")
}

/// Collects every notification an invoker shows.
pub type Shown = Arc<Mutex<Vec<Notification>>>;

pub fn invoker(url: &Url) -> (Invoker<impl Fn(&Notification)>, Shown) {
    let shown: Shown = Arc::default();

    let notifier = {
        let shown = Arc::clone(&shown);
        move |notification: &Notification| shown.lock().push(notification.clone())
    };

    (Invoker::new(client(url), notifier), shown)
}

/// Everything a `fmt` subscriber wrote, without ANSI colors.
#[derive(Debug, Clone, Default)]
pub struct Logs(Arc<Mutex<Vec<u8>>>);

impl Logs {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock())
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Lines of records at `level`, e.g. `"ERROR"`.
    pub fn at(&self, level: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.split_whitespace().any(|word| word == level))
            .collect()
    }
}

impl io::Write for Logs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's `INFO` and above records into [`Logs`] until the guard drops.
pub fn capture_logs() -> (Logs, DefaultGuard) {
    let logs = Logs::default();

    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();

    (logs, tracing::subscriber::set_default(subscriber))
}
