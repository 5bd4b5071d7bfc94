//! Placeholder HTTP responder.
//!
//! Stands in on the backend's port while the real application boots, so load
//! balancers and developers get an answer instead of a refused connection.
//!
//! - `GET /api/health` returns a fixed JSON status including this host's address
//! - `GET /swagger*` returns an informational HTML page
//! - anything else returns 404

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode, Uri},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::sync::Arc;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

const SWAGGER_PREFIX: &str = "/swagger";

#[derive(Debug, Clone)]
pub struct AppState {
    pub server_ip: IpAddr,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: &'static str,
    pub server_ip: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .fallback(fallback)
        .layer(middleware::from_fn(log_request))
        .with_state(Arc::new(state))
}

/// One `info` line per request, after the response status is known
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    tracing::info!(%method, %path, status = response.status().as_u16(), "request");
    response
}

/// `GET /api/health`
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let body = HealthResponse {
        status: "UP",
        message: "Test server running - Spring Boot is starting",
        timestamp: "temp-test-server",
        server_ip: state.server_ip.to_string(),
    };
    with_cors(Json(body).into_response())
}

async fn fallback(State(state): State<Arc<AppState>>, method: Method, uri: Uri) -> Response {
    if method == Method::GET && uri.path().starts_with(SWAGGER_PREFIX) {
        return with_cors(Html(starting_page(state.server_ip)).into_response());
    }
    (StatusCode::NOT_FOUND, "404 - Not Found").into_response()
}

fn with_cors(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

fn starting_page(server_ip: IpAddr) -> String {
    format!(
        r#"
<html>
<head><title>Spring Boot Starting...</title></head>
<body>
    <h1>Spring Boot Application is Starting</h1>
    <p>The Spring Boot application is currently downloading dependencies and starting up.</p>
    <p>Server IP: {server_ip}</p>
    <p>This is a temporary test server. The real application will be available shortly.</p>
    <p>Check <a href="/api/health">/api/health</a> endpoint</p>
</body>
</html>
"#
    )
}

/// Address other hosts would use to reach this machine.
///
/// Connecting a UDP socket only selects a route; no packet is sent.
/// Falls back to loopback when no route exists.
pub fn resolve_server_ip() -> IpAddr {
    let local_route = || -> std::io::Result<IpAddr> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect("8.8.8.8:80")?;
        Ok(socket.local_addr()?.ip())
    };
    local_route().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}
