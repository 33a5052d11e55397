//! HTTP host for the frontend bundle.
//!
//! Routes:
//! - `GET|OPTIONS /health`: build metadata.
//! - `GET /config.js`: runtime configuration assigned to `window.PORTAL_CONFIG`.
//! - everything else: files from the dist directory, falling back to
//!   `index.html` so client-side routes such as `/register` resolve.

use anyhow::Result;
use axum::{
    Extension, Router,
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Method, Request, header::CACHE_CONTROL},
    routing::get,
};
use serde::Serialize;
use std::{path::Path, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    services::{ServeDir, ServeFile},
    set_header::{SetRequestHeaderLayer, SetResponseHeaderLayer},
    trace::TraceLayer,
};
use tracing::{Span, info, info_span};
use ulid::Ulid;

pub mod handlers;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Public settings the frontend reads at startup. Serialized as-is into
/// `/config.js`, so it must never carry secrets.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub login_url: String,
    pub recaptcha_site_key: String,
    pub locale: String,
}

/// Location of the built frontend bundle.
#[derive(Clone, Debug)]
pub struct Frontend {
    dist_dir: PathBuf,
}

impl Frontend {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
        }
    }

    #[must_use]
    pub fn index(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Build the router serving `dist_dir`.
#[must_use]
pub fn router(dist_dir: &Path, runtime: RuntimeConfig) -> Router {
    let frontend = Frontend::new(dist_dir);
    let assets = ServeDir::new(dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(frontend.index()));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(Any);

    Router::new()
        .route(
            "/health",
            get(handlers::health).options(handlers::health),
        )
        .route("/config.js", get(handlers::runtime_config))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static(REQUEST_ID_HEADER),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    REQUEST_ID_HEADER,
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-cache"),
                ))
                .layer(Extension(Arc::new(runtime)))
                .layer(Extension(Arc::new(frontend))),
        )
}

/// Start the server
/// # Errors
/// Return error if failed to bind or serve
pub async fn new(port: u16, dist_dir: PathBuf, runtime: RuntimeConfig) -> Result<()> {
    let app = router(&dist_dir, runtime);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}, serving {}", port, dist_dir.display());

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Gracefully shutdown");
    }
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
