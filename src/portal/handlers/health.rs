use crate::{GIT_COMMIT_HASH, portal::Frontend};
use axum::{
    body::Body,
    extract::Extension,
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    commit: String,
    name: String,
    version: String,
    /// `ok` when the bundle's `index.html` is present, `missing` otherwise.
    frontend: String,
}

/// `name:version:short_hash`, the hash is empty when the commit is unknown.
fn x_app(health: &Health) -> Option<HeaderValue> {
    let short_hash = health.commit.get(..7).filter(|_| health.commit != "unknown");
    let value = format!(
        "{}:{}:{}",
        health.name,
        health.version,
        short_hash.unwrap_or_default()
    );

    match HeaderValue::from_str(&value) {
        Ok(header) => Some(header),
        Err(err) => {
            warn!("Failed to build X-App header: {}", err);
            None
        }
    }
}

// axum handler for health
pub async fn health(method: Method, frontend: Extension<Arc<Frontend>>) -> impl IntoResponse {
    let bundled = tokio::fs::metadata(frontend.index())
        .await
        .is_ok_and(|metadata| metadata.is_file());

    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        frontend: if bundled { "ok" } else { "missing" }.to_string(),
    };

    let status = if bundled {
        StatusCode::OK
    } else {
        debug!("Frontend bundle missing: {}", frontend.index().display());
        StatusCode::SERVICE_UNAVAILABLE
    };

    let mut headers = HeaderMap::new();
    if let Some(value) = x_app(&health) {
        headers.insert("X-App", value);
    }

    let body = if method == Method::GET {
        Json(&health).into_response()
    } else {
        Body::empty().into_response()
    };

    (status, headers, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::to_bytes, http::Request, routing::get};
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app(dist: &TempDir) -> Router {
        Router::new()
            .route("/health", get(health).options(health))
            .layer(Extension(Arc::new(Frontend::new(dist.path()))))
    }

    fn bundled() -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("index.html"), "<!doctype html>").expect("write index");
        dir
    }

    async fn get_health(dist: &TempDir) -> axum::response::Response {
        app(dist)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response")
    }

    #[tokio::test]
    async fn get_returns_build_metadata() {
        let dist = bundled();
        let response = get_health(&dist).await;

        assert_eq!(response.status(), StatusCode::OK);
        let x_app = response
            .headers()
            .get("X-App")
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
            .unwrap_or_default();
        assert!(x_app.starts_with(concat!(
            env!("CARGO_PKG_NAME"),
            ":",
            env!("CARGO_PKG_VERSION")
        )));

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let health: Health = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(health.name, env!("CARGO_PKG_NAME"));
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(health.commit, GIT_COMMIT_HASH);
        assert_eq!(health.frontend, "ok");
    }

    #[tokio::test]
    async fn missing_bundle_is_unavailable() {
        let dist = tempfile::tempdir().expect("tempdir");
        let response = get_health(&dist).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let health: Health = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(health.frontend, "missing");
    }

    #[tokio::test]
    async fn options_returns_empty_body() {
        let dist = bundled();
        let response = app(&dist)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("X-App"));
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert!(bytes.is_empty());
    }

    #[test]
    fn x_app_shortens_known_hashes_and_omits_unknown() {
        let health = Health {
            commit: "unknown".to_string(),
            name: "portal".to_string(),
            version: "0.1.0".to_string(),
            frontend: "ok".to_string(),
        };
        assert_eq!(x_app(&health), Some(HeaderValue::from_static("portal:0.1.0:")));

        let health = Health {
            commit: "abcdef1".to_string(),
            ..health
        };
        assert_eq!(
            x_app(&health),
            Some(HeaderValue::from_static("portal:0.1.0:abcdef1"))
        );

        let health = Health {
            commit: "0123456789abcdef".to_string(),
            ..health
        };
        assert_eq!(
            x_app(&health),
            Some(HeaderValue::from_static("portal:0.1.0:0123456"))
        );
    }
}
