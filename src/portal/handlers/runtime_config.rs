//! Serves the frontend runtime configuration as a script so static deployments
//! can change endpoints and keys without rebuilding the wasm bundle.

use crate::portal::RuntimeConfig;
use axum::{
    extract::Extension,
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::error;

/// Global the frontend reads its overrides from.
pub const CONFIG_GLOBAL: &str = "PORTAL_CONFIG";

/// Render `window.PORTAL_CONFIG = {...};`.
#[must_use]
pub fn render(config: &RuntimeConfig) -> String {
    let json = serde_json::to_string(config).unwrap_or_else(|err| {
        error!("Failed to serialize runtime config: {}", err);
        "{}".to_string()
    });

    format!("window.{CONFIG_GLOBAL} = {json};\n")
}

// axum handler for /config.js
pub async fn runtime_config(config: Extension<Arc<RuntimeConfig>>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (CACHE_CONTROL, "no-store"),
        ],
        render(&config.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    fn config() -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: "https://api.saveyourfile.online".to_string(),
            login_url: "https://app.saveyourfile.online/login".to_string(),
            recaptcha_site_key: "site-key".to_string(),
            locale: "vi".to_string(),
        }
    }

    #[test]
    fn render_assigns_window_global() {
        let script = render(&config());
        assert!(script.starts_with("window.PORTAL_CONFIG = {"));
        assert!(script.trim_end().ends_with("};"));
        assert!(script.contains(r#""recaptcha_site_key":"site-key""#));
        assert!(script.contains(r#""locale":"vi""#));
    }

    #[test]
    fn render_escapes_values() {
        let mut config = config();
        config.recaptcha_site_key = r#"key"; alert(1); ""#.to_string();
        let script = render(&config);
        assert!(script.contains(r#"key\"; alert(1); \""#));
    }

    #[tokio::test]
    async fn handler_disables_caching() {
        let app = Router::new()
            .route("/config.js", get(runtime_config))
            .layer(Extension(Arc::new(config())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/config.js")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        assert_eq!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("application/javascript; charset=utf-8")
        );
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(
            String::from_utf8(bytes.to_vec()).expect("utf8"),
            render(&config())
        );
    }
}
