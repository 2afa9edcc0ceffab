use axum::{
    http::{header, HeaderValue},
    routing::{any, get},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers::site_handlers;

/// Routes for the storefront: a health probe, then the built SPA with every
/// unknown path answered by `index.html` so client-side routes like `/shop`
/// survive a reload.
pub fn build_router(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/api/health", get(site_handlers::health_check))
        .route("/api/{*path}", any(site_handlers::api_not_found))
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use axum::body::Body;
    use axum::http::{HeaderMap, Request, StatusCode};
    use http_body_util::BodyExt;
    use std::net::{IpAddr, Ipv4Addr};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>solefresh shell</body></html>";

    fn site() -> (TempDir, ServerConfig) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets").join("app.js"), "console.log('fresh');").unwrap();
        let config = ServerConfig {
            environment: Environment::Development,
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            static_dir: dir.path().to_path_buf(),
            sentry_dsn: None,
        };
        (dir, config)
    }

    async fn get_path(config: &ServerConfig, path: &str) -> (StatusCode, HeaderMap, String) {
        let response = build_router(config)
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (_dir, config) = site();
        let (status, _, body) = get_path(&config, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn serves_built_assets() {
        let (_dir, config) = site();
        let (status, _, body) = get_path(&config, "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('fresh');");
    }

    #[tokio::test]
    async fn root_and_client_routes_get_the_spa_shell() {
        let (_dir, config) = site();
        for path in ["/", "/shop", "/no/such/page"] {
            let (status, _, body) = get_path(&config, path).await;
            assert_eq!(status, StatusCode::OK, "{}", path);
            assert_eq!(body, INDEX, "{}", path);
        }
    }

    #[tokio::test]
    async fn unknown_api_paths_are_404() {
        let (_dir, config) = site();
        let (status, _, body) = get_path(&config, "/api/orders").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("not found"));
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let (_dir, config) = site();
        let (_, headers, _) = get_path(&config, "/shop").await;
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(
            headers[header::REFERRER_POLICY],
            "strict-origin-when-cross-origin"
        );
    }
}
