#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum_test::TestServer;
use short_it::application::services::RedirectService;
use short_it::domain::entities::LinkConfig;
use short_it::routes::{app_router, router};
use short_it::state::AppState;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_CONFIG: &str = r#"
domain: s.example.com
projects:
  short-it:
    github:
      to: https://github.com/example/short-it
    rtd:
      to: https://short-it.readthedocs.io
      additional_aliases: [manual]
    chat:
      to: https://discord.gg/example
      aliases: [discord]
  solo:
    github:
      to: https://github.com/example/solo
  empty: {}
simple:
  blog: https://blog.example.com
  health: https://status.example.com
"#;

pub fn parse_config(document: &str) -> LinkConfig {
    let mut config: LinkConfig = serde_yaml::from_str(document).unwrap();
    config.resolve_builtin_aliases();
    config
}

pub fn create_test_state(document: &str) -> AppState {
    let service = RedirectService::from_config(&parse_config(document));
    AppState::new(Arc::new(service))
}

pub fn create_test_server(document: &str) -> TestServer {
    TestServer::new(router(create_test_state(document))).unwrap()
}

/// Sends a GET request through the full production stack, path
/// normalization included.
pub async fn get_through_app(document: &str, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app_router(create_test_state(document))
        .oneshot(request)
        .await
        .unwrap()
}
