use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bblearn_domain::ClientConfig;
use bblearn_infra::{BlackboardClient, HttpClient};
use wiremock::{MockServer, Request};

pub const APP_KEY: &str = "app-key";
pub const APP_SECRET: &str = "app-secret";
pub const TOKEN: &str = "tok-123";

/// Client pointed at the mock server with the default timeout.
pub fn client_for(server: &MockServer) -> BlackboardClient {
    client_with_base(&server.uri())
}

/// Client for an arbitrary base URL, e.g. one with a trailing slash.
pub fn client_with_base(base_url: &str) -> BlackboardClient {
    BlackboardClient::new(ClientConfig::new(base_url, APP_KEY, APP_SECRET))
        .expect("client should build")
}

/// Client whose requests give up after `timeout`.
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> BlackboardClient {
    let http = HttpClient::builder().timeout(timeout).build().expect("http client should build");
    BlackboardClient::with_http_client(ClientConfig::new(server.uri(), APP_KEY, APP_SECRET), http)
}

/// Expected `Authorization` value for the application credentials.
pub fn basic_auth_header() -> String {
    format!("Basic {}", STANDARD.encode(format!("{APP_KEY}:{APP_SECRET}")))
}

pub fn bearer_header() -> String {
    format!("Bearer {TOKEN}")
}

/// All `Authorization` header values sent with `request`.
pub fn authorization_values(request: &Request) -> Vec<String> {
    request
        .headers
        .get_all("authorization")
        .iter()
        .filter_map(|value| value.to_str().ok().map(str::to_string))
        .collect()
}

/// Every request the server saw carried the bearer token and nothing else.
pub async fn assert_bearer_only(server: &MockServer) {
    let requests = server.received_requests().await.expect("request recording is enabled");
    assert!(!requests.is_empty(), "no requests were received");
    for request in &requests {
        assert_eq!(authorization_values(request), vec![bearer_header()], "{}", request.url.path());
    }
}
