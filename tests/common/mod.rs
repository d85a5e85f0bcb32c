#![allow(dead_code)]

use std::time::Duration;

use opj_api_client::{HttpClient, Session};
use wiremock::MockServer;

pub const TOKEN_KEY: &str = "auth_token";

/// Client rooted at `{server}/api` with an in-memory session.
pub fn client(server: &MockServer) -> HttpClient {
    HttpClient::new(
        &format!("{}/api", server.uri()),
        Duration::from_secs(5),
        Session::in_memory(TOKEN_KEY),
    )
    .expect("client")
}
