//! HTTP client for the OPJ dashboard REST API.
//!
//! Single chokepoint for network calls:
//! - URL building (base + path + query)
//! - Bearer token injection from the [`Session`]
//! - JSON request bodies, JSON or text response bodies
//! - Non-2xx responses normalised into [`ApiError`]

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::{ApiError, Error, Result};
use crate::session::Session;

/// Parsed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Non-blank `message` field of a JSON object body.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Json(Value::Object(map)) => map
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }

    /// True for a bodyless reply (`204`, or `200` with nothing in it).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Json(value) => value.is_null(),
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Like [`decode`](Self::decode), but an empty body is `None`.
    pub fn decode_optional<R: DeserializeOwned>(self) -> Result<Option<R>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.decode().map(Some)
    }

    /// Decode into a typed value. Text bodies decode as JSON strings; an empty
    /// text body decodes as `null`, so `()` and `Option<_>` accept it.
    pub fn decode<R: DeserializeOwned>(self) -> Result<R> {
        let value = match self {
            Self::Json(value) => value,
            Self::Text(text) if text.is_empty() => Value::Null,
            Self::Text(text) => Value::String(text),
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Per-request options: body, query and extra headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    body: Option<Value>,
    query: Vec<(String, String)>,
    headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON body; also sets `Content-Type: application/json` on send.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Query parameters from any object-shaped value. Null and empty-string
    /// fields are dropped; the rest are string-coerced.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self> {
        if let Value::Object(map) = serde_json::to_value(query)? {
            for (key, value) in map {
                if let Some(value) = query_value(value) {
                    self.query.push((key, value));
                }
            }
        }
        Ok(self)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Percent-encode a single path segment, so ids carrying `/`, `?` or `#`
/// stay inside their segment.
pub fn path_segment(raw: &str) -> String {
    // form encoding writes spaces as `+`; a literal `+` is already `%2B`
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Client for the dashboard API.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl HttpClient {
    /// Create a new API client.
    pub fn new(base_url: &str, timeout: Duration, session: Session) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        tracing::info!(base_url = base_url, "API client initialized");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Persist (or clear, with `None`) the bearer token used by later requests.
    pub fn set_token(&self, token: Option<&str>) -> Result<()> {
        self.session.set_token(token)
    }

    pub fn token(&self) -> Result<Option<String>> {
        self.session.token()
    }

    /// Resolve `path` against the base URL and append the query.
    pub fn build_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let endpoint = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Perform a request and return the parsed body.
    #[instrument(skip(self, options), fields(method = %method))]
    pub async fn request(&self, method: Method, path: &str, options: RequestOptions) -> Result<Payload> {
        let RequestOptions {
            body,
            query,
            mut headers,
        } = options;

        let url = self.build_url(path, &query)?;

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if !headers.contains_key(AUTHORIZATION) {
            if let Some(token) = self.session.token()? {
                headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
            }
        }

        debug!(url = %url, "API request");

        let mut req = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            req = req.body(serde_json::to_vec(&body)?);
        }

        let response = req.send().await?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        let bytes = response.bytes().await?;
        let text = || Payload::Text(String::from_utf8_lossy(&bytes).into_owned());
        let parsed = if !is_json {
            Ok(text())
        } else if bytes.is_empty() {
            Ok(Payload::Json(Value::Null))
        } else {
            serde_json::from_slice(&bytes).map(Payload::Json)
        };

        if !status.is_success() {
            // A broken error body must not hide the status
            let payload = parsed.unwrap_or_else(|_| text());
            return Err(Error::Api(ApiError::from_response(status, payload)));
        }

        Ok(parsed?)
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<R> {
        self.request(Method::GET, path, options).await?.decode()
    }

    pub async fn post<B, R>(&self, path: &str, body: &B, options: RequestOptions) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, options.body(body)?)
            .await?
            .decode()
    }

    /// POST without a request body.
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<R> {
        self.request(Method::POST, path, options).await?.decode()
    }

    pub async fn put<B, R>(&self, path: &str, body: &B, options: RequestOptions) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::PUT, path, options.body(body)?)
            .await?
            .decode()
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B, options: RequestOptions) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::PATCH, path, options.body(body)?)
            .await?
            .decode()
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<R> {
        self.request(Method::DELETE, path, options).await?.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ListParams, SortOrder};
    use serde_json::json;

    fn client(base: &str) -> HttpClient {
        HttpClient::new(base, Duration::from_secs(5), Session::in_memory("auth_token")).unwrap()
    }

    #[test]
    fn normalizes_leading_slash() {
        let client = client("http://localhost:3000/api");

        assert_eq!(
            client.build_url("projetos", &[]).unwrap().as_str(),
            "http://localhost:3000/api/projetos"
        );
        assert_eq!(
            client.build_url("/projetos/7", &[]).unwrap().as_str(),
            "http://localhost:3000/api/projetos/7"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let client = client("http://localhost:3000/api/");
        assert_eq!(
            client.build_url("/usuarios", &[]).unwrap().as_str(),
            "http://localhost:3000/api/usuarios"
        );
    }

    #[test]
    fn query_drops_null_and_empty_values() {
        let options = RequestOptions::new()
            .query(&json!({ "page": 2, "search": "", "sortBy": null, "ativo": true, "nome": "Ana" }))
            .unwrap();

        let mut query = options.query.clone();
        query.sort();
        assert_eq!(
            query,
            vec![
                ("ativo".to_string(), "true".to_string()),
                ("nome".to_string(), "Ana".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn list_params_become_query_pairs() {
        let options = RequestOptions::new()
            .query(&ListParams::new().limit(10).sort("protocolo", SortOrder::Asc))
            .unwrap();
        let url = client("http://localhost:3000/api")
            .build_url("/projetos", &options.query)
            .unwrap();

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("limit".to_string(), "10".to_string())));
        assert!(pairs.contains(&("sortBy".to_string(), "protocolo".to_string())));
        assert!(pairs.contains(&("sortOrder".to_string(), "asc".to_string())));
    }

    #[test]
    fn text_payload_decodes_as_string_and_empty_as_unit() {
        assert_eq!(
            Payload::Text("pong".to_string()).decode::<String>().unwrap(),
            "pong"
        );
        Payload::Text(String::new()).decode::<()>().unwrap();
        assert!(Payload::Json(json!({ "id": 1 })).decode::<Vec<u8>>().is_err());
    }

    #[test]
    fn path_segment_escapes_reserved_characters() {
        assert_eq!(path_segment("42"), "42");
        assert_eq!(path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(path_segment("x y+z"), "x%20y%2Bz");
    }

    #[test]
    fn decode_optional_treats_blank_bodies_as_none() {
        assert_eq!(Payload::Text(String::new()).decode_optional::<Value>().unwrap(), None);
        assert_eq!(Payload::Json(Value::Null).decode_optional::<Value>().unwrap(), None);
        assert_eq!(
            Payload::Json(json!({ "message": "ok" }))
                .decode_optional::<Value>()
                .unwrap(),
            Some(json!({ "message": "ok" }))
        );
    }

    #[test]
    fn message_ignores_text_bodies() {
        assert_eq!(Payload::Json(json!({ "message": "x" })).message(), Some("x"));
        assert_eq!(Payload::Text("{\"message\":\"x\"}".to_string()).message(), None);
    }
}
