//! HTTP transport for the SparkPost REST API

use super::{RequestDescriptor, Transport, Verb};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = (0..=MAX_LOG_BODY_LENGTH)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// A non-2xx answer from the API.
///
/// Carried inside the transport's `anyhow::Error`; downcast to inspect it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("API request failed: {status}")]
pub struct ApiFailure {
    pub status: u16,
    /// The `errors` array of the response body, empty when absent
    pub errors: Vec<Value>,
}

impl ApiFailure {
    fn from_body(status: u16, body: &str) -> Self {
        let errors = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("errors").and_then(|e| e.as_array()).cloned())
            .unwrap_or_default();
        Self { status, errors }
    }
}

/// reqwest-backed transport
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
    api_key: String,
}

impl HttpTransport {
    /// Create a transport for `<origin>/api/<api_version>/`
    pub fn new(origin: &str, api_version: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sparkpost-rust/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let base = Url::parse(origin)
            .with_context(|| format!("Invalid API origin: {}", origin))?
            .join(&format!("api/{}/", api_version))
            .context("Invalid API version")?;

        Ok(Self {
            client,
            base,
            api_key: api_key.to_string(),
        })
    }

    /// Root URL every request URI is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve a request URI against the API root
    pub fn url_for(&self, uri: &str) -> Result<Url> {
        self.base
            .join(uri)
            .with_context(|| format!("Invalid request URI: {}", uri))
    }

    async fn execute(&self, request: RequestDescriptor) -> Result<Value> {
        let url = self.url_for(request.uri())?;
        tracing::debug!("{} {}", request.verb(), url);

        let mut builder = match request.verb() {
            Verb::Get => self.client.get(url),
            Verb::Post => self.client.post(url),
            Verb::Put => self.client.put(url),
            Verb::Delete => self.client.delete(url),
        }
        .header(AUTHORIZATION, &self.api_key);

        if let Some(body) = request.json() {
            builder = builder.json(body);
        }

        let response = builder.send().await.context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(ApiFailure::from_body(status.as_u16(), &body).into());
        }

        // Handle empty response
        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).context("Failed to parse response JSON")
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: RequestDescriptor) -> Result<Value> {
        self.execute(request).await
    }

    async fn post(&self, request: RequestDescriptor) -> Result<Value> {
        self.execute(request).await
    }

    async fn put(&self, request: RequestDescriptor) -> Result<Value> {
        self.execute(request).await
    }

    async fn delete(&self, request: RequestDescriptor) -> Result<Value> {
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin_resolves_api_root() {
        let transport = HttpTransport::new("https://api.sparkpost.com:443", "v1", "key").unwrap();
        assert_eq!(
            transport.url_for("subaccounts/test").unwrap().as_str(),
            "https://api.sparkpost.com/api/v1/subaccounts/test"
        );
    }

    #[test]
    fn test_origin_with_path_keeps_prefix() {
        let transport = HttpTransport::new("http://localhost:8080/proxy/", "v2", "key").unwrap();
        assert_eq!(
            transport.base_url().as_str(),
            "http://localhost:8080/proxy/api/v2/"
        );
    }

    #[test]
    fn test_encoded_id_stays_under_resource() {
        let transport = HttpTransport::new("https://api.sparkpost.com:443", "v1", "key").unwrap();
        let url = transport
            .url_for(&crate::dispatch::resource_uri("subaccounts", Some("../webhooks?x=1#y")))
            .unwrap();
        assert!(url.path().starts_with("/api/v1/subaccounts/"));
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        assert!(HttpTransport::new("not a url", "v1", "key").is_err());
    }

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(sanitized.ends_with("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("bad\r\nrequest"), "badrequest");
    }

    #[test]
    fn test_api_failure_extracts_errors() {
        let failure = ApiFailure::from_body(
            400,
            r#"{"errors":[{"message":"invalid data format/type","code":"1300"}]}"#,
        );
        assert_eq!(failure.status, 400);
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.to_string(), "API request failed: 400");
    }

    #[test]
    fn test_api_failure_tolerates_non_json_body() {
        let failure = ApiFailure::from_body(502, "<html>Bad Gateway</html>");
        assert!(failure.errors.is_empty());
    }
}
