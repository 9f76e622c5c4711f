//! SparkPost Client
//!
//! Entry point combining one shared transport with the resource modules.

use crate::config::Config;
use crate::dispatch::{self, Callback, Outcome};
use crate::error::ValidationError;
use crate::resource::{Subaccounts, Webhooks};
use crate::transport::{HttpTransport, Transport};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Main SparkPost client
///
/// Cheap to clone; every clone and every resource module shares the same
/// transport and nothing else.
#[derive(Clone)]
pub struct SparkPost {
    transport: Arc<dyn Transport>,
}

impl SparkPost {
    /// Create a client over any transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a client over HTTP from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.effective_api_key().with_context(|| {
            format!(
                "No API key configured. Pass --api-key or set {}",
                crate::config::API_KEY_ENV
            )
        })?;

        let transport = HttpTransport::new(
            &config.effective_origin(),
            &config.effective_api_version(),
            &api_key,
        )?;

        Ok(Self::new(Arc::new(transport)))
    }

    pub fn subaccounts(&self) -> Subaccounts {
        Subaccounts::new(Arc::clone(&self.transport))
    }

    pub fn webhooks(&self) -> Webhooks {
        Webhooks::new(Arc::clone(&self.transport))
    }

    /// Settle a call as failed with `error`; see [`dispatch::reject`]
    pub fn reject<T>(
        &self,
        error: impl Into<ValidationError>,
        callback: Option<Callback<T>>,
    ) -> Outcome<T> {
        dispatch::reject(error, callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockTransport, Verb};
    use serde_json::Value;

    #[test]
    fn test_from_config_rejects_bad_origin() {
        let config = Config {
            api_key: Some("key".to_string()),
            origin: Some("not a url".to_string()),
            api_version: None,
        };
        assert!(SparkPost::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_with_key() {
        let config = Config {
            api_key: Some("key".to_string()),
            ..Config::default()
        };
        assert!(SparkPost::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_resources_share_one_transport() {
        let transport = MockTransport::new();
        let client = SparkPost::new(Arc::new(transport.clone()));

        client.subaccounts().list(None).await.unwrap();
        client.webhooks().list(None).await.unwrap();

        let uris: Vec<String> = transport
            .calls_to(Verb::Get)
            .iter()
            .map(|r| r.uri().to_string())
            .collect();
        assert_eq!(uris, vec!["subaccounts", "webhooks"]);
    }

    #[tokio::test]
    async fn test_reject_delegates_to_shared_primitive() {
        let client = SparkPost::new(Arc::new(MockTransport::new()));

        let err = client
            .reject::<Value>("recipient list is required", None)
            .await
            .unwrap_err();

        assert_eq!(err.message(), "recipient list is required");
    }
}
