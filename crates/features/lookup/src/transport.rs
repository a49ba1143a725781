use crate::error::{LookupError, LookupErrorExt};
use locus_domain::config::HttpConfig;
use reqwest::Url;
use serde_json::Value;
use std::borrow::Cow;
use std::future::Future;
use std::time::Duration;

/// A single-attempt JSON request channel to a geocoding service.
///
/// Implementations return the decoded body of a successful response and
/// [`LookupError::Status`] for any other status. Retries are not attempted.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: Url) -> impl Future<Output = Result<Value, LookupError>> + Send;

    fn post_json(
        &self,
        url: Url,
        body: Value,
    ) -> impl Future<Output = Result<Value, LookupError>> + Send;
}

/// [`Transport`] over a shared `reqwest` client (rustls, pooled connections).
///
/// Request URLs are stripped from errors since query strings may carry API keys.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a client with the configured timeout and user agent.
    ///
    /// # Errors
    /// [`LookupError::Http`] if the TLS backend cannot be initialised.
    pub fn new(config: &HttpConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Building HTTP client")?;
        Ok(Self { client })
    }

    async fn decode(response: reqwest::Response) -> Result<Value, LookupError> {
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { status: status.as_u16(), context: None });
        }
        let body =
            response.bytes().await.map_err(reqwest::Error::without_url).context("Reading response body")?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, url: Url) -> Result<Value, LookupError> {
        let response = self.client.get(url).send().await.map_err(reqwest::Error::without_url)?;
        Self::decode(response).await
    }

    async fn post_json(&self, url: Url, body: Value) -> Result<Value, LookupError> {
        let response =
            self.client.post(url).json(&body).send().await.map_err(reqwest::Error::without_url)?;
        Self::decode(response).await
    }
}

/// Appends path segments to a service base URL, percent-encoding each one.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> Result<Url, LookupError> {
    let invalid = |message: Cow<'static, str>| LookupError::InvalidUrl {
        message,
        context: Some(base.to_owned().into()),
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string().into()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("base URL cannot carry a path".into()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_encoded_segments() {
        let url = endpoint("https://api.postcodes.io", &["postcodes", "SW1A 1AA"]).unwrap();
        assert_eq!(url.as_str(), "https://api.postcodes.io/postcodes/SW1A%201AA");

        let url = endpoint("https://api.what3words.com/v3/", &["convert-to-coordinates"]).unwrap();
        assert_eq!(url.as_str(), "https://api.what3words.com/v3/convert-to-coordinates");
    }

    #[test]
    fn endpoint_rejects_unusable_bases() {
        assert!(matches!(endpoint("not a url", &["x"]), Err(LookupError::InvalidUrl { .. })));
        assert!(matches!(endpoint("mailto:me@example.com", &["x"]), Err(LookupError::InvalidUrl { .. })));
    }

    #[test]
    fn builds_from_default_config() {
        assert!(HttpTransport::new(&HttpConfig::default()).is_ok());
    }
}
