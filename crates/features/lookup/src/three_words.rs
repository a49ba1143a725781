use crate::error::{LookupError, LookupErrorExt};
use crate::transport::{HttpTransport, Transport, endpoint};
use locus_domain::GeoPoint;
use locus_domain::config::ThreeWordServiceConfig;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct ConvertResponse {
    coordinates: Option<Coordinates>,
}

#[derive(Deserialize)]
struct Coordinates {
    lat: f64,
    lng: f64,
}

/// Client for a what3words v3 compatible `convert-to-coordinates` endpoint.
#[derive(Debug, Clone)]
pub struct ThreeWordClient<T = HttpTransport> {
    transport: T,
    config: ThreeWordServiceConfig,
}

impl<T: Transport> ThreeWordClient<T> {
    #[must_use]
    pub const fn new(transport: T, config: ThreeWordServiceConfig) -> Self {
        Self { transport, config }
    }

    /// Converts `///word.word.word` (slashes optional) to a point.
    ///
    /// `credential` overrides the configured API key. With neither, no request is made.
    ///
    /// # Errors
    /// [`LookupError::MissingCredential`] without a key, transport and decoding failures,
    /// and [`LookupError::NotFound`] when the payload carries no coordinates.
    pub async fn try_lookup(&self, words: &str, credential: Option<&str>) -> Result<GeoPoint, LookupError> {
        let key = credential
            .or(self.config.api_key.as_deref())
            .filter(|k| !k.trim().is_empty())
            .ok_or(LookupError::MissingCredential { context: None })?;

        let words = words.trim().trim_start_matches('/');
        let mut url = endpoint(&self.config.base_url, &["convert-to-coordinates"])?;
        url.query_pairs_mut().append_pair("words", words).append_pair("key", key);

        let body = self.transport.get_json(url).await.context(words.to_owned())?;
        let response: ConvertResponse = serde_json::from_value(body).context(words.to_owned())?;

        response
            .coordinates
            .and_then(|c| GeoPoint::new(c.lat, c.lng))
            .ok_or_else(|| LookupError::NotFound { message: words.to_owned().into(), context: None })
    }

    /// Like [`Self::try_lookup`], logging and discarding the reason on failure.
    pub async fn lookup(&self, words: &str, credential: Option<&str>) -> Option<GeoPoint> {
        match self.try_lookup(words, credential).await {
            Ok(point) => Some(point),
            Err(e) if e.is_miss() => {
                debug!(words, error = %e, "Three-word address not resolved");
                None
            },
            Err(e) => {
                warn!(words, error = %e, "Three-word lookup failed");
                None
            },
        }
    }
}
