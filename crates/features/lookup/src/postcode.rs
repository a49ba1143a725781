use crate::error::{LookupError, LookupErrorExt};
use crate::transport::{HttpTransport, Transport, endpoint};
use fxhash::FxHashMap;
use locus_domain::GeoPoint;
use locus_domain::config::PostcodeServiceConfig;
use locus_parsing::normalize_postcode;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument, warn};

/// Bulk lookup outcome keyed by normalised postcode (uppercase, no whitespace).
///
/// A postcode missing from the map simply was not resolved.
pub type BulkLookupResult = FxHashMap<String, GeoPoint>;

#[derive(Deserialize)]
struct Envelope<T> {
    status: u16,
    result: Option<T>,
}

#[derive(Deserialize)]
struct PostcodeRecord {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PostcodeRecord {
    fn point(&self) -> Option<GeoPoint> {
        GeoPoint::new(self.latitude?, self.longitude?)
    }
}

#[derive(Deserialize)]
struct BulkItem {
    query: String,
    result: Option<PostcodeRecord>,
}

/// Client for a postcodes.io compatible service.
#[derive(Debug, Clone)]
pub struct PostcodeClient<T = HttpTransport> {
    transport: T,
    config: PostcodeServiceConfig,
}

impl<T: Transport> PostcodeClient<T> {
    #[must_use]
    pub const fn new(transport: T, config: PostcodeServiceConfig) -> Self {
        Self { transport, config }
    }

    /// Looks up one postcode.
    ///
    /// # Errors
    /// Transport and decoding failures, or [`LookupError::NotFound`] when the service has no
    /// coordinate for the postcode.
    pub async fn try_lookup(&self, postcode: &str) -> Result<GeoPoint, LookupError> {
        let query = postcode.trim().to_uppercase();
        let url = endpoint(&self.config.base_url, &["postcodes", &query])?;

        let body = self.transport.get_json(url).await.context(query.clone())?;
        let envelope: Envelope<PostcodeRecord> = serde_json::from_value(body).context(query.clone())?;

        envelope
            .result
            .filter(|_| envelope.status == 200)
            .and_then(|record| record.point())
            .ok_or(LookupError::NotFound { message: query.into(), context: None })
    }

    /// Looks up one postcode, logging and discarding the reason on failure.
    pub async fn lookup(&self, postcode: &str) -> Option<GeoPoint> {
        match self.try_lookup(postcode).await {
            Ok(point) => Some(point),
            Err(e) if e.is_miss() => {
                debug!(postcode, error = %e, "Postcode not found");
                None
            },
            Err(e) => {
                warn!(postcode, error = %e, "Postcode lookup failed");
                None
            },
        }
    }

    /// Looks up many postcodes in batches of at most [`PostcodeServiceConfig::effective_batch_size`].
    ///
    /// Batches run one after another. A failing batch is logged and contributes nothing;
    /// the others are kept.
    #[instrument(skip_all, fields(requested = postcodes.len()))]
    pub async fn lookup_bulk<S: AsRef<str> + Sync>(&self, postcodes: &[S]) -> BulkLookupResult {
        let mut resolved = BulkLookupResult::default();
        let batch_size = self.config.effective_batch_size();

        for (batch, chunk) in postcodes.chunks(batch_size).enumerate() {
            let queries: Vec<&str> = chunk.iter().map(|p| p.as_ref().trim()).collect();
            match self.fetch_batch(&queries).await {
                Ok(items) => {
                    for item in items {
                        if let Some(point) = item.result.as_ref().and_then(PostcodeRecord::point) {
                            resolved.insert(normalize_postcode(&item.query), point);
                        }
                    }
                },
                Err(e) => warn!(batch, size = queries.len(), error = %e, "Postcode batch failed"),
            }
        }

        info!(resolved = resolved.len(), "Bulk postcode lookup finished");
        resolved
    }

    async fn fetch_batch(&self, queries: &[&str]) -> Result<Vec<BulkItem>, LookupError> {
        let url = endpoint(&self.config.base_url, &["postcodes"])?;
        let body = self.transport.post_json(url, json!({ "postcodes": queries })).await?;
        let envelope: Envelope<Vec<BulkItem>> = serde_json::from_value(body)?;

        match envelope.result {
            Some(items) if envelope.status == 200 => Ok(items),
            _ => Err(LookupError::Status { status: envelope.status, context: Some("bulk payload".into()) }),
        }
    }
}
