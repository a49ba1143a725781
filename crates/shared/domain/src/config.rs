use crate::constants::POSTCODE_BATCH_LIMIT;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level configuration for the resolution engine and its external services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocusConfigInner {
    pub postcode: PostcodeServiceConfig,
    pub three_words: ThreeWordServiceConfig,
    pub http: HttpConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into clients.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct LocusConfig {
    #[serde(flatten, default)]
    inner: Arc<LocusConfigInner>,
}

impl Deref for LocusConfig {
    type Target = LocusConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for LocusConfig {
    fn deref_mut(&mut self) -> &mut LocusConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Postcode geocoding service (postcodes.io compatible).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PostcodeServiceConfig {
    pub base_url: String,
    /// Postcodes per bulk request. Values outside `1..=100` are clamped.
    pub batch_size: usize,
}

impl PostcodeServiceConfig {
    /// Batch size clamped to what the service accepts.
    #[must_use]
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(1, POSTCODE_BATCH_LIMIT)
    }
}

/// Three-word-address geocoding service (what3words v3 compatible).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThreeWordServiceConfig {
    pub base_url: String,
    /// Default credential used when a caller does not pass one explicitly.
    pub api_key: Option<String>,
}

/// Outbound HTTP knobs shared by all lookups.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

// --- Default ---

impl Default for PostcodeServiceConfig {
    fn default() -> Self {
        Self { base_url: "https://api.postcodes.io".to_owned(), batch_size: POSTCODE_BATCH_LIMIT }
    }
}

impl Default for ThreeWordServiceConfig {
    fn default() -> Self {
        Self { base_url: "https://api.what3words.com/v3".to_owned(), api_key: None }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 10, user_agent: concat!("locus/", env!("CARGO_PKG_VERSION")).to_owned() }
    }
}
