//! # Network Resolvers
//!
//! Geocoding against external services: single and bulk UK postcode lookup
//! ([`PostcodeClient`]) and three-word address conversion ([`ThreeWordClient`]).
//!
//! Both clients talk through the [`Transport`] trait. Production code uses
//! [`HttpTransport`] (`reqwest`); tests plug in an in-memory transport.
//!
//! Each request is a single attempt. The `lookup*` methods never fail: faults are logged
//! with `tracing` and surface as "no result". The `try_*` variants return the
//! [`LookupError`] instead.
//!
//! ```rust,no_run
//! use locus_domain::config::LocusConfig;
//! use locus_lookup::{HttpTransport, PostcodeClient};
//!
//! # async fn example() -> Result<(), locus_lookup::LookupError> {
//! let config = LocusConfig::default();
//! let client = PostcodeClient::new(HttpTransport::new(&config.http)?, config.postcode.clone());
//! let _point = client.lookup("SW1A 1AA").await;
//! # Ok(())
//! # }
//! ```

mod error;
mod postcode;
mod three_words;
mod transport;

pub use error::{LookupError, LookupErrorExt};
pub use postcode::{BulkLookupResult, PostcodeClient};
pub use three_words::ThreeWordClient;
pub use transport::{HttpTransport, Transport};
