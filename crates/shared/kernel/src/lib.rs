//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it only owns layered configuration loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! use locus_kernel::config::load_config;
//! use locus_kernel::domain::config::LocusConfig;
//!
//! let cfg: LocusConfig = load_config(Some("locus.toml")).unwrap_or_default();
//! println!("postcodes via {}", cfg.postcode.base_url);
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use locus_domain as domain;
