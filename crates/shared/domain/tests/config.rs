use locus_domain::config::{HttpConfig, LocusConfig, PostcodeServiceConfig, ThreeWordServiceConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let postcode = PostcodeServiceConfig::default();
    assert_eq!(postcode.base_url, "https://api.postcodes.io");
    assert_eq!(postcode.batch_size, 100);

    let words = ThreeWordServiceConfig::default();
    assert!(words.api_key.is_none());
    assert!(words.base_url.ends_with("/v3"));

    let http = HttpConfig::default();
    assert_eq!(http.timeout_secs, 10);
    assert!(http.user_agent.starts_with("locus/"));
}

#[test]
fn locus_config_deserializes_partial_documents() {
    let raw = json!({
        "postcode": { "base_url": "http://localhost:8000" },
        "three_words": { "api_key": "ABCD1234" }
    });

    let cfg: LocusConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.postcode.base_url, "http://localhost:8000");
    assert_eq!(cfg.postcode.batch_size, 100);
    assert_eq!(cfg.three_words.api_key.as_deref(), Some("ABCD1234"));
    assert_eq!(cfg.http.timeout_secs, 10);
}

#[test]
fn batch_size_is_clamped_to_service_limit() {
    let mut cfg = LocusConfig::default();
    cfg.postcode.batch_size = 500;
    assert_eq!(cfg.postcode.effective_batch_size(), 100);

    cfg.postcode.batch_size = 0;
    assert_eq!(cfg.postcode.effective_batch_size(), 1);
}
