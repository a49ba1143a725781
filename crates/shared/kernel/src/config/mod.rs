use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Environment variable prefix for overrides, e.g. `LOCUS__POSTCODE__BASE_URL`.
pub const ENV_PREFIX: &str = "LOCUS";

/// Custom error type for config loading.
#[locus_derive::locus_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration by layering an optional file under environment overrides.
///
/// 1. **File**: when `path` is given the file must exist; its format is inferred from the
///    extension (`.toml`, `.json`, `.yaml`, ...). Without a path only defaults apply.
/// 2. **Environment**: variables prefixed with `LOCUS__` override file values. Nested
///    fields use double underscores (`LOCUS__THREE_WORDS__API_KEY` maps to
///    `three_words.api_key`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
/// values do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path: Option<&Path> = path.as_ref().map(|p| p.as_ref());
    load_with_env(path, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env<T>(path: Option<&Path>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let env = env.separator("__").convert_case(config::Case::Snake).try_parsing(true);

    let config = builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use locus_domain::config::LocusConfig;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_apply_without_file_or_env() {
        let cfg: LocusConfig = load_with_env(None, env(&[])).unwrap();
        assert_eq!(cfg.postcode.base_url, "https://api.postcodes.io");
        assert!(cfg.three_words.api_key.is_none());
    }

    #[test]
    fn file_values_are_loaded() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[postcode]\nbase_url = \"http://127.0.0.1:9000\"\nbatch_size = 50").unwrap();

        let cfg: LocusConfig = load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(cfg.postcode.base_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.postcode.batch_size, 50);
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[http]\ntimeout_secs = 3").unwrap();

        let cfg: LocusConfig = load_with_env(
            Some(file.path()),
            env(&[("LOCUS__HTTP__TIMEOUT_SECS", "30"), ("LOCUS__THREE_WORDS__API_KEY", "K3Y")]),
        )
        .unwrap();
        assert_eq!(cfg.http.timeout_secs, 30);
        assert_eq!(cfg.three_words.api_key.as_deref(), Some("K3Y"));
    }

    #[test]
    fn numeric_environment_values_override_defaults() {
        let cfg: LocusConfig = load_with_env(
            None,
            env(&[("LOCUS__POSTCODE__BATCH_SIZE", "25"), ("LOCUS__HTTP__TIMEOUT_SECS", "45")]),
        )
        .unwrap();
        assert_eq!(cfg.postcode.batch_size, 25);
        assert_eq!(cfg.http.timeout_secs, 45);
    }

    #[test]
    fn numeric_looking_api_key_stays_text() {
        let cfg: LocusConfig =
            load_with_env(None, env(&[("LOCUS__THREE_WORDS__API_KEY", "12345678")])).unwrap();
        assert_eq!(cfg.three_words.api_key.as_deref(), Some("12345678"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result: Result<LocusConfig, _> =
            load_with_env(Some(Path::new("/definitely/not/here.toml")), env(&[]));
        assert!(matches!(result, Err(ConfigError::Config { context: Some(_), .. })));
    }
}
