//! Storefront configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_data::{FetchPolicy, RetryPolicy, TimeoutConfig};

use crate::error::{Result, StorefrontError};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// REST API location.
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP timeouts and retries.
    #[serde(default)]
    pub http: HttpConfig,

    /// Catalog presentation.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StorefrontError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content).map_err(|source| StorefrontError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find a config file in `start` or any parent directory.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }

    /// Resolve the effective config: explicit path, else a discovered file,
    /// else defaults; then environment overrides (after loading `.env`).
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        let source = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(cwd),
        };

        let mut config = match &source {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        dotenvy::dotenv().ok();
        config.apply_env();
        config.validate()?;
        Ok((config, source))
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(StorefrontError::InvalidConfig(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if self.http.timeout_ms == 0 {
            return Err(StorefrontError::InvalidConfig(
                "http.timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.http.connect_timeout_ms > self.http.timeout_ms {
            return Err(StorefrontError::InvalidConfig(
                "http.connect_timeout_ms must not exceed http.timeout_ms".to_string(),
            ));
        }
        Ok(())
    }

    /// Fetch policy derived from the `[http]` section.
    pub fn fetch_policy(&self) -> FetchPolicy {
        let timeout = if self.http.connect_timeout_ms == 0 {
            TimeoutConfig::from_total(Duration::from_millis(self.http.timeout_ms))
        } else {
            TimeoutConfig::new(
                Duration::from_millis(self.http.connect_timeout_ms),
                Duration::from_millis(self.http.timeout_ms),
            )
        };
        FetchPolicy::new(timeout, RetryPolicy::new(self.http.max_retries))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// REST API location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; endpoint paths start with `/api/...` under it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// HTTP timeouts and retries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Connect timeout in milliseconds. 0 derives it from `timeout_ms`.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Retries after the first attempt, GET requests only.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_connect_timeout_ms() -> u64 {
    1000
}

fn default_max_retries() -> u32 {
    1
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

/// Catalog presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// How many products the featured list shows.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
}

fn default_featured_limit() -> usize {
    8
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
        }
    }
}

/// Generate a commented default `storefront.toml`.
pub fn generate_default_config(base_url: &str) -> String {
    format!(
        r#"# Storefront client configuration

[api]
base_url = "{base_url}"

[http]
timeout_ms = {timeout}
connect_timeout_ms = {connect}
max_retries = {retries}

[catalog]
featured_limit = {featured}
"#,
        base_url = base_url,
        timeout = default_timeout_ms(),
        connect = default_connect_timeout_ms(),
        retries = default_max_retries(),
        featured = default_featured_limit(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "storefront-config-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.http.timeout_ms, 5000);
        assert_eq!(config.catalog.featured_limit, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://shop.example.com"

            [http]
            max_retries = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://shop.example.com");
        assert_eq!(config.http.max_retries, 3);
        assert_eq!(config.http.timeout_ms, 5000);
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: StorefrontConfig =
            toml::from_str(&generate_default_config("http://localhost:9090")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9090");
        assert_eq!(config.http, HttpConfig::default());
    }

    #[test]
    fn test_env_override() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(|key| {
            (key == API_URL_ENV).then(|| " http://api.internal:8080 ".to_string())
        });
        assert_eq!(config.api.base_url, "http://api.internal:8080");

        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config.api.base_url, "http://api.internal:8080");
    }

    #[test]
    fn test_validate_rejects_bad_timeouts() {
        let mut config = StorefrontConfig::default();
        config.http.timeout_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(StorefrontError::InvalidConfig(_))
        ));

        let mut config = StorefrontConfig::default();
        config.http.connect_timeout_ms = 10_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fetch_policy() {
        let mut config = StorefrontConfig::default();
        config.http.max_retries = 2;
        let policy = config.fetch_policy();
        assert_eq!(policy.timeout.total, Duration::from_millis(5000));
        assert_eq!(policy.timeout.connect, Duration::from_millis(1000));
        assert_eq!(policy.retry.max_retries, 2);
    }

    #[test]
    fn test_save_load_and_discover() {
        let dir = scratch_dir("discover");
        let nested = dir.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut config = StorefrontConfig::default();
        config.catalog.featured_limit = 4;
        let path = dir.join("storefront.json");
        config.save(&path).unwrap();

        assert_eq!(StorefrontConfig::discover(&nested), Some(path.clone()));
        assert_eq!(StorefrontConfig::load(&path).unwrap(), config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = StorefrontConfig::load("/nonexistent/storefront.toml").unwrap_err();
        assert!(matches!(err, StorefrontError::Io { .. }));
    }
}
