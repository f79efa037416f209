//! Configuration management for healthiad.
//!
//! Built-in defaults, then an optional TOML file, then `HEALTHIA_*`
//! environment overrides. CLI flags are applied last by `main`.

use anyhow::{bail, Context, Result};
use healthia_shared::artifacts::{
    ArtifactPaths, DEFAULT_CLASSIFIER_FILE, DEFAULT_ENCODER_FILE, DEFAULT_VECTORIZER_FILE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// System-wide config file, used when present
pub const CONFIG_PATH: &str = "/etc/healthia/config.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "HEALTHIA_CONFIG";

/// Service identity reported by the info endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,

    #[serde(default = "default_app_description")]
    pub description: String,

    /// Prefix every API route is mounted under
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

fn default_app_name() -> String {
    "HealthIA API".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_app_description() -> String {
    "API para diagnóstico médico baseado em sintomas usando Machine Learning".to_string()
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            description: default_app_description(),
            api_prefix: default_api_prefix(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to make cross-origin requests. `"*"` allows any
    /// origin, without credentials.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
        "http://localhost:5174".to_string(),
        "https://healthia.vercel.app".to_string(),
    ]
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory holding the three artifacts
    #[serde(default = "default_model_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_classifier_file")]
    pub classifier_file: String,

    #[serde(default = "default_vectorizer_file")]
    pub vectorizer_file: String,

    #[serde(default = "default_encoder_file")]
    pub encoder_file: String,

    /// Refuse to start when the artifacts fail to load
    #[serde(default = "default_require_on_startup")]
    pub require_on_startup: bool,
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("model")
}

fn default_classifier_file() -> String {
    DEFAULT_CLASSIFIER_FILE.to_string()
}

fn default_vectorizer_file() -> String {
    DEFAULT_VECTORIZER_FILE.to_string()
}

fn default_encoder_file() -> String {
    DEFAULT_ENCODER_FILE.to_string()
}

fn default_require_on_startup() -> bool {
    true
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            dir: default_model_dir(),
            classifier_file: default_classifier_file(),
            vectorizer_file: default_vectorizer_file(),
            encoder_file: default_encoder_file(),
            require_on_startup: default_require_on_startup(),
        }
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub model: ModelConfig,
}

impl Config {
    /// Load from `explicit`, else `$HEALTHIA_CONFIG`, else the system path
    /// when it exists, else defaults. A named file that fails to load is an
    /// error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from_path(Path::new(&path));
        }
        if Path::new(CONFIG_PATH).exists() {
            return Self::load_from_path(Path::new(CONFIG_PATH));
        }
        warn!("Config not found, using defaults");
        Ok(Config::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `HEALTHIA_*` overrides read through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("HEALTHIA_APP_NAME") {
            self.app.name = v;
        }
        if let Some(v) = lookup("HEALTHIA_APP_VERSION") {
            self.app.version = v;
        }
        if let Some(v) = lookup("HEALTHIA_APP_DESCRIPTION") {
            self.app.description = v;
        }
        if let Some(v) = lookup("HEALTHIA_HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("HEALTHIA_PORT") {
            self.server.port = v
                .trim()
                .parse()
                .with_context(|| format!("HEALTHIA_PORT must be a port number, got '{}'", v))?;
        }
        if let Some(v) = lookup("HEALTHIA_ALLOWED_ORIGINS") {
            self.server.allowed_origins = v
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(v) = lookup("HEALTHIA_MODEL_DIR") {
            self.model.dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("HEALTHIA_MODEL_FILE") {
            self.model.classifier_file = v;
        }
        if let Some(v) = lookup("HEALTHIA_VECTORIZER_FILE") {
            self.model.vectorizer_file = v;
        }
        if let Some(v) = lookup("HEALTHIA_ENCODER_FILE") {
            self.model.encoder_file = v;
        }
        Ok(())
    }

    /// Check values the types alone cannot express, and canonicalize the
    /// API prefix to `/segment` form (or empty).
    pub fn validate(&mut self) -> Result<()> {
        let prefix = self.app.api_prefix.trim().trim_end_matches('/');
        self.app.api_prefix = if prefix.is_empty() || prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{}", prefix)
        };
        if self.app.api_prefix == "/docs" {
            bail!("api_prefix '/docs' collides with the documentation route");
        }
        if self.server.host.trim().is_empty() {
            bail!("server.host must not be empty");
        }
        if self.server.max_body_bytes == 0 {
            bail!("server.max_body_bytes must be greater than zero");
        }
        Ok(())
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::with_files(
            &self.model.dir,
            &self.model.classifier_file,
            &self.model.vectorizer_file,
            &self.model.encoder_file,
        )
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Base URL of the API, for log output
    pub fn api_base_url(&self) -> String {
        format!("http://{}{}", self.bind_addr(), self.app.api_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.app.name, "HealthIA API");
        assert_eq!(config.app.api_prefix, "/api/v1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.allowed_origins.len(), 4);
        assert!(config.model.require_on_startup);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_parse_toml_partial() {
        let toml_str = r#"
[server]
port = 9000
allowed_origins = ["https://example.org"]

[model]
dir = "/opt/healthia/model"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.allowed_origins, vec!["https://example.org"]);
        // Defaults for missing fields
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.app.name, "HealthIA API");
        assert_eq!(
            config.artifact_paths().classifier,
            PathBuf::from("/opt/healthia/model/classifier_healthia.json")
        );
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("HEALTHIA_PORT", "8080"),
            ("HEALTHIA_HOST", "127.0.0.1"),
            ("HEALTHIA_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("HEALTHIA_MODEL_DIR", "/srv/model"),
            ("HEALTHIA_MODEL_FILE", "clf.json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.artifact_paths().classifier, PathBuf::from("/srv/model/clf.json"));
        assert_eq!(
            config.artifact_paths().encoder,
            PathBuf::from("/srv/model/encoder_healthia.json")
        );
    }

    #[test]
    fn test_invalid_port_override_is_error() {
        let mut config = Config::default();
        let result = config.apply_overrides(|k| (k == "HEALTHIA_PORT").then(|| "http".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_canonicalizes_prefix() {
        let mut config = Config::default();
        config.app.api_prefix = "api/v2/".to_string();
        config.validate().unwrap();
        assert_eq!(config.app.api_prefix, "/api/v2");

        config.app.api_prefix = "/".to_string();
        config.validate().unwrap();
        assert_eq!(config.app.api_prefix, "");
    }

    #[test]
    fn test_validate_rejects_docs_prefix() {
        let mut config = Config::default();
        config.app.api_prefix = "/docs".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("healthia.toml");
        fs::write(&path, "[app]\nname = \"HealthIA Staging\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.app.name, "HealthIA Staging");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_shipped_example_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/healthia.toml");
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config, {
            let mut expected = Config::default();
            expected.app.version = config.app.version.clone();
            expected
        });
    }
}
