//! Configuration system for Packsmith.
//!
//! Load solver and service configuration from TOML or YAML files, with a
//! small set of environment overrides for deployment.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use packsmith_config::{SearchMode, ServiceConfig};
//! use std::time::Duration;
//!
//! let config = ServiceConfig::from_toml_str(r#"
//!     [http]
//!     port = 8080
//!
//!     [store]
//!     backend = "memory"
//!     default_pack_sizes = [23, 31, 53]
//!
//!     [solver]
//!     search_mode = "parallel"
//!     solve_timeout_ms = 250
//! "#).unwrap();
//!
//! assert_eq!(config.http.port, 8080);
//! assert_eq!(config.store.default_pack_sizes, vec![23, 31, 53]);
//! assert_eq!(config.solver.search_mode, SearchMode::Parallel);
//! assert_eq!(config.solver.solve_timeout(), Some(Duration::from_millis(250)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use packsmith_config::ServiceConfig;
//!
//! let config = ServiceConfig::load("packsmith.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pack sizes seeded into an empty store.
pub const DEFAULT_PACK_SIZES: [u64; 5] = [250, 500, 1000, 2000, 5000];

/// Upper bound on the number of configured pack sizes.
pub const DEFAULT_MAX_PACK_SIZES: usize = 64;

/// Solves allowed to run on the blocking pool at once.
pub const DEFAULT_MAX_CONCURRENT_SOLVES: usize = 16;

/// Environment variable overriding [`HttpConfig::host`].
pub const ENV_HTTP_HOST: &str = "HTTP_HOST";

/// Environment variable overriding [`HttpConfig::port`].
pub const ENV_HTTP_PORT: &str = "HTTP_PORT";

/// Environment variable overriding [`StoreConfig::path`].
pub const ENV_STORE_PATH: &str = "PACK_STORE_PATH";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// How the bounded branch search is executed.
    #[serde(default)]
    pub search_mode: SearchMode,

    /// Deadline applied by callers that run the solver off-thread.
    ///
    /// Once it passes the caller raises the solver's termination flag.
    #[serde(default)]
    pub solve_timeout_ms: Option<u64>,

    /// Solves a caller may run at once; further requests wait for a slot.
    #[serde(default = "default_max_concurrent_solves")]
    pub max_concurrent_solves: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::default(),
            solve_timeout_ms: None,
            max_concurrent_solves: default_max_concurrent_solves(),
        }
    }
}

fn default_max_concurrent_solves() -> usize {
    DEFAULT_MAX_CONCURRENT_SOLVES
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the search mode.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Sets the solve timeout in milliseconds.
    pub fn with_solve_timeout_ms(mut self, millis: u64) -> Self {
        self.solve_timeout_ms = Some(millis);
        self
    }

    /// Sets how many solves may run at once.
    pub fn with_max_concurrent_solves(mut self, limit: usize) -> Self {
        self.max_concurrent_solves = limit;
        self
    }

    /// Returns the solve timeout, if configured.
    pub fn solve_timeout(&self) -> Option<Duration> {
        self.solve_timeout_ms.map(Duration::from_millis)
    }
}

/// Execution strategy for the bounded branch search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Depth-first on the calling thread.
    #[default]
    Sequential,

    /// Counts of the largest size explored as independent rayon tasks.
    Parallel,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Sequential => write!(f, "Sequential"),
            SearchMode::Parallel => write!(f, "Parallel"),
        }
    }
}

/// Main service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceConfig {
    /// HTTP listener configuration.
    #[serde(default)]
    pub http: HttpConfig,

    /// Pack-size store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Solver configuration.
    #[serde(default)]
    pub solver: SolverConfig,
}

impl ServiceConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a file, falling back to defaults when the
    /// file does not exist. Parse errors are still reported.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Applies `HTTP_HOST`, `HTTP_PORT` and `PACK_STORE_PATH` from the
    /// process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(host) = lookup(ENV_HTTP_HOST) {
            self.http.host = host;
        }
        if let Some(port) = lookup(ENV_HTTP_PORT) {
            self.http.port = port.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{} is not a valid port: {:?}", ENV_HTTP_PORT, port))
            })?;
        }
        if let Some(path) = lookup(ENV_STORE_PATH) {
            self.store.path = PathBuf::from(path);
        }
        Ok(())
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Invalid("http.port must be non-zero".into()));
        }
        if self.http.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "http.request_timeout_secs must be non-zero".into(),
            ));
        }
        if self.store.max_pack_sizes == 0 {
            return Err(ConfigError::Invalid(
                "store.max_pack_sizes must be non-zero".into(),
            ));
        }
        if self.store.seed_defaults {
            if self.store.default_pack_sizes.is_empty() {
                return Err(ConfigError::Invalid(
                    "store.default_pack_sizes must not be empty when seeding".into(),
                ));
            }
            if self.store.default_pack_sizes.contains(&0) {
                return Err(ConfigError::Invalid(
                    "store.default_pack_sizes must be positive".into(),
                ));
            }
            if self.store.default_pack_sizes.len() > self.store.max_pack_sizes {
                return Err(ConfigError::Invalid(format!(
                    "store.default_pack_sizes has {} entries, above max_pack_sizes {}",
                    self.store.default_pack_sizes.len(),
                    self.store.max_pack_sizes
                )));
            }
        }
        if self.solver.solve_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "solver.solve_timeout_ms must be non-zero".into(),
            ));
        }
        if self.solver.max_concurrent_solves == 0 {
            return Err(ConfigError::Invalid(
                "solver.max_concurrent_solves must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl HttpConfig {
    /// Returns `host:port` suitable for binding.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Returns the per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Pack-size store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    /// Storage backend.
    #[serde(default)]
    pub backend: StoreBackend,

    /// File used by the `file` backend.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Maximum number of distinct pack sizes accepted.
    #[serde(default = "default_max_pack_sizes")]
    pub max_pack_sizes: usize,

    /// Whether to seed `default_pack_sizes` into an empty store on startup.
    #[serde(default = "default_true")]
    pub seed_defaults: bool,

    /// Sizes seeded into an empty store.
    #[serde(default = "default_pack_sizes")]
    pub default_pack_sizes: Vec<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
            max_pack_sizes: default_max_pack_sizes(),
            seed_defaults: true,
            default_pack_sizes: default_pack_sizes(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("pack_sizes.json")
}

fn default_max_pack_sizes() -> usize {
    DEFAULT_MAX_PACK_SIZES
}

fn default_true() -> bool {
    true
}

fn default_pack_sizes() -> Vec<u64> {
    DEFAULT_PACK_SIZES.to_vec()
}

/// Pack-size store backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local, lost on restart.
    #[default]
    Memory,

    /// JSON file, written through on every change.
    File,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "Memory"),
            StoreBackend::File => write!(f, "File"),
        }
    }
}
