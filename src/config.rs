use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "RxVoicemail";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Records per batch when nothing else is requested.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Upper bound on a single batch. Call ids only have 9000 distinct suffixes.
pub const MAX_BATCH_SIZE: usize = 500;

/// Version tag stamped on every mock analysis.
pub const ANALYSIS_VERSION: &str = "2.0.0";

/// Year embedded in call ids (`CALL-2024####`).
pub const CALL_ID_YEAR: u32 = 2024;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

const ENV_BIND_ADDR: &str = "RXVM_BIND_ADDR";
const ENV_BATCH_SIZE: &str = "RXVM_BATCH_SIZE";
const ENV_SEED: &str = "RXVM_SEED";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,rx_voicemail_lib=debug"
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
    #[error("{var} must be between 1 and {max}, got {value}")]
    OutOfRange {
        var: &'static str,
        value: usize,
        max: usize,
    },
}

/// Runtime settings for the HTTP server, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub batch_size: usize,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Read `RXVM_BIND_ADDR`, `RXVM_BATCH_SIZE` and `RXVM_SEED`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup (tests inject a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: ENV_BIND_ADDR,
                value: bind_raw.clone(),
            })?;

        let batch_size = match lookup(ENV_BATCH_SIZE) {
            Some(raw) => {
                let value = raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: ENV_BATCH_SIZE,
                        value: raw.clone(),
                    })?;
                validate_batch_size(ENV_BATCH_SIZE, value)?
            }
            None => DEFAULT_BATCH_SIZE,
        };

        let seed = match lookup(ENV_SEED) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    var: ENV_SEED,
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            bind_addr,
            batch_size,
            seed,
        })
    }
}

/// Reject batch sizes outside `1..=MAX_BATCH_SIZE`.
pub fn validate_batch_size(var: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 || value > MAX_BATCH_SIZE {
        return Err(ConfigError::OutOfRange {
            var,
            value,
            max: MAX_BATCH_SIZE,
        });
    }
    Ok(value)
}
