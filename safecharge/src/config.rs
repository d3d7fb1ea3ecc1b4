//! Client configuration.
//!
//! Loads settings from a TOML file with support for environment variable
//! expansion in string values. Variables use `$VAR` or `${VAR}` syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! server_host = "https://ppp-test.safecharge.com/ppp/"
//! timeout_secs = 30
//! connect_timeout_secs = 10
//! user_agent = "my-shop/1.0"
//! proxy = "$HTTPS_PROXY"
//! ```
//!
//! # Environment Variables
//!
//! - `SAFECHARGE_CONFIG` — Path to configuration file (default: `safecharge.toml`)
//! - `SAFECHARGE_SERVER_HOST` — Override the default server host
//! - Any variable referenced by `$VAR` in the config file

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT, SERVER_HOST_ENV,
};
use crate::dispatcher::Dispatcher;
use crate::error::{ConfigError, TransportError};
use crate::transport::{HttpTransport, HttpTransportConfig};

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SafechargeConfig {
    /// Host used when a request does not name one.
    #[serde(default)]
    pub server_host: Option<String>,

    /// Total request timeout in seconds; `0` disables it (default: `30`).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds (default: `10`).
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Proxy URL for all traffic.
    #[serde(default)]
    pub proxy: Option<String>,

    /// Maximum idle pooled connections per host.
    #[serde(default)]
    pub pool_max_idle_per_host: Option<usize>,
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

const fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT.as_secs()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_owned()
}

impl Default for SafechargeConfig {
    fn default() -> Self {
        Self {
            server_host: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
            proxy: None,
            pool_max_idle_per_host: None,
        }
    }
}

impl SafechargeConfig {
    /// Loads configuration from the path given by `SAFECHARGE_CONFIG`,
    /// falling back to `safecharge.toml` in the current directory.
    ///
    /// A missing file yields the defaults. `$VAR` / `${VAR}` references are
    /// expanded from the process environment, and `SAFECHARGE_SERVER_HOST`
    /// overrides the file's `server_host`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        Self::load_from(&path)
    }

    /// Loads configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let content = if Path::new(path).exists() {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_owned(),
                source,
            })?
        } else {
            String::new()
        };
        Self::from_toml_with(&content, |name| std::env::var(name).ok())
    }

    /// Parses configuration from TOML text, resolving variables with `lookup`.
    ///
    /// `lookup` also supplies the `SAFECHARGE_SERVER_HOST` override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the expanded text is not a valid
    /// configuration.
    pub fn from_toml_with<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = expand_vars(content, &lookup);
        let mut config: Self = toml::from_str(&expanded)?;

        if let Some(host) = lookup(SERVER_HOST_ENV).filter(|h| !h.is_empty()) {
            config.server_host = Some(host);
        }
        Ok(config)
    }

    /// Settings for the HTTP transport.
    #[must_use]
    pub fn transport_config(&self) -> HttpTransportConfig {
        HttpTransportConfig {
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            connect_timeout: Some(Duration::from_secs(self.connect_timeout_secs)),
            user_agent: self.user_agent.clone(),
            proxy: self.proxy.clone(),
            pool_max_idle_per_host: self.pool_max_idle_per_host,
        }
    }

    /// Builds a dispatcher with its own HTTP transport and the configured
    /// default host.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the HTTP client cannot be built.
    pub fn dispatcher(&self) -> Result<Dispatcher, TransportError> {
        let transport = HttpTransport::from_config(&self.transport_config())?;
        let mut dispatcher = Dispatcher::new(Arc::new(transport));
        if let Some(host) = &self.server_host {
            dispatcher = dispatcher.with_default_host(host.clone());
        }
        Ok(dispatcher)
    }
}

/// Expands `$VAR` and `${VAR}` patterns in a string using `lookup`.
///
/// Unresolved variables are left as-is.
fn expand_vars<F>(input: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
        }

        let mut name = String::new();
        let mut closed = false;
        while let Some(&c) = chars.peek() {
            if braced {
                chars.next();
                if c == '}' {
                    closed = true;
                    break;
                }
            } else if c.is_ascii_alphanumeric() || c == '_' {
                chars.next();
            } else {
                break;
            }
            name.push(c);
        }

        match lookup(&name).filter(|_| !name.is_empty() && (closed || !braced)) {
            Some(value) => result.push_str(&value),
            None => {
                result.push('$');
                if braced {
                    result.push('{');
                }
                result.push_str(&name);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}
