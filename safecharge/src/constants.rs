//! Hosts, headers and defaults for talking to the SafeCharge REST API.

use std::sync::LazyLock;
use std::time::Duration;

use http::HeaderMap;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderValue};

/// Integration (sandbox) environment.
pub const INTEGRATION_HOST: &str = "https://ppp-test.safecharge.com/ppp/";

/// Production environment.
pub const PRODUCTION_HOST: &str = "https://secure.safecharge.com/ppp/";

/// User agent sent by the default HTTP transport.
pub const DEFAULT_USER_AGENT: &str = concat!("safecharge-rust/", env!("CARGO_PKG_VERSION"));

/// Request timeout of the default HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect timeout of the default HTTP transport.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "SAFECHARGE_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "safecharge.toml";

/// Environment variable overriding the configured server host.
pub const SERVER_HOST_ENV: &str = "SAFECHARGE_SERVER_HOST";

/// Headers applied to every dispatched request.
pub static REQUEST_HEADERS: LazyLock<HeaderMap> = LazyLock::new(|| {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
});
