//! The transport seam: posting a serialized body to a URL.
//!
//! [`Transport`] is the only component that touches the network. The
//! dispatcher hands it a JSON body, a fully-resolved URL and the fixed
//! header set, and gets the raw reply text back.
//!
//! [`HttpTransport`] is the production implementation over
//! `reqwest::blocking`. It is safe to share across threads; connection
//! pooling, TLS and redirect handling are reqwest's.

use std::fmt::Debug;
use std::time::Duration;

use http::HeaderMap;
use reqwest::blocking::Client;

use crate::constants::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error::TransportError;

/// Sends a serialized request and returns the raw reply body.
///
/// Implementations must be safe for concurrent use: one handle serves every
/// dispatch in the process.
pub trait Transport: Send + Sync + Debug {
    /// POSTs `body` to `url` with exactly `headers`, returning the reply text.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the connection cannot be established or
    /// the reply cannot be read in full.
    fn send(&self, body: &str, url: &str, headers: &HeaderMap) -> Result<String, TransportError>;
}

/// Settings for the HTTP client built by [`HttpTransport::from_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportConfig {
    /// Total request timeout; `None` disables it.
    pub timeout: Option<Duration>,
    /// Connection establishment timeout.
    pub connect_timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Proxy URL for all traffic (e.g. `http://proxy:3128`).
    pub proxy: Option<String>,
    /// Maximum idle pooled connections per host.
    pub pool_max_idle_per_host: Option<usize>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            proxy: None,
            pool_max_idle_per_host: None,
        }
    }
}

/// [`Transport`] over a blocking reqwest client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Wraps an externally configured client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the proxy URL is invalid or the
    /// TLS backend cannot be initialized.
    pub fn from_config(config: &HttpTransportConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout);
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(max_idle) = config.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }
        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy).map_err(TransportError::Build)?);
        }
        let client = builder.build().map_err(TransportError::Build)?;
        Ok(Self::new(client))
    }

    /// Builds a client with [`HttpTransportConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if the TLS backend cannot be
    /// initialized.
    pub fn try_default() -> Result<Self, TransportError> {
        Self::from_config(&HttpTransportConfig::default())
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

impl Transport for HttpTransport {
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "safecharge.transport.send", skip_all, fields(url = %url), err)
    )]
    fn send(&self, body: &str, url: &str, headers: &HeaderMap) -> Result<String, TransportError> {
        let response = self
            .client
            .post(url)
            .headers(headers.clone())
            .body(body.to_owned())
            .send()
            .map_err(|source| TransportError::Http {
                context: "POST request",
                source,
            })?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|source| TransportError::ResponseBodyRead {
                context: "POST response",
                source,
            })?;

        // Errors are reported in the body; the status is informational.
        if !status.is_success() {
            #[cfg(feature = "telemetry")]
            tracing::debug!(%status, "non-success HTTP status from SafeCharge");
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REQUEST_HEADERS;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn default_config_uses_library_defaults() {
        let config = HttpTransportConfig::default();
        assert_eq!(config.timeout, Some(DEFAULT_TIMEOUT));
        assert_eq!(config.connect_timeout, Some(DEFAULT_CONNECT_TIMEOUT));
        assert!(config.user_agent.starts_with("safecharge-rust/"));
        assert!(config.proxy.is_none());
    }

    #[test]
    fn invalid_proxy_fails_to_build() {
        let config = HttpTransportConfig {
            proxy: Some("http://[::1".into()),
            ..HttpTransportConfig::default()
        };
        let err = HttpTransport::from_config(&config).unwrap_err();
        assert!(matches!(err, TransportError::Build(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn posts_body_with_fixed_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ppp/api/v1/getSessionToken.do"))
            .and(header("content-type", "application/json; charset=utf-8"))
            .and(header("accept", "application/json"))
            .and(body_string(r#"{"merchantId":"m"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"SUCCESS"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/ppp/api/v1/getSessionToken.do", mock_server.uri());
        let reply = tokio::task::spawn_blocking(move || {
            let transport = HttpTransport::try_default().unwrap();
            transport.send(r#"{"merchantId":"m"}"#, &url, &REQUEST_HEADERS)
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(reply, r#"{"status":"SUCCESS"}"#);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn returns_body_on_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"status":"ERROR"}"#))
            .mount(&mock_server)
            .await;

        let url = format!("{}/ppp/api/v1/openOrder.do", mock_server.uri());
        let reply = tokio::task::spawn_blocking(move || {
            let transport = HttpTransport::try_default().unwrap();
            transport.send("{}", &url, &REQUEST_HEADERS)
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(reply, r#"{"status":"ERROR"}"#);
    }

    /// Returns a local address nothing is listening on.
    fn closed_local_addr() -> std::net::SocketAddr {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    }

    #[test]
    fn connection_refused_is_a_transport_error() {
        let url = format!("http://{}/ppp/api/v1/payout.do", closed_local_addr());
        let transport = HttpTransport::try_default().unwrap();
        let err = transport.send("{}", &url, &REQUEST_HEADERS).unwrap_err();
        assert!(matches!(err, TransportError::Http { .. }));
    }
}
