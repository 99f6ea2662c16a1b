//! Read-only access to a chain endpoint.

use alloy_primitives::{Address, Bytes};
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_client::RpcClient;
use alloy_transport_http::Http;
use async_trait::async_trait;
use serde::Serialize;
use state_checker_core::{
    error::{CheckerError, Result},
    utils,
};
use std::time::Duration;
use url::Url;

/// Default per-request timeout of an [`HttpConnector`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A simulated call that did not return data: a revert, a transport failure or a timeout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct CallError(pub String);

/// Simulated execution of calls against a chain.
#[async_trait]
pub trait CallClient: Send + Sync {
    /// Executes `input` against `to` at the latest block without persisting any state change and
    /// returns the raw return data.
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, CallError>;
}

/// Opens a [`CallClient`] for the endpoint of a network section.
pub trait Connector {
    fn connect(&self, endpoint: &Url) -> Result<Box<dyn CallClient>>;
}

/// Resolves the `rpcUrl` of a section.
///
/// A URL is used verbatim; anything else names an environment variable holding the URL.
pub fn resolve_endpoint(endpoint: &str) -> Result<Url> {
    if let Some(url) = utils::parse_url(endpoint) {
        return Ok(url);
    }
    let name = endpoint.trim();
    let value = std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| CheckerError::EndpointUnresolved(name.to_string()))?;
    let url =
        utils::parse_url(&value).ok_or_else(|| CheckerError::EndpointUnresolved(name.to_string()))?;
    debug!(variable = name, host = url.host_str(), "resolved endpoint from environment");
    Ok(url)
}

/// Connects to JSON-RPC endpoints over HTTP.
#[derive(Clone, Debug)]
pub struct HttpConnector {
    timeout: Duration,
}

impl HttpConnector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Connector for HttpConnector {
    fn connect(&self, endpoint: &Url) -> Result<Box<dyn CallClient>> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| CheckerError::msg(format!("failed to build HTTP client: {err}")))?;
        let transport = Http::with_client(client, endpoint.clone());
        let provider = RootProvider::new(RpcClient::new(transport, false));
        debug!(host = endpoint.host_str(), timeout = ?self.timeout, "connected");
        Ok(Box::new(HttpCallClient { provider }))
    }
}

/// `eth_call` over a JSON-RPC provider.
///
/// Every call is sent to the node; nothing is cached between calls.
struct HttpCallClient {
    provider: RootProvider<Http<reqwest::Client>>,
}

#[derive(Clone, Debug, Serialize)]
struct CallRequest {
    to: Address,
    data: Bytes,
}

#[async_trait]
impl CallClient for HttpCallClient {
    async fn call(&self, to: Address, input: Bytes) -> Result<Bytes, CallError> {
        let request = CallRequest { to, data: input };
        trace!(%to, data = ?request.data, "eth_call");
        self.provider
            .raw_request::<_, Bytes>("eth_call".into(), (request, "latest"))
            .await
            .map_err(|err| CallError(err.to_string()))
    }
}
