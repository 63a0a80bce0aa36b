//! HTTP transport used by the client to perform a single GET.
//!
//! The [`Transport`] trait is the only I/O seam in the crate: given a fully
//! resolved URL it returns the response body or a [`TransportError`]. The
//! default implementation, [`ReqwestTransport`], wraps an async
//! `reqwest::Client`. Response status codes are not treated as failures; the
//! upstream API reports "not found" with a 404 whose body is still a valid
//! envelope.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

// ---------------------------------------------------------------------------
// TransportErrorKind
// ---------------------------------------------------------------------------

/// Classification of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// The device has no network connection.
    NotConnected,
    TimedOut,
    /// Data roaming is switched off for the active connection.
    RoamingDisabled,
    /// The network refuses data for this application.
    DataNotAllowed,
    /// DNS resolution for the host failed.
    HostNotFound,
    CannotConnectToHost,
    /// An established connection dropped mid-request.
    ConnectionLost,
    Other,
}

impl TransportErrorKind {
    /// Whether this kind describes a connectivity problem rather than a
    /// protocol or server fault.
    pub fn is_connectivity(self) -> bool {
        !matches!(self, TransportErrorKind::Other)
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::NotConnected => "not connected",
            TransportErrorKind::TimedOut => "timed out",
            TransportErrorKind::RoamingDisabled => "roaming disabled",
            TransportErrorKind::DataNotAllowed => "data not allowed",
            TransportErrorKind::HostNotFound => "host not found",
            TransportErrorKind::CannotConnectToHost => "cannot connect to host",
            TransportErrorKind::ConnectionLost => "connection lost",
            TransportErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// TransportError
// ---------------------------------------------------------------------------

/// A failed GET, carrying its classification and the transport's own message.
#[derive(Debug)]
pub struct TransportError {
    kind: TransportErrorKind,
    message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the error this failure was derived from.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    /// The message reported by the transport, unchanged.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let kind = classify(&err);
        TransportError::new(kind, err.to_string()).with_source(err)
    }
}

/// Map a reqwest failure onto a [`TransportErrorKind`].
///
/// The timeout flag wins, then a DNS lookup failure, then the first
/// `io::Error` in the source chain whose kind names a connectivity problem.
/// Anything else, TLS and protocol failures included, is `Other`.
fn classify(err: &reqwest::Error) -> TransportErrorKind {
    if err.is_timeout() {
        return TransportErrorKind::TimedOut;
    }

    if chain_mentions(err, DNS_FAILURES) {
        return TransportErrorKind::HostNotFound;
    }

    if let Some(kind) = io_errors(err).find_map(|io_err| classify_io(io_err.kind())) {
        return kind;
    }

    if err.is_connect() && chain_mentions(err, UNREACHABLE) {
        return TransportErrorKind::CannotConnectToHost;
    }

    if chain_mentions(err, CLOSED_EARLY) {
        return TransportErrorKind::ConnectionLost;
    }

    TransportErrorKind::Other
}

const DNS_FAILURES: &[&str] = &["dns error", "failed to lookup address"];
const UNREACHABLE: &[&str] = &["network is unreachable", "no route to host", "host is unreachable"];
const CLOSED_EARLY: &[&str] = &["connection closed before message completed"];

fn classify_io(kind: io::ErrorKind) -> Option<TransportErrorKind> {
    match kind {
        io::ErrorKind::NotConnected => Some(TransportErrorKind::NotConnected),
        io::ErrorKind::TimedOut => Some(TransportErrorKind::TimedOut),
        io::ErrorKind::ConnectionRefused | io::ErrorKind::AddrNotAvailable => {
            Some(TransportErrorKind::CannotConnectToHost)
        }
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::UnexpectedEof => Some(TransportErrorKind::ConnectionLost),
        _ => None,
    }
}

fn source_chain<'a>(err: &'a (dyn StdError + 'static)) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |e: &&'a (dyn StdError + 'static)| (*e).source())
}

fn io_errors<'a>(err: &'a (dyn StdError + 'static)) -> impl Iterator<Item = &'a io::Error> {
    source_chain(err).filter_map(|e| e.downcast_ref::<io::Error>())
}

fn chain_mentions(err: &(dyn StdError + 'static), needles: &[&str]) -> bool {
    source_chain(err).any(|e| {
        let text = e.to_string().to_lowercase();
        needles.iter().any(|needle| text.contains(needle))
    })
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Performs a single HTTP GET and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError>;
}

/// [`Transport`] backed by an async `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given user agent. Requests have no deadline
    /// unless `timeout` is set.
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(user_agent).gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing, caller-configured `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        tracing::debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%url, %status, "non-success status, decoding body anyway");
        }

        let body = resp.bytes().await?;
        Ok(body.to_vec())
    }
}
