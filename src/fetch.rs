//! Fetch/decode pipeline shared by every query.
//!
//! Each call encodes the endpoint, performs exactly one GET through the
//! client's [`Transport`](crate::transport::Transport), decodes the body and
//! classifies failures into [`AmiiboError`]. Nothing is retried.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AmiiboError, Result};
use crate::models::Envelope;
use crate::AmiiboClient;

/// Characters escaped by [`encode_endpoint`]. Alphanumerics and
/// `!$&'()*+,-./:;=?@_~` are left as-is so the query structure survives.
/// When the result is parsed into a [`Url`], `'` in the query is further
/// escaped to `%27`, so that is the form sent on the wire.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode an endpoint (path plus query) for use in a URL.
pub fn encode_endpoint(endpoint: &str) -> String {
    utf8_percent_encode(endpoint, QUERY_ENCODE_SET).to_string()
}

/// Join the base origin and an endpoint into the request URL. Parsing applies
/// the `url` crate's own query escaping on top of [`encode_endpoint`].
pub(crate) fn request_url(base_url: &str, endpoint: &str) -> Result<Url> {
    let encoded = encode_endpoint(endpoint);
    Url::parse(&format!("{}{}", base_url, encoded))
        .map_err(|e| AmiiboError::Encoding(format!("{}: {}", endpoint, e)))
}

impl AmiiboClient {
    /// Fetch an endpoint whose envelope carries a list. A missing payload is
    /// an empty list.
    pub(crate) async fn fetch_list<T>(&self, endpoint: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.fetch_scalar(endpoint, |envelope: Envelope<Vec<T>>| {
            log_upstream_error(endpoint, &envelope);
            Ok(envelope.amiibo.unwrap_or_default())
        })
        .await
    }

    /// Fetch an endpoint whose envelope carries a single item. A missing
    /// payload is `None`, which is how the service reports "not found".
    pub(crate) async fn fetch_one<T>(&self, endpoint: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.fetch_scalar(endpoint, |envelope: Envelope<T>| {
            log_upstream_error(endpoint, &envelope);
            Ok(envelope.amiibo)
        })
        .await
    }

    /// Fetch `endpoint`, decode the body as `In` and turn it into `Out` with
    /// `project`.
    pub(crate) async fn fetch_scalar<In, Out, F>(&self, endpoint: &str, project: F) -> Result<Out>
    where
        In: DeserializeOwned,
        F: FnOnce(In) -> Result<Out>,
    {
        let url = request_url(&self.base_url, endpoint)?;

        let body = self.transport.get(&url).await.map_err(|e| {
            let err = AmiiboError::from(e);
            if let AmiiboError::Connectivity(source) = &err {
                tracing::warn!(%url, kind = %source.kind(), error = %source, "unable to reach AmiiboAPI");
            } else {
                tracing::debug!(%url, error = %err, "transport failure");
            }
            err
        })?;

        let decoded: In = serde_json::from_slice(&body)?;
        project(decoded)
    }
}

fn log_upstream_error<T>(endpoint: &str, envelope: &Envelope<T>) {
    if envelope.code.is_some() || envelope.error.is_some() {
        tracing::debug!(
            endpoint,
            code = ?envelope.code,
            error = ?envelope.error,
            has_payload = envelope.amiibo.is_some(),
            "AmiiboAPI returned an error envelope"
        );
    }
}
