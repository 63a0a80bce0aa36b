use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Envelope — Wrapper around every catalog response
// ---------------------------------------------------------------------------

/// The response wrapper used by every endpoint except `/lastupdated`.
///
/// The payload lives under the `amiibo` key for all catalogs, not only for
/// figurines. Error responses (e.g. a 404 for an unknown id) carry `code` and
/// `error` and no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: Option<i64>,
    pub error: Option<String>,
    pub amiibo: Option<T>,
}

// ---------------------------------------------------------------------------
// LastUpdatedResponse
// ---------------------------------------------------------------------------

/// Body of `/lastupdated`. The timestamp is kept as text here and parsed by
/// the caller so a bad format is reported separately from a bad body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastUpdatedResponse {
    pub last_updated: String,
}
