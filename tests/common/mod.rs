//! Shared test fixtures for the AmiiboAPI client integration tests.
//!
//! Provides `StubTransport`, an in-memory [`Transport`] that serves canned
//! bodies keyed by the full request URL and records every URL it is asked for,
//! plus a couple of sample response bodies.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use amiibo_api::{AmiiboClient, Transport, TransportError, TransportErrorKind};
use async_trait::async_trait;
use url::Url;

pub const BASE: &str = "https://amiiboapi.com/api";

enum Reply {
    Body(Vec<u8>),
    Fail(TransportErrorKind, String),
}

/// Serves canned replies; unknown URLs get an empty JSON object.
#[derive(Clone, Default)]
pub struct StubTransport {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `endpoint` (relative to the API origin) with `body`.
    pub fn with_body(self, endpoint: &str, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(format!("{BASE}{endpoint}"), Reply::Body(body.as_bytes().to_vec()));
        self
    }

    pub fn with_json(self, endpoint: &str, body: serde_json::Value) -> Self {
        self.with_body(endpoint, &body.to_string())
    }

    /// Fail requests to `endpoint` with the given transport error.
    pub fn with_failure(self, endpoint: &str, kind: TransportErrorKind, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(format!("{BASE}{endpoint}"), Reply::Fail(kind, message.to_string()));
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.replies.lock().unwrap().get(url.as_str()) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Fail(kind, message)) => Err(TransportError::new(*kind, message.clone())),
            None => Ok(b"{}".to_vec()),
        }
    }
}

/// Build a client whose requests are served by `stub`. The stub is cloned so
/// the caller keeps a handle for inspecting requests.
pub fn client_with(stub: &StubTransport) -> AmiiboClient {
    AmiiboClient::builder()
        .transport(stub.clone())
        .build()
        .unwrap()
}

/// A figurine as returned with `showusage`.
pub fn mario_json() -> serde_json::Value {
    serde_json::json!({
        "amiiboSeries": "Super Smash Bros.",
        "character": "Mario",
        "gameSeries": "Super Mario",
        "head": "00000000",
        "image": "https://raw.githubusercontent.com/N3evin/AmiiboAPI/master/images/icon_00000000-00000002.png",
        "name": "Mario",
        "release": {
            "au": "2014-11-29",
            "eu": "2014-11-28",
            "jp": "2014-12-06",
            "na": "2014-11-21"
        },
        "tail": "00000002",
        "type": "Figure",
        "gamesSwitch": [
            {
                "amiiboUsage": [
                    { "Usage": "Unlock a Mario-themed costume", "write": false }
                ],
                "gameID": ["01006A800016E000"],
                "gameName": "Super Smash Bros. Ultimate"
            }
        ],
        "games3DS": [],
        "gamesWiiU": []
    })
}

/// A figurine with every optional field missing or null, as returned without
/// `showgames`.
pub fn bare_json() -> serde_json::Value {
    serde_json::json!({
        "amiiboSeries": "Animal Crossing",
        "character": "Isabelle",
        "gameSeries": "Animal Crossing",
        "head": "01810000",
        "image": null,
        "name": "Isabelle - Summer Outfit",
        "release": { "au": null, "eu": null, "jp": null, "na": null },
        "tail": "00240502",
        "type": "Figure"
    })
}
