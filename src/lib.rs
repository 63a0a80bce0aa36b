//! AmiiboAPI client for Rust.
//!
//! Provides an async client for the public [AmiiboAPI](https://amiiboapi.com):
//! figurines (amiibo) plus the type, game series, amiibo series and character
//! catalogs. Every call is a single stateless GET against the fixed API origin;
//! the JSON envelope is decoded into typed records and failures are reported
//! through [`AmiiboError`].
//!
//! # Quick start
//!
//! ```no_run
//! use amiibo_api::{AmiiboClient, AmiiboFilter};
//!
//! # async fn example() -> amiibo_api::Result<()> {
//! let client = AmiiboClient::builder().build()?;
//!
//! // Filtered listing
//! let filter = AmiiboFilter {
//!     character: Some("mario".into()),
//!     show_games: true,
//!     ..Default::default()
//! };
//! let marios = client.amiibo().list(&filter).await?;
//!
//! // Single lookups return `None` when the service has no match
//! let yoshi = client.amiibo().get("0000000000000002").await?;
//!
//! let series = client.amiibo_series().list_by_name("Super Smash Bros.").await?;
//! let updated = client.last_updated().await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod config;
pub mod error;
mod fetch;
pub mod models;
pub mod queries;
pub mod query_builder;
pub mod transport;

#[cfg(feature = "blocking")]
pub use blocking::BlockingAmiiboClient;
pub use error::{AmiiboError, Result};
pub use fetch::encode_endpoint;
pub use models::{Amiibo, Game, GameUsage, NamedEntity, ReleaseDates};
pub use queries::{AmiiboFilter, AmiiboQuery, CatalogQuery, Category};
pub use query_builder::QueryBuilder;
pub use transport::{ReqwestTransport, Transport, TransportError, TransportErrorKind};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use models::dates::parse_last_updated;
use models::LastUpdatedResponse;

// ---------------------------------------------------------------------------
// AmiiboClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AmiiboClient`].
///
/// Use [`AmiiboClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](AmiiboClientBuilder::build).
pub struct AmiiboClientBuilder {
    timeout: Option<Duration>,
    user_agent: String,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for AmiiboClientBuilder {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: config::default_user_agent(),
            transport: None,
        }
    }
}

impl AmiiboClientBuilder {
    /// Set the per-request timeout of the default transport.
    ///
    /// Unset by default, so requests run until the server or the network
    /// gives up. Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header of the default transport.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Use a custom [`Transport`] instead of the reqwest-backed default.
    pub fn transport<T>(mut self, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client. Only fails if the default HTTP client cannot be
    /// created (e.g. the TLS backend fails to initialize).
    pub fn build(self) -> Result<AmiiboClient> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout, &self.user_agent)?),
        };
        Ok(AmiiboClient {
            base_url: config::BASE_URL.to_string(),
            transport,
        })
    }
}

// ---------------------------------------------------------------------------
// AmiiboClient
// ---------------------------------------------------------------------------

/// The main entry point for the AmiiboAPI.
///
/// Holds the API origin and a shared transport; it carries no other state, so
/// clones are cheap and concurrent calls never interact. Catalog-specific
/// operations live on lightweight borrowing wrappers returned by the accessor
/// methods.
#[derive(Clone)]
pub struct AmiiboClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl AmiiboClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> AmiiboClientBuilder {
        AmiiboClientBuilder::default()
    }

    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the amiibo (figurine) query interface.
    pub fn amiibo(&self) -> AmiiboQuery<'_> {
        AmiiboQuery::new(self)
    }

    /// Access the amiibo type catalog (`/type`).
    pub fn types(&self) -> CatalogQuery<'_> {
        CatalogQuery::new(self, Category::Type)
    }

    /// Access the game series catalog (`/gameseries`).
    pub fn game_series(&self) -> CatalogQuery<'_> {
        CatalogQuery::new(self, Category::GameSeries)
    }

    /// Access the amiibo series catalog (`/amiiboseries`).
    pub fn amiibo_series(&self) -> CatalogQuery<'_> {
        CatalogQuery::new(self, Category::AmiiboSeries)
    }

    /// Access the character catalog (`/character`).
    pub fn characters(&self) -> CatalogQuery<'_> {
        CatalogQuery::new(self, Category::Character)
    }

    // -- Metadata ----------------------------------------------------------

    /// Fetch the time the AmiiboAPI database was last updated.
    pub async fn last_updated(&self) -> Result<DateTime<Utc>> {
        self.fetch_scalar(config::LAST_UPDATED_PATH, |resp: LastUpdatedResponse| {
            parse_last_updated(&resp.last_updated)
                .ok_or(AmiiboError::TimestampParse(resp.last_updated))
        })
        .await
    }

    /// The API origin every endpoint is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for AmiiboClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmiiboClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
