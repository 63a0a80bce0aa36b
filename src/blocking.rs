//! Blocking wrapper around [`AmiiboClient`] for synchronous callers.
//!
//! Owns a single-threaded Tokio runtime and drives the async client on it, so
//! the caller does not need a runtime of its own. Must not be used from inside
//! an async context; `block_on` panics there.
//!
//! # Example
//!
//! ```no_run
//! use amiibo_api::{AmiiboFilter, BlockingAmiiboClient};
//!
//! let client = BlockingAmiiboClient::builder().build().unwrap();
//!
//! let filter = AmiiboFilter {
//!     character: Some("zelda".into()),
//!     ..Default::default()
//! };
//! let zeldas = client.run(|c| c.amiibo().list(&filter)).unwrap();
//! let updated = client.last_updated().unwrap();
//! ```

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::runtime::{Builder, Runtime};

use crate::error::Result;
use crate::transport::Transport;
use crate::{AmiiboClient, AmiiboClientBuilder};

// ---------------------------------------------------------------------------
// BlockingAmiiboClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BlockingAmiiboClient`].
#[derive(Default)]
pub struct BlockingAmiiboClientBuilder {
    inner: AmiiboClientBuilder,
}

impl BlockingAmiiboClientBuilder {
    /// Set the per-request timeout of the default transport. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set the `User-Agent` header of the default transport.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.inner = self.inner.user_agent(user_agent);
        self
    }

    /// Use a custom [`Transport`].
    pub fn transport<T>(mut self, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        self.inner = self.inner.transport(transport);
        self
    }

    /// Build the runtime and the underlying async client. A runtime that
    /// fails to start is reported as [`AmiiboError::Io`](crate::AmiiboError::Io).
    pub fn build(self) -> Result<BlockingAmiiboClient> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let client = self.inner.build()?;
        Ok(BlockingAmiiboClient { runtime, client })
    }
}

// ---------------------------------------------------------------------------
// BlockingAmiiboClient
// ---------------------------------------------------------------------------

/// Synchronous flavour of [`AmiiboClient`].
///
/// Use [`run()`](Self::run) to drive any async operation to completion.
pub struct BlockingAmiiboClient {
    runtime: Runtime,
    client: AmiiboClient,
}

impl BlockingAmiiboClient {
    pub fn builder() -> BlockingAmiiboClientBuilder {
        BlockingAmiiboClientBuilder::default()
    }

    /// Run an async client operation and block until it completes.
    ///
    /// ```no_run
    /// # use amiibo_api::BlockingAmiiboClient;
    /// # fn example() -> amiibo_api::Result<()> {
    /// # let client = BlockingAmiiboClient::builder().build()?;
    /// let types = client.run(|c| c.types().list())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn run<'a, F, Fut, T>(&'a self, f: F) -> Result<T>
    where
        F: FnOnce(&'a AmiiboClient) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.runtime.block_on(f(&self.client))
    }

    /// Fetch the time the AmiiboAPI database was last updated.
    pub fn last_updated(&self) -> Result<DateTime<Utc>> {
        self.run(|c| c.last_updated())
    }

    /// The wrapped async client.
    pub fn client(&self) -> &AmiiboClient {
        &self.client
    }
}
