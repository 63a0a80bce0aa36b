//! Queries for the four key/name catalogs: types, game series, amiibo series
//! and characters. They share one response shape and one set of endpoints.

use std::fmt;

use crate::config;
use crate::error::Result;
use crate::models::NamedEntity;
use crate::query_builder::QueryBuilder;
use crate::AmiiboClient;

/// A key/name catalog exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Type,
    GameSeries,
    AmiiboSeries,
    Character,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Type,
        Category::GameSeries,
        Category::AmiiboSeries,
        Category::Character,
    ];

    /// Endpoint path of the catalog.
    pub fn path(self) -> &'static str {
        match self {
            Category::Type => config::TYPE_PATH,
            Category::GameSeries => config::GAME_SERIES_PATH,
            Category::AmiiboSeries => config::AMIIBO_SERIES_PATH,
            Category::Character => config::CHARACTER_PATH,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface for one [`Category`].
///
/// Keys and names are sent as given, without validation.
#[derive(Clone, Copy)]
pub struct CatalogQuery<'a> {
    client: &'a AmiiboClient,
    category: Category,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(client: &'a AmiiboClient, category: Category) -> Self {
        Self { client, category }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// List every entry of the catalog.
    pub async fn list(self) -> Result<Vec<NamedEntity>> {
        self.client.fetch_list(self.category.path()).await
    }

    /// Get a single entry by key (e.g. `0x00`). `Ok(None)` when unknown.
    pub async fn get_by_key(self, key: &str) -> Result<Option<NamedEntity>> {
        let endpoint = QueryBuilder::new(self.category.path()).param("key", key).build();
        self.client.fetch_one(&endpoint).await
    }

    /// List entries whose name matches `name`.
    pub async fn list_by_name(self, name: &str) -> Result<Vec<NamedEntity>> {
        let endpoint = QueryBuilder::new(self.category.path()).param("name", name).build();
        self.client.fetch_list(&endpoint).await
    }
}
