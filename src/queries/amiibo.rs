//! Figurine queries against `/amiibo/`.

use crate::config::{AMIIBO_PATH, ID_HALF_LEN, ID_LEN};
use crate::error::{AmiiboError, Result};
use crate::models::Amiibo;
use crate::query_builder::QueryBuilder;
use crate::AmiiboClient;

// ---------------------------------------------------------------------------
// AmiiboFilter
// ---------------------------------------------------------------------------

/// Filters for [`AmiiboQuery::list`]. Unset fields are not sent.
///
/// Text filters accept either a hex key or a name, e.g. `type` accepts
/// `0x02` as well as `yarn`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmiiboFilter {
    /// First 8 hexadecimal characters of the id, e.g. `00000000`.
    pub head: Option<String>,
    /// Last 8 hexadecimal characters of the id, e.g. `00410302`.
    pub tail: Option<String>,
    pub name: Option<String>,
    pub type_field: Option<String>,
    pub character: Option<String>,
    pub game_series: Option<String>,
    pub amiibo_series: Option<String>,
    /// Include the games each amiibo can be used in.
    pub show_games: bool,
    /// Include the games and how the amiibo is used in each.
    pub show_usage: bool,
}

impl AmiiboFilter {
    /// Validate the filter and render the `/amiibo/` endpoint.
    ///
    /// `head` is checked before `tail`; the first invalid one is reported.
    pub fn endpoint(&self) -> Result<String> {
        if let Some(head) = &self.head {
            check_len(head, ID_HALF_LEN, "head")?;
        }
        if let Some(tail) = &self.tail {
            check_len(tail, ID_HALF_LEN, "tail")?;
        }

        Ok(QueryBuilder::new(AMIIBO_PATH)
            .param_opt("head", self.head.as_deref())
            .param_opt("tail", self.tail.as_deref())
            .param_opt("name", self.name.as_deref())
            .param_opt("type", self.type_field.as_deref())
            .param_opt("character", self.character.as_deref())
            .param_opt("gameseries", self.game_series.as_deref())
            .param_opt("amiiboSeries", self.amiibo_series.as_deref())
            .flag("showgames", self.show_games)
            .flag("showusage", self.show_usage)
            .build())
    }
}

/// Render the single-lookup endpoint for a full 16 character id.
pub fn id_endpoint(id: &str) -> Result<String> {
    check_len(id, ID_LEN, "id")?;
    Ok(QueryBuilder::new(AMIIBO_PATH).param("id", id).build())
}

fn check_len(value: &str, expected: usize, field: &str) -> Result<()> {
    if value.chars().count() != expected {
        return Err(AmiiboError::InvalidArgument(format!(
            "{} must be {} hex chars",
            field, expected
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// AmiiboQuery
// ---------------------------------------------------------------------------

/// Query interface for amiibo figurines.
#[derive(Clone, Copy)]
pub struct AmiiboQuery<'a> {
    client: &'a AmiiboClient,
}

impl<'a> AmiiboQuery<'a> {
    /// Create a new `AmiiboQuery` bound to the given client.
    pub fn new(client: &'a AmiiboClient) -> Self {
        Self { client }
    }

    /// List the amiibo matching `filter`.
    ///
    /// Fails with [`AmiiboError::InvalidArgument`] before any request is made
    /// if `head` or `tail` is not exactly 8 characters. No match is an empty
    /// list.
    pub async fn list(self, filter: &AmiiboFilter) -> Result<Vec<Amiibo>> {
        let endpoint = filter.endpoint()?;
        self.client.fetch_list(&endpoint).await
    }

    /// List every amiibo.
    pub async fn all(self) -> Result<Vec<Amiibo>> {
        self.list(&AmiiboFilter::default()).await
    }

    /// Get a single amiibo by its 16 character hexadecimal id.
    ///
    /// Returns `Ok(None)` when no amiibo has that id. The service does not
    /// support game or usage details on this lookup.
    pub async fn get(self, id: &str) -> Result<Option<Amiibo>> {
        let endpoint = id_endpoint(id)?;
        self.client.fetch_one(&endpoint).await
    }
}
