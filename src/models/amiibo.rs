use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use super::dates::lenient_date;

// ---------------------------------------------------------------------------
// Amiibo — A single figurine as returned by `/amiibo/`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amiibo {
    /// First 8 hexadecimal characters of the identifier.
    pub head: String,
    /// Last 8 hexadecimal characters of the identifier.
    pub tail: String,
    pub name: String,
    pub character: String,
    pub amiibo_series: String,
    pub game_series: String,
    pub image: Option<Url>,
    #[serde(rename = "type")]
    pub type_field: String,
    pub release: ReleaseDates,
    #[serde(rename = "games3DS")]
    pub games_3ds: Option<Vec<Game>>,
    #[serde(rename = "gamesWiiU")]
    pub games_wii_u: Option<Vec<Game>>,
    pub games_switch: Option<Vec<Game>>,
}

impl Amiibo {
    /// The full 16 character identifier (`head` followed by `tail`).
    pub fn id(&self) -> String {
        format!("{}{}", self.head, self.tail)
    }
}

// ---------------------------------------------------------------------------
// ReleaseDates — Per-region release dates
// ---------------------------------------------------------------------------

/// Release dates for Australia, Europe, Japan and North America. A region the
/// figurine was not released in is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDates {
    #[serde(default, with = "lenient_date")]
    pub au: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub eu: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub jp: Option<NaiveDate>,
    #[serde(default, with = "lenient_date")]
    pub na: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Game / GameUsage — Only present with `showgames` / `showusage`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "gameID")]
    pub ids: Vec<String>,
    #[serde(rename = "gameName")]
    pub name: String,
    #[serde(rename = "amiiboUsage")]
    pub usage: Option<Vec<GameUsage>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUsage {
    #[serde(rename = "Usage")]
    pub usage: String,
    #[serde(rename = "write")]
    pub writable: bool,
}
