/// The AmiiboAPI origin every endpoint is resolved against.
pub const BASE_URL: &str = "https://amiiboapi.com/api";

pub const AMIIBO_PATH: &str = "/amiibo/";
pub const TYPE_PATH: &str = "/type";
pub const GAME_SERIES_PATH: &str = "/gameseries";
pub const AMIIBO_SERIES_PATH: &str = "/amiiboseries";
pub const CHARACTER_PATH: &str = "/character";
pub const LAST_UPDATED_PATH: &str = "/lastupdated";

/// Length of each identifier half (`head` / `tail`).
pub const ID_HALF_LEN: usize = 8;
/// Length of a full amiibo identifier.
pub const ID_LEN: usize = 16;

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
