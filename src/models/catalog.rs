use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NamedEntity — key/name pair shared by the secondary catalogs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedEntity {
    /// Hex key, e.g. `0x00` or `0x0000`.
    pub key: String,
    pub name: String,
}

pub type AmiiboType = NamedEntity;
pub type GameSeries = NamedEntity;
pub type AmiiboSeries = NamedEntity;
pub type Character = NamedEntity;
