use serde::{Deserialize, Serialize};

/// A single photograph in the catalog.
///
/// `year` is stored as text exactly as ingested; queries that need it
/// numerically parse it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photograph {
    pub id: String,
    pub name: String,
    /// References [`Artist::id`]. Not checked at insert time — the artist
    /// may be added later, or never.
    pub artist_id: String,
    pub year: String,
}

impl Photograph {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        artist_id: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist_id: artist_id.into(),
            year: year.into(),
        }
    }
}

/// A photographer. `born` and `died` are stored as text, like
/// [`Photograph::year`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub born: String,
    pub died: String,
    pub country: String,
}

impl Artist {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        born: impl Into<String>,
        died: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            born: born.into(),
            died: died.into(),
            country: country.into(),
        }
    }
}
