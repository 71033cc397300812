use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::domain::{Artist, Photograph};
use crate::error::{Error, Result};
use crate::table::{Row, TableReader};

/// In-memory catalog of photographs and the artists who took them.
///
/// Both collections preserve insertion order, and insertion order is the
/// return order of every listing query. Records are never updated or removed
/// once added; queries take `&self` and are side-effect-free.
#[derive(Debug, Default)]
pub struct Catalog {
    photographs: Vec<Photograph>,
    artists: Vec<Artist>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Ingestion ────────────────────────────────────────────────────

    /// Append a photograph. Duplicate ids are accepted as-is; lookups
    /// return the first match.
    pub fn add_photograph(&mut self, photograph: Photograph) {
        self.photographs.push(photograph);
    }

    /// Append an artist. Same duplicate-id behavior as photographs.
    pub fn add_artist(&mut self, artist: Artist) {
        self.artists.push(artist);
    }

    /// Bulk-load photographs from a comma-separated file whose data lines
    /// carry `id, name, artist_id, year` in that order (the header row is
    /// not semantically validated — mapping is positional). Returns the
    /// number of records appended.
    pub fn load_photographs(&mut self, path: &Path) -> Result<usize> {
        let mut loaded = 0;
        for row in TableReader::open(path)? {
            self.add_photograph(photograph_from_row(&row?)?);
            loaded += 1;
        }
        log::debug!("loaded {loaded} photographs from {}", path.display());
        Ok(loaded)
    }

    /// Bulk-load artists from a comma-separated file whose data lines carry
    /// `id, name, born, died, country` in that order. Returns the number of
    /// records appended.
    pub fn load_artists(&mut self, path: &Path) -> Result<usize> {
        let mut loaded = 0;
        for row in TableReader::open(path)? {
            self.add_artist(artist_from_row(&row?)?);
            loaded += 1;
        }
        log::debug!("loaded {loaded} artists from {}", path.display());
        Ok(loaded)
    }

    // ── Collections ──────────────────────────────────────────────────

    /// All photographs, in insertion order.
    pub fn photographs(&self) -> &[Photograph] {
        &self.photographs
    }

    /// All artists, in insertion order.
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn photograph_count(&self) -> usize {
        self.photographs.len()
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    // ── Lookups ──────────────────────────────────────────────────────

    /// First artist whose id equals `id`, if any.
    pub fn find_artist_by_id(&self, id: &str) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }

    /// First photograph whose id equals `id`, if any.
    pub fn find_photograph_by_id(&self, id: &str) -> Option<&Photograph> {
        self.photographs.iter().find(|photograph| photograph.id == id)
    }

    // ── Joins, filters, grouping ─────────────────────────────────────

    /// Every photograph taken by `artist`, in insertion order.
    pub fn find_photographs_by_artist(&self, artist: &Artist) -> Vec<&Photograph> {
        self.photographs
            .iter()
            .filter(|photograph| photograph.artist_id == artist.id)
            .collect()
    }

    /// Artists with strictly more than one photograph in the catalog, in
    /// `artists` insertion order.
    pub fn artists_with_multiple_photographs(&self) -> Vec<&Artist> {
        self.artists
            .iter()
            .filter(|artist| {
                self.photographs
                    .iter()
                    .filter(|photograph| photograph.artist_id == artist.id)
                    .count()
                    > 1
            })
            .collect()
    }

    /// Photographs whose artist is from `country` (exact, case-sensitive
    /// match), in `photographs` insertion order — not grouped by artist.
    pub fn photographs_taken_by_artist_from(&self, country: &str) -> Vec<&Photograph> {
        self.photographs
            .iter()
            .filter(|photograph| {
                self.find_artist_by_id(&photograph.artist_id)
                    .is_some_and(|artist| artist.country == country)
            })
            .collect()
    }

    /// Photographs whose capture year falls within `range`, both ends
    /// inclusive, in insertion order. Fails on the first year that is not a
    /// whole number.
    pub fn photographs_taken_between(
        &self,
        range: RangeInclusive<i64>,
    ) -> Result<Vec<&Photograph>> {
        let mut matches = Vec::new();
        for photograph in &self.photographs {
            let year = parse_number("year", &photograph.year)?;
            if range.contains(&year) {
                matches.push(photograph);
            }
        }
        Ok(matches)
    }

    /// Map from the artist's age at capture to the photograph's name, over
    /// every photograph by `artist` (age = year − born).
    ///
    /// When two photographs yield the same age, the later-inserted one's
    /// name is kept — last-write-wins, by design.
    pub fn artists_photographs_by_age(&self, artist: &Artist) -> Result<BTreeMap<i64, String>> {
        let born = parse_number("born", &artist.born)?;
        let mut by_age = BTreeMap::new();
        for photograph in self
            .photographs
            .iter()
            .filter(|photograph| photograph.artist_id == artist.id)
        {
            let year = parse_number("year", &photograph.year)?;
            by_age.insert(year - born, photograph.name.clone());
        }
        Ok(by_age)
    }
}

// ── Row adapters ─────────────────────────────────────────────────────

const PHOTOGRAPH_FIELDS: usize = 4;
const ARTIST_FIELDS: usize = 5;

/// Positional mapping of a photograph row: id, name, artist_id, year.
fn photograph_from_row(row: &Row) -> Result<Photograph> {
    Ok(Photograph::new(
        required_field(row, 0, PHOTOGRAPH_FIELDS)?,
        required_field(row, 1, PHOTOGRAPH_FIELDS)?,
        required_field(row, 2, PHOTOGRAPH_FIELDS)?,
        required_field(row, 3, PHOTOGRAPH_FIELDS)?,
    ))
}

/// Positional mapping of an artist row: id, name, born, died, country.
fn artist_from_row(row: &Row) -> Result<Artist> {
    Ok(Artist::new(
        required_field(row, 0, ARTIST_FIELDS)?,
        required_field(row, 1, ARTIST_FIELDS)?,
        required_field(row, 2, ARTIST_FIELDS)?,
        required_field(row, 3, ARTIST_FIELDS)?,
        required_field(row, 4, ARTIST_FIELDS)?,
    ))
}

fn required_field<'r>(row: &'r Row, index: usize, expected: usize) -> Result<&'r str> {
    row.field(index).ok_or(Error::MalformedRecord {
        line: row.line(),
        expected,
        found: row.len(),
    })
}

fn parse_number(field: &'static str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
