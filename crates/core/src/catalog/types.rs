//! Types for the movie catalog.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Poster path used when a record has no `posterLink`.
pub const PLACEHOLDER_POSTER: &str = "/placeholder.svg";

/// One movie in the catalog.
///
/// The data file is not consistent about the year key, so both `releaseYear`
/// and `year` are accepted on input. Output always uses `releaseYear`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMovieRecord")]
pub struct MovieRecord {
    /// Unique, stable identifier.
    pub id: i64,
    /// Display title (never empty).
    pub title: String,
    /// Short description shown on cards.
    pub description: String,
    /// Longer plot summary.
    pub plot: String,
    /// Year of release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    /// Runtime in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Rating on a 0-10 scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub director: String,
    /// Free text, e.g. "Sci-Fi, Thriller".
    pub genre: String,
    /// Free text, e.g. "Leonardo DiCaprio, Elliot Page".
    pub cast: String,
    /// Poster URL (if available).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_link: Option<String>,
}

impl MovieRecord {
    /// Poster URL, or the placeholder when the record has none.
    pub fn poster_or_placeholder(&self) -> &str {
        self.poster_link
            .as_deref()
            .filter(|link| !link.trim().is_empty())
            .unwrap_or(PLACEHOLDER_POSTER)
    }
}

/// Wire shape of a record as found in the data file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMovieRecord {
    id: i64,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    plot: Option<String>,
    #[serde(default)]
    release_year: Option<i32>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    director: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    genre: Option<String>,
    #[serde(default, deserialize_with = "text_or_list")]
    cast: Option<String>,
    #[serde(default)]
    poster_link: Option<String>,
}

/// A record that cannot be accepted into the catalog.
#[derive(Debug)]
pub struct InvalidRecord(String);

impl fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<RawMovieRecord> for MovieRecord {
    type Error = InvalidRecord;

    fn try_from(raw: RawMovieRecord) -> Result<Self, Self::Error> {
        if raw.title.trim().is_empty() {
            return Err(InvalidRecord(format!("movie {} has an empty title", raw.id)));
        }

        Ok(Self {
            id: raw.id,
            title: raw.title,
            description: raw.description.unwrap_or_default(),
            plot: raw.plot.unwrap_or_default(),
            release_year: raw.release_year.or(raw.year),
            duration: raw.duration,
            rating: raw.rating,
            director: raw.director.unwrap_or_default(),
            genre: raw.genre.unwrap_or_default(),
            cast: raw.cast.unwrap_or_default(),
            poster_link: raw.poster_link,
        })
    }
}

/// Accepts either a plain string or a list of strings (joined with ", ").
fn text_or_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrList {
        Text(String),
        List(Vec<String>),
    }

    Ok(
        Option::<TextOrList>::deserialize(deserializer)?.map(|value| match value {
            TextOrList::Text(text) => text,
            TextOrList::List(items) => items.join(", "),
        }),
    )
}

/// Errors for catalog operations.
///
/// A missing record is not an error: lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog source unavailable ({path}): {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog data ({path}): {reason}")]
    MalformedData { path: String, reason: String },
}

impl CatalogError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::SourceUnavailable { .. } => "source_unavailable",
            CatalogError::MalformedData { .. } => "malformed_data",
        }
    }
}
