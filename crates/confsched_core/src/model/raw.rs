//! Raw backend records.
//!
//! # Responsibility
//! - Mirror the session/speaker/day documents exactly as the backend stores them.
//! - Absorb loose typing (numeric vs string ids, nulls, missing fields) at the
//!   deserialization boundary.
//!
//! # Invariants
//! - Deserialization never fails on a missing or null scalar field.
//! - `speaker_ids` keeps length and order of the stored list; null entries become
//!   empty references rather than being dropped.

use serde::{Deserialize, Deserializer, Serialize};

/// One session document. Source of truth for event identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSession {
    #[serde(default, deserialize_with = "loose_string")]
    pub id: String,
    /// Reference into the day list.
    #[serde(default, deserialize_with = "loose_string")]
    pub day_id: String,
    /// Stored as `name` by the backend.
    #[serde(default, alias = "name", deserialize_with = "loose_string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub place_id: String,
    #[serde(default, deserialize_with = "loose_optional_string")]
    pub experience_level: Option<String>,
    #[serde(default, deserialize_with = "loose_string_list")]
    pub speaker_ids: Vec<String>,
}

/// One speaker document. The name may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpeaker {
    #[serde(default, deserialize_with = "loose_string")]
    pub id: String,
    #[serde(default, deserialize_with = "loose_optional_string")]
    pub name: Option<String>,
}

/// One conference day document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDay {
    #[serde(default, deserialize_with = "loose_string")]
    pub id: String,
    /// Calendar date as stored, e.g. `2024-05-01`.
    #[serde(default, deserialize_with = "loose_string")]
    pub date: String,
}

/// Full snapshot of the session collection.
pub type RawSessionSet = Vec<RawSession>;
/// Full snapshot of the speaker roster.
pub type RawSpeakerSet = Vec<RawSpeaker>;
/// Full snapshot of the day list.
pub type RawDaySet = Vec<RawDay>;

impl RawSession {
    pub fn new(id: impl Into<String>, day_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            day_id: day_id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_place(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = place_id.into();
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.experience_level = Some(level.into());
        self
    }

    pub fn with_speakers<I, S>(mut self, speaker_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.speaker_ids = speaker_ids.into_iter().map(Into::into).collect();
        self
    }
}

impl RawSpeaker {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Speaker record whose display name is missing in the backend.
    pub fn unnamed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

impl RawDay {
    pub fn new(id: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseScalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Flag(bool),
}

impl LooseScalar {
    fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Integer(value) => value.to_string(),
            Self::Unsigned(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Flag(value) => value.to_string(),
        }
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_optional_string(deserializer)?.unwrap_or_default())
}

fn loose_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseScalar>::deserialize(deserializer)?;
    Ok(value.map(LooseScalar::into_string))
}

fn loose_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Option<LooseScalar>>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map(|value| value.map(LooseScalar::into_string).unwrap_or_default())
        .collect())
}
