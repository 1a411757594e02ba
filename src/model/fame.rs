use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A showcased accomplishment on the wall of fame.
///
/// `alumni_id` references an [`Alumni`](super::Alumni) record; the reference
/// is not guaranteed to resolve and consumers must handle the missing case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallOfFameEntry {
    pub id: String,
    pub alumni_id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: FameCategory,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FameCategory {
    Achievement,
    Innovation,
    Leadership,
    Philanthropy,
    Other,
}
