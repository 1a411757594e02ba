use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mentee's request to be mentored by a specific mentor.
///
/// Both `mentee_id` and `mentor_id` reference [`Alumni`](super::Alumni)
/// records by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipRequest {
    pub id: String,
    pub mentee_id: String,
    pub mentor_id: String,
    pub message: String,
    pub areas: Vec<String>,
    pub status: MentorshipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MentorshipStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}
