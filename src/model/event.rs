use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// An alumni event, online or in person.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub image: String,
    pub organizer: String,
    /// Alumni ids of registered attendees.
    pub attendees: Vec<String>,
    pub max_attendees: Option<u32>,
    pub is_online: bool,
    pub meeting_link: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whether the event lies strictly before the given day.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Networking,
    Workshop,
    Conference,
    Social,
    Mentorship,
    Other,
}
