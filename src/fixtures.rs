use serde::de::DeserializeOwned;

use crate::error::{HubError, Result};
use crate::model::{Alumni, Event, MentorshipRequest, WallOfFameEntry};
use crate::store::DataSource;

const ALUMNI_JSON: &str = include_str!("../data/alumni.json");
const EVENTS_JSON: &str = include_str!("../data/events.json");
const WALL_OF_FAME_JSON: &str = include_str!("../data/wall_of_fame.json");
const MENTORSHIP_REQUESTS_JSON: &str = include_str!("../data/mentorship_requests.json");

/// The embedded mock dataset shipped with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

fn decode<T: DeserializeOwned>(entity: &'static str, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|source| HubError::Decode { entity, source })
}

impl DataSource for FixtureSource {
    fn load_alumni(&self) -> Result<Vec<Alumni>> {
        decode("alumni", ALUMNI_JSON)
    }

    fn load_events(&self) -> Result<Vec<Event>> {
        decode("event", EVENTS_JSON)
    }

    fn load_wall_of_fame(&self) -> Result<Vec<WallOfFameEntry>> {
        decode("wall-of-fame", WALL_OF_FAME_JSON)
    }

    fn load_mentorship_requests(&self) -> Result<Vec<MentorshipRequest>> {
        decode("mentorship-request", MENTORSHIP_REQUESTS_JSON)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{EventType, MentorshipStatus};

    #[test]
    fn fixture_alumni_decode() {
        let alumni = FixtureSource.load_alumni().unwrap();
        assert_eq!(alumni.len(), 5);
        assert_eq!(alumni[0].graduation_year, 2018);
        assert_eq!(alumni[0].skills.len(), 6);
        assert!(alumni[0].social_links.github.is_some());
        assert!(alumni[2].social_links.github.is_none());
    }

    #[test]
    fn fixture_events_decode() {
        let events = FixtureSource.load_events().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event_type, EventType::Networking);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(events[1].meeting_link.as_deref(), Some("https://zoom.us/j/123456789"));
        assert!(events[0].meeting_link.is_none());
    }

    #[test]
    fn fixture_wall_of_fame_decode() {
        let entries = FixtureSource.load_wall_of_fame().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].featured);
        assert!(!entries[2].featured);
    }

    #[test]
    fn fixture_mentorship_requests_decode() {
        let requests = FixtureSource.load_mentorship_requests().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].status, MentorshipStatus::Pending);
        assert_eq!(requests[1].status, MentorshipStatus::Accepted);
    }

    #[test]
    fn decode_error_reports_entity() {
        let err = decode::<Alumni>("alumni", "not json").unwrap_err();
        assert!(err.to_string().contains("alumni"));
    }
}
