use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single alumni profile as shown in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumni {
    pub id: String,
    pub name: String,
    pub email: String,
    pub graduation_year: u16,
    pub degree: String,
    pub major: String,
    pub current_position: String,
    pub company: String,
    pub location: String,
    pub bio: String,
    pub profile_image: String,
    pub cover_image: String,
    pub skills: Vec<String>,
    pub achievements: Vec<Achievement>,
    pub social_links: SocialLinks,
    pub is_verified: bool,
    pub is_mentor: bool,
    pub is_available_for_mentorship: bool,
    pub mentorship_areas: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alumni {
    /// Mentors are only listed in the mentorship browser while they accept
    /// new mentees.
    pub fn accepts_mentees(&self) -> bool {
        self.is_mentor && self.is_available_for_mentorship
    }
}

/// A notable accomplishment attached to an alumni profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year: u16,
    pub category: AchievementCategory,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AchievementCategory {
    Academic,
    Professional,
    Award,
    Publication,
    Other,
}

/// Per-platform profile links; every platform is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
}
