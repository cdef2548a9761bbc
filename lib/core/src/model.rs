use crate::id::TraineeId;
use crate::profile::join_text;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A training course with its profile text precomputed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub course_id: String,
    pub title: String,
    pub track: String,
    pub level: String,
    pub audience: String,
    pub description: String,
    #[serde(skip)]
    text: String,
}

impl Course {
    #[must_use]
    pub fn new(
        course_id: impl Into<String>,
        title: impl Into<String>,
        track: impl Into<String>,
        level: impl Into<String>,
        audience: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut course = Self {
            course_id: course_id.into(),
            title: title.into(),
            track: track.into(),
            level: level.into(),
            audience: audience.into(),
            description: description.into(),
            text: String::new(),
        };
        course.text = join_text([
            course.title.as_str(),
            course.track.as_str(),
            course.level.as_str(),
            course.audience.as_str(),
            course.description.as_str(),
        ]);
        course
    }

    /// Profile text: title, track, level, audience, description
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainee {
    pub trainee_id: TraineeId,
    pub agency: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub military: bool,
    pub role: String,
}

/// Free-text intake answers; every field may be empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeProfile {
    pub trainee_id: TraineeId,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub notes: String,
}

/// Comma-separated tag list attached to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTags {
    pub role: String,
    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionEvent {
    Enroll,
    Complete,
}

/// Enrollment log entry. Loaded but not used for ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub trainee_id: TraineeId,
    pub course_id: String,
    pub event: InteractionEvent,
    pub timestamp: NaiveDate,
}

/// Arabic yes/no as written by the generator, plus the usual ASCII spellings
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "نعم" => Some(true),
        "لا" => Some(false),
        v if ["true", "yes", "1"].iter().any(|t| v.eq_ignore_ascii_case(t)) => Some(true),
        v if ["false", "no", "0"].iter().any(|t| v.eq_ignore_ascii_case(t)) => Some(false),
        _ => None,
    }
}

/// The flag is informational only; values it cannot read count as `false`
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_flag(&raw).unwrap_or_else(|| {
        warn!("unrecognized military flag {:?}, treating as false", raw);
        false
    }))
}
