//! Profile text construction
//!
//! Each entity is flattened into one whitespace-joined blob. Field order is
//! fixed so the same data always yields the same text.

use crate::model::{IntakeProfile, Trainee};

/// Join trimmed, non-empty parts with single spaces
pub fn join_text<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = String::new();
    for part in parts.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(part);
    }
    text
}

/// Agency, role, intake answers, then the role's tags.
///
/// A missing intake row contributes nothing; so does an unknown role.
pub fn trainee_profile_text(
    trainee: &Trainee,
    intake: Option<&IntakeProfile>,
    role_tags: Option<&str>,
) -> String {
    let (interests, skills, goals, notes) = match intake {
        Some(i) => (
            i.interests.as_str(),
            i.skills.as_str(),
            i.goals.as_str(),
            i.notes.as_str(),
        ),
        None => ("", "", "", ""),
    };

    join_text([
        trainee.agency.as_str(),
        trainee.role.as_str(),
        interests,
        skills,
        goals,
        notes,
        role_tags.unwrap_or_default(),
    ])
}
