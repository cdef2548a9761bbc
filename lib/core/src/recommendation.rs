use crate::model::{Course, Trainee};
use crate::TraineeId;
use serde::{Deserialize, Serialize};

/// A course ranked for a trainee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub course_id: String,
    pub title: String,
    pub track: String,
    pub level: String,
    pub score: f32,
}

impl CourseRecommendation {
    #[must_use]
    pub fn new(course: &Course, score: f32) -> Self {
        Self {
            course_id: course.course_id.clone(),
            title: course.title.clone(),
            track: course.track.clone(),
            level: course.level.clone(),
            score,
        }
    }
}

/// A trainee ranked for a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraineeRecommendation {
    pub trainee_id: TraineeId,
    pub agency: String,
    pub role: String,
    pub score: f32,
}

impl TraineeRecommendation {
    #[must_use]
    pub fn new(trainee: &Trainee, score: f32) -> Self {
        Self {
            trainee_id: trainee.trainee_id.clone(),
            agency: trainee.agency.clone(),
            role: trainee.role.clone(),
            score,
        }
    }
}
