use crate::table::read_table;
use ahash::AHashMap;
use coursematch_core::{
    Course, Error, IntakeProfile, Interaction, Result, RoleTags, Trainee, TraineeId,
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

pub const COURSES_FILE: &str = "courses.csv";
pub const TRAINEES_FILE: &str = "trainees.csv";
pub const INTAKE_FILE: &str = "intake_profiles.csv";
pub const INTERACTIONS_FILE: &str = "interactions.csv";
pub const ROLE_TAGS_FILE: &str = "role_to_tags.csv";

pub const COURSES_HEADER: &[&str] = &[
    "course_id",
    "title",
    "track",
    "level",
    "audience",
    "description",
];
pub const TRAINEES_HEADER: &[&str] = &["trainee_id", "agency", "military", "role"];
pub const INTAKE_HEADER: &[&str] = &["trainee_id", "interests", "skills", "goals", "notes"];
pub const INTERACTIONS_HEADER: &[&str] = &["trainee_id", "course_id", "event", "timestamp"];
pub const ROLE_TAGS_HEADER: &[&str] = &["role", "tags"];

#[derive(Deserialize)]
struct CourseRow {
    course_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    track: String,
    #[serde(default)]
    level: String,
    #[serde(default)]
    audience: String,
    #[serde(default)]
    description: String,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course::new(
            row.course_id,
            row.title,
            row.track,
            row.level,
            row.audience,
            row.description,
        )
    }
}

/// All reference tables, loaded once and read-only afterwards
#[derive(Debug, Clone)]
pub struct DataSet {
    courses: Vec<Course>,
    trainees: Vec<Trainee>,
    intake: AHashMap<TraineeId, IntakeProfile>,
    interactions: Vec<Interaction>,
    role_tags: AHashMap<String, String>,
    // key -> row position
    course_index: AHashMap<String, usize>,
    trainee_index: AHashMap<TraineeId, usize>,
}

impl DataSet {
    /// Load the five CSV tables from `data_dir`.
    ///
    /// Any missing file, malformed row or duplicate key is a
    /// [`Error::StartupLoad`].
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        info!("Loading data from {:?}", data_dir);

        let courses: Vec<CourseRow> = read_table(&data_dir.join(COURSES_FILE))?;
        let trainees: Vec<Trainee> = read_table(&data_dir.join(TRAINEES_FILE))?;
        let intake: Vec<IntakeProfile> = read_table(&data_dir.join(INTAKE_FILE))?;
        let interactions: Vec<Interaction> = read_table(&data_dir.join(INTERACTIONS_FILE))?;
        let role_tags: Vec<RoleTags> = read_table(&data_dir.join(ROLE_TAGS_FILE))?;

        let data = Self::from_parts(
            courses.into_iter().map(Course::from).collect(),
            trainees,
            intake,
            interactions,
            role_tags,
        )?;

        info!(
            courses = data.courses.len(),
            trainees = data.trainees.len(),
            intake = data.intake.len(),
            interactions = data.interactions.len(),
            roles = data.role_tags.len(),
            "Data loaded"
        );
        Ok(data)
    }

    /// Assemble a data set from in-memory rows, enforcing key uniqueness
    pub fn from_parts(
        courses: Vec<Course>,
        trainees: Vec<Trainee>,
        intake: Vec<IntakeProfile>,
        interactions: Vec<Interaction>,
        role_tags: Vec<RoleTags>,
    ) -> Result<Self> {
        let mut course_index = AHashMap::with_capacity(courses.len());
        for (pos, course) in courses.iter().enumerate() {
            if course_index.insert(course.course_id.clone(), pos).is_some() {
                return Err(duplicate(COURSES_FILE, "course_id", &course.course_id));
            }
        }

        let mut trainee_index = AHashMap::with_capacity(trainees.len());
        for (pos, trainee) in trainees.iter().enumerate() {
            if trainee_index.insert(trainee.trainee_id.clone(), pos).is_some() {
                return Err(duplicate(TRAINEES_FILE, "trainee_id", trainee.trainee_id.as_str()));
            }
        }

        let mut intake_map = AHashMap::with_capacity(intake.len());
        for profile in intake {
            let id = profile.trainee_id.clone();
            if intake_map.insert(id.clone(), profile).is_some() {
                return Err(duplicate(INTAKE_FILE, "trainee_id", id.as_str()));
            }
        }

        let mut role_map = AHashMap::with_capacity(role_tags.len());
        for RoleTags { role, tags } in role_tags {
            if role_map.contains_key(&role) {
                return Err(duplicate(ROLE_TAGS_FILE, "role", &role));
            }
            role_map.insert(role, tags);
        }

        Ok(Self {
            courses,
            trainees,
            intake: intake_map,
            interactions,
            role_tags: role_map,
            course_index,
            trainee_index,
        })
    }

    #[inline]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[inline]
    pub fn trainees(&self) -> &[Trainee] {
        &self.trainees
    }

    #[inline]
    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.course_position(course_id).map(|pos| &self.courses[pos])
    }

    /// Row position of a course in [`DataSet::courses`]
    pub fn course_position(&self, course_id: &str) -> Option<usize> {
        self.course_index.get(course_id).copied()
    }

    pub fn trainee(&self, trainee_id: &TraineeId) -> Option<&Trainee> {
        self.trainee_index.get(trainee_id).map(|&pos| &self.trainees[pos])
    }

    pub fn intake(&self, trainee_id: &TraineeId) -> Option<&IntakeProfile> {
        self.intake.get(trainee_id)
    }

    /// Tag string for a role, `None` for unknown roles
    pub fn role_tags(&self, role: &str) -> Option<&str> {
        self.role_tags.get(role.trim()).map(String::as_str)
    }
}

fn duplicate(file: &str, column: &str, key: &str) -> Error {
    Error::startup_load(file, format!("duplicate {column} {key:?}"))
}
