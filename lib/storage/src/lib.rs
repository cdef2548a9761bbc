//! # coursematch Storage
//!
//! Data access layer for the coursematch recommender.
//!
//! - [`DataSet`] - the five reference tables, loaded once from CSV
//! - [`read_table`] / [`write_table`] - headed CSV files with UTF-8 BOM handling
//! - [`SyntheticData`] - seeded generator for demo and test data
//!
//! Expected layout of a data directory:
//!
//! ```text
//! data/
//! ├── courses.csv          course_id, title, track, level, audience, description
//! ├── trainees.csv         trainee_id, agency, military, role
//! ├── intake_profiles.csv  trainee_id, interests, skills, goals, notes
//! ├── interactions.csv     trainee_id, course_id, event, timestamp
//! └── role_to_tags.csv     role, tags
//! ```

pub mod dataset;
pub mod synthetic;
pub mod table;

pub use dataset::{
    DataSet, COURSES_FILE, COURSES_HEADER, INTAKE_FILE, INTAKE_HEADER, INTERACTIONS_FILE,
    INTERACTIONS_HEADER, ROLE_TAGS_FILE, ROLE_TAGS_HEADER, TRAINEES_FILE, TRAINEES_HEADER,
};
pub use synthetic::{SyntheticConfig, SyntheticData};
pub use table::{read_table, write_table};
