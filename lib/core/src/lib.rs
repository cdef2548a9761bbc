//! # coursematch Core
//!
//! Core types for the coursematch recommender.
//!
//! - [`TraineeId`] / [`normalize_trainee_id`] - canonical trainee identifiers
//! - [`Course`], [`Trainee`], [`IntakeProfile`], [`RoleTags`], [`Interaction`] - loaded entities
//! - [`join_text`] / [`trainee_profile_text`] - profile text construction
//! - [`CourseRecommendation`], [`TraineeRecommendation`] - ranked results
//!
//! ## Example
//!
//! ```rust
//! use coursematch_core::{normalize_trainee_id, Course};
//!
//! assert_eq!(normalize_trainee_id(Some("Trainee-7")).unwrap(), "متدرب-007");
//!
//! let course = Course::new("C001", "Intro", "Forensics", "", "All", "Evidence handling");
//! assert_eq!(course.text(), "Intro Forensics All Evidence handling");
//! ```

pub mod error;
pub mod id;
pub mod model;
pub mod profile;
pub mod recommendation;

pub use error::{Error, Result};
pub use id::{normalize_trainee_id, TraineeId, TRAINEE_PREFIX};
pub use model::{
    parse_flag, Course, IntakeProfile, Interaction, InteractionEvent, RoleTags, Trainee,
};
pub use profile::{join_text, trainee_profile_text};
pub use recommendation::{CourseRecommendation, TraineeRecommendation};
