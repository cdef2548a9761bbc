//! # coursematch Engine
//!
//! Content-based recommendations in both directions:
//!
//! - [`RecommenderEngine::recommend_for_trainee`] - courses for a trainee
//! - [`RecommenderEngine::recommend_for_course`] - trainees for a course
//!
//! The engine owns the loaded [`DataSet`](coursematch_storage::DataSet), a
//! TF-IDF model fitted once on the course texts and the course vectors.
//! It has no interior mutability; wrap it in an `Arc` to share it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use coursematch_engine::{RecommenderEngine, DEFAULT_TOP_K};
//!
//! let engine = RecommenderEngine::load("./data").unwrap();
//! for rec in engine.recommend_for_trainee("Trainee-7", DEFAULT_TOP_K).unwrap() {
//!     println!("{} {:.3}", rec.course_id, rec.score);
//! }
//! ```

pub mod engine;

pub use coursematch_similarity::DEFAULT_TOP_K;
pub use engine::RecommenderEngine;
