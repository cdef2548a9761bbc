//! # coursematch
//!
//! A content-based recommender that matches training courses and trainees
//! by comparing TF-IDF weighted text profiles.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! coursematch generate --out ./data
//! coursematch serve --data-dir ./data --http-port 8000
//! curl "http://localhost:8000/recommend/trainee/Trainee-7?top_k=5"
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use coursematch::prelude::*;
//!
//! let engine = RecommenderEngine::load("./data").unwrap();
//!
//! // Courses for a trainee; any accepted id form works
//! let courses = engine.recommend_for_trainee("Trainee-7", 5).unwrap();
//!
//! // Trainees for a course
//! let trainees = engine.recommend_for_course("C001", DEFAULT_TOP_K).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! - `coursematch-core` - identifiers, entities, profile text, errors
//! - `coursematch-similarity` - tokenizer, TF-IDF model, cosine ranking
//! - `coursematch-storage` - CSV tables and the synthetic data generator
//! - `coursematch-engine` - the recommendation engine
//! - `coursematch-api` - actix-web REST API

// Re-export core types
pub use coursematch_core::{
    normalize_trainee_id, Course, CourseRecommendation, Error, IntakeProfile, Interaction,
    InteractionEvent, Result, RoleTags, Trainee, TraineeId, TraineeRecommendation,
};

// Re-export similarity
pub use coursematch_similarity::{rank, Ranked, SparseVector, TfidfModel, DEFAULT_TOP_K};

// Re-export storage
pub use coursematch_storage::{DataSet, SyntheticConfig, SyntheticData};

// Re-export engine and API
pub use coursematch_api::RestApi;
pub use coursematch_engine::RecommenderEngine;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        normalize_trainee_id, CourseRecommendation, DataSet, Error, RecommenderEngine, Result,
        TraineeId, TraineeRecommendation, DEFAULT_TOP_K,
    };
}
