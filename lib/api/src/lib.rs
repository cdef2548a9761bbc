//! # coursematch API
//!
//! Read-only REST endpoints over a shared
//! [`RecommenderEngine`](coursematch_engine::RecommenderEngine):
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/health` | `{"status": "ok"}` |
//! | GET | `/recommend/trainee/{trainee_id}?top_k=10` | ranked courses |
//! | GET | `/recommend/course/{course_id}?top_k=10` | ranked trainees |
//!
//! Unknown ids answer `404`, malformed trainee ids `400`; error bodies are
//! `{"error": "..."}`. CORS is open to any origin.

pub mod rest;

pub use rest::RestApi;
