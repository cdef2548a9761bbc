//! # coursematch Similarity
//!
//! Text vectorization and ranking for the coursematch recommender.
//!
//! - [`tokenize`] - lowercase word tokens
//! - [`TfidfModel`] - vocabulary and IDF weights fitted once on a corpus
//! - [`SparseVector`] - L2-normalized sparse TF-IDF vectors
//! - [`rank`] - stable top-k ranking by cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use coursematch_similarity::{rank, TfidfModel};
//!
//! let courses = ["digital forensics", "incident response", "network forensics"];
//! let model = TfidfModel::fit(&courses);
//! let vectors = model.transform_batch(&courses);
//!
//! let query = model.transform("forensics of network traffic");
//! let ranked = rank(&query, &vectors, 2);
//! assert_eq!(ranked[0].index, 2);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   fit    ┌─────────────┐ transform ┌─────────────┐
//! │   Corpus    │─────────>│ TfidfModel  │──────────>│SparseVector │
//! │  (courses)  │          │ (frozen)    │           │ (unit norm) │
//! └─────────────┘          └─────────────┘           └─────────────┘
//!                                                           │
//!                                                    ┌─────────────┐
//!                                                    │    rank     │
//!                                                    │  (top-k)    │
//!                                                    └─────────────┘
//! ```

pub mod rank;
pub mod sparse;
pub mod tfidf;
pub mod tokenizer;

pub use rank::{cosine_scores, rank, top_k, Ranked, DEFAULT_TOP_K};
pub use sparse::SparseVector;
pub use tfidf::TfidfModel;
pub use tokenizer::tokenize;
