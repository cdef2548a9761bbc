//! TF-IDF vector space model
//!
//! The model is fitted once over a reference corpus and then frozen:
//! vocabulary and IDF weights never change after [`TfidfModel::fit`].
//! Any text can be mapped into that fixed space with
//! [`TfidfModel::transform`]; tokens outside the vocabulary are ignored.

use crate::sparse::SparseVector;
use crate::tokenizer::tokenize;
use ahash::AHashMap;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct TfidfModel {
    // term -> dimension; dimensions follow sorted term order
    vocabulary: AHashMap<String, u32>,
    // dimension -> idf weight
    idf: Vec<f32>,
    n_documents: usize,
}

impl TfidfModel {
    /// Fit vocabulary and smoothed IDF weights over `corpus`.
    ///
    /// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Self {
        let n_documents = corpus.len();

        // term -> document frequency, sorted by term
        let mut doc_freqs: BTreeMap<String, u32> = BTreeMap::new();
        for doc in corpus {
            let unique: BTreeSet<String> = tokenize(doc.as_ref()).into_iter().collect();
            for term in unique {
                *doc_freqs.entry(term).or_insert(0) += 1;
            }
        }

        let n = n_documents as f32;
        let mut vocabulary = AHashMap::with_capacity(doc_freqs.len());
        let mut idf = Vec::with_capacity(doc_freqs.len());
        for (dim, (term, df)) in doc_freqs.into_iter().enumerate() {
            vocabulary.insert(term, dim as u32);
            idf.push(((1.0 + n) / (1.0 + df as f32)).ln() + 1.0);
        }

        debug!(
            documents = n_documents,
            vocabulary = vocabulary.len(),
            "fitted tf-idf model"
        );

        Self {
            vocabulary,
            idf,
            n_documents,
        }
    }

    /// Map text into the fitted space as an L2-normalized TF-IDF vector.
    ///
    /// Text without any known term yields the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: AHashMap<u32, f32> = AHashMap::new();
        for token in tokenize(text) {
            if let Some(&dim) = self.vocabulary.get(&token) {
                *counts.entry(dim).or_insert(0.0) += 1.0;
            }
        }

        let pairs = counts
            .into_iter()
            .map(|(dim, tf)| (dim, tf * self.idf[dim as usize]))
            .collect();

        let mut vector = SparseVector::from_pairs(pairs);
        vector.normalize();
        vector
    }

    /// Transform many texts in parallel; output order matches input order
    pub fn transform_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<SparseVector> {
        texts
            .par_iter()
            .map(|text| self.transform(text.as_ref()))
            .collect()
    }

    /// Number of vocabulary dimensions
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Number of documents the model was fitted on
    #[inline]
    #[must_use]
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    #[must_use]
    pub fn dimension_of(&self, term: &str) -> Option<u32> {
        self.vocabulary.get(term).copied()
    }

    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.dimension_of(term).map(|dim| self.idf[dim as usize])
    }
}
