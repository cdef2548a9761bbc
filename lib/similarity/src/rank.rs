//! Cosine ranking of candidate vectors against a query

use crate::sparse::SparseVector;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Default number of results returned by a ranking
pub const DEFAULT_TOP_K: usize = 10;

/// A candidate position and its similarity to the query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ranked {
    pub index: usize,
    pub score: f32,
}

/// Cosine similarity of `query` against every candidate, in candidate order.
///
/// Scores are clamped to `[0, 1]`; a zero query scores zero everywhere.
pub fn cosine_scores(query: &SparseVector, candidates: &[SparseVector]) -> Vec<f32> {
    if query.is_zero() {
        return vec![0.0; candidates.len()];
    }

    candidates
        .par_iter()
        .map(|candidate| query.cosine_similarity(candidate).clamp(0.0, 1.0))
        .collect()
}

/// Indices of the `k` highest scores, best first.
///
/// The sort is stable, so equal scores keep candidate order.
pub fn top_k(scores: &[f32], k: usize) -> Vec<Ranked> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by_key(|&i| Reverse(OrderedFloat(scores[i])));
    order.truncate(k);

    order
        .into_iter()
        .map(|index| Ranked {
            index,
            score: scores[index],
        })
        .collect()
}

/// Score and rank candidates against a query
pub fn rank(query: &SparseVector, candidates: &[SparseVector], k: usize) -> Vec<Ranked> {
    top_k(&cosine_scores(query, candidates), k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_orders_descending() {
        let ranked = top_k(&[0.1, 0.9, 0.5], 3);
        let indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 0]);
        assert_eq!(ranked[0].score, 0.9);
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let ranked = top_k(&[0.5, 0.7, 0.5, 0.7, 0.0], 5);
        let indices: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_k_larger_than_candidates() {
        assert_eq!(top_k(&[0.3, 0.2], 10).len(), 2);
        assert!(top_k(&[0.3, 0.2], 0).is_empty());
        assert!(top_k(&[], 5).is_empty());
    }

    #[test]
    fn test_rank_with_zero_query() {
        let candidates = vec![
            SparseVector::from_pairs(vec![(0, 1.0)]),
            SparseVector::from_pairs(vec![(1, 1.0)]),
        ];
        let ranked = rank(&SparseVector::zero(), &candidates, 2);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.score == 0.0));
        assert_eq!(ranked[0].index, 0);
    }

    #[test]
    fn test_rank_prefers_overlap() {
        let candidates = vec![
            SparseVector::from_pairs(vec![(1, 1.0)]),
            SparseVector::from_pairs(vec![(0, 1.0), (1, 1.0)]),
            SparseVector::from_pairs(vec![(0, 1.0)]),
        ];
        let query = SparseVector::from_pairs(vec![(0, 1.0)]);
        let ranked = rank(&query, &candidates, 2);
        assert_eq!(ranked[0].index, 2);
        assert_eq!(ranked[1].index, 1);
    }
}
