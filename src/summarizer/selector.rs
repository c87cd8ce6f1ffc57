//! Top-N sentence selection.
//!
//! Selection is rank-greedy but output is document-ordered: indices are
//! sorted by score descending (stable, so equal scores keep ascending
//! original order), truncated to `top_n`, then re-sorted ascending.

/// Pick the indices of the `top_n` highest-ranked sentences, returned in
/// ascending original order.
///
/// `top_n` is clamped to the number of scores; `top_n = 0` selects nothing.
pub fn select_indices(scores: &[f64], top_n: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    // Stable descending sort: ties keep ascending index order.
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    ranked.truncate(top_n.min(scores.len()));
    ranked.sort_unstable();
    ranked
}
