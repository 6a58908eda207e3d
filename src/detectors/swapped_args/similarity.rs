//! Morpheme-set similarity scoring.

use super::morphemes::MorphemeSet;

/// Jaccard index of two morpheme sets.
///
/// Returns 0.0 when either side is empty, so unnamed arguments never match
/// anything, including other unnamed arguments.
pub fn jaccard_similarity(a: &MorphemeSet, b: &MorphemeSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Pairwise scores between parameter and argument morpheme sets.
///
/// `get(i, j)` is the similarity of parameter `i` to argument `j` (0-based).
#[derive(Debug, Clone)]
pub struct ScoreMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl ScoreMatrix {
    /// Score every parameter against every argument. Both slices must have the same length.
    pub fn build(parameters: &[MorphemeSet], arguments: &[MorphemeSet]) -> Self {
        debug_assert_eq!(parameters.len(), arguments.len());
        let size = parameters.len().min(arguments.len());
        let mut scores = Vec::with_capacity(size * size);
        for param in &parameters[..size] {
            for arg in &arguments[..size] {
                scores.push(jaccard_similarity(param, arg));
            }
        }
        Self { size, scores }
    }

    /// Number of positions covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity of parameter `param` to argument `arg`.
    pub fn get(&self, param: usize, arg: usize) -> f64 {
        self.scores[param * self.size + arg]
    }
}
