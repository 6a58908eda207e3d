//! Call-site inputs and swap-check outputs.

use serde::{Deserialize, Serialize};

use super::config::MorphemeConfig;
use super::morphemes::{extract, extract_all, MorphemeSet};

/// Declared parameters of a callee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Callee name, used for diagnostics only
    #[serde(default)]
    pub callee: Option<String>,
    /// Parameter names in declaration order; `None` when the declaration is not visible
    #[serde(default)]
    pub parameters: Option<Vec<String>>,
    /// Whether the callee accepts an unnamed variadic tail
    #[serde(default)]
    pub is_variadic: bool,
}

impl Signature {
    /// Signature with known parameter names.
    pub fn new<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            callee: None,
            parameters: Some(parameters.into_iter().map(Into::into).collect()),
            is_variadic: false,
        }
    }

    /// Signature of a callee whose declaration is not available.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Set the callee name.
    pub fn with_callee(mut self, callee: impl Into<String>) -> Self {
        self.callee = Some(callee.into());
        self
    }

    /// Mark the callee as variadic.
    pub fn variadic(mut self, is_variadic: bool) -> Self {
        self.is_variadic = is_variadic;
        self
    }

    /// Callee name for log and report output.
    pub fn display_name(&self) -> &str {
        self.callee.as_deref().unwrap_or("<anonymous>")
    }

    pub(crate) fn parameter_morphemes(&self, count: usize, config: &MorphemeConfig) -> Vec<MorphemeSet> {
        self.parameters
            .iter()
            .flatten()
            .take(count)
            .map(|name| extract(name, config))
            .collect()
    }
}

/// One positional argument expression, as the identifiers it mentions.
///
/// A plain variable has one component; `rect.width` may be extracted as
/// `["rect", "width"]`. Literals and complex expressions have none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argument {
    /// Identifier components of the expression
    pub components: Vec<String>,
}

impl Argument {
    /// Argument spelled by a single identifier (possibly empty).
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            return Self::default();
        }
        Self {
            components: vec![name],
        }
    }

    /// Argument made of several identifier components.
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Morpheme union of all components.
    pub fn morphemes(&self, config: &MorphemeConfig) -> MorphemeSet {
        extract_all(self.components.as_slice(), config)
    }
}

/// Positional arguments of one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Arguments in call order
    pub arguments: Vec<Argument>,
}

impl CallSite {
    /// Call site whose arguments are single identifiers.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            arguments: names.into_iter().map(Argument::named).collect(),
        }
    }

    /// Number of positional arguments.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// True when the call passes no arguments.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub(crate) fn argument_morphemes(&self, count: usize, config: &MorphemeConfig) -> Vec<MorphemeSet> {
        self.arguments
            .iter()
            .take(count)
            .map(|arg| arg.morphemes(config))
            .collect()
    }
}

/// A pair of argument positions that look transposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapCandidate {
    /// First position (1-based)
    pub arg1: usize,
    /// Second position (1-based, always greater than `arg1`)
    pub arg2: usize,
    /// Morphemes of the argument at `arg1`
    pub morphemes1: MorphemeSet,
    /// Morphemes of the argument at `arg2`
    pub morphemes2: MorphemeSet,
    /// Margin by which the swapped alignment beats the written one (0.0-2.0)
    pub score: f64,
}

impl SwapCandidate {
    /// Whether this candidate involves the given 1-based position.
    pub fn touches(&self, position: usize) -> bool {
        self.arg1 == position || self.arg2 == position
    }
}

/// Swap candidates for one call, ordered by `(arg1, arg2)` and non-overlapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckResult {
    candidates: Vec<SwapCandidate>,
}

impl CheckResult {
    /// Build a result, sorting candidates by position.
    pub(crate) fn from_candidates(mut candidates: Vec<SwapCandidate>) -> Self {
        candidates.sort_by_key(|c| (c.arg1, c.arg2));
        Self { candidates }
    }

    /// Reported candidates.
    pub fn candidates(&self) -> &[SwapCandidate] {
        &self.candidates
    }

    /// Iterate over candidates in position order.
    pub fn iter(&self) -> std::slice::Iter<'_, SwapCandidate> {
        self.candidates.iter()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when nothing looks swapped.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Position pairs only, handy for assertions and summaries.
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.candidates.iter().map(|c| (c.arg1, c.arg2)).collect()
    }

    /// Highest candidate score, if any.
    pub fn max_score(&self) -> Option<f64> {
        self.candidates.iter().map(|c| c.score).reduce(f64::max)
    }
}

impl IntoIterator for CheckResult {
    type Item = SwapCandidate;
    type IntoIter = std::vec::IntoIter<SwapCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl<'a> IntoIterator for &'a CheckResult {
    type Item = &'a SwapCandidate;
    type IntoIter = std::slice::Iter<'a, SwapCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_becomes_unnamed_argument() {
        assert!(Argument::named("").components.is_empty());
        assert_eq!(Argument::named("width").components, vec!["width"]);
    }

    #[test]
    fn argument_morphemes_union_components() {
        let arg = Argument::from_components(["rect", "maxWidth"]);
        let morphemes: Vec<String> = arg.morphemes(&MorphemeConfig::default()).into_iter().collect();
        assert_eq!(morphemes, vec!["max", "rect", "width"]);
    }

    #[test]
    fn signature_builders() {
        let sig = Signature::new(["fmt"]).with_callee("printf").variadic(true);
        assert_eq!(sig.parameters, Some(vec!["fmt".to_string()]));
        assert_eq!(sig.display_name(), "printf");
        assert!(sig.is_variadic);
        assert_eq!(Signature::unknown().display_name(), "<anonymous>");
    }

    #[test]
    fn check_result_is_sorted_by_position() {
        let candidate = |arg1, arg2| SwapCandidate {
            arg1,
            arg2,
            morphemes1: MorphemeSet::new(),
            morphemes2: MorphemeSet::new(),
            score: 2.0,
        };
        let result = CheckResult::from_candidates(vec![candidate(3, 4), candidate(1, 2)]);
        assert_eq!(result.positions(), vec![(1, 2), (3, 4)]);
        assert_eq!(result.max_score(), Some(2.0));
        assert!(result.candidates()[0].touches(2));
    }

    #[test]
    fn check_result_serializes_as_list() {
        let result = CheckResult::from_candidates(vec![SwapCandidate {
            arg1: 1,
            arg2: 2,
            morphemes1: ["height".to_string()].into_iter().collect(),
            morphemes2: ["width".to_string()].into_iter().collect(),
            score: 2.0,
        }]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json[0]["arg1"], 1);
        assert_eq!(json[0]["morphemes1"][0], "height");
        assert_eq!(json[0]["morphemes2"][0], "width");
    }
}
