//! Main swap-check engine.

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::config::{validate_margin, ArgswapConfig};
use crate::core::errors::Result;
use crate::detectors::swapped_args::{search, CallSite, CheckResult, Signature};

/// Main argswap engine.
///
/// The engine only holds validated configuration; every check is a pure
/// function of its inputs, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct ArgswapEngine {
    /// Engine configuration
    config: Arc<ArgswapConfig>,
}

impl Default for ArgswapEngine {
    fn default() -> Self {
        Self {
            config: Arc::new(ArgswapConfig::default()),
        }
    }
}

impl ArgswapEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: ArgswapConfig) -> Result<Self> {
        config.validate()?;
        info!(
            threshold = config.search.threshold,
            stop_tokens = config.morphemes.stop_tokens.len(),
            "Argswap engine initialized"
        );

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ArgswapConfig {
        &self.config
    }

    /// Check one call given plain names.
    ///
    /// `parameters` is `None` when the callee's declaration is not visible, in
    /// which case nothing can be flagged. `callee` only labels log output.
    pub fn check<S: AsRef<str>>(
        &self,
        parameters: Option<&[S]>,
        arguments: &[S],
        callee: Option<&str>,
        is_variadic: bool,
    ) -> Result<CheckResult> {
        let signature = Signature {
            callee: callee.map(str::to_string),
            parameters: parameters.map(|names| names.iter().map(|n| S::as_ref(n).to_string()).collect()),
            is_variadic,
        };
        let call_site = CallSite::from_names(arguments.iter().map(S::as_ref));
        self.check_site(&signature, &call_site)
    }

    /// Check one call site using the configured threshold.
    pub fn check_site(&self, signature: &Signature, call_site: &CallSite) -> Result<CheckResult> {
        self.check_with_threshold(signature, call_site, self.config.search.threshold)
    }

    /// Check one call site with an explicit reporting margin.
    pub fn check_with_threshold(
        &self,
        signature: &Signature,
        call_site: &CallSite,
        threshold: f64,
    ) -> Result<CheckResult> {
        validate_margin(threshold)?;

        if call_site.is_empty() {
            debug!(callee = signature.display_name(), "Call has no arguments");
            return Ok(CheckResult::default());
        }

        Ok(search(signature, call_site, threshold, &self.config.morphemes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ArgswapError;

    #[test]
    fn rejects_invalid_configuration() {
        let err = ArgswapEngine::new(ArgswapConfig::default().with_threshold(-1.0)).unwrap_err();
        assert!(matches!(err, ArgswapError::InvalidThreshold { .. }));
    }

    #[test]
    fn rejects_invalid_threshold_per_call() {
        let engine = ArgswapEngine::default();
        let err = engine
            .check_with_threshold(
                &Signature::new(["a", "b"]),
                &CallSite::from_names(["b", "a"]),
                f64::NAN,
            )
            .unwrap_err();
        assert!(matches!(err, ArgswapError::InvalidThreshold { .. }));
    }

    #[test]
    fn empty_arguments_are_not_an_error() {
        let engine = ArgswapEngine::default();
        let params = ["width", "height"];
        let args: [&str; 0] = [];
        let result = engine.check(Some(&params[..]), &args[..], None, false).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn explicit_threshold_overrides_config() {
        let engine = ArgswapEngine::default();
        let sig = Signature::new(["barking_dogs", "hissing_cats"]);
        let site = CallSite::from_names(["cats", "dogs"]);

        assert!(engine.check_site(&sig, &site).unwrap().is_empty());
        let loose = engine.check_with_threshold(&sig, &site, 1.0).unwrap();
        assert_eq!(loose.positions(), vec![(1, 2)]);
    }

    #[test]
    fn callee_name_does_not_affect_result() {
        let engine = ArgswapEngine::default();
        let params = ["width", "height"];
        let args = ["height", "width"];
        let named = engine.check(Some(&params[..]), &args[..], Some("resize"), false).unwrap();
        let anonymous = engine.check(Some(&params[..]), &args[..], None, false).unwrap();
        assert_eq!(named, anonymous);
    }
}
