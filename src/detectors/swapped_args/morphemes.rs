//! Identifier splitting and morpheme normalization.
//!
//! An identifier is cut at lowercase→uppercase transitions, at
//! digit↔letter transitions and at every non-alphanumeric character. Runs of
//! capitals are kept together, so `fooBAR` yields `foo`/`bar` while `FOObar`
//! stays a single token. Tokens are lowercased and then filtered through the
//! [`MorphemeConfig`] policy.

use std::collections::BTreeSet;

use super::config::MorphemeConfig;

/// Unique, lowercase sub-word tokens of one identifier.
pub type MorphemeSet = BTreeSet<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Letter,
    Digit,
    Separator,
}

fn classify(ch: char) -> CharClass {
    if ch.is_uppercase() {
        CharClass::Upper
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_alphanumeric() {
        CharClass::Letter
    } else {
        CharClass::Separator
    }
}

fn is_boundary(prev: CharClass, next: CharClass) -> bool {
    match (prev, next) {
        (CharClass::Letter, CharClass::Upper) => true,
        (CharClass::Digit, CharClass::Upper | CharClass::Letter) => true,
        (CharClass::Upper | CharClass::Letter, CharClass::Digit) => true,
        _ => false,
    }
}

/// Flush current token to the list if non-empty.
fn flush_token(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(current.to_lowercase());
        current.clear();
    }
}

/// Split an identifier into lowercase tokens, in order of appearance.
///
/// No filtering is applied; duplicates and numeric tokens are kept.
pub fn split_identifier(name: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut prev = CharClass::Separator;

    for ch in name.chars() {
        let class = classify(ch);
        if class == CharClass::Separator {
            flush_token(&mut tokens, &mut current);
        } else {
            if is_boundary(prev, class) {
                flush_token(&mut tokens, &mut current);
            }
            current.push(ch);
        }
        prev = class;
    }

    flush_token(&mut tokens, &mut current);
    tokens
}

fn keep_token(token: &str, config: &MorphemeConfig) -> bool {
    if token.chars().count() < config.min_token_len {
        return false;
    }
    if !config.keep_numeric_tokens && token.chars().all(char::is_numeric) {
        return false;
    }
    !config.stop_tokens.iter().any(|stop| stop.eq_ignore_ascii_case(token))
}

/// Extract the morpheme set of an identifier under the given policy.
///
/// An empty identifier yields an empty set.
pub fn extract(name: &str, config: &MorphemeConfig) -> MorphemeSet {
    split_identifier(name)
        .into_iter()
        .filter(|token| keep_token(token, config))
        .collect()
}

/// Extract the union of morphemes across every component of an argument
/// expression (e.g. `rect` and `width` for `rect.width`).
pub fn extract_all<S: AsRef<str>>(components: &[S], config: &MorphemeConfig) -> MorphemeSet {
    components
        .iter()
        .flat_map(|component| extract(component.as_ref(), config))
        .collect()
}
