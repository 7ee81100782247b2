//! Name derivation and validation for behavior units.
//!
//! # Design
//!
//! `BehaviorName` is the validated user input; everything else is derived
//! from it by two pure string transforms:
//!
//! - `capitalize`: upper-case the first character
//! - `fold_name`: collapse each `-x` pair to `X` (hyphen-case → camelCase)
//!
//! Both are deterministic, and folding an already-folded name (no hyphens)
//! is the identity.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── BehaviorName ──────────────────────────────────────────────────────────────

/// A validated behavior unit name.
///
/// Invariants (checked at construction):
/// - contains no whitespace
/// - contains at least one ASCII letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BehaviorName(String);

impl BehaviorName {
    /// Validate and wrap a raw name.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        validate(&raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hyphen-folded form used as the exported identifier in the
    /// generated source file (`my-toggle` → `myToggle`).
    pub fn normalized(&self) -> String {
        fold_name(&self.0)
    }

    /// The capitalized, hyphen-folded form used as the stem of the derived
    /// type names (`my-toggle` → `MyToggle`).
    pub fn pascal(&self) -> String {
        fold_name(&capitalize(&self.0))
    }

    pub fn default_state_name(&self) -> String {
        format!("{}State", self.pascal())
    }

    pub fn default_props_name(&self) -> String {
        format!("{}Props", self.pascal())
    }

    pub fn default_options_name(&self) -> String {
        format!("{}Options", self.pascal())
    }
}

impl fmt::Display for BehaviorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BehaviorName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Check a raw name against the behavior-name rules.
///
/// Exposed separately so the prompt layer can re-prompt with the reason
/// without constructing a `BehaviorName`.
pub fn validate(name: &str) -> Result<(), DomainError> {
    if name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidBehaviorName {
            name: name.into(),
            reason: "no whitespace allowed in behavior name".into(),
        });
    }
    if !name.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidBehaviorName {
            name: name.into(),
            reason: "name must contain at least one letter".into(),
        });
    }
    Ok(())
}

// ── Derivation transforms ─────────────────────────────────────────────────────

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Replace every hyphen immediately followed by a word character with the
/// upper-cased form of that character. A trailing hyphen, or a hyphen
/// followed by punctuation, is kept verbatim.
pub fn fold_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-'
            && chars
                .peek()
                .is_some_and(|n| n.is_ascii_alphanumeric() || *n == '_')
        {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(c);
        }
    }
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("myBehavior"), "MyBehavior");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_already_upper_is_identity() {
        assert_eq!(capitalize("Toggle"), "Toggle");
    }

    #[test]
    fn fold_collapses_hyphen_pairs() {
        assert_eq!(fold_name("my-behavior"), "myBehavior");
        assert_eq!(fold_name("a-b-c"), "aBC");
    }

    #[test]
    fn fold_of_folded_name_is_identity() {
        let once = fold_name(&capitalize("my-behavior"));
        assert_eq!(once, "MyBehavior");
        assert_eq!(fold_name(&once), once);
    }

    #[test]
    fn fold_keeps_trailing_hyphen() {
        assert_eq!(fold_name("my-"), "my-");
    }

    #[test]
    fn fold_keeps_hyphen_before_punctuation() {
        assert_eq!(fold_name("a-.b"), "a-.b");
    }

    #[test]
    fn pascal_composition_matches_spec_example() {
        let name = BehaviorName::new("my-behavior").unwrap();
        assert_eq!(name.pascal(), "MyBehavior");
    }

    #[test]
    fn derived_type_names() {
        let name = BehaviorName::new("my-toggle").unwrap();
        assert_eq!(name.default_state_name(), "MyToggleState");
        assert_eq!(name.default_props_name(), "MyToggleProps");
        assert_eq!(name.default_options_name(), "MyToggleOptions");
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(matches!(
            validate(" bad name"),
            Err(DomainError::InvalidBehaviorName { .. })
        ));
        assert!(validate("bad\tname").is_err());
    }

    #[test]
    fn name_without_letters_is_rejected() {
        assert!(validate("123").is_err());
        assert!(validate("-_-").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["ok1", "my-toggle", "dropdown", "Accordion"] {
            assert!(validate(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn normalized_keeps_leading_case() {
        let name = BehaviorName::new("my-toggle").unwrap();
        assert_eq!(name.normalized(), "myToggle");
    }
}
