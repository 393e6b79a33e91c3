// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::traits::TextTransform;

/// Uppercase every character using Unicode case mapping.
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// Lowercase every character using Unicode case mapping.
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// Target case for the Change Text Case operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    Upper,
    Lower,
}

/// Change Text Case operation - converts the whole buffer to one case
pub struct ChangeTextCase {
    case_type: CaseType,
}

impl ChangeTextCase {
    pub fn new(case_type: CaseType) -> Self {
        Self { case_type }
    }

    pub fn upper() -> Self {
        Self::new(CaseType::Upper)
    }

    pub fn lower() -> Self {
        Self::new(CaseType::Lower)
    }
}

impl TextTransform for ChangeTextCase {
    fn apply(&self, input: &str) -> String {
        match self.case_type {
            CaseType::Upper => to_upper(input),
            CaseType::Lower => to_lower(input),
        }
    }

    fn name(&self) -> &'static str {
        match self.case_type {
            CaseType::Upper => "uppercase",
            CaseType::Lower => "lowercase",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_leaves_no_lowercase() {
        let inputs = ["hello", "MiXeD case 123", "straße", "ǆemal", ""];
        for input in inputs {
            let result = to_upper(input);
            assert!(
                !result.chars().any(char::is_lowercase),
                "lowercase char left in {:?}",
                result
            );
        }
    }

    #[test]
    fn test_lower_leaves_no_uppercase() {
        let inputs = ["HELLO", "MiXeD Case 123", "ÀÉÎ", ""];
        for input in inputs {
            let result = to_lower(input);
            assert!(
                !result.chars().any(char::is_uppercase),
                "uppercase char left in {:?}",
                result
            );
        }
    }

    #[test]
    fn test_lower_of_upper_is_not_identity() {
        assert_eq!(to_lower(&to_upper("Hello")), "hello");
    }

    #[test]
    fn test_unicode_expansion() {
        assert_eq!(to_upper("straße"), "STRASSE");
    }

    #[test]
    fn test_transform_impl() {
        let upper = ChangeTextCase::upper();
        let lower = ChangeTextCase::lower();
        assert_eq!(upper.apply("abc"), "ABC");
        assert_eq!(lower.apply("ABC"), "abc");
        assert_eq!(upper.name(), "uppercase");
        assert_eq!(lower.name(), "lowercase");
    }

    #[test]
    fn test_case_type_deserializes_snake_case() {
        let case: CaseType = serde_yaml::from_str("upper").unwrap();
        assert_eq!(case, CaseType::Upper);
    }
}
