// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Filename naming-style classification.

use std::fmt;

/// Naming style of a filename stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingPattern {
    PascalCase,
    CamelCase,
    KebabCase,
    SnakeCase,
    Unknown,
}

impl NamingPattern {
    /// Named styles, in reporting order.
    pub const NAMED: [NamingPattern; 4] = [
        NamingPattern::PascalCase,
        NamingPattern::CamelCase,
        NamingPattern::KebabCase,
        NamingPattern::SnakeCase,
    ];

    /// Style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingPattern::PascalCase => "PascalCase",
            NamingPattern::CamelCase => "camelCase",
            NamingPattern::KebabCase => "kebab-case",
            NamingPattern::SnakeCase => "snake_case",
            NamingPattern::Unknown => "unknown",
        }
    }

    /// A representative stem in this style.
    pub fn example_stem(&self) -> &'static str {
        match self {
            NamingPattern::PascalCase => "UserProfile",
            NamingPattern::CamelCase => "userProfile",
            NamingPattern::KebabCase => "user-profile",
            NamingPattern::SnakeCase => "user_profile",
            NamingPattern::Unknown => "",
        }
    }
}

impl fmt::Display for NamingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a bare filename stem.
pub fn classify(stem: &str) -> NamingPattern {
    if stem.chars().count() < 2 {
        return NamingPattern::Unknown;
    }

    let has_dash = stem.contains('-');
    let has_underscore = stem.contains('_');

    if has_dash && !has_underscore {
        return NamingPattern::KebabCase;
    }

    if has_underscore && !has_dash {
        return if stem == stem.to_lowercase() {
            NamingPattern::SnakeCase
        } else {
            NamingPattern::Unknown
        };
    }

    if has_dash || has_underscore {
        return NamingPattern::Unknown;
    }

    let mut chars = stem.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => NamingPattern::PascalCase,
        Some(c) if c.is_ascii_lowercase() && chars.any(|c| c.is_ascii_uppercase()) => {
            NamingPattern::CamelCase
        }
        _ => NamingPattern::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify("UserCard"), NamingPattern::PascalCase);
        assert_eq!(classify("formatDate"), NamingPattern::CamelCase);
        assert_eq!(classify("user-card"), NamingPattern::KebabCase);
        assert_eq!(classify("user_card"), NamingPattern::SnakeCase);
        assert_eq!(classify("x"), NamingPattern::Unknown);
    }

    #[test]
    fn test_classify_edge_cases() {
        assert_eq!(classify(""), NamingPattern::Unknown);
        assert_eq!(classify("utils"), NamingPattern::Unknown);
        assert_eq!(classify("User_Card"), NamingPattern::Unknown);
        assert_eq!(classify("user-card_v2"), NamingPattern::Unknown);
        assert_eq!(classify("2fa"), NamingPattern::Unknown);
        assert_eq!(classify("Button.test"), NamingPattern::PascalCase);
        assert_eq!(classify("My-Component"), NamingPattern::KebabCase);
    }

    #[test]
    fn test_classify_is_total() {
        let stems = ["a", "ab", "AB", "a-b", "a_b", "A_b", "a.b", "ÄBC", "éa", "__", "--", "a1B"];
        for stem in stems {
            let pattern = classify(stem);
            assert!(NamingPattern::NAMED.contains(&pattern) || pattern == NamingPattern::Unknown);
        }
    }
}
