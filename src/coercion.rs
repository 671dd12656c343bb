// ABOUTME: String-to-type coercion engine driven by declared type tags
// ABOUTME: Parses raw stored text into tagged values and adapts them to requested targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

//! # Type Coercion
//!
//! Configuration values are persisted as raw text next to a free-form declared
//! type tag. Coercion happens in two explicit steps:
//!
//! 1. [`parse_declared`] reads the tag and parses the raw text into a tagged
//!    [`ConfigValue`] variant.
//! 2. [`ConfigScalar::from_config_value`] adapts the parsed value to the
//!    caller's requested target type.
//!
//! [`coerce`] combines both steps under the never-fail contract: blank input,
//! a failed parse, or a failed adaptation all resolve to the target type's
//! default value instead of an error.

/// A parsed configuration value, tagged by the declared type
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Parsed from an `int`/`integer` tag
    Int(i64),
    /// Parsed from a `double`/`float`/`number` tag
    Float(f64),
    /// Parsed from a `bool`/`boolean` tag
    Bool(bool),
    /// Any unrecognized tag passes the raw text through
    Str(String),
}

/// Parse raw text according to its declared type tag
///
/// Tags are matched case-insensitively after trimming. Unrecognized tags get
/// string semantics: the raw text passes through untouched. A recognized tag
/// whose value does not parse yields `None`.
#[must_use]
pub fn parse_declared(raw: &str, declared_type: &str) -> Option<ConfigValue> {
    match declared_type.trim().to_ascii_lowercase().as_str() {
        "int" | "integer" => raw.trim().parse::<i64>().ok().map(ConfigValue::Int),

        // Thousands separators are permitted for floating-point values
        "double" | "float" | "number" => raw
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .map(ConfigValue::Float),

        "bool" | "boolean" => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "y" | "on" => Some(ConfigValue::Bool(true)),
            "false" | "0" | "no" | "n" | "off" => Some(ConfigValue::Bool(false)),
            _ => None,
        },

        _ => Some(ConfigValue::Str(raw.to_owned())),
    }
}

/// A target type a configuration value can be adapted to
///
/// Implemented for the closed set of scalar targets the reader hands out:
/// `i64`, `f64`, `bool`, and `String`. Each implementation performs the
/// invariant conversions between the tagged variants; a conversion that does
/// not hold returns `None` and degrades to the default at the call site.
pub trait ConfigScalar: Default + Sized {
    /// Adapt a parsed value to this target type
    fn from_config_value(value: ConfigValue) -> Option<Self>;
}

impl ConfigScalar for i64 {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Int(i) => Some(i),
            ConfigValue::Float(f) if f.is_finite() => Some(f.round() as Self),
            ConfigValue::Float(_) => None,
            ConfigValue::Bool(b) => Some(Self::from(b)),
            ConfigValue::Str(s) => s.trim().parse().ok(),
        }
    }
}

impl ConfigScalar for f64 {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Float(f) => Some(f),
            ConfigValue::Int(i) => Some(i as Self),
            ConfigValue::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            ConfigValue::Str(s) => s.trim().parse().ok(),
        }
    }
}

impl ConfigScalar for bool {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Bool(b) => Some(b),
            ConfigValue::Int(i) => Some(i != 0),
            ConfigValue::Float(f) => Some(f != 0.0),
            // Textual synonyms only apply under a declared bool tag; the
            // adaptation step accepts strict true/false alone.
            ConfigValue::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }
}

impl ConfigScalar for String {
    fn from_config_value(value: ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Str(s) => Some(s),
            ConfigValue::Int(i) => Some(i.to_string()),
            ConfigValue::Float(f) => Some(f.to_string()),
            ConfigValue::Bool(b) => Some(b.to_string()),
        }
    }
}

/// Coerce raw stored text to the requested target type
///
/// Never fails: blank input, an unparseable value, or an impossible
/// adaptation all yield `T::default()`.
#[must_use]
pub fn coerce<T: ConfigScalar>(raw: &str, declared_type: &str) -> T {
    if raw.trim().is_empty() {
        return T::default();
    }

    parse_declared(raw, declared_type)
        .and_then(T::from_config_value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declared_int() {
        assert_eq!(parse_declared("42", "int"), Some(ConfigValue::Int(42)));
        assert_eq!(parse_declared(" -7 ", "integer"), Some(ConfigValue::Int(-7)));
        assert_eq!(parse_declared("abc", "int"), None);
        // No grouping for integers
        assert_eq!(parse_declared("1,000", "int"), None);
    }

    #[test]
    fn test_parse_declared_float_allows_thousands() {
        assert_eq!(
            parse_declared("1,234.5", "double"),
            Some(ConfigValue::Float(1234.5))
        );
        assert_eq!(parse_declared("3.14", "number"), Some(ConfigValue::Float(3.14)));
        assert_eq!(parse_declared("not-a-number", "float"), None);
    }

    #[test]
    fn test_parse_declared_bool_synonyms() {
        assert_eq!(parse_declared("TRUE", "bool"), Some(ConfigValue::Bool(true)));
        assert_eq!(parse_declared("on", "boolean"), Some(ConfigValue::Bool(true)));
        assert_eq!(parse_declared("y", "bool"), Some(ConfigValue::Bool(true)));
        assert_eq!(parse_declared("off", "bool"), Some(ConfigValue::Bool(false)));
        assert_eq!(parse_declared("0", "bool"), Some(ConfigValue::Bool(false)));
        assert_eq!(parse_declared("maybe", "bool"), None);
    }

    #[test]
    fn test_unrecognized_tag_is_string() {
        assert_eq!(
            parse_declared("anything", "uri"),
            Some(ConfigValue::Str("anything".to_owned()))
        );
        assert_eq!(
            parse_declared("42", ""),
            Some(ConfigValue::Str("42".to_owned()))
        );
    }

    #[test]
    fn test_cross_type_adaptation() {
        // numeric -> string
        assert_eq!(
            String::from_config_value(ConfigValue::Int(42)),
            Some("42".to_owned())
        );
        // string -> numeric
        assert_eq!(i64::from_config_value(ConfigValue::Str("17".into())), Some(17));
        assert_eq!(
            f64::from_config_value(ConfigValue::Str("2.5".into())),
            Some(2.5)
        );
        // int tag read as float
        assert_eq!(f64::from_config_value(ConfigValue::Int(3)), Some(3.0));
        // impossible adaptation
        assert_eq!(i64::from_config_value(ConfigValue::Str("abc".into())), None);
    }

    #[test]
    fn test_coerce_defaults_on_failure() {
        assert_eq!(coerce::<i64>("abc", "int"), 0);
        assert_eq!(coerce::<String>("", "string"), String::new());
        assert_eq!(coerce::<bool>("   ", "bool"), false);
        assert_eq!(coerce::<f64>("oops", "double"), 0.0);
    }
}
