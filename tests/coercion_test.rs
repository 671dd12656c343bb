// ABOUTME: Coercion edge-case tests for declared type tags and target adaptation
// ABOUTME: Exercises the never-fail contract: bad input degrades to defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 Async Config Contributors

use dyncfg::coercion::coerce;

#[test]
fn test_declared_int_to_int() {
    assert_eq!(coerce::<i64>("42", "int"), 42);
    assert_eq!(coerce::<i64>("-13", "integer"), -13);
}

#[test]
fn test_bool_textual_synonyms() {
    assert!(coerce::<bool>("on", "bool"));
    assert!(coerce::<bool>("Yes", "boolean"));
    assert!(coerce::<bool>("TRUE", "bool"));
    assert!(!coerce::<bool>("off", "bool"));
    assert!(!coerce::<bool>("0", "bool"));
}

#[test]
fn test_unparseable_int_defaults_to_zero() {
    assert_eq!(coerce::<i64>("abc", "int"), 0);
}

#[test]
fn test_empty_value_defaults_regardless_of_tag() {
    assert_eq!(coerce::<i64>("", "int"), 0);
    assert_eq!(coerce::<f64>("   ", "double"), 0.0);
    assert!(!coerce::<bool>("", "bool"));
    assert_eq!(coerce::<String>("", "string"), String::new());
}

#[test]
fn test_float_accepts_thousands_separators() {
    assert_eq!(coerce::<f64>("1,234.5", "double"), 1234.5);
    assert_eq!(coerce::<f64>("2.75", "number"), 2.75);
}

#[test]
fn test_adaptation_across_types() {
    // numeric value requested as string
    assert_eq!(coerce::<String>("42", "int"), "42");
    // string-tagged numeric requested as float
    assert_eq!(coerce::<f64>("3.7", "text"), 3.7);
    // declared double requested as int rounds
    assert_eq!(coerce::<i64>("3.9", "double"), 4);
    // declared int requested as float widens
    assert_eq!(coerce::<f64>("7", "int"), 7.0);
}

#[test]
fn test_unknown_tag_gets_string_semantics() {
    assert_eq!(coerce::<String>("blue", "color"), "blue");
    // pass-through text that cannot adapt to the target defaults
    assert_eq!(coerce::<i64>("blue", "color"), 0);
}

#[test]
fn test_mismatched_bool_text_defaults() {
    // synonyms are a declared-bool privilege; a string-tagged "on" is not a bool
    assert!(!coerce::<bool>("on", "string"));
    assert!(coerce::<bool>("true", "string"));
}
