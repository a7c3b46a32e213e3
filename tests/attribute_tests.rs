//! Attribute argument reader contract tests.

use defargs::ast::{Expr, Span, StringLit, StringSegment};
use defargs::ast_builder::{attribute, dict, ident, int, labeled, null, str_lit};
use defargs::attribute::{read_defaults, read_func_name, Strictness};
use defargs::{to_error_source, ErrorType, SourceArc};

fn src() -> SourceArc {
    to_error_source("test", "")
}

fn interpolated(prefix: &str, expr: Expr) -> Expr {
    Expr::Str(StringLit {
        segments: vec![
            StringSegment::Text(prefix.to_string()),
            StringSegment::Interpolation(Box::new(expr)),
        ],
        span: Span::default(),
    })
}

#[test]
fn reads_func_name_from_plain_string_literal() {
    let attr = attribute(
        "DefaultArgument",
        vec![labeled("funcName", str_lit("getItems"))],
    );
    assert_eq!(read_func_name(&attr, &src()).unwrap(), "getItems");
}

#[test]
fn missing_func_name_is_invalid_argument() {
    let attr = attribute("DefaultArgument", vec![]);
    let err = read_func_name(&attr, &src()).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::InvalidArgument);
}

#[test]
fn non_string_func_name_is_invalid_argument() {
    let attr = attribute("DefaultArgument", vec![labeled("funcName", int(42))]);
    let err = read_func_name(&attr, &src()).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::InvalidArgument);
}

#[test]
fn interpolated_func_name_is_invalid_argument() {
    let attr = attribute(
        "DefaultArgument",
        vec![labeled("funcName", interpolated("get", ident("kind")))],
    );
    let err = read_func_name(&attr, &src()).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::InvalidArgument);
}

#[test]
fn reads_defaults_in_lexicographic_key_order() {
    // Dictionary entries deliberately out of order; the map sorts them.
    let attr = attribute(
        "DefaultArgument",
        vec![labeled(
            "defaultValues",
            dict(vec![
                (str_lit("pageToken"), null()),
                (str_lit("pageSize"), int(20)),
            ]),
        )],
    );
    let defaults = read_defaults(&attr, Strictness::Strict, &src()).unwrap();
    let keys: Vec<_> = defaults.keys().cloned().collect();
    assert_eq!(keys, vec!["pageSize", "pageToken"]);
    assert_eq!(defaults["pageSize"].pretty(), "20");
    assert_eq!(defaults["pageToken"].pretty(), "nil");
}

#[test]
fn missing_default_values_is_invalid_argument() {
    let attr = attribute(
        "DefaultArgument",
        vec![labeled("funcName", str_lit("getItems"))],
    );
    let err = read_defaults(&attr, Strictness::Strict, &src()).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::InvalidArgument);
}

#[test]
fn non_dictionary_default_values_is_invalid_argument() {
    let attr = attribute("DefaultArgument", vec![labeled("defaultValues", int(20))]);
    let err = read_defaults(&attr, Strictness::Strict, &src()).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::InvalidArgument);
}

#[test]
fn strict_reader_rejects_non_string_keys() {
    let attr = attribute(
        "DefaultArgument",
        vec![labeled(
            "defaultValues",
            dict(vec![
                (str_lit("pageSize"), int(20)),
                (int(1), null()),
            ]),
        )],
    );
    let err = read_defaults(&attr, Strictness::Strict, &src()).unwrap_err();
    assert_eq!(err.error_type(), ErrorType::InvalidArgument);
}

#[test]
fn lenient_reader_skips_non_string_keys() {
    let attr = attribute(
        "DefaultArgument",
        vec![labeled(
            "defaultValues",
            dict(vec![
                (str_lit("pageSize"), int(20)),
                (int(1), null()),
                (interpolated("page", ident("kind")), null()),
            ]),
        )],
    );
    let defaults = read_defaults(&attr, Strictness::Lenient, &src()).unwrap();
    assert_eq!(defaults.len(), 1);
    assert!(defaults.contains_key("pageSize"));
}

#[test]
fn default_expressions_are_carried_verbatim() {
    use defargs::ast_builder::raw;
    let attr = attribute(
        "DefaultArgument",
        vec![labeled(
            "defaultValues",
            dict(vec![(str_lit("sortKind"), raw("SortKind.name"))]),
        )],
    );
    let defaults = read_defaults(&attr, Strictness::Strict, &src()).unwrap();
    assert_eq!(defaults["sortKind"].pretty(), "SortKind.name");
}
