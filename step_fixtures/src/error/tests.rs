//! Unit tests for error construction and rendering.

use rstest::rstest;

use super::{LookupError, LookupResultExt, StepError};

#[test]
fn unknown_lists_searched_modules() {
    let err = LookupError::Unknown {
        name: String::from("article"),
        searched: vec![String::from("blog::tests"), String::from("blog::shared")],
    };
    assert_eq!(
        err.to_string(),
        "fixture 'article' not found; searched: blog::tests, blog::shared"
    );
}

#[test]
fn cycle_renders_the_chain() {
    let err = LookupError::Cycle {
        name: String::from("a"),
        chain: vec![String::from("a"), String::from("b"), String::from("a")],
    };
    assert_eq!(err.to_string(), "recursive dependency on fixture 'a': a -> b -> a");
}

#[rstest]
#[case(LookupError::provider_failed("article", "boom"))]
#[case(LookupError::TypeMismatch { name: String::from("article"), expected: "u8", found: "u16" })]
#[case(LookupError::Unknown { name: String::from("article"), searched: Vec::new() })]
fn every_lookup_error_names_its_fixture(#[case] err: LookupError) {
    assert_eq!(err.fixture_name(), "article");
}

#[test]
fn into_lookup_keeps_the_source() {
    let result: Result<u32, _> = "nope".parse::<u32>().into_lookup("count");
    let err = result.expect_err("parse fails");
    assert!(matches!(&err, LookupError::ProviderFailed { name, .. } if name == "count"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn alias_misuse_names_phrase_and_function() {
    let err = StepError::AliasUsedAsDecorator {
        phrase: String::from("I have a beautiful article"),
        function: String::from("article"),
    };
    let message = err.to_string();
    assert!(message.contains("`article`"), "message: {message}");
    assert!(message.contains("'I have a beautiful article'"), "message: {message}");
}
