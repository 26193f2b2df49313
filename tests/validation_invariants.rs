//! Validation invariant tests
//!
//! - Exact/min/max/range checks produce their exact default messages
//! - Skip rules bypass every other option
//! - Message resolution precedence: call site > configuration > built-in
//! - Custom tokenizers and message templates compose

use std::sync::Arc;

use shapecast::{
    resolve_message, validate_length, validate_presence, ConfigError, EngineConfig, LengthOptions,
    MessageOptions, MessageResolver, ParameterizedRenderer, Rendered, TemplateRenderer,
    ValidationError, Value,
};
use shapecast::validate::{validate_length_with, whitespace_tokenizer};

// =============================================================================
// Helper Functions
// =============================================================================

fn unmet(result: Result<Value, ValidationError>) -> String {
    match result {
        Err(ValidationError::Unmet(rendered)) => rendered.to_string(),
        other => panic!("expected unmet validation, got {:?}", other),
    }
}

// =============================================================================
// Bounds Checks and Default Messages
// =============================================================================

/// A value whose size equals the exact option passes.
#[test]
fn test_exact_size_passes() {
    assert_eq!(validate_length("foo", 3).unwrap(), Value::Str("foo".into()));
}

/// Any other size fails with the exact-size message.
#[test]
fn test_exact_size_failure_message() {
    assert_eq!(unmet(validate_length("foo", 5)), "must have a length of 5");
    assert_eq!(unmet(validate_length("", 1)), "must have a length of 1");
}

/// Sizes inside [min, max] pass; outside fail with the bounded message.
#[test]
fn test_bounded_interval() {
    let options = || LengthOptions {
        min: Some(2),
        max: Some(4),
        ..LengthOptions::default()
    };

    assert!(validate_length("ab", options()).is_ok());
    assert!(validate_length("abcd", options()).is_ok());
    assert_eq!(
        unmet(validate_length("a", options())),
        "must have a length between 2 and 4"
    );
    assert_eq!(
        unmet(validate_length("abcde", options())),
        "must have a length between 2 and 4"
    );
}

/// Min-only and max-only use their dedicated messages.
#[test]
fn test_one_sided_messages() {
    assert_eq!(
        unmet(validate_length("foo", LengthOptions::at_least(4))),
        "must have a length of at least 4"
    );
    assert_eq!(
        unmet(validate_length("food", LengthOptions::at_most(3))),
        "must have a length of no more than 3"
    );
}

/// A range argument is shorthand for inclusive bounds.
#[test]
fn test_range_shorthand() {
    assert!(validate_length("foo", 1..=6).is_ok());
    assert!(validate_length("a", 1..=6).is_ok());
    assert!(validate_length("abcdef", 1..=6).is_ok());
    assert_eq!(
        unmet(validate_length("abcdefg", 1..=6)),
        "must have a length between 1 and 6"
    );
}

/// The exact option wins over min/max/range when layered together.
#[test]
fn test_exact_overrides_other_constraints() {
    let options = LengthOptions {
        is: Some(3),
        min: Some(10),
        max: Some(20),
        within: Some(10..=20),
        ..LengthOptions::default()
    };
    assert!(validate_length("foo", options).is_ok());
}

/// No usable constraint is a fatal configuration error, not a failure.
#[test]
fn test_missing_bounds_is_fatal() {
    let err = validate_length("foo", LengthOptions::default()).unwrap_err();
    assert_eq!(err, ValidationError::Config(ConfigError::MissingLengthBounds));
    assert_eq!(err.to_string(), "missing length validation range");
}

// =============================================================================
// Skip Rules
// =============================================================================

/// allow_nil on nil input always passes, whatever bounds are present.
#[test]
fn test_allow_nil_bypasses_all_bounds() {
    for options in [
        LengthOptions::exactly(3).allow_nil(),
        LengthOptions::at_least(10).allow_nil(),
        LengthOptions::between(5..=9).allow_nil(),
    ] {
        assert_eq!(validate_length(Value::Nil, options).unwrap(), Value::Nil);
    }
}

/// allow_blank skips empty strings and lists without touching non-blanks.
#[test]
fn test_allow_blank() {
    let options = || LengthOptions::at_least(5).allow_blank();
    assert!(validate_length("", options()).is_ok());
    assert!(validate_length(Value::List(vec![]), options()).is_ok());
    assert_eq!(
        unmet(validate_length("abc", options())),
        "must have a length of at least 5"
    );
}

// =============================================================================
// Tokenizers
// =============================================================================

/// Grapheme clusters are counted, not code units.
#[test]
fn test_grapheme_counting() {
    // "é" as e + combining accent: two code points, one perceived character
    assert!(validate_length("e\u{0301}", 1).is_ok());
    assert!(validate_length("👨‍👩‍👧 x", 3).is_ok());
}

/// A tokenizer override changes what gets counted.
#[test]
fn test_word_counting_tokenizer() {
    let options = LengthOptions::at_least(3).with_tokenizer(whitespace_tokenizer());
    assert!(validate_length("hello my darling", options).is_ok());

    let options = LengthOptions::at_least(4).with_tokenizer(whitespace_tokenizer());
    assert_eq!(
        unmet(validate_length("hello my darling", options)),
        "must have a length of at least 4"
    );
}

/// The documented word-count scenario, custom message included.
#[test]
fn test_word_count_with_custom_message() {
    let options = LengthOptions::at_least(4)
        .with_tokenizer(whitespace_tokenizer())
        .with_message("{count(tokens)} words isn't enough");
    assert_eq!(
        unmet(validate_length("hello my darling", options)),
        "3 words isn't enough"
    );
}

// =============================================================================
// Message Resolution Precedence
// =============================================================================

/// The built-in default renderer interpolates message overrides.
#[test]
fn test_default_renderer_interpolates_override() {
    let options = LengthOptions::exactly(5).with_message("{size} is not {lower}");
    assert_eq!(unmet(validate_length("foo", options)), "3 is not 5");
}

/// A configured renderer wins over the built-in default.
#[test]
fn test_configured_renderer_beats_builtin() {
    let config = EngineConfig::with_renderer(Arc::new(ParameterizedRenderer));
    let resolver = MessageResolver::new(&config);

    let value = Value::Str("foo".into());
    let result = validate_length_with(&value, LengthOptions::at_least(4), &resolver);
    match result {
        Err(ValidationError::Unmet(Rendered::Parameterized { template, bindings })) => {
            assert_eq!(template, "must have a length of at least 4");
            assert_eq!(bindings.get("size"), Some(&Value::Int(3)));
            assert_eq!(bindings.get("min"), Some(&Value::Int(4)));
        }
        other => panic!("expected parameterized message, got {:?}", other),
    }
}

/// A call-site renderer wins over the configured one.
#[test]
fn test_call_site_renderer_beats_configured() {
    let config = EngineConfig::with_renderer(Arc::new(ParameterizedRenderer));
    let resolver = MessageResolver::new(&config);

    let value = Value::Str("foo".into());
    let options = LengthOptions::at_least(4).with_renderer(Arc::new(TemplateRenderer));
    let result = validate_length_with(&value, options, &resolver);
    match result {
        Err(ValidationError::Unmet(rendered)) => {
            assert_eq!(rendered, Rendered::Text("must have a length of at least 4".into()));
        }
        other => panic!("expected text message, got {:?}", other),
    }
}

/// The parameterized renderer carries the template and bindings unmodified.
#[test]
fn test_parameterized_renderer_defers_interpolation() {
    let options = LengthOptions::at_least(4)
        .with_message("{count(tokens)} is too few")
        .with_renderer(Arc::new(ParameterizedRenderer));
    let result = validate_length("foo", options);
    match result {
        Err(ValidationError::Unmet(Rendered::Parameterized { template, bindings })) => {
            assert_eq!(template, "{count(tokens)} is too few");
            assert_eq!(bindings.get("value"), Some(&Value::Str("foo".into())));
            assert_eq!(bindings.get("lower"), Some(&Value::Int(4)));
            assert_eq!(bindings.get("upper"), Some(&Value::Nil));
            assert!(bindings.contains_key("tokens"));
        }
        other => panic!("expected parameterized message, got {:?}", other),
    }
}

/// Direct resolver calls honor the same precedence contract.
#[test]
fn test_resolve_message_directly() {
    let bindings = shapecast::Bindings::new();

    let rendered = resolve_message(&MessageOptions::new(), "fallback text", &bindings);
    assert_eq!(rendered, Rendered::Text("fallback text".into()));

    let options = MessageOptions::new().with_renderer(Arc::new(ParameterizedRenderer));
    let rendered = resolve_message(&options, "fallback text", &bindings);
    assert!(matches!(rendered, Rendered::Parameterized { .. }));
}

// =============================================================================
// Presence
// =============================================================================

/// Presence accepts falsy-but-present values and rejects blanks.
#[test]
fn test_presence() {
    assert!(validate_presence(false).is_ok());
    assert!(validate_presence(0).is_ok());
    assert_eq!(unmet(validate_presence(Value::Nil)), "must be present");
    assert_eq!(unmet(validate_presence("   ")), "must be present");
}
