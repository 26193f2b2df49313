//! Value tokenizers.
//!
//! A tokenizer decomposes a value into the countable units a length check
//! measures. The default decomposes strings into grapheme clusters
//! (user-perceived characters, not code units) and treats composite values as
//! their own token sequences. Callers may override with any function of the
//! same shape, e.g. splitting on whitespace to count words.

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::value::Value;

/// Pluggable decomposition of a value into countable units.
pub type Tokenizer = Arc<dyn Fn(&Value) -> Vec<Value> + Send + Sync>;

/// Decomposes a value with the default rules.
///
/// Strings become grapheme clusters, lists are their own elements, records
/// tokenize to their values, nil is empty, any other scalar is one token.
pub fn tokenize(value: &Value) -> Vec<Value> {
    match value {
        Value::Nil => Vec::new(),
        Value::Str(s) => s
            .graphemes(true)
            .map(|g| Value::Str(g.to_string()))
            .collect(),
        Value::List(items) => items.clone(),
        Value::Record(entries) => entries.values().cloned().collect(),
        other => vec![other.clone()],
    }
}

/// The default tokenizer as a shareable handle.
pub fn default_tokenizer() -> Tokenizer {
    Arc::new(tokenize)
}

/// Word-counting tokenizer: splits strings on whitespace.
///
/// Non-string values fall back to the default rules.
pub fn whitespace_tokenizer() -> Tokenizer {
    Arc::new(|value| match value {
        Value::Str(s) => s
            .split_whitespace()
            .map(|w| Value::Str(w.to_string()))
            .collect(),
        other => tokenize(other),
    })
}
