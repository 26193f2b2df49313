//! Template interpolation over context bindings.
//!
//! Placeholders:
//! - `{name}` renders the binding's display form
//! - `{count(name)}` renders the binding's element count
//!
//! Unknown placeholders are left in place so a typo surfaces in the output
//! instead of vanishing.

use std::collections::BTreeMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::value::Value;

/// Context bindings exposed to message templates.
pub type Bindings = BTreeMap<String, Value>;

/// Interpolates `template` using `bindings`.
pub fn render(template: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let placeholder = &after[..close];
                match expand(placeholder, bindings) {
                    Some(expansion) => out.push_str(&expansion),
                    None => {
                        out.push('{');
                        out.push_str(placeholder);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unterminated placeholder, emit the rest verbatim
                out.push('{');
                rest = after;
                break;
            }
        }
    }

    out.push_str(rest);
    out
}

fn expand(placeholder: &str, bindings: &Bindings) -> Option<String> {
    if let Some(name) = placeholder
        .strip_prefix("count(")
        .and_then(|p| p.strip_suffix(')'))
    {
        return bindings.get(name.trim()).map(|v| count(v).to_string());
    }
    bindings.get(placeholder.trim()).map(|v| v.to_string())
}

/// Element count of a value: list/record length, grapheme count for strings,
/// zero for nil, one for any other scalar.
fn count(value: &Value) -> usize {
    match value {
        Value::Nil => 0,
        Value::Str(s) => s.graphemes(true).count(),
        Value::List(items) => items.len(),
        Value::Record(entries) => entries.len(),
        _ => 1,
    }
}
