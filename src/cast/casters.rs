//! Built-in primitive casters and the caster registry.
//!
//! A caster turns one raw value into a typed value or reports why it cannot.
//! Every caster passes raw null through as nil: skip rules and the presence
//! validator own nil policy, not the casters.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value as RawValue;
use uuid::Uuid;

use crate::schema::PrimitiveTag;
use crate::value::Value;

use super::errors::CastIssue;

/// Options forwarded from a field specification to its caster.
pub type CastOptions = BTreeMap<String, RawValue>;

/// A pluggable caster: raw value in, typed value or issue list out.
pub type CastFn =
    Arc<dyn Fn(&RawValue, &CastOptions) -> Result<Value, Vec<CastIssue>> + Send + Sync>;

/// Casters registered per primitive tag; dispatch is a lookup, never an
/// inspection of the value.
#[derive(Clone)]
pub struct CasterRegistry {
    casters: HashMap<PrimitiveTag, CastFn>,
}

impl CasterRegistry {
    /// A registry with no casters. Dispatching any tag through it is a
    /// configuration error; useful for fully custom caster sets.
    pub fn empty() -> Self {
        Self {
            casters: HashMap::new(),
        }
    }

    /// A registry with every built-in caster registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(PrimitiveTag::String, Arc::new(cast_string));
        registry.register(PrimitiveTag::Int, Arc::new(cast_int));
        registry.register(PrimitiveTag::Float, Arc::new(cast_float));
        registry.register(PrimitiveTag::Bool, Arc::new(cast_bool));
        registry.register(PrimitiveTag::DateTime, Arc::new(cast_datetime));
        registry.register(PrimitiveTag::Uuid, Arc::new(cast_uuid));
        registry
    }

    /// Registers (or replaces) the caster for a tag.
    pub fn register(&mut self, tag: PrimitiveTag, caster: CastFn) {
        self.casters.insert(tag, caster);
    }

    /// Looks up the caster for a tag.
    pub fn get(&self, tag: PrimitiveTag) -> Option<&CastFn> {
        self.casters.get(&tag)
    }
}

impl Default for CasterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for CasterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CasterRegistry")
            .field("casters", &self.casters.len())
            .finish()
    }
}

/// Returns the raw JSON type name for error messages.
pub(crate) fn json_type_name(value: &RawValue) -> &'static str {
    match value {
        RawValue::Null => "null",
        RawValue::Bool(_) => "bool",
        RawValue::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        RawValue::String(_) => "string",
        RawValue::Array(_) => "array",
        RawValue::Object(_) => "object",
    }
}

fn reject(expected: &str, raw: &RawValue) -> Vec<CastIssue> {
    vec![CastIssue::type_mismatch(expected, json_type_name(raw))]
}

fn reject_text(expected: &str, text: &str) -> Vec<CastIssue> {
    vec![CastIssue::type_mismatch(expected, format!("\"{}\"", text))]
}

/// String caster. Numbers and booleans stringify; composites are rejected.
pub fn cast_string(raw: &RawValue, _options: &CastOptions) -> Result<Value, Vec<CastIssue>> {
    match raw {
        RawValue::Null => Ok(Value::Nil),
        RawValue::String(s) => Ok(Value::Str(s.clone())),
        RawValue::Number(n) => Ok(Value::Str(n.to_string())),
        RawValue::Bool(b) => Ok(Value::Str(b.to_string())),
        other => Err(reject("string", other)),
    }
}

/// Integer caster. Accepts integral JSON numbers and decimal strings.
pub fn cast_int(raw: &RawValue, _options: &CastOptions) -> Result<Value, Vec<CastIssue>> {
    match raw {
        RawValue::Null => Ok(Value::Nil),
        RawValue::Number(n) => match n.as_i64() {
            Some(v) => Ok(Value::Int(v)),
            None => Err(reject("int", raw)),
        },
        RawValue::String(s) => match s.trim().parse::<i64>() {
            Ok(v) => Ok(Value::Int(v)),
            Err(_) => Err(reject_text("int", s)),
        },
        other => Err(reject("int", other)),
    }
}

/// Float caster. Accepts any JSON number and numeric strings.
pub fn cast_float(raw: &RawValue, _options: &CastOptions) -> Result<Value, Vec<CastIssue>> {
    match raw {
        RawValue::Null => Ok(Value::Nil),
        RawValue::Number(n) => match n.as_f64() {
            Some(v) => Ok(Value::Float(v)),
            None => Err(reject("float", raw)),
        },
        RawValue::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => Ok(Value::Float(v)),
            Err(_) => Err(reject_text("float", s)),
        },
        other => Err(reject("float", other)),
    }
}

/// Boolean caster. Accepts JSON booleans and "true"/"false" strings.
pub fn cast_bool(raw: &RawValue, _options: &CastOptions) -> Result<Value, Vec<CastIssue>> {
    match raw {
        RawValue::Null => Ok(Value::Nil),
        RawValue::Bool(b) => Ok(Value::Bool(*b)),
        RawValue::String(s) => match s.trim() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(reject_text("bool", s)),
        },
        other => Err(reject("bool", other)),
    }
}

/// Date-time caster. Accepts RFC 3339 strings, a custom `format` option
/// (chrono format string, interpreted as UTC), and integer Unix seconds.
pub fn cast_datetime(raw: &RawValue, options: &CastOptions) -> Result<Value, Vec<CastIssue>> {
    match raw {
        RawValue::Null => Ok(Value::Nil),
        RawValue::String(s) => {
            let parsed = match options.get("format").and_then(RawValue::as_str) {
                Some(format) => NaiveDateTime::parse_from_str(s, format)
                    .map(|naive| naive.and_utc())
                    .ok(),
                None => DateTime::parse_from_rfc3339(s)
                    .map(|t| t.with_timezone(&Utc))
                    .ok(),
            };
            match parsed {
                Some(t) => Ok(Value::DateTime(t)),
                None => Err(reject_text("datetime", s)),
            }
        }
        RawValue::Number(n) => match n.as_i64().and_then(|secs| Utc.timestamp_opt(secs, 0).single()) {
            Some(t) => Ok(Value::DateTime(t)),
            None => Err(reject("datetime", raw)),
        },
        other => Err(reject("datetime", other)),
    }
}

/// UUID caster. Accepts canonical and hyphenless string forms.
pub fn cast_uuid(raw: &RawValue, _options: &CastOptions) -> Result<Value, Vec<CastIssue>> {
    match raw {
        RawValue::Null => Ok(Value::Nil),
        RawValue::String(s) => match Uuid::parse_str(s.trim()) {
            Ok(u) => Ok(Value::Uuid(u)),
            Err(_) => Err(reject_text("uuid", s)),
        },
        other => Err(reject("uuid", other)),
    }
}
