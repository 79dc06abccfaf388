use serde_json::{Map, Value as JsonValue};

use crate::error::ApiError;

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Object,
    Array,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
        }
    }
}

/// A single declared field of an input shape.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

/// Explicit input schema, validated per request.
///
/// This replaces decorator-style validation metadata with plain data: each
/// endpoint declares its expected shape as a `Schema` constant and calls
/// [`Schema::validate`] on the raw body before touching it. Validation does
/// two things: it strips any key not declared here (whitelist), and it coerces
/// declared fields to their declared type where the conversion is lossless
/// (transform). All failures for a request are reported together.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub fn validate(&self, input: JsonValue) -> Result<JsonValue, ApiError> {
        let JsonValue::Object(map) = input else {
            return Err(ApiError::Validation(vec![format!(
                "{}: expected a JSON object",
                self.name
            )]));
        };

        let mut output = Map::with_capacity(self.fields.len());
        let mut errors = Vec::new();

        for field in self.fields {
            match map.get(field.name) {
                Some(value) => match coerce(value, field.ty) {
                    Ok(coerced) => {
                        output.insert(field.name.to_string(), coerced);
                    }
                    Err(problem) => errors.push(format!("{}: {}", field.name, problem)),
                },
                None if field.required => errors.push(format!("{} is required", field.name)),
                None => {}
            }
        }

        if errors.is_empty() {
            Ok(JsonValue::Object(output))
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

/// Converts a raw value to the declared type, or explains why it cannot.
fn coerce(value: &JsonValue, ty: FieldType) -> Result<JsonValue, String> {
    if value.is_null() {
        return Err(format!("expected {}, got null", ty.name()));
    }

    match ty {
        FieldType::String => match value {
            JsonValue::String(_) => Ok(value.clone()),
            JsonValue::Number(n) => Ok(JsonValue::String(n.to_string())),
            JsonValue::Bool(b) => Ok(JsonValue::String(b.to_string())),
            _ => Err("expected a string".to_string()),
        },
        FieldType::Integer => match value {
            JsonValue::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
            JsonValue::Number(n) => match n.as_f64() {
                // The cast below saturates, so out-of-range floats must be
                // rejected rather than coerced to a fabricated value. The
                // upper bound is strict: `i64::MAX as f64` rounds up to 2^63,
                // which does not fit in an i64.
                Some(f)
                    if f.fract() == 0.0
                        && f >= i64::MIN as f64
                        && f < i64::MAX as f64 =>
                {
                    Ok(JsonValue::from(f as i64))
                }
                _ => Err("expected an integer".to_string()),
            },
            JsonValue::String(s) => s
                .trim()
                .parse::<i64>()
                .map(JsonValue::from)
                .map_err(|_| format!("expected an integer, got '{}'", s)),
            _ => Err("expected an integer".to_string()),
        },
        FieldType::Float => match value {
            JsonValue::Number(_) => Ok(value.clone()),
            JsonValue::String(s) => s
                .trim()
                .parse::<f64>()
                .map(JsonValue::from)
                .map_err(|_| format!("expected a number, got '{}'", s)),
            _ => Err("expected a number".to_string()),
        },
        FieldType::Boolean => match value {
            JsonValue::Bool(_) => Ok(value.clone()),
            JsonValue::String(s) => match s.as_str() {
                "true" | "1" => Ok(JsonValue::Bool(true)),
                "false" | "0" => Ok(JsonValue::Bool(false)),
                _ => Err(format!("expected a boolean, got '{}'", s)),
            },
            JsonValue::Number(n) => match n.as_i64() {
                Some(1) => Ok(JsonValue::Bool(true)),
                Some(0) => Ok(JsonValue::Bool(false)),
                _ => Err("expected a boolean".to_string()),
            },
            _ => Err("expected a boolean".to_string()),
        },
        FieldType::Object => match value {
            JsonValue::Object(_) => Ok(value.clone()),
            _ => Err("expected an object".to_string()),
        },
        FieldType::Array => match value {
            JsonValue::Array(_) => Ok(value.clone()),
            _ => Err("expected an array".to_string()),
        },
    }
}
