//! Declarative JSON shapes and the structural walker that checks values against them.
//!
//! Shapes are plain `static` data so compound resources are built by reference from
//! their field shapes. Unknown object keys are ignored. Amounts and prices are
//! `String` shapes; numeric validity of their contents is not a structural concern.

use serde_json::Value;
use std::fmt;

#[derive(Debug)]
pub enum Shape {
    String,
    /// Any JSON number.
    Number,
    /// Non-negative integral JSON number.
    UnsignedInteger,
    Boolean,
    /// Anything, including `null`.
    Any,
    /// String drawn from a closed set.
    Enum(&'static [&'static str]),
    Object(&'static [Field]),
    Array(&'static Shape),
    /// Object with arbitrary keys, each value matching the inner shape.
    Record(&'static Shape),
    /// First matching alternative wins.
    OneOf(&'static [&'static Shape]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// May be absent; `null` is rejected.
    Optional,
    /// May be absent or `null`.
    Nullable,
}

#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub shape: &'static Shape,
    pub presence: Presence,
}

impl Field {
    pub const fn required(name: &'static str, shape: &'static Shape) -> Self {
        Self {
            name,
            shape,
            presence: Presence::Required,
        }
    }

    pub const fn optional(name: &'static str, shape: &'static Shape) -> Self {
        Self {
            name,
            shape,
            presence: Presence::Optional,
        }
    }

    pub const fn nullable(name: &'static str, shape: &'static Shape) -> Self {
        Self {
            name,
            shape,
            presence: Presence::Nullable,
        }
    }
}

/// One structural mismatch, located by a dotted path such as `action.fromToken.decimals`
/// or `steps[0].estimate`. The root is `$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl SchemaViolation {
    pub fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: if path.is_empty() {
                "$".to_string()
            } else {
                path.to_string()
            },
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl Shape {
    /// Walk `value`, collecting every violation instead of stopping at the first.
    pub fn check(&self, value: &Value) -> Vec<SchemaViolation> {
        let mut violations = Vec::new();
        self.check_at(value, "", &mut violations);
        violations
    }

    pub fn matches(&self, value: &Value) -> bool {
        self.check(value).is_empty()
    }

    fn check_at(&self, value: &Value, path: &str, out: &mut Vec<SchemaViolation>) {
        match self {
            Shape::Any => {}
            Shape::String => {
                if !value.is_string() {
                    out.push(expected(path, "string", value));
                }
            }
            Shape::Number => {
                if !value.is_number() {
                    out.push(expected(path, "number", value));
                }
            }
            Shape::UnsignedInteger => {
                if value.as_u64().is_none() {
                    out.push(expected(path, "non-negative integer", value));
                }
            }
            Shape::Boolean => {
                if !value.is_boolean() {
                    out.push(expected(path, "boolean", value));
                }
            }
            Shape::Enum(allowed) => match value.as_str() {
                Some(s) if allowed.contains(&s) => {}
                Some(s) => out.push(SchemaViolation::new(
                    path,
                    format!("invalid value '{}', expected one of: {}", s, allowed.join(", ")),
                )),
                None => out.push(expected(path, "string", value)),
            },
            Shape::Object(fields) => {
                let Some(map) = value.as_object() else {
                    out.push(expected(path, "object", value));
                    return;
                };
                for field in fields.iter() {
                    let field_path = join_key(path, field.name);
                    match (map.get(field.name), field.presence) {
                        (None, Presence::Required) => {
                            out.push(SchemaViolation::new(&field_path, "required field is missing"))
                        }
                        (None, _) => {}
                        (Some(Value::Null), Presence::Nullable) => {}
                        (Some(v), _) => field.shape.check_at(v, &field_path, out),
                    }
                }
            }
            Shape::Array(item) => {
                let Some(items) = value.as_array() else {
                    out.push(expected(path, "array", value));
                    return;
                };
                for (index, v) in items.iter().enumerate() {
                    item.check_at(v, &format!("{}[{}]", path, index), out);
                }
            }
            Shape::Record(item) => {
                let Some(map) = value.as_object() else {
                    out.push(expected(path, "object", value));
                    return;
                };
                for (key, v) in map {
                    item.check_at(v, &join_key(path, key), out);
                }
            }
            Shape::OneOf(alternatives) => {
                if !alternatives.iter().any(|alt| alt.matches(value)) {
                    let names: Vec<&str> = alternatives.iter().map(|alt| alt.type_name()).collect();
                    out.push(SchemaViolation::new(
                        path,
                        format!(
                            "expected one of: {}, got {}",
                            names.join(" | "),
                            json_type_name(value)
                        ),
                    ));
                }
            }
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Shape::String | Shape::Enum(_) => "string",
            Shape::Number | Shape::UnsignedInteger => "number",
            Shape::Boolean => "boolean",
            Shape::Any => "any",
            Shape::Object(_) => "object",
            Shape::Record(_) => "record",
            Shape::Array(_) => "array",
            Shape::OneOf(_) => "union",
        }
    }
}

fn expected(path: &str, what: &str, value: &Value) -> SchemaViolation {
    SchemaViolation::new(path, format!("expected {}, got {}", what, json_type_name(value)))
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
