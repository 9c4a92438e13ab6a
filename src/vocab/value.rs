//! Attribute values attached to vocabulary terms

use std::collections::BTreeMap;

/// A single attribute value
///
/// Graph-derived values are always `String` (literal lexical forms) or
/// `Reference` (compact names or IRIs of other resources). The remaining
/// variants only arrive through operator-supplied extra data.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Reference(String),
    /// Wide enough for every JSON integer (`i64` and `u64`)
    Integer(i128),
    Float(f64),
    Boolean(bool),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Nil,
}

impl Value {
    /// Plain text of a scalar value, `None` for collections and nil
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::String(s) | Value::Reference(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            Value::List(_) | Value::Map(_) | Value::Nil => None,
        }
    }

    /// Get string contents if this is a string or reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Reference(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Integer(i128::from(i)),
                (None, Some(u)) => Value::Integer(i128::from(u)),
                (None, None) => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

/// The value held under one attribute key
///
/// A list of one element is kept as a list here; the unwrap to a bare value
/// happens only when the attribute is serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Scalar(Value),
    List(Vec<Value>),
}

impl AttributeValue {
    /// Append a value, promoting a scalar to a list
    pub fn push(&mut self, value: Value) {
        match self {
            AttributeValue::List(values) => values.push(value),
            AttributeValue::Scalar(existing) => {
                let first = std::mem::replace(existing, Value::Nil);
                *self = AttributeValue::List(vec![first, value]);
            }
        }
    }

    /// All values in order
    pub fn values(&self) -> &[Value] {
        match self {
            AttributeValue::Scalar(v) => std::slice::from_ref(v),
            AttributeValue::List(values) => values,
        }
    }
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        AttributeValue::Scalar(value)
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Array(items) => {
                AttributeValue::List(items.into_iter().map(Value::from).collect())
            }
            other => AttributeValue::Scalar(Value::from(other)),
        }
    }
}
