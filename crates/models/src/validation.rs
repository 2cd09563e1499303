//! Payload field selection and coercion.
//!
//! Create payloads arrive as arbitrary JSON. Each model declares the fields it
//! reads through a [`PayloadReader`]; unknown fields are never looked at, and
//! every problem found is collected into [`FieldErrors`] so one response can
//! report all of them.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// One field-level problem, shaped like `{"loc": [...], "msg": ..., "type": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new<L, S>(loc: L, msg: &str, kind: &str) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.to_string(),
            kind: kind.to_string(),
        }
    }

    pub fn missing(location: &str, field: &str) -> Self {
        Self::new([location, field], "Field required", "missing")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: FieldError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Whether some error points at `field` (last element of `loc`).
    pub fn mentions(&self, field: &str) -> bool {
        self.0
            .iter()
            .any(|e| e.loc.last().map(String::as_str) == Some(field))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Build a value of `Self` from a JSON payload, ignoring undeclared fields.
pub trait FromPayload: Sized {
    fn from_payload(value: &Value) -> Result<Self, FieldErrors>;
}

/// Lax boolean parsing shared by payloads and query strings.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

/// Reads declared fields out of a JSON object, recording every failure.
///
/// Accessors return a placeholder on failure so a caller can build the whole
/// input struct and let [`PayloadReader::finish`] decide.
pub struct PayloadReader<'a> {
    object: Option<&'a Map<String, Value>>,
    location: &'static str,
    errors: FieldErrors,
}

impl<'a> PayloadReader<'a> {
    pub fn new(value: &'a Value) -> Self {
        let mut errors = FieldErrors::new();
        let object = value.as_object();
        if object.is_none() {
            errors.push(FieldError::new(
                ["body"],
                "Input should be a valid dictionary or object to extract fields from",
                "model_attributes_type",
            ));
        }
        Self { object, location: "body", errors }
    }

    /// Absent and `null` both count as "not given".
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.object?.get(field).filter(|v| !v.is_null())
    }

    fn fail(&mut self, field: &str, msg: &str, kind: &str) {
        self.errors.push(FieldError::new([self.location, field], msg, kind));
    }

    fn require(&mut self, field: &str) -> Option<&'a Value> {
        let found = self.get(field);
        if found.is_none() && self.object.is_some() {
            self.errors.push(FieldError::missing(self.location, field));
        }
        found
    }

    fn coerce_string(&mut self, field: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.fail(field, "Input should be a valid string", "string_type");
                None
            }
        }
    }

    fn coerce_number(&mut self, field: &str, value: &Value) -> Option<f64> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    self.fail(
                        field,
                        "Input should be a valid number, unable to parse string as a number",
                        "float_parsing",
                    );
                    return None;
                }
            },
            _ => None,
        };
        match parsed {
            Some(v) if v.is_finite() => Some(v),
            Some(_) => {
                self.fail(field, "Input should be a finite number", "finite_number");
                None
            }
            None => {
                self.fail(field, "Input should be a valid number", "float_type");
                None
            }
        }
    }

    fn coerce_integer(&mut self, field: &str, value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Some(i);
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                        Some(f as i64)
                    }
                    Some(f) if f.fract() != 0.0 => {
                        self.fail(
                            field,
                            "Input should be a valid integer, got a number with a fractional part",
                            "int_from_float",
                        );
                        None
                    }
                    _ => {
                        self.fail(field, "Input should be a valid integer", "int_type");
                        None
                    }
                }
            }
            Value::String(s) => match s.trim().parse::<i64>() {
                Ok(i) => Some(i),
                Err(_) => {
                    self.fail(
                        field,
                        "Input should be a valid integer, unable to parse string as an integer",
                        "int_parsing",
                    );
                    None
                }
            },
            _ => {
                self.fail(field, "Input should be a valid integer", "int_type");
                None
            }
        }
    }

    fn coerce_bool(&mut self, field: &str, value: &Value) -> Option<bool> {
        let parsed = match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => None,
            },
            Value::String(s) => parse_bool(s),
            _ => None,
        };
        if parsed.is_none() {
            self.fail(field, "Input should be a valid boolean, unable to interpret input", "bool_parsing");
        }
        parsed
    }

    pub fn string(&mut self, field: &str) -> String {
        self.require(field)
            .and_then(|v| self.coerce_string(field, v))
            .unwrap_or_default()
    }

    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        let value = self.get(field)?;
        self.coerce_string(field, value)
    }

    pub fn number(&mut self, field: &str) -> f64 {
        self.require(field)
            .and_then(|v| self.coerce_number(field, v))
            .unwrap_or_default()
    }

    /// Number that must be `>= 0`.
    pub fn non_negative_number(&mut self, field: &str) -> f64 {
        let Some(value) = self.require(field) else { return 0.0 };
        match self.coerce_number(field, value) {
            Some(v) if v >= 0.0 => v,
            Some(_) => {
                self.fail(field, "Input should be greater than or equal to 0", "greater_than_equal");
                0.0
            }
            None => 0.0,
        }
    }

    pub fn integer(&mut self, field: &str) -> i64 {
        self.require(field)
            .and_then(|v| self.coerce_integer(field, v))
            .unwrap_or_default()
    }

    pub fn integer_or(&mut self, field: &str, default: i64) -> i64 {
        match self.get(field) {
            Some(v) => self.coerce_integer(field, v).unwrap_or(default),
            None => default,
        }
    }

    pub fn boolean_or(&mut self, field: &str, default: bool) -> bool {
        match self.get(field) {
            Some(v) => self.coerce_bool(field, v).unwrap_or(default),
            None => default,
        }
    }

    pub fn finish<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_required_fields_are_reported() {
        let v = json!({"a": null});
        let mut r = PayloadReader::new(&v);
        r.string("a");
        r.string("b");
        let errs = r.finish(()).unwrap_err();
        assert_eq!(errs.len(), 2);
        assert!(errs.iter().all(|e| e.kind == "missing"));
        assert_eq!(errs.iter().next().unwrap().loc, vec!["body", "a"]);
    }

    #[test]
    fn strings_are_strict() {
        let v = json!({"name": 42});
        let mut r = PayloadReader::new(&v);
        r.string("name");
        let errs = r.finish(()).unwrap_err();
        assert_eq!(errs.iter().next().unwrap().kind, "string_type");
    }

    #[test]
    fn numbers_accept_numeric_strings() {
        let v = json!({"p": "9.99", "q": 3, "bad": "abc", "neg": -1});
        let mut r = PayloadReader::new(&v);
        assert_eq!(r.number("p"), 9.99);
        assert_eq!(r.number("q"), 3.0);
        r.number("bad");
        r.non_negative_number("neg");
        let errs = r.finish(()).unwrap_err();
        let kinds: Vec<&str> = errs.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["float_parsing", "greater_than_equal"]);
    }

    #[test]
    fn non_finite_strings_are_rejected() {
        let v = json!({"p": "inf"});
        let mut r = PayloadReader::new(&v);
        r.number("p");
        assert!(r.finish(()).unwrap_err().mentions("p"));
    }

    #[test]
    fn integers_accept_whole_floats_and_strings() {
        let v = json!({"a": 5.0, "b": "7", "c": 2.5, "d": true});
        let mut r = PayloadReader::new(&v);
        assert_eq!(r.integer("a"), 5);
        assert_eq!(r.integer("b"), 7);
        r.integer("c");
        r.integer("d");
        let errs = r.finish(()).unwrap_err();
        let kinds: Vec<&str> = errs.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["int_from_float", "int_type"]);
    }

    #[test]
    fn defaults_apply_only_when_absent() {
        let v = json!({"featured": "yes"});
        let mut r = PayloadReader::new(&v);
        assert_eq!(r.integer_or("stock", 0), 0);
        assert!(r.boolean_or("featured", false));
        assert!(r.finish(()).is_ok());

        let v = json!({"featured": "maybe"});
        let mut r = PayloadReader::new(&v);
        r.boolean_or("featured", false);
        assert!(r.finish(()).unwrap_err().mentions("featured"));
    }

    #[test]
    fn optional_strings_accept_absent_and_null() {
        let v = json!({"x": null, "y": "v"});
        let mut r = PayloadReader::new(&v);
        assert_eq!(r.optional_string("x"), None);
        assert_eq!(r.optional_string("z"), None);
        assert_eq!(r.optional_string("y").as_deref(), Some("v"));
        assert!(r.finish(()).is_ok());
    }

    #[test]
    fn non_object_payload_is_a_single_error() {
        let v = json!([1, 2]);
        let mut r = PayloadReader::new(&v);
        r.string("name");
        let errs = r.finish(()).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs.iter().next().unwrap().loc, vec!["body"]);
    }

    #[test]
    fn parse_bool_variants() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("nope"), None);
    }

    #[test]
    fn errors_serialize_with_type_key() {
        let e = FieldErrors::single(FieldError::missing("query", "status"));
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v, json!([{"loc": ["query", "status"], "msg": "Field required", "type": "missing"}]));
        assert_eq!(e.to_string(), "query.status: Field required");
    }
}
