//! Client-side pre-submit validation.
//!
//! Produces the same `{property, constraints}` entries the backend returns on
//! 400, so forms bind a single error channel whether the check ran locally or
//! server-side. Constraint keys follow the backend's vocabulary (`isNotEmpty`,
//! `isEmail`, `minLength`, ...).

use crate::response::FieldError;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
    Uuid,
}

#[derive(Clone, Debug, Default)]
pub struct FieldRule {
    pub required: bool,
    pub format: Option<Format>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub pattern: Option<String>,
    pub allowed: Option<Vec<Value>>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl FieldRule {
    pub fn new() -> Self {
        FieldRule::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn min_length(mut self, n: u32) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: u32) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn allowed(mut self, values: Vec<Value>) -> Self {
        self.allowed = Some(values);
        self
    }

    pub fn minimum(mut self, n: f64) -> Self {
        self.minimum = Some(n);
        self
    }

    pub fn maximum(mut self, n: f64) -> Self {
        self.maximum = Some(n);
        self
    }
}

/// Validate a full body against per-field rules. Required fields must be
/// present and non-null. Returns one entry per violating field.
pub fn validate(
    body: &BTreeMap<String, Value>,
    rules: &BTreeMap<String, FieldRule>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for (property, rule) in rules {
        let value = body.get(property);
        let constraints = check_field(property, value, rule, true);
        if !constraints.is_empty() {
            errors.push(FieldError {
                property: property.clone(),
                constraints,
            });
        }
    }
    errors
}

/// Validate only the fields present in the body (partial update semantics);
/// `required` is not enforced for missing fields.
pub fn validate_partial(
    body: &BTreeMap<String, Value>,
    rules: &BTreeMap<String, FieldRule>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for (property, value) in body {
        if let Some(rule) = rules.get(property) {
            let constraints = check_field(property, Some(value), rule, false);
            if !constraints.is_empty() {
                errors.push(FieldError {
                    property: property.clone(),
                    constraints,
                });
            }
        }
    }
    errors
}

fn check_field(
    property: &str,
    value: Option<&Value>,
    rule: &FieldRule,
    enforce_required: bool,
) -> BTreeMap<String, String> {
    let mut constraints = BTreeMap::new();
    let value = match value {
        None | Some(Value::Null) => {
            if enforce_required && rule.required {
                constraints.insert(
                    "isNotEmpty".into(),
                    format!("{} should not be empty", property),
                );
            }
            return constraints;
        }
        Some(value) => value,
    };

    if let Some(format) = rule.format {
        check_format(property, value, format, &mut constraints);
    }
    if let Some(min) = rule.min_length {
        if let Some(s) = value.as_str() {
            if s.chars().count() < min as usize {
                constraints.insert(
                    "minLength".into(),
                    format!(
                        "{} must be longer than or equal to {} characters",
                        property, min
                    ),
                );
            }
        }
    }
    if let Some(max) = rule.max_length {
        if let Some(s) = value.as_str() {
            if s.chars().count() > max as usize {
                constraints.insert(
                    "maxLength".into(),
                    format!(
                        "{} must be shorter than or equal to {} characters",
                        property, max
                    ),
                );
            }
        }
    }
    if let Some(pattern) = rule.pattern.as_deref() {
        if let Some(s) = value.as_str() {
            match Regex::new(pattern) {
                Ok(re) if re.is_match(s) => {}
                _ => {
                    constraints.insert(
                        "matches".into(),
                        format!("{} does not match the required pattern", property),
                    );
                }
            }
        }
    }
    if let Some(allowed) = rule.allowed.as_deref() {
        if !allowed.iter().any(|a| value_eq(value, a)) {
            constraints.insert(
                "isIn".into(),
                format!("{} must be one of the allowed values", property),
            );
        }
    }
    if let Some(min) = rule.minimum {
        if let Some(n) = value.as_f64() {
            if n < min {
                constraints.insert("min".into(), format!("{} must not be less than {}", property, min));
            }
        }
    }
    if let Some(max) = rule.maximum {
        if let Some(n) = value.as_f64() {
            if n > max {
                constraints.insert(
                    "max".into(),
                    format!("{} must not be greater than {}", property, max),
                );
            }
        }
    }
    constraints
}

fn check_format(
    property: &str,
    value: &Value,
    format: Format,
    constraints: &mut BTreeMap<String, String>,
) {
    let Some(s) = value.as_str() else { return };
    match format {
        Format::Email => {
            if !s.contains('@') || s.len() < 3 {
                constraints.insert(
                    "isEmail".into(),
                    format!("{} must be a valid email", property),
                );
            }
        }
        Format::Uuid => {
            if uuid::Uuid::parse_str(s).is_err() {
                constraints.insert("isUuid".into(), format!("{} must be a UUID", property));
            }
        }
    }
}

fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(n), Value::Number(m)) => n.as_f64() == m.as_f64(),
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rules() -> BTreeMap<String, FieldRule> {
        let mut rules = BTreeMap::new();
        rules.insert(
            "email".to_string(),
            FieldRule::new().required().format(Format::Email),
        );
        rules.insert(
            "code".to_string(),
            FieldRule::new().required().min_length(3).max_length(16),
        );
        rules.insert(
            "status".to_string(),
            FieldRule::new().allowed(vec![json!("Pending"), json!("Approve"), json!("Reject")]),
        );
        rules
    }

    #[test]
    fn violations_bind_as_backend_shaped_field_errors() {
        let mut body = BTreeMap::new();
        body.insert("email".to_string(), json!("not-an-email"));
        body.insert("code".to_string(), json!("ab"));
        let errors = validate(&body, &rules());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].property, "code");
        assert!(errors[0].constraints.contains_key("minLength"));
        assert_eq!(errors[1].property, "email");
        assert_eq!(
            errors[1].constraints.get("isEmail").map(String::as_str),
            Some("email must be a valid email")
        );
    }

    #[test]
    fn missing_required_field_reports_is_not_empty() {
        let errors = validate(&BTreeMap::new(), &rules());
        let email = errors.iter().find(|e| e.property == "email").unwrap();
        assert!(email.constraints.contains_key("isNotEmpty"));
    }

    #[test]
    fn partial_validation_skips_absent_fields() {
        let mut body = BTreeMap::new();
        body.insert("status".to_string(), json!("Archived"));
        let errors = validate_partial(&body, &rules());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].property, "status");
        assert!(errors[0].constraints.contains_key("isIn"));
    }

    #[test]
    fn valid_body_produces_no_errors() {
        let mut body = BTreeMap::new();
        body.insert("email".to_string(), json!("ops@example.com"));
        body.insert("code".to_string(), json!("SPRING10"));
        body.insert("status".to_string(), json!("Approve"));
        assert!(validate(&body, &rules()).is_empty());
    }
}
