//! Structural validation of legend configuration values.
//!
//! Input is duck-typed [`serde_json::Value`] data: shape is all that is
//! checked, never object identity. Validation is a pure function of its
//! input and always returns a result value. It never panics and never stops
//! at the first problem, so a caller can report every violation in one pass.
//!
//! Error ordering is deterministic: schema rule order at each level, input
//! order within the `data` and `effects` sequences.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{
    DATUM_RULES, EFFECT_RULES, EFFECT_STYLE_RULES, FieldKind, FieldRule, LegendSchema,
};

/// The complete violation taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// A required field is absent or `null`.
    MissingRequiredField,
    /// A keyword field holds a value outside its closed set.
    InvalidEnumValue,
    /// A field holds a value of the wrong semantic type.
    InvalidType,
    /// An `effects[i].style` key is not a recognized style override.
    UnknownEffectTarget,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing-required-field",
            Self::InvalidEnumValue => "invalid-enum-value",
            Self::InvalidType => "invalid-type",
            Self::UnknownEffectTarget => "unknown-effect-target",
        }
    }
}

/// One schema violation: where, what kind, and a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{path}: {message}")]
pub struct ValidationError {
    /// Field path such as `anchor` or `effects[0].match`. Empty for the
    /// root value itself.
    pub path: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl ValidationError {
    fn new(path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of validating one candidate legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a single candidate legend against the base schema.
///
/// Unknown extra keys are ignored (the schema is open); a value that is not
/// an object at all yields one [`ViolationKind::InvalidType`] at the root.
///
/// ```
/// use legend_lint::validate_legend;
/// use serde_json::json;
///
/// let result = validate_legend(&json!({
///     "anchor": "bottom",
///     "direction": "row",
///     "itemWidth": 100,
///     "itemHeight": 24,
/// }));
/// assert!(result.valid);
/// ```
pub fn validate_legend(input: &Value) -> ValidationResult {
    LegendSchema::base().validate(input)
}

/// Validate an ordered sequence of candidate legends against the base
/// schema. The output has the same length and order as the input; nothing
/// short-circuits on failure.
pub fn validate_legends(inputs: &[Value]) -> Vec<ValidationResult> {
    let schema = LegendSchema::base();
    inputs.iter().map(|input| schema.validate(input)).collect()
}

/// Schema interpreter entry point used by [`LegendSchema::validate`].
pub(crate) fn run(schema: &LegendSchema, input: &Value) -> ValidationResult {
    let mut errors = Vec::new();
    match input.as_object() {
        Some(obj) => {
            for rule in schema.fields() {
                check_field(obj, "", rule, &mut errors);
            }
        }
        None => errors.push(ValidationError::new(
            "",
            ViolationKind::InvalidType,
            format!("expected a legend object, got {}", describe(input)),
        )),
    }
    ValidationResult::from_errors(errors)
}

fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// JSON `null` counts as absent, for required and optional fields alike.
fn check_field(
    obj: &Map<String, Value>,
    prefix: &str,
    rule: &FieldRule,
    errors: &mut Vec<ValidationError>,
) {
    let path = field_path(prefix, rule.name);
    let Some(value) = obj.get(rule.name).filter(|v| !v.is_null()) else {
        if rule.required {
            errors.push(ValidationError::new(
                path,
                ViolationKind::MissingRequiredField,
                format!("missing required field `{}`", rule.name),
            ));
        }
        return;
    };
    check_value(value, &path, rule.kind, errors);
}

fn check_value(value: &Value, path: &str, kind: FieldKind, errors: &mut Vec<ValidationError>) {
    match kind {
        FieldKind::Number => {
            if !value.is_number() {
                errors.push(type_error(path, "a number", value));
            }
        }
        FieldKind::Text => {
            if !value.is_string() {
                errors.push(type_error(path, "a string", value));
            }
        }
        FieldKind::Color => {
            if !value.is_string() {
                errors.push(type_error(path, "a color string", value));
            }
        }
        FieldKind::TextOrNumber => {
            if !(value.is_string() || value.is_number()) {
                errors.push(type_error(path, "a string or a number", value));
            }
        }
        FieldKind::Keyword(allowed) => match value.as_str() {
            None => errors.push(type_error(path, "a string", value)),
            Some(s) if !allowed.contains(&s) => errors.push(ValidationError::new(
                path,
                ViolationKind::InvalidEnumValue,
                format!("unknown value `{s}`, expected one of: {}", allowed.join(", ")),
            )),
            Some(_) => {}
        },
        // Plain data cannot prove a callback reference is invocable; accept
        // whatever the host put there.
        FieldKind::Callback => {}
        FieldKind::TextOrRef => {
            if !(value.is_string() || value.is_object()) {
                errors.push(type_error(path, "a shape name or renderer reference", value));
            }
        }
        FieldKind::DatumList => check_entries(value, path, DATUM_RULES, "data entry", errors),
        FieldKind::EffectList => check_entries(value, path, EFFECT_RULES, "effect", errors),
        FieldKind::EffectStyle => check_effect_style(value, path, errors),
    }
}

/// Walk an ordered list of shaped entries (`data` or `effects`).
fn check_entries(
    value: &Value,
    path: &str,
    rules: &[FieldRule],
    entry_what: &str,
    errors: &mut Vec<ValidationError>,
) {
    let Some(items) = value.as_array() else {
        errors.push(type_error(path, &format!("an array of {entry_what} objects"), value));
        return;
    };
    for (i, item) in items.iter().enumerate() {
        let entry_path = format!("{path}[{i}]");
        match item.as_object() {
            Some(obj) => {
                for rule in rules {
                    check_field(obj, &entry_path, rule, errors);
                }
            }
            None => errors.push(type_error(&entry_path, &format!("a {entry_what} object"), item)),
        }
    }
}

/// The one closed map in the schema: every key must be a recognized style
/// override. An empty style object is fine.
fn check_effect_style(value: &Value, path: &str, errors: &mut Vec<ValidationError>) {
    let Some(style) = value.as_object() else {
        errors.push(type_error(path, "a style object", value));
        return;
    };
    for (key, v) in style {
        let key_path = format!("{path}.{key}");
        match EFFECT_STYLE_RULES.iter().find(|r| r.name == key) {
            Some(rule) => {
                if !v.is_null() {
                    check_value(v, &key_path, rule.kind, errors);
                }
            }
            None => errors.push(ValidationError::new(
                key_path,
                ViolationKind::UnknownEffectTarget,
                format!(
                    "`{key}` is not a recognized style override, expected one of: {}",
                    EFFECT_STYLE_RULES
                        .iter()
                        .map(|r| r.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            )),
        }
    }
}

fn type_error(path: &str, expected: &str, found: &Value) -> ValidationError {
    ValidationError::new(
        path,
        ViolationKind::InvalidType,
        format!("expected {expected}, got {}", describe(found)),
    )
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_root_is_one_type_error() {
        let result = validate_legend(&json!([1, 2, 3]));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, "");
        assert_eq!(result.errors[0].kind, ViolationKind::InvalidType);
    }

    #[test]
    fn error_display_includes_path_and_message() {
        let result = validate_legend(&json!({
            "direction": "row", "itemWidth": 100, "itemHeight": 24,
        }));
        let err = &result.errors[0];
        assert_eq!(err.to_string(), "anchor: missing required field `anchor`");
    }

    #[test]
    fn result_serializes_as_plain_data() {
        let result = validate_legend(&json!({ "anchor": "diagonal" }));
        let out = serde_json::to_value(&result).unwrap();
        assert_eq!(out["valid"], json!(false));
        assert_eq!(out["errors"][0]["kind"], json!("invalid-enum-value"));
    }
}
