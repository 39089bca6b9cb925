//! Optional advisory checks beyond the declarative schema.
//!
//! The core schema deliberately leaves two things unchecked: uniqueness of
//! `data[i].id` values (ids are the lookup keys used for hide/show
//! toggling) and the conventional `[0, 1]` range of `opacity`. Consumers
//! that want those stricter invariants enable them here.
//!
//! This module is only available when the `strict` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! legend-lint = { version = "0.1", features = ["strict"] }
//! ```
//!
//! Advisories are a separate type from schema violations on purpose: a
//! config with advisories still conforms to the schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stricter-than-schema finding. Advisory, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub path: String,
    pub message: String,
}

/// Run every advisory check against a candidate legend object.
///
/// Values that are structurally off (wrong types, non-object input) are
/// skipped here, not reported — that is the schema validator's job.
pub fn check_legend(input: &Value) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    let Some(obj) = input.as_object() else {
        return advisories;
    };

    if let Some(items) = obj.get("data").and_then(Value::as_array) {
        let mut seen: Vec<&Value> = Vec::new();
        for (i, item) in items.iter().enumerate() {
            let Some(id) = item.get("id").filter(|v| !v.is_null()) else {
                continue;
            };
            if seen.contains(&id) {
                advisories.push(Advisory {
                    path: format!("data[{i}].id"),
                    message: format!("duplicate id {id}; ids are used as lookup keys"),
                });
            } else {
                seen.push(id);
            }
        }
    }

    check_opacity(obj.get("opacity"), "opacity", &mut advisories);
    if let Some(effects) = obj.get("effects").and_then(Value::as_array) {
        for (i, effect) in effects.iter().enumerate() {
            check_opacity(
                effect.get("style").and_then(|s| s.get("opacity")),
                &format!("effects[{i}].style.opacity"),
                &mut advisories,
            );
        }
    }
    advisories
}

fn check_opacity(value: Option<&Value>, path: &str, advisories: &mut Vec<Advisory>) {
    if let Some(x) = value.and_then(Value::as_f64)
        && !(0.0..=1.0).contains(&x)
    {
        advisories.push(Advisory {
            path: path.to_string(),
            message: format!("opacity {x} is outside [0, 1]"),
        });
    }
}
