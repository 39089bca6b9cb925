//! Declarative schema for legend configuration.
//!
//! The schema is plain data: a table of [`FieldRule`]s interpreted by the
//! structural validator in [`crate::validate`]. Keeping it data-driven keeps
//! the rule set directly readable and lets consumers compose their own
//! schemas on top of the base one:
//!
//! ```
//! use legend_lint::schema::{FieldKind, FieldRule, LegendSchema};
//!
//! let schema = LegendSchema::base()
//!     .extend([FieldRule::required("title", FieldKind::Text)]);
//! assert!(schema.rule("title").is_some());
//! ```
//!
//! The schema is open: keys it does not describe are ignored, never
//! rejected. The one closed map is `effects[i].style`, whose recognized
//! override keys are listed in [`EFFECT_STYLE_RULES`].

use serde_json::Value;

use crate::models::{
    ANCHOR_KEYWORDS, DIRECTION_KEYWORDS, INTERACTION_KEYWORDS, ITEM_DIRECTION_KEYWORDS,
};
use crate::validate::{self, ValidationResult};

/// Semantic type a field's value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON number.
    Number,
    /// A string.
    Text,
    /// A CSS-compatible color string.
    Color,
    /// A string or a number (ids and labels).
    TextOrNumber,
    /// A string drawn from a closed keyword set.
    Keyword(&'static [&'static str]),
    /// An opaque callback reference; plain data cannot prove invocability,
    /// so any value is accepted.
    Callback,
    /// A named shape or a renderer reference (string or object).
    TextOrRef,
    /// Ordered list of legend data entries ([`DATUM_RULES`]).
    DatumList,
    /// Ordered list of effects ([`EFFECT_RULES`]).
    EffectList,
    /// Partial style override map ([`EFFECT_STYLE_RULES`]).
    EffectStyle,
}

/// One field constraint: name, presence requirement, and value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }
}

/// Top-level legend rules, in schema order.
pub const LEGEND_RULES: &[FieldRule] = &[
    FieldRule::optional("data", FieldKind::DatumList),
    // position & layout
    FieldRule::required("anchor", FieldKind::Keyword(ANCHOR_KEYWORDS)),
    FieldRule::optional("translateX", FieldKind::Number),
    FieldRule::optional("translateY", FieldKind::Number),
    FieldRule::required("direction", FieldKind::Keyword(DIRECTION_KEYWORDS)),
    // items
    FieldRule::required("itemWidth", FieldKind::Number),
    FieldRule::required("itemHeight", FieldKind::Number),
    FieldRule::optional("itemDirection", FieldKind::Keyword(ITEM_DIRECTION_KEYWORDS)),
    FieldRule::optional("itemsSpacing", FieldKind::Number),
    FieldRule::optional("symbolSize", FieldKind::Number),
    FieldRule::optional("symbolSpacing", FieldKind::Number),
    FieldRule::optional("symbolShape", FieldKind::TextOrRef),
    FieldRule::optional("symbolBorderWidth", FieldKind::Number),
    FieldRule::optional("symbolBorderColor", FieldKind::Color),
    FieldRule::optional("background", FieldKind::Color),
    FieldRule::optional("textColor", FieldKind::Color),
    FieldRule::optional("opacity", FieldKind::Number),
    // interactivity
    FieldRule::optional("onClick", FieldKind::Callback),
    FieldRule::optional("onMouseEnter", FieldKind::Callback),
    FieldRule::optional("onMouseLeave", FieldKind::Callback),
    FieldRule::optional("effects", FieldKind::EffectList),
];

/// Rules for one entry of the `data` list.
pub const DATUM_RULES: &[FieldRule] = &[
    FieldRule::required("id", FieldKind::TextOrNumber),
    FieldRule::required("label", FieldKind::TextOrNumber),
    FieldRule::required("color", FieldKind::Color),
    FieldRule::optional("fill", FieldKind::Text),
];

/// Rules for one entry of the `effects` list.
pub const EFFECT_RULES: &[FieldRule] = &[
    FieldRule::required("match", FieldKind::Keyword(INTERACTION_KEYWORDS)),
    FieldRule::required("style", FieldKind::EffectStyle),
];

/// Recognized style-override keys inside `effects[i].style`.
pub const EFFECT_STYLE_RULES: &[FieldRule] = &[
    FieldRule::optional("background", FieldKind::Color),
    FieldRule::optional("opacity", FieldKind::Number),
    FieldRule::optional("textColor", FieldKind::Color),
    FieldRule::optional("symbolSize", FieldKind::Number),
    FieldRule::optional("symbolBorderWidth", FieldKind::Number),
    FieldRule::optional("symbolBorderColor", FieldKind::Color),
];

/// A legend schema: the base rule table, optionally composed with
/// caller-supplied rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendSchema {
    fields: Vec<FieldRule>,
}

impl LegendSchema {
    /// The base schema transcribing the legend data model.
    pub fn base() -> Self {
        Self {
            fields: LEGEND_RULES.to_vec(),
        }
    }

    /// Compose extra rules into the schema. A rule whose name matches an
    /// existing one replaces it; new names are appended in order.
    pub fn extend(mut self, extra: impl IntoIterator<Item = FieldRule>) -> Self {
        for rule in extra {
            match self.fields.iter_mut().find(|f| f.name == rule.name) {
                Some(existing) => *existing = rule,
                None => self.fields.push(rule),
            }
        }
        self
    }

    /// The rules, in validation order.
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Look up a rule by field name.
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a candidate legend object against this schema.
    pub fn validate(&self, input: &Value) -> ValidationResult {
        validate::run(self, input)
    }
}

impl Default for LegendSchema {
    fn default() -> Self {
        Self::base()
    }
}
