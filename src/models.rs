use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Where a legend is anchored on the chart's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
    Center,
}

/// Keyword forms accepted in plain configuration data, in schema order.
pub const ANCHOR_KEYWORDS: &[&str] = &[
    "top",
    "top-right",
    "right",
    "bottom-right",
    "bottom",
    "bottom-left",
    "left",
    "top-left",
    "center",
];

impl Anchor {
    pub const ALL: [Self; 9] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
        Self::Center,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopRight => "top-right",
            Self::Right => "right",
            Self::BottomRight => "bottom-right",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom-left",
            Self::Left => "left",
            Self::TopLeft => "top-left",
            Self::Center => "center",
        }
    }
}

/// Layout flow of legend items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Row,
    Column,
}

pub const DIRECTION_KEYWORDS: &[&str] = &["row", "column"];

impl Direction {
    pub const ALL: [Self; 2] = [Self::Row, Self::Column];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

/// Internal layout of symbol and label within a single legend item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemDirection {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

pub const ITEM_DIRECTION_KEYWORDS: &[&str] = &[
    "left-to-right",
    "right-to-left",
    "top-to-bottom",
    "bottom-to-top",
];

impl ItemDirection {
    pub const ALL: [Self; 4] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::TopToBottom,
        Self::BottomToTop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
            Self::TopToBottom => "top-to-bottom",
            Self::BottomToTop => "bottom-to-top",
        }
    }
}

/// Interaction an effect can match. Only hover is recognized today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interaction {
    Hover,
}

pub const INTERACTION_KEYWORDS: &[&str] = &["hover"];

impl Interaction {
    pub const ALL: [Self; 1] = [Self::Hover];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
        }
    }
}

/// Scalar that may be either a string or a number (ids and labels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(f64),
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for TextOrNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TextOrNumber {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for TextOrNumber {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for TextOrNumber {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

/// One entry of a legend's `data` list. Legend rendering looks entries up
/// by `id`, so ids are expected to be unique within one legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendDatum {
    pub id: TextOrNumber,
    /// Display text next to the symbol.
    pub label: TextOrNumber,
    /// CSS-compatible color value.
    pub color: String,
    /// Optional pattern/fill reference override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl LegendDatum {
    pub fn new(
        id: impl Into<TextOrNumber>,
        label: impl Into<TextOrNumber>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            fill: None,
        }
    }
}

/// Partial style override applied while an effect's interaction is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_border_color: Option<String>,
}

/// Conditional style override for a legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEffect {
    /// Interaction that activates the override.
    #[serde(rename = "match")]
    pub trigger: Interaction,
    pub style: EffectStyle,
}

impl LegendEffect {
    /// Hover effect with the given style override.
    pub fn on_hover(style: EffectStyle) -> Self {
        Self {
            trigger: Interaction::Hover,
            style,
        }
    }
}

/// Opaque interaction callback attached by the host application.
///
/// Carried alongside the configuration but invisible to serialization;
/// plain-data configs simply have no handlers.
#[derive(Clone)]
pub struct LegendHandler(Arc<dyn Fn(&LegendDatum) + Send + Sync>);

impl LegendHandler {
    pub fn new(f: impl Fn(&LegendDatum) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callback for the interacted-with entry.
    pub fn invoke(&self, datum: &LegendDatum) {
        (self.0)(datum);
    }
}

impl fmt::Debug for LegendHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LegendHandler(..)")
    }
}

/// Typed legend configuration.
///
/// Field names serialize in the camelCase/kebab-case spelling used by
/// plain-data configs, so a serialized `LegendConfig` is exactly what
/// [`crate::validate::validate_legend`] accepts. Constructed configs are
/// valid by construction; the validator exists for configs arriving as
/// untyped data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    /// Explicit data entries. When absent, the rendering layer derives
    /// entries from the chart's own dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<LegendDatum>>,

    // position & layout
    pub anchor: Anchor,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f64>,

    // items
    pub item_width: f64,
    pub item_height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_direction: Option<ItemDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_spacing: Option<f64>,
    /// Named symbol shape (e.g. `"circle"`). Hosts plugging in a custom
    /// renderer do so in their rendering layer, not here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    // interactivity
    #[serde(skip)]
    pub on_click: Option<LegendHandler>,
    #[serde(skip)]
    pub on_mouse_enter: Option<LegendHandler>,
    #[serde(skip)]
    pub on_mouse_leave: Option<LegendHandler>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<LegendEffect>>,
}

impl LegendConfig {
    /// Minimal config from the four required fields; everything else unset.
    pub fn new(anchor: Anchor, direction: Direction, item_width: f64, item_height: f64) -> Self {
        Self {
            data: None,
            anchor,
            direction,
            translate_x: None,
            translate_y: None,
            item_width,
            item_height,
            item_direction: None,
            items_spacing: None,
            symbol_size: None,
            symbol_spacing: None,
            symbol_shape: None,
            symbol_border_width: None,
            symbol_border_color: None,
            background: None,
            text_color: None,
            opacity: None,
            on_click: None,
            on_mouse_enter: None,
            on_mouse_leave: None,
            effects: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_keywords_match_serde_spelling() {
        for (variant, keyword) in Anchor::ALL.iter().zip(ANCHOR_KEYWORDS) {
            assert_eq!(variant.as_str(), *keyword);
            let json = serde_json::to_string(variant).unwrap();
            assert_eq!(json, format!("\"{}\"", keyword));
        }
        for (variant, keyword) in Direction::ALL.iter().zip(DIRECTION_KEYWORDS) {
            assert_eq!(variant.as_str(), *keyword);
        }
        for (variant, keyword) in ItemDirection::ALL.iter().zip(ITEM_DIRECTION_KEYWORDS) {
            assert_eq!(variant.as_str(), *keyword);
            let json = serde_json::to_string(variant).unwrap();
            assert_eq!(json, format!("\"{}\"", keyword));
        }
        for (variant, keyword) in Interaction::ALL.iter().zip(INTERACTION_KEYWORDS) {
            assert_eq!(variant.as_str(), *keyword);
        }
    }

    #[test]
    fn text_or_number_accepts_both() {
        let id: TextOrNumber = serde_json::from_str("\"rust\"").unwrap();
        assert_eq!(id, TextOrNumber::Text("rust".into()));
        let id: TextOrNumber = serde_json::from_str("7").unwrap();
        assert_eq!(id, TextOrNumber::Number(7.0));
    }

    #[test]
    fn handler_receives_datum() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let handler = LegendHandler::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        handler.invoke(&LegendDatum::new("rust", "Rust", "#dea584"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
