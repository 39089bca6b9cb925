//! legend-lint
//!
//! A lightweight Rust library for validating chart legend configuration
//! against its declarative schema. Pairs with the `legend-lint` CLI.
//!
//! ### Features
//! - Validate a single legend config or a whole `legends` list, collecting
//!   every violation instead of stopping at the first
//! - Data-driven schema with composition (extend the base rule table)
//! - Typed, serde-friendly configuration model for hosts building configs
//!   in code
//! - Render validation results as a text report or save them as JSON
//!
//! ### Example
//! ```
//! use legend_lint::validate_legend;
//! use serde_json::json;
//!
//! let legend = json!({
//!     "anchor": "bottom",
//!     "direction": "row",
//!     "itemWidth": 100,
//!     "itemHeight": 24,
//!     "effects": [{ "match": "hover", "style": { "opacity": 1 } }],
//! });
//! let result = validate_legend(&legend);
//! assert!(result.valid);
//!
//! let broken = json!({ "anchor": "diagonal", "direction": "row",
//!                      "itemWidth": 100, "itemHeight": 24 });
//! let result = validate_legend(&broken);
//! assert_eq!(result.errors[0].path, "anchor");
//! ```

pub mod models;
pub mod report;
pub mod schema;
#[cfg(feature = "strict")]
pub mod strict;
pub mod validate;

pub use models::{Anchor, Direction, ItemDirection, LegendConfig, LegendDatum};
pub use schema::{FieldKind, FieldRule, LegendSchema};
pub use validate::{
    ValidationError, ValidationResult, ViolationKind, validate_legend, validate_legends,
};
