//! Component and theme CSS aggregation.
//!
//! Option objects emit `(selector, declaration)` pairs; this crate groups
//! them into CSS blocks and stitches a whole theme's blocks together.

pub mod aggregator;
pub mod options;
pub mod rule;
pub mod theme;

pub use aggregator::{generate, generate_rules, CssBlock, CssDocument};
pub use options::{ButtonOptions, CardOptions, DatePickerOptions, InputOptions, NavBarOptions};
pub use rule::{ComponentCssRule, CssRuleSource, RuleEmitter};
pub use theme::{generate_theme_css, ThemeLike};
