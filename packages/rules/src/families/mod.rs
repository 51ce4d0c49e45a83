//! Built-in utility families.
//!
//! Each family is a table, not a type hierarchy: the value enum plus the
//! class and declaration lookups of its [`Family`](crate::Family) impl.

mod color;
mod layout;
mod spacing;
mod typography;

pub use color::{background_color, text_color, BackgroundColor, TextColor, ThemeColor};
pub use layout::{display, visibility, Display, DisplayValue, Visibility, VisibilityValue};
pub use spacing::{gap, margin, padding, Gap, Margin, Padding, Spacing};
pub use typography::{font_weight, text_align, Align, FontWeight, TextAlign, Weight};
