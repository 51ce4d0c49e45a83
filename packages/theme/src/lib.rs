//! CSS custom-property extraction for themes.
//!
//! Variable-bearing types register `(name, accessor)` pairs once per type;
//! the extractor walks a graph of such objects, later sources overriding
//! earlier ones, and renders the result as `:root` plus per-component
//! blocks.

#[macro_use]
mod macros;

pub mod accessor;
pub mod cache;
pub mod extractor;
pub mod theme;
pub mod value;
pub mod variables;

pub use accessor::{AccessorRegistry, VariableAccessor};
pub use cache::AccessorCache;
pub use extractor::{
    component_of, extract_variables, render_root_css, render_variable_css, CssVariables,
    ExtractScope, VariableExtractor, VariableMap, VariableSource, DEFAULT_PREFIX,
};
pub use theme::{Theme, ThemeStack};
pub use value::CssValue;
pub use variables::{
    ButtonVariables, CardVariables, ComponentVariables, InputVariables, NavBarVariables,
    PaletteVariables, ThemeVariables, TypographyVariables,
};
