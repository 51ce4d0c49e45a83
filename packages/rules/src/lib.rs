//! Style rule compilation: ordered rule lists rendered to utility classes
//! or inline styles, with breakpoint tokens injected per family.

#[macro_use]
mod macros;

pub mod breakpoint;
pub mod builder;
pub mod compose;
pub mod families;
pub mod family;
pub mod placement;
pub mod record;
pub mod render;

pub use breakpoint::{Breakpoint, Device, Scheme, Screen};
pub use builder::RuleList;
pub use compose::StyleSet;
pub use family::{Family, FamilyRecord};
pub use placement::Placement;
pub use record::RuleRecord;
pub use render::{
    render, render_classes, render_styles, RenderMode, Rendered, StyleOutput, StyleSource,
};
