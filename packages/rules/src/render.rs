//! Turns rule lists into class and inline-style strings.

use crate::breakpoint::Breakpoint;
use crate::builder::RuleList;
use crate::family::{Family, FamilyRecord};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Anything that can produce class and inline-style text
pub trait StyleSource {
    /// Space-separated utility classes
    fn to_class(&self) -> String;

    /// `; `-separated inline declarations
    fn to_style(&self) -> String;

    /// Classes when there are any, inline style otherwise
    fn to_auto(&self) -> StyleOutput {
        let class = self.to_class();
        if !class.is_empty() {
            return StyleOutput::Class(class);
        }

        let style = self.to_style();
        if style.is_empty() {
            StyleOutput::Empty
        } else {
            StyleOutput::Style(style)
        }
    }

    fn render_as(&self, mode: RenderMode) -> StyleOutput {
        match mode {
            RenderMode::Class => non_empty(self.to_class(), StyleOutput::Class),
            RenderMode::Style => non_empty(self.to_style(), StyleOutput::Style),
            RenderMode::Auto => self.to_auto(),
        }
    }
}

fn non_empty(text: String, wrap: fn(String) -> StyleOutput) -> StyleOutput {
    if text.is_empty() {
        StyleOutput::Empty
    } else {
        wrap(text)
    }
}

/// Which representation a consumer asks for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Class,
    Style,
    #[default]
    Auto,
}

/// Result of rendering a style source in a given mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOutput {
    Class(String),
    Style(String),
    Empty,
}

/// Class and style text rendered side by side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub class: String,
    pub style: String,
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        self.class.is_empty() && self.style.is_empty()
    }
}

/// Render both strings for a rule list
pub fn render<F: Family>(list: &RuleList<F>) -> Rendered {
    Rendered {
        class: render_classes::<F>(list.records()),
        style: render_styles::<F>(list.records()),
    }
}

/// Join the class of every record, with breakpoint tokens injected.
///
/// Records whose value has no class are skipped without leaving a separator.
pub fn render_classes<F: Family>(records: &[FamilyRecord<F>]) -> String {
    let mut out = String::new();

    for record in records {
        let class = match F::class_token(record.value()) {
            Some(class) if !class.is_empty() => class,
            _ => {
                trace!(value = ?record.value(), "No class for value");
                continue;
            }
        };

        if !out.is_empty() {
            out.push(' ');
        }

        // Inject the breakpoint token per the family's placement
        match record.breakpoint() {
            Some(breakpoint) => F::PLACEMENT.write(&class, breakpoint.token(), &mut out),
            None => out.push_str(&class),
        }
    }

    out
}

/// Join the inline declaration of every record with `"; "`
pub fn render_styles<F: Family>(records: &[FamilyRecord<F>]) -> String {
    let mut out = String::new();

    for record in records {
        let declaration = match F::declaration(record.value()) {
            Some(declaration) if !declaration.is_empty() => declaration,
            _ => {
                trace!(value = ?record.value(), "No declaration for value");
                continue;
            }
        };

        if !out.is_empty() {
            out.push_str("; ");
        }
        out.push_str(&declaration);
    }

    out
}

impl<F: Family> StyleSource for RuleList<F> {
    fn to_class(&self) -> String {
        render_classes::<F>(self.records())
    }

    fn to_style(&self) -> String {
        render_styles::<F>(self.records())
    }
}
