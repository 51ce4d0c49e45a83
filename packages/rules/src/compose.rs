use crate::render::{Rendered, StyleOutput, StyleSource};

/// Several style sources merged into one `class` and one `style` attribute.
///
/// Each source is rendered in auto mode: classes when it has any, otherwise
/// inline declarations. This is how components combine utilities whose
/// values may be theme tokens or arbitrary CSS.
#[derive(Default)]
pub struct StyleSet<'a> {
    sources: Vec<&'a dyn StyleSource>,
    classes: Vec<String>,
}

impl<'a> StyleSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: &'a dyn StyleSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a source only when present
    pub fn with_optional(self, source: Option<&'a dyn StyleSource>) -> Self {
        match source {
            Some(source) => self.with(source),
            None => self,
        }
    }

    /// Add a literal class emitted after all sources
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.trim().is_empty() {
            self.classes.push(class.trim().to_string());
        }
        self
    }

    pub fn render(&self) -> Rendered {
        let mut rendered = Rendered::default();

        for source in &self.sources {
            match source.to_auto() {
                StyleOutput::Class(class) => push_joined(&mut rendered.class, &class, " "),
                StyleOutput::Style(style) => push_joined(&mut rendered.style, &style, "; "),
                StyleOutput::Empty => {}
            }
        }

        for class in &self.classes {
            push_joined(&mut rendered.class, class, " ");
        }

        rendered
    }
}

impl StyleSource for StyleSet<'_> {
    fn to_class(&self) -> String {
        self.render().class
    }

    fn to_style(&self) -> String {
        self.render().style
    }
}

fn push_joined(buffer: &mut String, text: &str, separator: &str) {
    if !buffer.is_empty() {
        buffer.push_str(separator);
    }
    buffer.push_str(text);
}
