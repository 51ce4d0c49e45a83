use crate::breakpoint::Device;
use crate::family::Family;
use crate::placement::Placement;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayValue {
    None,
    Inline,
    InlineBlock,
    Block,
    Flex,
    InlineFlex,
    Grid,
    InlineGrid,
    Table,
}

impl DisplayValue {
    fn keyword(self) -> &'static str {
        match self {
            DisplayValue::None => "none",
            DisplayValue::Inline => "inline",
            DisplayValue::InlineBlock => "inline-block",
            DisplayValue::Block => "block",
            DisplayValue::Flex => "flex",
            DisplayValue::InlineFlex => "inline-flex",
            DisplayValue::Grid => "grid",
            DisplayValue::InlineGrid => "inline-grid",
            DisplayValue::Table => "table",
        }
    }
}

family_marker!(
    /// `d-{keyword}` display utilities
    Display,
    display
);

impl Family for Display {
    type Value = DisplayValue;
    type Breakpoint = Device;

    const PLACEMENT: Placement = Placement::Infix;

    fn default_value() -> DisplayValue {
        DisplayValue::Block
    }

    fn class_token(value: &DisplayValue) -> Option<Cow<'static, str>> {
        Some(Cow::Owned(format!("d-{}", value.keyword())))
    }

    fn declaration(value: &DisplayValue) -> Option<Cow<'static, str>> {
        Some(Cow::Owned(format!("display: {}", value.keyword())))
    }
}

fluent_values!(Display {
    none => DisplayValue::None,
    inline => DisplayValue::Inline,
    inline_block => DisplayValue::InlineBlock,
    block => DisplayValue::Block,
    flex => DisplayValue::Flex,
    inline_flex => DisplayValue::InlineFlex,
    grid => DisplayValue::Grid,
    inline_grid => DisplayValue::InlineGrid,
    table => DisplayValue::Table,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityValue {
    Visible,
    Invisible,
}

family_marker!(
    /// Single-word `visible` / `invisible` classes
    Visibility,
    visibility
);

impl Family for Visibility {
    type Value = VisibilityValue;
    type Breakpoint = Device;

    const PLACEMENT: Placement = Placement::Infix;

    fn default_value() -> VisibilityValue {
        VisibilityValue::Visible
    }

    fn class_token(value: &VisibilityValue) -> Option<Cow<'static, str>> {
        let class = match value {
            VisibilityValue::Visible => "visible",
            VisibilityValue::Invisible => "invisible",
        };
        Some(Cow::Borrowed(class))
    }

    fn declaration(value: &VisibilityValue) -> Option<Cow<'static, str>> {
        let declaration = match value {
            VisibilityValue::Visible => "visibility: visible",
            VisibilityValue::Invisible => "visibility: hidden",
        };
        Some(Cow::Borrowed(declaration))
    }
}

fluent_values!(Visibility {
    visible => VisibilityValue::Visible,
    invisible => VisibilityValue::Invisible,
});
