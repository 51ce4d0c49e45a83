use crate::breakpoint::{Device, Screen};
use crate::family::Family;
use crate::placement::Placement;
use std::borrow::Cow;

/// Theme palette entry, or a raw CSS color that can only be inlined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColor {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    Body,
    Muted,
    White,
    Black,
    Transparent,
    Raw(String),
}

impl ThemeColor {
    /// Palette name used in classes and variable names
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            ThemeColor::Primary => "primary",
            ThemeColor::Secondary => "secondary",
            ThemeColor::Success => "success",
            ThemeColor::Danger => "danger",
            ThemeColor::Warning => "warning",
            ThemeColor::Info => "info",
            ThemeColor::Light => "light",
            ThemeColor::Dark => "dark",
            ThemeColor::Body => "body",
            ThemeColor::Muted => "muted",
            ThemeColor::White => "white",
            ThemeColor::Black => "black",
            ThemeColor::Transparent => "transparent",
            ThemeColor::Raw(_) => return None,
        };
        Some(name)
    }

    /// CSS value for `property`, or `None` for a blank raw color
    fn css_value(&self) -> Option<Cow<'static, str>> {
        match self {
            ThemeColor::Raw(raw) if raw.trim().is_empty() => None,
            ThemeColor::Raw(raw) => Some(Cow::Owned(raw.clone())),
            ThemeColor::Transparent => Some(Cow::Borrowed("transparent")),
            named => named
                .name()
                .map(|name| Cow::Owned(format!("var(--sc-{})", name))),
        }
    }

    fn declaration(&self, property: &str) -> Option<Cow<'static, str>> {
        self.css_value()
            .map(|value| Cow::Owned(format!("{}: {}", property, value)))
    }
}

impl From<&str> for ThemeColor {
    fn from(s: &str) -> Self {
        match s {
            "primary" => ThemeColor::Primary,
            "secondary" => ThemeColor::Secondary,
            "success" => ThemeColor::Success,
            "danger" => ThemeColor::Danger,
            "warning" => ThemeColor::Warning,
            "info" => ThemeColor::Info,
            "light" => ThemeColor::Light,
            "dark" => ThemeColor::Dark,
            "body" => ThemeColor::Body,
            "muted" => ThemeColor::Muted,
            "white" => ThemeColor::White,
            "black" => ThemeColor::Black,
            "transparent" => ThemeColor::Transparent,
            raw => ThemeColor::Raw(raw.to_string()),
        }
    }
}

impl From<String> for ThemeColor {
    fn from(s: String) -> Self {
        ThemeColor::from(s.as_str())
    }
}

family_marker!(
    /// Foreground color, `text-{color}` with infix breakpoints
    TextColor,
    text_color
);

impl Family for TextColor {
    type Value = ThemeColor;
    type Breakpoint = Device;

    const PLACEMENT: Placement = Placement::Infix;

    fn default_value() -> ThemeColor {
        ThemeColor::Body
    }

    fn class_token(value: &ThemeColor) -> Option<Cow<'static, str>> {
        value
            .name()
            .map(|name| Cow::Owned(format!("text-{}", name)))
    }

    fn declaration(value: &ThemeColor) -> Option<Cow<'static, str>> {
        value.declaration("color")
    }
}

family_marker!(
    /// Background color, `bg-{color}` with prefix breakpoints
    BackgroundColor,
    background_color
);

impl Family for BackgroundColor {
    type Value = ThemeColor;
    type Breakpoint = Screen;

    const PLACEMENT: Placement = Placement::Prefix;

    fn default_value() -> ThemeColor {
        ThemeColor::Transparent
    }

    fn class_token(value: &ThemeColor) -> Option<Cow<'static, str>> {
        value.name().map(|name| Cow::Owned(format!("bg-{}", name)))
    }

    fn declaration(value: &ThemeColor) -> Option<Cow<'static, str>> {
        value.declaration("background-color")
    }
}

fluent_values!(TextColor {
    primary => ThemeColor::Primary,
    secondary => ThemeColor::Secondary,
    success => ThemeColor::Success,
    danger => ThemeColor::Danger,
    warning => ThemeColor::Warning,
    info => ThemeColor::Info,
    light => ThemeColor::Light,
    dark => ThemeColor::Dark,
    body => ThemeColor::Body,
    muted => ThemeColor::Muted,
    white => ThemeColor::White,
    black => ThemeColor::Black,
});

fluent_values!(BackgroundColor {
    primary => ThemeColor::Primary,
    secondary => ThemeColor::Secondary,
    success => ThemeColor::Success,
    danger => ThemeColor::Danger,
    warning => ThemeColor::Warning,
    info => ThemeColor::Info,
    light => ThemeColor::Light,
    dark => ThemeColor::Dark,
    white => ThemeColor::White,
    black => ThemeColor::Black,
    transparent => ThemeColor::Transparent,
});
