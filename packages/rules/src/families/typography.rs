use crate::breakpoint::{Device, Screen};
use crate::family::Family;
use crate::placement::Placement;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
    Justify,
}

family_marker!(
    /// `text-start`, `text-center`, … with infix breakpoints
    TextAlign,
    text_align
);

impl Family for TextAlign {
    type Value = Align;
    type Breakpoint = Device;

    const PLACEMENT: Placement = Placement::Infix;

    fn default_value() -> Align {
        Align::Start
    }

    fn class_token(value: &Align) -> Option<Cow<'static, str>> {
        let class = match value {
            Align::Start => "text-start",
            Align::Center => "text-center",
            Align::End => "text-end",
            Align::Justify => "text-justify",
        };
        Some(Cow::Borrowed(class))
    }

    fn declaration(value: &Align) -> Option<Cow<'static, str>> {
        let declaration = match value {
            Align::Start => "text-align: start",
            Align::Center => "text-align: center",
            Align::End => "text-align: end",
            Align::Justify => "text-align: justify",
        };
        Some(Cow::Borrowed(declaration))
    }
}

fluent_values!(TextAlign {
    start => Align::Start,
    center => Align::Center,
    end => Align::End,
    justify => Align::Justify,
});

/// Font weight keyword, or a numeric weight with no utility class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Thin,
    Light,
    Normal,
    Medium,
    Semibold,
    Bold,
    Black,
    Numeric(u16),
}

impl Weight {
    fn keyword(self) -> Option<&'static str> {
        match self {
            Weight::Thin => Some("thin"),
            Weight::Light => Some("light"),
            Weight::Normal => Some("normal"),
            Weight::Medium => Some("medium"),
            Weight::Semibold => Some("semibold"),
            Weight::Bold => Some("bold"),
            Weight::Black => Some("black"),
            Weight::Numeric(_) => None,
        }
    }

    fn number(self) -> Option<u16> {
        match self {
            Weight::Thin => Some(100),
            Weight::Light => Some(300),
            Weight::Normal => Some(400),
            Weight::Medium => Some(500),
            Weight::Semibold => Some(600),
            Weight::Bold => Some(700),
            Weight::Black => Some(900),
            // CSS accepts 1..=1000 only
            Weight::Numeric(n) if (1..=1000).contains(&n) => Some(n),
            Weight::Numeric(_) => None,
        }
    }
}

family_marker!(
    /// `font-{weight}` with prefix breakpoints
    FontWeight,
    font_weight
);

impl Family for FontWeight {
    type Value = Weight;
    type Breakpoint = Screen;

    const PLACEMENT: Placement = Placement::Prefix;

    fn default_value() -> Weight {
        Weight::Normal
    }

    fn class_token(value: &Weight) -> Option<Cow<'static, str>> {
        value
            .keyword()
            .map(|keyword| Cow::Owned(format!("font-{}", keyword)))
    }

    fn declaration(value: &Weight) -> Option<Cow<'static, str>> {
        value
            .number()
            .map(|n| Cow::Owned(format!("font-weight: {}", n)))
    }
}

fluent_values!(FontWeight {
    thin => Weight::Thin,
    light => Weight::Light,
    normal => Weight::Normal,
    medium => Weight::Medium,
    semibold => Weight::Semibold,
    bold => Weight::Bold,
    black => Weight::Black,
});
