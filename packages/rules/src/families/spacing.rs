use crate::breakpoint::Screen;
use crate::family::Family;
use crate::placement::Placement;
use std::borrow::Cow;

/// Step on the 0.25rem spacing scale, or a raw length
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spacing {
    Px,
    Auto,
    Step(u16),
    Raw(String),
}

impl Spacing {
    /// Class suffix, `None` when the value only works inline
    fn suffix(&self, allows_auto: bool) -> Option<Cow<'static, str>> {
        match self {
            Spacing::Px => Some(Cow::Borrowed("px")),
            Spacing::Auto if allows_auto => Some(Cow::Borrowed("auto")),
            Spacing::Auto => None,
            Spacing::Step(step) => Some(Cow::Owned(step.to_string())),
            Spacing::Raw(_) => None,
        }
    }

    fn length(&self, allows_auto: bool) -> Option<Cow<'static, str>> {
        match self {
            Spacing::Px => Some(Cow::Borrowed("1px")),
            Spacing::Auto if allows_auto => Some(Cow::Borrowed("auto")),
            Spacing::Auto => None,
            Spacing::Step(0) => Some(Cow::Borrowed("0")),
            Spacing::Step(step) => Some(Cow::Owned(format!("{}rem", f32::from(*step) / 4.0))),
            Spacing::Raw(raw) if raw.trim().is_empty() => None,
            Spacing::Raw(raw) => Some(Cow::Owned(raw.clone())),
        }
    }
}

impl From<u16> for Spacing {
    fn from(step: u16) -> Self {
        Spacing::Step(step)
    }
}

impl From<&str> for Spacing {
    fn from(s: &str) -> Self {
        match s {
            "px" => Spacing::Px,
            "auto" => Spacing::Auto,
            other => other
                .parse::<u16>()
                .map(Spacing::Step)
                .unwrap_or_else(|_| Spacing::Raw(other.to_string())),
        }
    }
}

macro_rules! spacing_family {
    ($(#[$meta:meta])* $name:ident, $ctor:ident, $class:literal, $property:literal, $auto:literal) => {
        family_marker!($(#[$meta])* $name, $ctor);

        impl Family for $name {
            type Value = Spacing;
            type Breakpoint = Screen;

            const PLACEMENT: Placement = Placement::Prefix;

            fn default_value() -> Spacing {
                Spacing::Step(0)
            }

            fn class_token(value: &Spacing) -> Option<Cow<'static, str>> {
                value
                    .suffix($auto)
                    .map(|suffix| Cow::Owned(format!(concat!($class, "-{}"), suffix)))
            }

            fn declaration(value: &Spacing) -> Option<Cow<'static, str>> {
                value
                    .length($auto)
                    .map(|length| Cow::Owned(format!(concat!($property, ": {}"), length)))
            }
        }

        impl $crate::builder::RuleList<$name> {
            /// Append a spacing-scale step
            pub fn step(self, step: u16) -> Self {
                self.value(Spacing::Step(step))
            }
        }

        fluent_values!($name {
            px => Spacing::Px,
        });
    };
}

spacing_family!(
    /// Flex/grid gap
    Gap,
    gap,
    "gap",
    "gap",
    false
);

spacing_family!(Padding, padding, "p", "padding", false);

spacing_family!(Margin, margin, "m", "margin", true);

impl crate::builder::RuleList<Margin> {
    pub fn auto(self) -> Self {
        self.value(Spacing::Auto)
    }
}
