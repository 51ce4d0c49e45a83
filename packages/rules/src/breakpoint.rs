//! Breakpoint scales and the tokens they contribute to class names.
//!
//! Two scales coexist and are deliberately not unified: [`Device`] is used by
//! infix families (`text-md-center`) and [`Screen`] by prefix families
//! (`md:text-center`).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// How a scale's breakpoints relate to viewport widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Mobile-first: a breakpoint applies from its min width upward
    Responsive,
    /// A breakpoint applies only inside its own width range
    Discrete,
}

/// A totally ordered breakpoint scale with a textual token per member.
///
/// `all()` lists members in ascending order; `token` is bijective over
/// that list, so [`Breakpoint::from_token`] is its inverse.
pub trait Breakpoint: Copy + Eq + Ord + Debug + 'static {
    const SCHEME: Scheme;

    /// Every member, smallest first
    fn all() -> &'static [Self];

    /// Token injected into class names. The base tier uses `""`.
    fn token(self) -> &'static str;

    /// Lower viewport bound in pixels
    fn min_width(self) -> u32;

    fn from_token(token: &str) -> Option<Self> {
        Self::all().iter().copied().find(|bp| bp.token() == token)
    }

    /// The next larger member of the scale
    fn next(self) -> Option<Self> {
        let all = Self::all();
        let index = all.iter().position(|bp| *bp == self)?;
        all.get(index + 1).copied()
    }

    /// Media query matching this breakpoint, or `None` when it covers every width
    fn media_query(self) -> Option<String> {
        let min = self.min_width();
        match Self::SCHEME {
            Scheme::Responsive => (min > 0).then(|| format!("@media (min-width: {}px)", min)),
            Scheme::Discrete => {
                let max = self.next().map(|next| next.min_width().saturating_sub(1));
                match (min, max) {
                    (0, None) => None,
                    (0, Some(max)) => Some(format!("@media (max-width: {}.98px)", max)),
                    (min, None) => Some(format!("@media (min-width: {}px)", min)),
                    (min, Some(max)) => Some(format!(
                        "@media (min-width: {}px) and (max-width: {}.98px)",
                        min, max
                    )),
                }
            }
        }
    }
}

/// Six-point device scale used by infix families
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Phone,
    Tablet,
    Laptop,
    Desktop,
    Widescreen,
    Ultrawide,
}

impl Breakpoint for Device {
    const SCHEME: Scheme = Scheme::Discrete;

    fn all() -> &'static [Self] {
        &[
            Device::Phone,
            Device::Tablet,
            Device::Laptop,
            Device::Desktop,
            Device::Widescreen,
            Device::Ultrawide,
        ]
    }

    fn token(self) -> &'static str {
        match self {
            Device::Phone => "",
            Device::Tablet => "sm",
            Device::Laptop => "md",
            Device::Desktop => "lg",
            Device::Widescreen => "xl",
            Device::Ultrawide => "xxl",
        }
    }

    fn min_width(self) -> u32 {
        match self {
            Device::Phone => 0,
            Device::Tablet => 576,
            Device::Laptop => 768,
            Device::Desktop => 992,
            Device::Widescreen => 1200,
            Device::Ultrawide => 1400,
        }
    }
}

/// Screen scale used by prefix families
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(alias = "2xl")]
    Xxl,
}

impl Breakpoint for Screen {
    const SCHEME: Scheme = Scheme::Responsive;

    fn all() -> &'static [Self] {
        &[
            Screen::Base,
            Screen::Sm,
            Screen::Md,
            Screen::Lg,
            Screen::Xl,
            Screen::Xxl,
        ]
    }

    fn token(self) -> &'static str {
        match self {
            Screen::Base => "",
            Screen::Sm => "sm",
            Screen::Md => "md",
            Screen::Lg => "lg",
            Screen::Xl => "xl",
            Screen::Xxl => "xxl",
        }
    }

    fn min_width(self) -> u32 {
        match self {
            Screen::Base => 0,
            Screen::Sm => 640,
            Screen::Md => 768,
            Screen::Lg => 1024,
            Screen::Xl => 1280,
            Screen::Xxl => 1536,
        }
    }

    /// Also accepts `2xl`, the spelling prefix placement writes
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "2xl" => Some(Screen::Xxl),
            other => Self::all().iter().copied().find(|bp| bp.token() == other),
        }
    }
}
