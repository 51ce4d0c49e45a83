//! End-to-end rendering through user-defined families

use std::borrow::Cow;
use stylecraft_rules::{
    render, Breakpoint, Family, Placement, RuleList, RuleRecord, Scheme, StyleOutput, StyleSource,
};

/// Two-tier scale whose tokens are chosen by the test
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tier {
    Tablet,
    Desktop,
}

impl Breakpoint for Tier {
    const SCHEME: Scheme = Scheme::Responsive;

    fn all() -> &'static [Self] {
        &[Tier::Tablet, Tier::Desktop]
    }

    fn token(self) -> &'static str {
        match self {
            Tier::Tablet => "md",
            Tier::Desktop => "lg",
        }
    }

    fn min_width(self) -> u32 {
        match self {
            Tier::Tablet => 768,
            Tier::Desktop => 992,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Tone {
    Primary,
    Secondary,
    Unknown,
    Hex(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tones;

impl Family for Tones {
    type Value = Tone;
    type Breakpoint = Tier;

    const PLACEMENT: Placement = Placement::Infix;

    fn default_value() -> Tone {
        Tone::Primary
    }

    fn class_token(value: &Tone) -> Option<Cow<'static, str>> {
        match value {
            Tone::Primary => Some(Cow::Borrowed("text-primary")),
            Tone::Secondary => Some(Cow::Borrowed("text-secondary")),
            Tone::Unknown | Tone::Hex(_) => None,
        }
    }

    fn declaration(value: &Tone) -> Option<Cow<'static, str>> {
        match value {
            Tone::Primary => Some(Cow::Borrowed("color: var(--primary)")),
            Tone::Secondary => Some(Cow::Borrowed("color: var(--secondary)")),
            Tone::Hex(hex) => Some(Cow::Owned(format!("color: {}", hex))),
            Tone::Unknown => None,
        }
    }
}

#[test]
fn primary_on_tablet_secondary_on_desktop() {
    let list = RuleList::<Tones>::new()
        .value(Tone::Primary)
        .on(Tier::Tablet)
        .value(Tone::Secondary)
        .on(Tier::Desktop);

    assert_eq!(
        list.records(),
        &[
            RuleRecord::at(Tone::Primary, Tier::Tablet),
            RuleRecord::at(Tone::Secondary, Tier::Desktop),
        ]
    );
    assert_eq!(list.to_class(), "text-md-primary text-lg-secondary");
}

#[test]
fn unknown_values_vanish_from_both_strings() {
    let list = RuleList::<Tones>::new()
        .value(Tone::Unknown)
        .value(Tone::Primary)
        .value(Tone::Unknown)
        .value(Tone::Secondary)
        .value(Tone::Unknown);

    let rendered = render(&list);
    assert_eq!(rendered.class, "text-primary text-secondary");
    assert_eq!(rendered.style, "color: var(--primary); color: var(--secondary)");
}

#[test]
fn lone_breakpoint_seeds_family_default() {
    let list = RuleList::<Tones>::new().on(Tier::Desktop);
    assert_eq!(list.to_class(), "text-lg-primary");
}

#[test]
fn auto_falls_back_to_style_for_raw_values() {
    let list = RuleList::<Tones>::new().value(Tone::Hex("#0af".to_string()));
    assert_eq!(list.to_auto(), StyleOutput::Style("color: #0af".to_string()));
}

#[test]
fn repeated_renders_match() {
    let list = RuleList::<Tones>::new()
        .value(Tone::Secondary)
        .on(Tier::Tablet)
        .value(Tone::Hex("red".to_string()));

    let first = render(&list);
    for _ in 0..3 {
        assert_eq!(render(&list), first);
    }
}
