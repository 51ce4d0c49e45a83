use crate::breakpoint::Breakpoint;
use crate::placement::Placement;
use crate::record::RuleRecord;
use std::borrow::Cow;
use std::fmt::Debug;

/// A utility family: the lookup tables that turn values into CSS.
///
/// Every CSS concept (text color, gap, display, …) is one implementation of
/// this trait. The rule list and renderer are shared; only the tables differ.
pub trait Family {
    type Value: Clone + Debug + PartialEq;
    type Breakpoint: Breakpoint;

    const PLACEMENT: Placement;

    /// Value seeded when a breakpoint is applied to an empty list
    fn default_value() -> Self::Value;

    /// Canonical utility class for `value`, `None` when it has none
    fn class_token(value: &Self::Value) -> Option<Cow<'static, str>>;

    /// Inline `property: value` declaration for `value`, `None` when it has none
    fn declaration(value: &Self::Value) -> Option<Cow<'static, str>>;
}

/// Record type stored by a family's rule list
pub type FamilyRecord<F> = RuleRecord<<F as Family>::Value, <F as Family>::Breakpoint>;
