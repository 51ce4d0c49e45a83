use crate::breakpoint::{Device, Screen};
use crate::family::{Family, FamilyRecord};
use crate::record::RuleRecord;
use std::marker::PhantomData;

/// Ordered, append-only list of rule records for one family.
///
/// Value calls append a record; breakpoint calls scope the most recent
/// record only, so `red, on tablet, blue, on desktop` yields
/// `[red@tablet, blue@desktop]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleList<F: Family> {
    records: Vec<FamilyRecord<F>>,
    family: PhantomData<F>,
}

impl<F: Family> RuleList<F> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            family: PhantomData,
        }
    }

    /// Append a breakpoint-less record
    pub fn push(&mut self, value: F::Value) {
        self.records.push(RuleRecord::new(value));
    }

    /// Scope the last record to `breakpoint`.
    ///
    /// On an empty list this seeds the family's default value instead, so a
    /// lone breakpoint call still renders a well-formed class.
    pub fn apply_breakpoint(&mut self, breakpoint: F::Breakpoint) {
        match self.records.pop() {
            Some(last) => self.records.push(last.with_breakpoint(breakpoint)),
            None => self
                .records
                .push(RuleRecord::at(F::default_value(), breakpoint)),
        }
    }

    /// Fluent form of [`RuleList::push`]
    pub fn value(mut self, value: impl Into<F::Value>) -> Self {
        self.push(value.into());
        self
    }

    /// Fluent form of [`RuleList::apply_breakpoint`]
    pub fn on(mut self, breakpoint: F::Breakpoint) -> Self {
        self.apply_breakpoint(breakpoint);
        self
    }

    pub fn records(&self) -> &[FamilyRecord<F>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<F: Family> Default for RuleList<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Family<Breakpoint = Device>> RuleList<F> {
    pub fn on_phone(self) -> Self {
        self.on(Device::Phone)
    }

    pub fn on_tablet(self) -> Self {
        self.on(Device::Tablet)
    }

    pub fn on_laptop(self) -> Self {
        self.on(Device::Laptop)
    }

    pub fn on_desktop(self) -> Self {
        self.on(Device::Desktop)
    }

    pub fn on_widescreen(self) -> Self {
        self.on(Device::Widescreen)
    }

    pub fn on_ultrawide(self) -> Self {
        self.on(Device::Ultrawide)
    }
}

impl<F: Family<Breakpoint = Screen>> RuleList<F> {
    pub fn on_base(self) -> Self {
        self.on(Screen::Base)
    }

    pub fn on_sm(self) -> Self {
        self.on(Screen::Sm)
    }

    pub fn on_md(self) -> Self {
        self.on(Screen::Md)
    }

    pub fn on_lg(self) -> Self {
        self.on(Screen::Lg)
    }

    pub fn on_xl(self) -> Self {
        self.on(Screen::Xl)
    }

    pub fn on_2xl(self) -> Self {
        self.on(Screen::Xxl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{Gap, Spacing, TextColor, ThemeColor};

    #[test]
    fn test_breakpoint_targets_last_record_only() {
        let list = RuleList::<TextColor>::new()
            .value(ThemeColor::Danger)
            .on(Device::Tablet)
            .value(ThemeColor::Info)
            .on(Device::Desktop);

        assert_eq!(
            list.records(),
            &[
                RuleRecord::at(ThemeColor::Danger, Device::Tablet),
                RuleRecord::at(ThemeColor::Info, Device::Desktop),
            ]
        );
    }

    #[test]
    fn test_breakpoint_on_empty_seeds_default() {
        let list = RuleList::<Gap>::new().on(Screen::Md);
        assert_eq!(list.records(), &[RuleRecord::at(Spacing::Step(0), Screen::Md)]);
    }

    #[test]
    fn test_second_breakpoint_rescopes_last() {
        let list = RuleList::<TextColor>::new()
            .value(ThemeColor::Primary)
            .on_tablet()
            .on_desktop();
        assert_eq!(list.len(), 1);
        assert_eq!(list.records()[0].breakpoint(), Some(&Device::Desktop));
    }

    #[test]
    fn test_values_keep_insertion_order() {
        let mut list = RuleList::<TextColor>::new();
        list.push(ThemeColor::Light);
        list.push(ThemeColor::Dark);
        list.push(ThemeColor::Light);

        let values: Vec<_> = list.records().iter().map(|r| r.value().clone()).collect();
        assert_eq!(
            values,
            vec![ThemeColor::Light, ThemeColor::Dark, ThemeColor::Light]
        );
        assert!(list.records().iter().all(|r| r.breakpoint().is_none()));
    }

    #[test]
    fn test_empty_list() {
        let list = RuleList::<Gap>::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
