/// One style intent: a value and the breakpoint it is scoped to.
///
/// Records are never edited in place; attaching a breakpoint produces a new
/// record that replaces the old one in its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRecord<V, B> {
    value: V,
    breakpoint: Option<B>,
}

impl<V, B> RuleRecord<V, B> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            breakpoint: None,
        }
    }

    pub fn at(value: V, breakpoint: B) -> Self {
        Self {
            value,
            breakpoint: Some(breakpoint),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn breakpoint(&self) -> Option<&B> {
        self.breakpoint.as_ref()
    }

    /// Copy of this record scoped to `breakpoint`
    pub fn with_breakpoint(self, breakpoint: B) -> Self {
        Self {
            value: self.value,
            breakpoint: Some(breakpoint),
        }
    }
}
