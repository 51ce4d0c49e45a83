use serde::{Deserialize, Serialize};

/// One `property: value` declaration scoped to a selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentCssRule {
    pub selector: String,
    pub declaration: String,
}

impl ComponentCssRule {
    pub fn new(selector: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declaration: declaration.into(),
        }
    }
}

/// Anything that emits raw selector/declaration pairs
pub trait CssRuleSource {
    fn css_rules(&self) -> Vec<ComponentCssRule>;
}

impl CssRuleSource for [ComponentCssRule] {
    fn css_rules(&self) -> Vec<ComponentCssRule> {
        self.to_vec()
    }
}

impl CssRuleSource for Vec<ComponentCssRule> {
    fn css_rules(&self) -> Vec<ComponentCssRule> {
        self.clone()
    }
}

impl<T: CssRuleSource> CssRuleSource for Option<T> {
    fn css_rules(&self) -> Vec<ComponentCssRule> {
        self.as_ref().map(T::css_rules).unwrap_or_default()
    }
}

/// Collects rules for an option object, skipping unset values
#[derive(Debug, Default)]
pub struct RuleEmitter {
    rules: Vec<ComponentCssRule>,
}

impl RuleEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `property: value` under `selector` when `value` is set and not blank
    pub fn declare(&mut self, selector: &str, property: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.rules.push(ComponentCssRule::new(
                selector,
                format!("{}: {}", property, value),
            ));
        }
        self
    }

    /// Like [`RuleEmitter::declare`] but the value is wrapped by `format`
    pub fn declare_with(
        &mut self,
        selector: &str,
        property: &str,
        value: Option<&str>,
        format: impl FnOnce(&str) -> String,
    ) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.rules.push(ComponentCssRule::new(
                selector,
                format!("{}: {}", property, format(value)),
            ));
        }
        self
    }

    /// Emit a declaration verbatim
    pub fn raw(&mut self, selector: &str, declaration: &str) -> &mut Self {
        self.rules.push(ComponentCssRule::new(selector, declaration));
        self
    }

    pub fn finish(self) -> Vec<ComponentCssRule> {
        self.rules
    }
}
