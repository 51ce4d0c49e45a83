use crate::rule::{ComponentCssRule, CssRuleSource, RuleEmitter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputOptions {
    pub background: Option<String>,
    pub color: Option<String>,
    pub border_color: Option<String>,
    pub border_radius: Option<String>,
    pub padding: Option<String>,
    pub focus_border_color: Option<String>,
    pub placeholder_color: Option<String>,
    pub invalid_border_color: Option<String>,
}

impl CssRuleSource for InputOptions {
    fn css_rules(&self) -> Vec<ComponentCssRule> {
        let mut emitter = RuleEmitter::new();
        emitter
            .declare(".input", "background", self.background.as_deref())
            .declare(".input", "color", self.color.as_deref())
            .declare(".input", "border-color", self.border_color.as_deref())
            .declare(".input", "border-radius", self.border_radius.as_deref())
            .declare(".input", "padding", self.padding.as_deref())
            .declare(".input:focus", "border-color", self.focus_border_color.as_deref())
            .declare(".input::placeholder", "color", self.placeholder_color.as_deref())
            .declare(
                ".input[aria-invalid=\"true\"]",
                "border-color",
                self.invalid_border_color.as_deref(),
            );
        emitter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::generate;

    #[test]
    fn test_input_pseudo_selectors() {
        let options = InputOptions {
            placeholder_color: Some("#6c757d".to_string()),
            invalid_border_color: Some("#dc3545".to_string()),
            ..Default::default()
        };

        let css = generate(&options);
        assert!(css.contains(".input::placeholder {\n  color: #6c757d;\n}"));
        assert!(css.contains(".input[aria-invalid=\"true\"] {\n  border-color: #dc3545;\n}"));
    }
}
