use crate::rule::{ComponentCssRule, CssRuleSource, RuleEmitter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonOptions {
    pub background: Option<String>,
    pub color: Option<String>,
    pub border_radius: Option<String>,
    pub padding: Option<String>,
    pub font_weight: Option<String>,
    pub hover_background: Option<String>,
    pub hover_color: Option<String>,
    pub focus_ring: Option<String>,
    pub disabled_opacity: Option<String>,
}

impl CssRuleSource for ButtonOptions {
    fn css_rules(&self) -> Vec<ComponentCssRule> {
        let mut emitter = RuleEmitter::new();
        emitter
            .declare(".button", "background", self.background.as_deref())
            .declare(".button", "color", self.color.as_deref())
            .declare(".button", "border-radius", self.border_radius.as_deref())
            .declare(".button", "padding", self.padding.as_deref())
            .declare(".button", "font-weight", self.font_weight.as_deref())
            .declare(".button:hover", "background", self.hover_background.as_deref())
            .declare(".button:hover", "color", self.hover_color.as_deref())
            .declare_with(
                ".button:focus-visible",
                "box-shadow",
                self.focus_ring.as_deref(),
                |ring| format!("0 0 0 0.25rem {}", ring),
            )
            .declare(".button:disabled", "opacity", self.disabled_opacity.as_deref());
        emitter.finish()
    }
}
