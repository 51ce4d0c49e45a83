use crate::rule::{ComponentCssRule, CssRuleSource, RuleEmitter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavBarOptions {
    pub background: Option<String>,
    pub color: Option<String>,
    pub height: Option<String>,
    pub link_color: Option<String>,
    pub link_hover_color: Option<String>,
    pub active_link_color: Option<String>,
    pub brand_font_size: Option<String>,
}

impl CssRuleSource for NavBarOptions {
    fn css_rules(&self) -> Vec<ComponentCssRule> {
        let mut emitter = RuleEmitter::new();
        emitter
            .declare(".navbar", "background", self.background.as_deref())
            .declare(".navbar", "color", self.color.as_deref())
            .declare(".navbar", "min-height", self.height.as_deref())
            .declare(".navbar .nav-link", "color", self.link_color.as_deref())
            .declare(".navbar .nav-link:hover", "color", self.link_hover_color.as_deref())
            .declare(".navbar .nav-link.active", "color", self.active_link_color.as_deref())
            .declare(".navbar-brand", "font-size", self.brand_font_size.as_deref());
        emitter.finish()
    }
}
