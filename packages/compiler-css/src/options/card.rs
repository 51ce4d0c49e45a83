use crate::rule::{ComponentCssRule, CssRuleSource, RuleEmitter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardOptions {
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub border_radius: Option<String>,
    pub padding: Option<String>,
    pub shadow: Option<String>,
    pub header_background: Option<String>,
    pub header_padding: Option<String>,
}

impl CssRuleSource for CardOptions {
    fn css_rules(&self) -> Vec<ComponentCssRule> {
        let mut emitter = RuleEmitter::new();
        emitter
            .declare(".card", "background", self.background.as_deref())
            .declare_with(".card", "border", self.border_color.as_deref(), |color| {
                format!("1px solid {}", color)
            })
            .declare(".card", "border-radius", self.border_radius.as_deref())
            .declare(".card", "padding", self.padding.as_deref())
            .declare(".card", "box-shadow", self.shadow.as_deref())
            .declare(".card-header", "background", self.header_background.as_deref())
            .declare(".card-header", "padding", self.header_padding.as_deref());
        emitter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_rules() {
        let options = CardOptions {
            border_color: Some("#dee2e6".to_string()),
            header_padding: Some("0.5rem 1rem".to_string()),
            ..Default::default()
        };

        assert_eq!(
            options.css_rules(),
            vec![
                ComponentCssRule::new(".card", "border: 1px solid #dee2e6"),
                ComponentCssRule::new(".card-header", "padding: 0.5rem 1rem"),
            ]
        );
    }
}
