use crate::rule::{ComponentCssRule, CssRuleSource, RuleEmitter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatePickerOptions {
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub day_hover_background: Option<String>,
    pub selected_background: Option<String>,
    pub selected_color: Option<String>,
    pub today_border_color: Option<String>,
}

impl CssRuleSource for DatePickerOptions {
    fn css_rules(&self) -> Vec<ComponentCssRule> {
        let mut emitter = RuleEmitter::new();
        emitter
            .declare(".date-picker", "background", self.background.as_deref())
            .declare(".date-picker", "border-color", self.border_color.as_deref())
            .declare(
                ".date-picker .day:hover",
                "background",
                self.day_hover_background.as_deref(),
            )
            .declare(
                ".date-picker .day.selected",
                "background",
                self.selected_background.as_deref(),
            )
            .declare(".date-picker .day.selected", "color", self.selected_color.as_deref())
            .declare_with(
                ".date-picker .day.today",
                "outline",
                self.today_border_color.as_deref(),
                |color| format!("1px solid {}", color),
            );
        emitter.finish()
    }
}
