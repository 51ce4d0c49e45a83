//! Aggregating a theme assembled from several option objects

use stylecraft_compiler_css::{
    generate_theme_css, ButtonOptions, CardOptions, ComponentCssRule, CssRuleSource,
    InputOptions, NavBarOptions, ThemeLike,
};

#[derive(Default)]
struct AppTheme {
    name: String,
    nav_bar: Option<NavBarOptions>,
    card: Option<CardOptions>,
    button: Option<ButtonOptions>,
    input: Option<InputOptions>,
    overrides: Vec<ComponentCssRule>,
}

impl ThemeLike for AppTheme {
    fn style_sources(&self) -> Vec<Option<&dyn CssRuleSource>> {
        vec![
            self.nav_bar.as_ref().map(|o| o as &dyn CssRuleSource),
            self.card.as_ref().map(|o| o as &dyn CssRuleSource),
            self.button.as_ref().map(|o| o as &dyn CssRuleSource),
            self.input.as_ref().map(|o| o as &dyn CssRuleSource),
            Some(&self.overrides as &dyn CssRuleSource),
        ]
    }
}

#[test]
fn theme_css_follows_field_order() {
    let theme = AppTheme {
        name: "ocean".to_string(),
        button: Some(ButtonOptions {
            color: Some("#fff".to_string()),
            ..Default::default()
        }),
        nav_bar: Some(NavBarOptions {
            background: Some("#003049".to_string()),
            ..Default::default()
        }),
        overrides: vec![
            ComponentCssRule::new(".button", "text-transform: uppercase"),
            ComponentCssRule::new("", "color: red"),
        ],
        ..Default::default()
    };

    let css = generate_theme_css(&theme);
    assert_eq!(
        css,
        ".navbar {\n  background: #003049;\n}\n\n\
         .button {\n  color: #fff;\n}\n\n\
         .button {\n  text-transform: uppercase;\n}"
    );
    assert!(!css.contains(&theme.name));
}

#[test]
fn theme_css_is_repeatable() {
    let theme = AppTheme {
        card: Some(CardOptions {
            shadow: Some("0 1px 2px rgba(0,0,0,.1)".to_string()),
            ..Default::default()
        }),
        input: Some(InputOptions {
            focus_border_color: Some("#86b7fe".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert_eq!(generate_theme_css(&theme), generate_theme_css(&theme));
}
