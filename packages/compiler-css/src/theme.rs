use crate::aggregator::generate;
use crate::rule::CssRuleSource;
use tracing::{debug, instrument};

/// A theme-like object that exposes its style-source fields.
///
/// Implementations list every field holding option rules, in declaration
/// order, and leave out descriptive fields (names) and CSS variable blocks,
/// which are rendered separately.
pub trait ThemeLike {
    fn style_sources(&self) -> Vec<Option<&dyn CssRuleSource>>;
}

/// Concatenate the CSS of every set style source, blank line between blocks
#[instrument(skip(theme))]
pub fn generate_theme_css(theme: &dyn ThemeLike) -> String {
    let mut css = String::new();
    let mut emitted = 0usize;

    for source in theme.style_sources().into_iter().flatten() {
        let block = generate(source);

        // Sources with nothing set leave no blank line behind
        if block.is_empty() {
            continue;
        }

        if !css.is_empty() {
            css.push_str("\n\n");
        }
        css.push_str(&block);
        emitted += 1;
    }

    debug!(sources = emitted, "Generated theme CSS");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ButtonOptions, CardOptions};
    use crate::rule::ComponentCssRule;

    struct MiniTheme {
        #[allow(dead_code)]
        name: String,
        card: Option<CardOptions>,
        button: Option<ButtonOptions>,
        extra: Vec<ComponentCssRule>,
    }

    impl ThemeLike for MiniTheme {
        fn style_sources(&self) -> Vec<Option<&dyn CssRuleSource>> {
            vec![
                self.card.as_ref().map(|c| c as &dyn CssRuleSource),
                self.button.as_ref().map(|b| b as &dyn CssRuleSource),
                Some(&self.extra as &dyn CssRuleSource),
            ]
        }
    }

    #[test]
    fn test_blocks_in_field_order_with_blank_line() {
        let theme = MiniTheme {
            name: "mini".to_string(),
            card: Some(CardOptions {
                padding: Some("1rem".to_string()),
                ..Default::default()
            }),
            button: Some(ButtonOptions {
                background: Some("#0d6efd".to_string()),
                ..Default::default()
            }),
            extra: vec![],
        };

        assert_eq!(
            generate_theme_css(&theme),
            ".card {\n  padding: 1rem;\n}\n\n.button {\n  background: #0d6efd;\n}"
        );
    }

    #[test]
    fn test_unset_and_empty_sources_skipped() {
        let theme = MiniTheme {
            name: "sparse".to_string(),
            card: None,
            button: Some(ButtonOptions::default()),
            extra: vec![ComponentCssRule::new("body", "margin: 0")],
        };

        assert_eq!(generate_theme_css(&theme), "body {\n  margin: 0;\n}");
    }

    #[test]
    fn test_all_empty() {
        let theme = MiniTheme {
            name: String::new(),
            card: None,
            button: None,
            extra: vec![],
        };
        assert_eq!(generate_theme_css(&theme), "");
    }
}
