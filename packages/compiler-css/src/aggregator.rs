//! Groups component CSS rules by selector and renders CSS text.

use crate::rule::{ComponentCssRule, CssRuleSource};
use indexmap::IndexMap;
use tracing::trace;

/// All declarations for one selector, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssBlock {
    pub selector: String,
    pub declarations: Vec<String>,
}

/// Ordered collection of CSS blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssDocument {
    pub blocks: Vec<CssBlock>,
}

impl CssDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group rules by selector.
    ///
    /// Selectors keep the order in which they were first seen; declarations
    /// keep emission order and are never deduplicated. Pairs with a blank
    /// selector or declaration are dropped before grouping.
    pub fn from_rules(rules: &[ComponentCssRule]) -> Self {
        let mut groups: IndexMap<&str, Vec<String>> = IndexMap::new();

        // Group by selector in first-seen order
        for rule in rules {
            let selector = rule.selector.trim();
            let declaration = normalize_declaration(&rule.declaration);

            if selector.is_empty() || declaration.is_empty() {
                trace!(selector = %rule.selector, declaration = %rule.declaration, "Dropping empty rule");
                continue;
            }

            groups
                .entry(selector)
                .or_default()
                .push(declaration.to_string());
        }

        let blocks = groups
            .into_iter()
            .map(|(selector, declarations)| CssBlock {
                selector: selector.to_string(),
                declarations,
            })
            .collect();

        Self { blocks }
    }

    pub fn push_block(&mut self, block: CssBlock) {
        if !block.declarations.is_empty() {
            self.blocks.push(block);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Convert to CSS text with trailing whitespace trimmed
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for block in &self.blocks {
            css.push_str(&block.selector);
            css.push_str(" {\n");

            for declaration in &block.declarations {
                css.push_str("  ");
                css.push_str(declaration);
                css.push_str(";\n");
            }

            css.push_str("}\n");
        }

        // Drop the final newline
        css.truncate(css.trim_end().len());
        css
    }
}

/// Trim whitespace and at most one trailing `;`
fn normalize_declaration(declaration: &str) -> &str {
    let declaration = declaration.trim();
    declaration
        .strip_suffix(';')
        .unwrap_or(declaration)
        .trim_end()
}

/// Render the rules of `source` as CSS text
pub fn generate<S: CssRuleSource + ?Sized>(source: &S) -> String {
    generate_rules(&source.css_rules())
}

/// Render a rule list as CSS text
pub fn generate_rules(rules: &[ComponentCssRule]) -> String {
    CssDocument::from_rules(rules).to_css()
}
