use stylecraft_theme::{
    css_variables, render_variable_css, AccessorCache, CardVariables, CssVariables,
    PaletteVariables, VariableExtractor, VariableSource,
};

#[derive(Default)]
struct BrandVariables {
    accent: Option<String>,
    legacy_accent: Option<String>,
    focus_width: Option<u16>,
}

css_variables!(BrandVariables {
    accent => "brand-accent",
    legacy_accent => var "--bs-accent",
    focus_width => "brand-focus-width",
});

/// Groups brand and card variables without fields of its own
struct Bundle {
    brand: BrandVariables,
    card: CardVariables,
}

impl CssVariables for Bundle {
    fn register(_registry: &mut stylecraft_theme::AccessorRegistry<Self>) {}

    fn nested(&self) -> Vec<&dyn VariableSource> {
        vec![&self.brand, &self.card]
    }
}

#[test]
fn user_types_register_through_the_macro() {
    let brand = BrandVariables {
        accent: Some("#e83e8c".to_string()),
        legacy_accent: Some("#e83e8c".to_string()),
        focus_width: Some(3),
    };

    let cache = AccessorCache::new();
    let variables = VariableExtractor::with_cache("acme", &cache).extract(&[&brand]);

    assert_eq!(variables["--acme-brand-accent"], "#e83e8c");
    assert_eq!(variables["--bs-accent"], "#e83e8c");
    assert_eq!(variables["--acme-brand-focus-width"], "3");
}

#[test]
fn later_sources_override_earlier_ones() {
    let base = PaletteVariables {
        primary: Some("#0d6efd".to_string()),
        secondary: Some("#6c757d".to_string()),
        ..Default::default()
    };
    let brand = PaletteVariables {
        primary: Some("#6f42c1".to_string()),
        ..Default::default()
    };

    let cache = AccessorCache::new();
    let extractor = VariableExtractor::with_cache("sc", &cache);
    let variables = extractor.extract(&[&base, &brand]);

    assert_eq!(variables["--sc-primary"], "#6f42c1");
    assert_eq!(variables["--sc-secondary"], "#6c757d");

    // Overwritten keys keep their first position
    let names: Vec<&str> = variables.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["--sc-primary", "--sc-secondary"]);
}

#[test]
fn nested_sources_render_component_blocks() {
    let bundle = Bundle {
        brand: BrandVariables {
            accent: Some("#e83e8c".to_string()),
            ..Default::default()
        },
        card: CardVariables {
            background: Some("#fff".to_string()),
            radius: Some("0.5rem".to_string()),
            ..Default::default()
        },
    };

    let cache = AccessorCache::new();
    let variables = VariableExtractor::with_cache("sc", &cache).extract(&[&bundle]);

    assert_eq!(
        render_variable_css(&variables),
        ":root {\n  --sc-brand-accent: #e83e8c;\n  --sc-card-bg: #fff;\n  \
         --sc-card-radius: 0.5rem;\n}\n\
         .brand {\n  --sc-brand-accent: #e83e8c;\n}\n\
         .card {\n  --sc-card-bg: #fff;\n  --sc-card-radius: 0.5rem;\n}"
    );
}

#[test]
fn repeated_extraction_builds_accessors_once() {
    let cache = AccessorCache::new();
    let extractor = VariableExtractor::with_cache("sc", &cache);
    let card = CardVariables::default();

    for _ in 0..3 {
        extractor.extract(&[&card]);
    }

    assert_eq!(cache.builds(), 1);
}

#[test]
#[should_panic(expected = "CSS variable prefix must not be empty")]
fn blank_prefix_is_rejected() {
    let cache = AccessorCache::new();
    VariableExtractor::with_cache(" ", &cache);
}
