use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stylecraft_theme::{
    AccessorCache, CardVariables, PaletteVariables, Theme, ThemeVariables, VariableExtractor,
};

fn sample_variables() -> ThemeVariables {
    let mut variables = ThemeVariables {
        palette: PaletteVariables {
            primary: Some("#0d6efd".to_string()),
            secondary: Some("#6c757d".to_string()),
            background: Some("#fff".to_string()),
            foreground: Some("#212529".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    variables.components.card = CardVariables {
        background: Some("#fff".to_string()),
        border_color: Some("#dee2e6".to_string()),
        radius: Some("0.5rem".to_string()),
        padding: Some("1rem".to_string()),
    };
    variables
}

fn extract_warm(c: &mut Criterion) {
    let variables = sample_variables();
    let cache = AccessorCache::new();
    let extractor = VariableExtractor::with_cache("sc", &cache);
    extractor.extract(&[&variables]);

    c.bench_function("extract_warm_cache", |b| {
        b.iter(|| extractor.extract(&[black_box(&variables)]))
    });
}

fn extract_cold(c: &mut Criterion) {
    let variables = sample_variables();

    c.bench_function("extract_cold_cache", |b| {
        b.iter(|| {
            let cache = AccessorCache::new();
            VariableExtractor::with_cache("sc", &cache).extract(&[black_box(&variables)])
        })
    });
}

fn render_theme(c: &mut Criterion) {
    let theme = Theme {
        variables: sample_variables(),
        ..Default::default()
    };

    c.bench_function("render_theme_css", |b| b.iter(|| black_box(&theme).to_css()));
}

criterion_group!(benches, extract_warm, extract_cold, render_theme);
criterion_main!(benches);
