use criterion::{criterion_group, criterion_main, Criterion};

use cookscale::{parser, IngredientParser, Patterns, UnitTable};

const TEST_RECIPE: &str = include_str!("./test_recipe.txt");

fn complete_recipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_recipe");

    let all = IngredientParser::default();
    let count_only = IngredientParser::new(Patterns::COUNT, UnitTable::bundled());

    group.bench_with_input("all-patterns", TEST_RECIPE, |b, input| {
        b.iter(|| all.parse(input))
    });
    group.bench_with_input("count-patterns", TEST_RECIPE, |b, input| {
        b.iter(|| count_only.parse(input))
    });
}

fn just_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("just_segments");

    group.bench_with_input("segments", TEST_RECIPE, |b, input| {
        b.iter(|| parser::segments(input).len())
    });
    group.bench_with_input("normalized", TEST_RECIPE, |b, input| {
        b.iter(|| {
            parser::segments(input)
                .iter()
                .map(|s| parser::normalize_line(s))
                .count()
        })
    });
}

fn quantities(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantities");
    let input = ["2", "1/2", "2 1/2", "2½", "1-1/2", "one", "1,5"];
    group.bench_function("parse_quantity", |b| {
        b.iter(|| input.iter().map(|q| parser::parse_quantity(q)).sum::<f64>())
    });
}

criterion_group!(benches, complete_recipe, just_segments, quantities);
criterion_main!(benches);
