use criterion::{Criterion, criterion_group, criterion_main};
use nutrition::{NutrientProfile, Product, UserProfile, advise, assess, extract_nutrients, score};
use serde_json::json;

fn sample_product() -> Product {
    serde_json::from_value(json!({
        "product_name": "Benchmark Bar",
        "nutriments": {
            "energy-kcal_100g": 520,
            "sugars_100g": 34.5,
            "saturated-fat_100g": 11.2,
            "sodium_100g": 0.2,
            "proteins_100g": 7.1
        }
    }))
    .unwrap()
}

fn bench_extract(c: &mut Criterion) {
    let product = sample_product();

    c.bench_function("nutrition/extract_nutrients", |b| {
        b.iter(|| extract_nutrients(&product.nutriments));
    });
}

fn bench_score(c: &mut Criterion) {
    let nutrients = NutrientProfile {
        calories: 800.0,
        sugars: 40.0,
        saturated_fat: 12.0,
        sodium: 1200.0,
        protein: 5.0,
    };

    c.bench_function("nutrition/score", |b| {
        b.iter(|| score(&nutrients));
    });
}

fn bench_advise(c: &mut Criterion) {
    let nutrients = extract_nutrients(&sample_product().nutriments);
    let profile = UserProfile::new("Diabetes, Hypertension", "Weight Loss");

    c.bench_function("nutrition/advise", |b| {
        b.iter(|| advise(&nutrients, &profile));
    });
}

fn bench_full_assessment(c: &mut Criterion) {
    let product = sample_product();
    let profile = UserProfile::new("diabetes", "weight loss");

    c.bench_function("nutrition/assess", |b| {
        b.iter(|| assess(&product, &profile));
    });
}

criterion_group!(
    benches,
    bench_extract,
    bench_score,
    bench_advise,
    bench_full_assessment
);
criterion_main!(benches);
