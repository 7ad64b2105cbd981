use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::json;
use tempfile::TempDir;

use storefront_infra::{CatalogLoader, FixedPrompt, LoaderConfig};
use storefront_products::{CatalogSession, Product};

/// Catalog file with `categories` categories of `per_category` smartphones each.
fn write_catalog(config: &LoaderConfig, categories: usize, per_category: usize) {
    let doc: Vec<_> = (0..categories)
        .map(|c| {
            let products: Vec<_> = (0..per_category)
                .map(|p| {
                    json!({
                        "name": format!("Phone {c}-{p}"),
                        "description": "bench",
                        "price": 1000.0 + p as f64,
                        "quantity": 1 + (p % 7) as i64,
                        "efficiency": "A16",
                        "model": "X",
                        "memory": 128,
                        "color": "Black"
                    })
                })
                .collect();
            json!({ "name": format!("Category {c}"), "description": "bench", "products": products })
        })
        .collect();

    std::fs::create_dir_all(config.data_path()).unwrap();
    std::fs::write(config.resolve("bench.json"), serde_json::to_string(&doc).unwrap()).unwrap();
}

fn bench_load_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_catalog");

    for per_category in [10usize, 100, 1_000] {
        let temp = TempDir::new().unwrap();
        let config = LoaderConfig::new(temp.path());
        write_catalog(&config, 4, per_category);

        group.throughput(Throughput::Elements((4 * per_category) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(per_category),
            &per_category,
            |b, _| {
                let mut loader = CatalogLoader::new(config.clone(), FixedPrompt::new("bench.json"));
                b.iter(|| black_box(loader.load_catalog("bench.json", Some(0))));
            },
        );
    }

    group.finish();
}

fn bench_middle_price(c: &mut Criterion) {
    let session = CatalogSession::new();
    let products = (0..10_000)
        .map(|i| Product::new(format!("p{i}"), "bench", 1.0 + i as f64, 1 + i % 5).unwrap())
        .collect();
    let category = session.category("bench", "bench", products);

    c.bench_function("middle_price/10k", |b| {
        b.iter(|| black_box(category.middle_price()))
    });
}

criterion_group!(benches, bench_load_catalog, bench_middle_price);
criterion_main!(benches);
