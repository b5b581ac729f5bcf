use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_anno::{notes, to_string, to_value, AnnoOptions, AnnoValue, NoteMap, Renderer};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn benchmark_render_simple(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("render_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_render_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_array");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_render_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    };

    c.bench_function("render_nested_struct", |b| {
        b.iter(|| to_string(black_box(&data)))
    });
}

fn benchmark_render_annotated(c: &mut Criterion) {
    let user = sample_user();
    let tree = to_value(&user).unwrap();
    let overlay = notes! {
        "id" => "primary key",
        "email" => "verified 2024-06",
        "active" => "toggled by support",
    };
    let renderer = Renderer::new(AnnoOptions::plain());

    c.bench_function("render_annotated_struct", |b| {
        b.iter(|| renderer.stringify(black_box(&tree), Some(black_box(&overlay))))
    });

    c.bench_function("render_without_overlay", |b| {
        b.iter(|| renderer.stringify(black_box(&tree), None))
    });
}

fn benchmark_string_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_strings");

    let short = "short";
    let escaped = "a < b && b > c \\ \"quoted\"";
    let multiline = "line one\nline two\nline three\nline four";

    group.bench_function("short_string", |b| b.iter(|| to_string(black_box(&short))));

    group.bench_function("escaped_string", |b| {
        b.iter(|| to_string(black_box(&escaped)))
    });

    group.bench_function("multiline_string", |b| {
        b.iter(|| to_string(black_box(&multiline)))
    });

    group.finish();
}

fn benchmark_primitive_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive_array");

    let numbers: Vec<i32> = (0..100).collect();
    let bools: Vec<bool> = (0..100).map(|i| i % 2 == 0).collect();
    let floats: Vec<f64> = (0..100).map(|i| i as f64 * 1.5).collect();

    group.bench_function("render_integers", |b| {
        b.iter(|| to_string(black_box(&numbers)))
    });

    group.bench_function("render_booleans", |b| {
        b.iter(|| to_string(black_box(&bools)))
    });

    group.bench_function("render_floats", |b| {
        b.iter(|| to_string(black_box(&floats)))
    });

    group.finish();
}

fn benchmark_alignment(c: &mut Criterion) {
    let mut map = serde_anno::AnnoMap::new();
    for i in 0..50 {
        map.insert(format!("field_{}", i), AnnoValue::from(i));
    }
    let tree = AnnoValue::Object(map);

    let mut group = c.benchmark_group("alignment");

    let aligned = Renderer::new(AnnoOptions::plain());
    group.bench_function("aligned", |b| {
        b.iter(|| aligned.stringify(black_box(&tree), None))
    });

    let ragged = Renderer::new(AnnoOptions::plain().with_align_object_value(false));
    group.bench_function("ragged", |b| {
        b.iter(|| ragged.stringify(black_box(&tree), None))
    });

    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = sample_user();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("anno_render", |b| {
        b.iter(|| serde_anno::to_string(black_box(&user)))
    });

    group.bench_function("json_pretty", |b| {
        b.iter(|| serde_json::to_string_pretty(black_box(&user)))
    });

    group.finish();
}

fn benchmark_overlay_lookup(c: &mut Criterion) {
    let elements: Vec<AnnoValue> = (0..100).map(AnnoValue::from).collect();
    let tree = AnnoValue::Array(elements);

    let mut overlay = NoteMap::new();
    for i in (0..100).step_by(10) {
        overlay.insert(i.to_string(), "every tenth");
    }
    let renderer = Renderer::new(AnnoOptions::plain());

    c.bench_function("overlay_textual_lookup", |b| {
        b.iter(|| renderer.stringify(black_box(&tree), Some(black_box(&overlay))))
    });
}

criterion_group!(
    benches,
    benchmark_render_simple,
    benchmark_render_array,
    benchmark_render_nested,
    benchmark_render_annotated,
    benchmark_string_rendering,
    benchmark_primitive_array,
    benchmark_alignment,
    benchmark_comparison_with_json,
    benchmark_overlay_lookup
);
criterion_main!(benches);
