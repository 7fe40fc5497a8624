use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::extract_inline_spans;
mod common;

fn bench_inline_spans(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let text = common::generate_inline_text(500);
    group.bench_function("extract_inline_spans_500", |b| {
        b.iter(|| {
            let spans = extract_inline_spans(std::hint::black_box(&text)).unwrap();
            std::hint::black_box(spans);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_inline_spans);
criterion_main!(benches);
