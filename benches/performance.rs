use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use trend_core::{NormalizerService, SummaryService, WindowBounds};

fn build_sample_batch(record_count: usize) -> Vec<serde_json::Value> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..record_count)
        .map(|idx| {
            let date = start + Duration::days((idx % 30) as i64);
            json!({
                "id": format!("bk-{idx}"),
                "createdAt": format!("{date}T09:30:00"),
                "amount": 50.0 + (idx % 100) as f64,
                "status": "confirmed",
            })
        })
        .collect()
}

fn bench_summary(c: &mut Criterion) {
    let batch = build_sample_batch(black_box(10_000));
    let bounds = WindowBounds::default();
    let now = NaiveDate::from_ymd_opt(2025, 1, 30)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    c.bench_function("summary_assemble_10k", |b| {
        b.iter(|| {
            let summary = SummaryService::assemble(&batch, &bounds, now);
            black_box(summary);
        })
    });

    let records = NormalizerService::normalize(&batch);
    c.bench_function("summary_assemble_normalized_10k", |b| {
        b.iter(|| {
            let summary = SummaryService::assemble_normalized(&records, &bounds, now);
            black_box(summary);
        })
    });
}

criterion_group!(benches, bench_summary);
criterion_main!(benches);
