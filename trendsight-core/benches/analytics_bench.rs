//! Criterion benchmarks for the analytics hot paths.
//!
//! Benchmarks:
//! 1. SMA sliding-window computation
//! 2. Daily return computation (simple and log)
//! 3. Run segmentation
//! 4. Profit analysis (single + multi-transaction)
//! 5. Display selection over a dense transaction list

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use trendsight_core::analytics::{
    analyze_profit, compute_returns, compute_sma, count_price_runs, select_for_display,
    DisplayOptions, ReturnKind,
};
use trendsight_core::data::{ingest, SyntheticProvider};
use trendsight_core::domain::PriceSeries;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_series(n: usize) -> PriceSeries {
    let provider = SyntheticProvider::new(42);
    let start = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let raw = provider.generate_bars("BENCH", start, n);
    ingest(raw).expect("synthetic bars are valid")
}

// ── 1. SMA ───────────────────────────────────────────────────────────

fn bench_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("sma");
    for n in [250usize, 2_500, 10_000] {
        let series = make_series(n);
        group.bench_with_input(BenchmarkId::new("window_20", n), &series, |b, series| {
            b.iter(|| compute_sma(black_box(series), 20).unwrap());
        });
    }
    group.finish();
}

// ── 2. Returns ───────────────────────────────────────────────────────

fn bench_returns(c: &mut Criterion) {
    let series = make_series(10_000);
    let mut group = c.benchmark_group("returns");
    group.bench_function("simple", |b| {
        b.iter(|| compute_returns(black_box(&series), ReturnKind::Simple));
    });
    group.bench_function("log", |b| {
        b.iter(|| compute_returns(black_box(&series), ReturnKind::Log));
    });
    group.finish();
}

// ── 3. Runs ──────────────────────────────────────────────────────────

fn bench_runs(c: &mut Criterion) {
    let series = make_series(10_000);
    c.bench_function("count_price_runs_10k", |b| {
        b.iter(|| count_price_runs(black_box(&series)));
    });
}

// ── 4. Profit ────────────────────────────────────────────────────────

fn bench_profit(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_profit");
    for n in [250usize, 2_500, 10_000] {
        let series = make_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, series| {
            b.iter(|| analyze_profit(black_box(series)));
        });
    }
    group.finish();
}

// ── 5. Display selection ─────────────────────────────────────────────

fn bench_display(c: &mut Criterion) {
    let series = make_series(10_000);
    let result = analyze_profit(&series);
    let options = DisplayOptions::default();
    c.bench_function("select_for_display_10k", |b| {
        b.iter(|| select_for_display(black_box(&result), black_box(&options)));
    });
}

criterion_group!(
    benches,
    bench_sma,
    bench_returns,
    bench_runs,
    bench_profit,
    bench_display
);
criterion_main!(benches);
