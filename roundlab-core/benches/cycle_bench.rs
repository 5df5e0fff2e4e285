//! Criterion benchmarks for RoundLab hot paths.
//!
//! Benchmarks:
//! 1. Full prediction cycle (orchestrator end to end)
//! 2. Feature extraction over a warm history window
//! 3. Advisory ensemble evaluation
//! 4. Weight evolution over a fully qualifying window

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use roundlab_core::domain::{CycleMemory, History, OutcomeRecord, Resolution, RoundId};
use roundlab_core::engine::{Engine, EngineConfig};
use roundlab_core::features;
use roundlab_core::model::WeightVector;
use roundlab_core::state::evolve_weights;
use roundlab_core::advisors;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_history(n: usize) -> History {
    let mut history = History::new();
    for i in 0..n {
        let round = RoundId::new((i + 1).to_string()).unwrap();
        let raw = ((i * 7 + 3) % 10) as u8;
        history.push(OutcomeRecord::new(round, raw).unwrap());
    }
    history
}

fn make_resolved_history(n: usize) -> History {
    let mut history = make_history(n);
    let outcomes = history.outcomes();
    let snapshot = features::extract(&outcomes);
    let ids: Vec<RoundId> = history
        .records()
        .iter()
        .map(|r| r.round_id.clone())
        .collect();
    for (i, id) in ids.iter().enumerate() {
        let record = history.find_mut(id).unwrap();
        record.status = if i % 3 == 0 {
            Resolution::Loss
        } else {
            Resolution::Win
        };
        record.snapshot = Some(snapshot.clone());
    }
    history
}

// ── 1. Full Prediction Cycle ─────────────────────────────────────────

fn bench_run_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_cycle");

    for &len in &[100, 150] {
        group.bench_with_input(BenchmarkId::new("warm_history", len), &len, |b, &len| {
            let mut engine = Engine::new(EngineConfig::default());
            let mut history = make_history(len);
            let mut memory = CycleMemory::default();
            b.iter(|| {
                let decision = engine.run_cycle(black_box(&mut history), &mut memory);
                black_box(decision)
            });
        });
    }

    group.finish();
}

// ── 2. Feature Extraction ────────────────────────────────────────────

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_extract");

    for &len in &[50, 150] {
        let outcomes = make_history(len).outcomes();
        group.bench_with_input(BenchmarkId::new("window", len), &len, |b, _| {
            b.iter(|| features::extract(black_box(&outcomes)));
        });
    }

    group.finish();
}

// ── 3. Advisory Ensemble ─────────────────────────────────────────────

fn bench_advisors(c: &mut Criterion) {
    let outcomes = make_history(150).outcomes();
    c.bench_function("advisors_run_all_150", |b| {
        b.iter(|| advisors::run_all(black_box(&outcomes)));
    });
}

// ── 4. Weight Evolution ──────────────────────────────────────────────

fn bench_evolution(c: &mut Criterion) {
    let history = make_resolved_history(150);
    c.bench_function("evolve_weights_full_window", |b| {
        b.iter(|| {
            let mut weights = WeightVector::new();
            evolve_weights(&mut weights, black_box(&history), 0.01);
            black_box(weights)
        });
    });
}

criterion_group!(
    benches,
    bench_run_cycle,
    bench_extract,
    bench_advisors,
    bench_evolution,
);
criterion_main!(benches);
