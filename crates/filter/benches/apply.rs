//! Benchmarks for applying rule lists
//!
//! Measures:
//! - Rule compilation alone
//! - Flat and array-crossing paths over a few thousand providers
//! - A typical five-rule grid filter

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use roster_filter::prelude::*;
use serde_json::{Value, json};
use std::hint::black_box;

const STATUSES: [&str; 4] = ["APPROVED", "PENDING", "DENIED", "IN_PROGRESS"];
const DEGREES: [&str; 4] = ["MD", "DO", "NP", "PA"];

fn providers(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": i,
                "firstName": format!("Provider{i}"),
                "lastName": if i % 3 == 0 { "Okafor" } else { "Lindqvist" },
                "npi": 1_000_000_000 + i * 7919,
                "basicInfo": {
                    "degree": DEGREES[i % DEGREES.len()],
                    "cred_approval_status": STATUSES[i % STATUSES.len()],
                },
                "address": (0..(i % 4)).map(|a| json!({
                    "stateId": (i + a) % 51 + 1,
                    "healthPlans": [{"name": "Aetna"}, {"name": "Cigna"}],
                })).collect::<Vec<_>>(),
                "createdAt": format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
            })
        })
        .collect()
}

fn grid_rules() -> Vec<FilterRule> {
    vec![
        FilterRule::new("status", "basicInfo.cred_approval_status", Operator::In, json!(["approved", "pending"])),
        FilterRule::new("npi", "npi", Operator::Between, 1_000_000_000_u64).with_second_value(1_050_000_000_u64),
        FilterRule::new("name", "lastName", Operator::StartsWith, "oka"),
        FilterRule::new("state", "address.stateId", Operator::Equals, 33),
        FilterRule::new("recent", "createdAt", Operator::InLast, 6).with_second_value("months"),
    ]
}

// ============================================================================
// COMPILATION
// ============================================================================

fn bench_compile(c: &mut Criterion) {
    let engine = FilterEngine::default();
    let rules = grid_rules();
    c.bench_function("compile_grid_rules", |b| {
        b.iter(|| engine.compile(black_box(&rules)))
    });
}

// ============================================================================
// APPLY
// ============================================================================

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    let engine = FilterEngine::default();

    let flat = [FilterRule::new("name", "firstName", Operator::Contains, "vider1")];
    let nested = [FilterRule::new("plan", "address.healthPlans.name", Operator::Equals, "cigna")];
    let grid = grid_rules();

    for size in [1_000_usize, 5_000] {
        let records = providers(size);
        group.bench_with_input(BenchmarkId::new("flat_contains", size), &records, |b, records| {
            b.iter(|| engine.apply(black_box(records), &flat))
        });
        group.bench_with_input(BenchmarkId::new("nested_arrays", size), &records, |b, records| {
            b.iter(|| engine.apply(black_box(records), &nested))
        });
        group.bench_with_input(BenchmarkId::new("grid_five_rules", size), &records, |b, records| {
            b.iter(|| engine.apply(black_box(records), &grid))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compile, bench_apply);
criterion_main!(benches);
