//! Keypress Benchmarks
//!
//! Throughput of the state machine over long keypad sessions.
//!
//! Run with: `cargo bench --bench keypress`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tapcalc::prelude::*;

fn bench_parse_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sequence");

    let inputs = vec![
        ("single", "5"),
        ("addition", "5 + 3 ="),
        ("decimals", "12.75 x 0.125 ="),
        ("chain", "1 + 2 - 3 x 4 / 5 + 6 - 7 x 8 / 9 ="),
    ];

    for (name, keys) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &keys, |bench, keys| {
            bench.iter(|| black_box(parse_sequence(black_box(keys)).unwrap()));
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    for repeats in [1usize, 10, 100] {
        let keys = "12.5 x 4 - 0.1 + 0.2 / 3 = ".repeat(repeats);
        let actions = parse_sequence(&keys).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(actions.len()),
            &actions,
            |bench, actions| {
                bench.iter(|| {
                    let mut calc = Calculator::new(RecordingDisplay::new());
                    calc.press_all(actions.iter().copied());
                    black_box(calc.state().first_operand().as_str().len())
                });
            },
        );
    }

    group.finish();
}

fn bench_discarding_sink(c: &mut Criterion) {
    let actions = parse_sequence(&"9 9 9 x 9 9 9 = ".repeat(50)).unwrap();
    c.bench_function("discarding_sink", |bench| {
        bench.iter(|| {
            let mut calc = Calculator::new(FnDisplay(|text: &str| {
                black_box(text);
            }));
            calc.press_all(actions.iter().copied());
            black_box(calc.state().last_action())
        });
    });
}

criterion_group!(
    benches,
    bench_parse_sequence,
    bench_session,
    bench_discarding_sink
);
criterion_main!(benches);
