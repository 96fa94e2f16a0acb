// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast bookkeeping.
//!
//! Measures the cost of:
//! - Posting a burst of toasts
//! - Ticking through their removals
//! - Dismissing by id in a crowded collection

use binsearch_shell::ui::notifications::{Manager, ToastKind};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};

const BURST: usize = 200;

fn filled_manager(start: Instant) -> Manager {
    let mut manager = Manager::new();
    for i in 0..BURST {
        let at = start + Duration::from_millis(i as u64 * 10);
        manager.notify(ToastKind::Info, format!("toast {i}"), None, at);
    }
    manager
}

fn bench_notify_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");
    let start = Instant::now();

    group.bench_function("notify_burst", |b| {
        b.iter(|| black_box(filled_manager(start)));
    });

    group.bench_function("tick_until_empty", |b| {
        b.iter_batched(
            || filled_manager(start),
            |mut manager| {
                let mut now = start;
                while !manager.is_empty() {
                    now += Duration::from_millis(100);
                    black_box(manager.tick(now));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("dismiss_each", |b| {
        b.iter_batched(
            || {
                let manager = filled_manager(start);
                let ids: Vec<_> = manager.active().map(|t| t.id()).collect();
                (manager, ids)
            },
            |(mut manager, ids)| {
                for id in ids.into_iter().rev() {
                    black_box(manager.dismiss(id));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_notify_burst);
criterion_main!(benches);
