//! Criterion benchmarks for ringlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ringlog::{Engine, LogLevel, Record, RingQueue};
use std::sync::Arc;
use std::thread;

// ============================================================================
// Ring Queue Benchmarks
// ============================================================================

fn bench_ring_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_queue");
    group.throughput(Throughput::Elements(1));

    group.bench_function("enqueue_dequeue_pair", |b| {
        let queue = RingQueue::with_capacity(1024);
        b.iter(|| {
            queue.try_enqueue(black_box(1u64)).ok();
            black_box(queue.try_dequeue());
        });
    });

    group.bench_function("enqueue_until_full", |b| {
        b.iter(|| {
            let queue = RingQueue::with_capacity(128);
            while queue.try_enqueue(black_box(1u64)).is_ok() {}
            black_box(queue.len())
        });
    });

    group.finish();
}

fn bench_ring_queue_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_queue_contended");
    group.throughput(Throughput::Elements(1));

    group.bench_function("one_producer_one_consumer", |b| {
        b.iter_custom(|iters| {
            let queue = Arc::new(RingQueue::with_capacity(1024));
            let consumer_queue = Arc::clone(&queue);

            let consumer = thread::spawn(move || {
                let mut received = 0u64;
                while received < iters {
                    if consumer_queue.try_dequeue().is_some() {
                        received += 1;
                    } else {
                        std::hint::spin_loop();
                    }
                }
            });

            let start = std::time::Instant::now();
            for i in 0..iters {
                let mut item = i;
                while let Err(returned) = queue.try_enqueue(item) {
                    item = returned;
                    std::hint::spin_loop();
                }
            }
            consumer.join().expect("consumer panicked");
            start.elapsed()
        });
    });

    group.finish();
}

// ============================================================================
// Record Rendering Benchmarks
// ============================================================================

fn bench_record_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_render");
    group.throughput(Throughput::Elements(1));

    group.bench_function("short_payload", |b| {
        let record = Record::new(LogLevel::Info, "bench.rs", 42, "short message".to_string());
        b.iter(|| black_box(record.render()));
    });

    group.bench_function("long_payload", |b| {
        let record = Record::new(LogLevel::Info, "bench.rs", 42, "x".repeat(512));
        b.iter(|| black_box(record.render()));
    });

    group.finish();
}

// ============================================================================
// Engine Benchmarks
// ============================================================================

fn bench_engine_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_log");
    group.throughput(Throughput::Elements(1));

    let dir = tempfile::tempdir().expect("failed to create temp dir");

    group.bench_function("enqueued", |b| {
        let engine = Engine::builder()
            .capacity(65_536)
            .build(dir.path().join("enqueued.log"))
            .expect("failed to create engine");
        b.iter(|| {
            engine.log(
                LogLevel::Info,
                "bench.rs",
                42,
                black_box("benchmark message").to_string(),
            );
        });
        engine.sync();
    });

    group.bench_function("filtered", |b| {
        let engine = Engine::builder()
            .level(LogLevel::Error)
            .build(dir.path().join("filtered.log"))
            .expect("failed to create engine");
        b.iter(|| {
            engine.log(
                LogLevel::Debug,
                "bench.rs",
                42,
                black_box("never rendered").to_string(),
            );
        });
    });

    group.finish();
}

fn bench_engine_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_sync");
    group.sample_size(10);

    let dir = tempfile::tempdir().expect("failed to create temp dir");

    group.bench_function("log_1000_then_sync", |b| {
        let engine = Engine::builder()
            .capacity(4096)
            .build(dir.path().join("sync.log"))
            .expect("failed to create engine");
        b.iter(|| {
            for i in 0..1000 {
                engine.log(LogLevel::Info, "bench.rs", 1, format!("record {}", i));
            }
            engine.sync();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ring_queue,
    bench_ring_queue_contended,
    bench_record_render,
    bench_engine_log,
    bench_engine_sync
);
criterion_main!(benches);
