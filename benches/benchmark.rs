use criterion::{black_box, criterion_group, criterion_main, Criterion};

use events64::{BoxError, Emitter, Event, EventType};

fn swallow(event: &Event) -> Result<(), BoxError> {
    black_box(event.value());
    Ok(())
}

pub fn benchmark_emit(c: &mut Criterion) {
    c.bench_function("emit-no-listeners", |b| {
        let emitter = Emitter::new();
        b.iter(|| emitter.emit("bench.emit", EventType::Count, 1));
    });
    c.bench_function("emit-1-listener", |b| {
        let emitter = Emitter::new();
        emitter.register(swallow);
        b.iter(|| emitter.emit("bench.emit", EventType::Count, 1));
    });
    c.bench_function("emit-8-listeners", |b| {
        let emitter = Emitter::new();
        for _ in 0..8 {
            emitter.register(swallow);
        }
        b.iter(|| emitter.emit("bench.emit", EventType::Count, 1));
    });
    c.bench_function("emit-raw", |b| {
        let emitter = Emitter::new();
        emitter.register(swallow);
        b.iter(|| emitter.emit_raw("bench.emit", black_box("count"), black_box(1.0)));
    });
}

pub fn benchmark_timers(c: &mut Criterion) {
    c.bench_function("timer-start", |b| {
        let emitter = Emitter::new();
        b.iter(|| emitter.timers().start("bench"));
    });
    c.bench_function("timer-read-running", |b| {
        let emitter = Emitter::new();
        emitter.timers().start("bench");
        b.iter(|| emitter.timers().read("bench"));
    });
}

pub fn benchmark_process(c: &mut Criterion) {
    c.bench_function("process-span", |b| {
        let emitter = Emitter::new();
        emitter.register(swallow);
        b.iter(|| {
            emitter.process_start("bench").unwrap();
            emitter.process_end("bench").unwrap();
        });
    });
}

criterion_group!(benches, benchmark_emit, benchmark_timers, benchmark_process);
criterion_main!(benches);
