//! Per-strategy decode benchmarks

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use jsonmark::generator::{DEFAULT_SEED, write_records};
use jsonmark::{RecordSource, Registry, run};

const RECORDS: u64 = 10_000;

fn sample_input() -> (Vec<u8>, i64) {
    let mut data = Vec::new();
    let checksum = write_records(&mut data, RECORDS, DEFAULT_SEED).unwrap();
    (data, checksum)
}

fn decode_benchmark(c: &mut Criterion) {
    let (data, expected) = sample_input();
    let lines: Vec<&[u8]> = data
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .collect();
    let registry = Registry::standard().unwrap();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for strategy in registry.iter() {
        let checksum: i64 = lines.iter().map(|l| strategy.decode(l).unwrap()).sum();
        assert_eq!(checksum, expected, "{}", strategy.name());

        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for line in &lines {
                    sum += strategy.decode(black_box(line)).unwrap();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn driver_benchmark(c: &mut Criterion) {
    let (data, expected) = sample_input();
    let registry = Registry::standard().unwrap();

    let mut group = c.benchmark_group("driver");
    group.throughput(Throughput::Elements(RECORDS));

    for strategy in registry.iter() {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                let mut source = RecordSource::new(black_box(data.as_slice()));
                let report = run(strategy, &mut source).unwrap();
                assert_eq!(report.checksum, expected);
                black_box(report.checksum)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, decode_benchmark, driver_benchmark);
criterion_main!(benches);
