//! Benchmark timecode parsing and whole-file conversion
//!
//! Run with: cargo bench --bench timecode_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use encoding_rs::UTF_8;
use tempfile::TempDir;

use captime::pipeline::{convert_file, parse_rows, parse_timecode};

/// Generate caption CSV text with one untimed row in every ten
fn generate_caption_csv(n_rows: usize) -> String {
    let mut content = String::from("Start Time,End Time,Text,Layer ID\n");
    for i in 0..n_rows {
        let start = i * 3;
        let (hours, minutes, seconds) = (start / 3600, (start / 60) % 60, start % 60);
        if i % 10 == 9 {
            content.push_str(&format!(",,Untimed line {},1\n", i));
        } else {
            content.push_str(&format!(
                "{:02};{:02};{:02};{:02},{:02};{:02};{:02};{:02},Caption line {},{}\n",
                hours,
                minutes,
                seconds,
                i % 100,
                hours,
                minutes,
                seconds + 2,
                (i * 7) % 100,
                i,
                i % 3
            ));
        }
    }
    content
}

fn benchmark_parse_timecode(c: &mut Criterion) {
    c.bench_function("parse_timecode", |b| {
        b.iter(|| parse_timecode(black_box("01;23;45;67")))
    });
}

fn benchmark_parse_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rows");

    for n_rows in [100, 1_000, 10_000] {
        let content = generate_caption_csv(n_rows);
        group.throughput(Throughput::Elements(n_rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &content, |b, content| {
            b.iter(|| parse_rows(black_box(content)).expect("CSV should parse"))
        });
    }

    group.finish();
}

fn benchmark_convert_file(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("bench.csv");
    let output = temp_dir.path().join("bench.json");
    std::fs::write(&input, generate_caption_csv(5_000)).expect("Failed to write fixture");

    c.bench_function("convert_file_5000_rows", |b| {
        b.iter(|| convert_file(black_box(&input), &output, UTF_8).expect("Conversion should succeed"))
    });
}

criterion_group!(
    benches,
    benchmark_parse_timecode,
    benchmark_parse_rows,
    benchmark_convert_file
);
criterion_main!(benches);
