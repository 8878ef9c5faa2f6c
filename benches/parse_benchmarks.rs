use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mechanism_config::{parse_str, serialize_str, Format};

// ============================================================================
// Test Data: Varying Complexity and Size
// ============================================================================

const TINY_MECHANISM: &str = r#"
species:
  - name: A
phases:
  - name: gas
    species: [A]
reactions: []
"#;

const SMALL_MECHANISM: &str = r#"
version: "1.0.0"
name: small
species:
  - name: A
  - name: B
  - name: C
phases:
  - name: gas
    species: [A, B, C]
reactions:
  - type: ARRHENIUS
    gas phase: gas
    A: 32.1
    B: -2.3
    reactants: [A, B]
    products: [C]
  - type: EMISSION
    gas phase: gas
    scaling factor: 12.3
    products: [B]
"#;

const FULL_MECHANISM: &str = include_str!("../tests/examples/full_configuration.yaml");

// A mechanism with `size` Arrhenius reactions over a shared species pool, for
// scaling runs.
fn generate_mechanism(size: usize) -> String {
    let mut doc = String::from("version: \"1.0.0\"\nname: generated\nspecies:\n");
    for i in 0..10 {
        doc.push_str(&format!("  - name: S{i}\n"));
    }
    doc.push_str("phases:\n  - name: gas\n    species: [");
    for i in 0..10 {
        if i > 0 {
            doc.push_str(", ");
        }
        doc.push_str(&format!("S{i}"));
    }
    doc.push_str("]\nreactions:\n");
    for i in 0..size {
        doc.push_str(&format!(
            "  - type: ARRHENIUS\n    gas phase: gas\n    A: {}.5\n    B: -2.3\n    reactants: [S{}]\n    products: [S{}]\n",
            i,
            i % 10,
            (i + 1) % 10
        ));
    }
    doc
}

// ============================================================================
// Parse Benchmarks
// ============================================================================

fn bench_parse_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_by_size");

    for (name, source) in [
        ("tiny", TINY_MECHANISM),
        ("small", SMALL_MECHANISM),
        ("full", FULL_MECHANISM),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| parse_str(black_box(src), Format::Yaml))
        });
    }

    group.finish();
}

fn bench_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_reaction_scaling");

    for size in [10, 50, 100, 500, 1000] {
        let source = generate_mechanism(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, src| {
            b.iter(|| parse_str(black_box(src), Format::Yaml))
        });
    }

    group.finish();
}

fn bench_parse_encodings(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_by_encoding");

    let mechanism = parse_str(FULL_MECHANISM, Format::Yaml).unwrap();
    let yaml = serialize_str(&mechanism, Format::Yaml).unwrap();
    let json = serialize_str(&mechanism, Format::Json).unwrap();

    for (name, source, format) in [("yaml", &yaml, Format::Yaml), ("json", &json, Format::Json)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| parse_str(black_box(src), format))
        });
    }

    group.finish();
}

// ============================================================================
// Round-Trip Benchmarks
// ============================================================================

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let mechanism = parse_str(FULL_MECHANISM, Format::Yaml).unwrap();
    for format in [Format::Yaml, Format::Json] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format.name()),
            &mechanism,
            |b, mechanism| b.iter(|| serialize_str(black_box(mechanism), format)),
        );
    }

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_full_configuration", |b| {
        b.iter(|| {
            let mechanism = parse_str(black_box(FULL_MECHANISM), Format::Yaml).unwrap();
            let rendered = serialize_str(&mechanism, Format::Yaml).unwrap();
            parse_str(&rendered, Format::Yaml)
        })
    });
}

criterion_group!(
    parse_benches,
    bench_parse_sizes,
    bench_parse_scaling,
    bench_parse_encodings
);

criterion_group!(round_trip_benches, bench_serialize, bench_round_trip);

criterion_main!(parse_benches, round_trip_benches);
