//! Benchmark for CAM type resolution.
//!
//! Resolution runs once per kernel launch, so it should stay well below the
//! launch overhead itself. This compares:
//! - C type lookup for a tag
//! - dtype name parsing
//! - full kernel signature resolution

use campie::{native_type_name, CamOp, CamVariant, DType, KernelSignature, NumericType};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_native_type_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("NativeTypeName");

    for dtype in [DType::Float32, DType::UInt64, DType::Complex64] {
        group.bench_with_input(BenchmarkId::new("lookup", dtype), &dtype, |bench, &dtype| {
            bench.iter(|| black_box(native_type_name(black_box(dtype))));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("DTypeParse");

    for name in ["float32", "<f8", "u1"] {
        group.bench_with_input(BenchmarkId::new("from_str", name), name, |bench, name| {
            bench.iter(|| black_box(black_box(name).parse::<DType>()));
        });
    }

    group.finish();
}

fn bench_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("KernelSignature");
    let weights: Vec<f64> = (0..1024).map(|i| i as f64 * 0.5).collect();

    for variant in CamVariant::ALL {
        group.bench_with_input(
            BenchmarkId::new("match", variant),
            &variant,
            |bench, &variant| {
                bench.iter(|| {
                    black_box(
                        KernelSignature::request(variant, CamOp::Match)
                            .resolve(NumericType::Float32)
                            .unwrap(),
                    )
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("reduce_sum", variant),
            &variant,
            |bench, &variant| {
                bench.iter(|| {
                    black_box(
                        KernelSignature::request(variant, CamOp::ReduceSum)
                            .reduce_over(&weights)
                            .resolve(NumericType::Float32)
                            .unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_native_type_name, bench_parse, bench_signature);
criterion_main!(benches);
