use blockdsp_common::{allocate, CpuCapabilities, DspTier};
use blockdsp_metrics::{hadamard, noise, norm::NormFns, sse, vsad, MetricFn};
use core::time::Duration;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const STRIDE: usize = 64;

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    allocate::allocate_align_64(num_bytes).unwrap()
}

fn bench_metric(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    tier: DspTier,
    metric: MetricFn,
    pix1: &RawAlloc,
    pix2: &RawAlloc,
) {
    group.bench_with_input(BenchmarkId::new(name, tier.name()), &tier, |b, _| {
        b.iter(|| unsafe {
            black_box(metric(
                None,
                black_box(pix1.as_ptr()),
                black_box(pix2.as_ptr()),
                STRIDE,
                16,
            ))
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block Metrics");
    let mut pix1 = allocate_align_64(STRIDE * 16);
    let mut pix2 = allocate_align_64(STRIDE * 16);
    for (i, byte) in pix1.as_mut_slice().iter_mut().enumerate() {
        *byte = (i * 7 % 256) as u8;
    }
    for (i, byte) in pix2.as_mut_slice().iter_mut().enumerate() {
        *byte = (i * 11 % 256) as u8;
    }

    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    let caps = CpuCapabilities::detect();
    for &tier in DspTier::all_values() {
        if !tier.is_supported_by(caps) {
            continue;
        }

        let metrics = [
            ("sse16", sse::sse_tab(tier)[0]),
            ("hadamard8_diff16", hadamard::hadamard8_diff_tab(tier)[0]),
            ("nsse16", noise::nsse_tab(tier)[0]),
            ("vsad16", vsad::vsad_tab(tier)[0]),
            ("vsad_intra16", vsad::vsad_tab(tier)[1]),
        ];
        for (name, metric) in metrics {
            bench_metric(&mut group, name, tier, metric, &pix1, &pix2);
        }

        let stats = NormFns::for_tier(tier);
        group.bench_with_input(BenchmarkId::new("pix_norm1", tier.name()), &tier, |b, _| {
            b.iter(|| unsafe { black_box((stats.pix_norm1)(black_box(pix1.as_ptr()), STRIDE)) })
        });
        group.bench_with_input(BenchmarkId::new("pix_sum16", tier.name()), &tier, |b, _| {
            b.iter(|| unsafe { black_box((stats.pix_sum)(black_box(pix1.as_ptr()), STRIDE)) })
        });
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
