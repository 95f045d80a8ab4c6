use blockdsp_common::{allocate, CpuCapabilities, DspTier};
use blockdsp_loop_filter::{EdgeDirection, LoopFilterFns};
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

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("H.263 Loop Filter");
    let mut plane = allocate_align_64(STRIDE * 16);
    for (i, byte) in plane.as_mut_slice().iter_mut().enumerate() {
        *byte = (i * 29 % 64) as u8 + if i / STRIDE >= 8 { 96 } else { 80 };
    }
    let origin = 8 * STRIDE + 8;

    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    let caps = CpuCapabilities::detect();
    for &tier in DspTier::all_values() {
        if !tier.is_supported_by(caps) {
            continue;
        }

        let fns = LoopFilterFns::for_tier(tier);
        for (direction, name) in [
            (EdgeDirection::Horizontal, "h263_v_loop_filter"),
            (EdgeDirection::Vertical, "h263_h_loop_filter"),
        ] {
            let filter = fns.for_direction(direction);
            group.bench_with_input(BenchmarkId::new(name, tier.name()), &direction, |b, _| {
                b.iter(|| unsafe {
                    let edge = plane.as_mut_ptr().add(origin);
                    filter(black_box(edge), STRIDE, black_box(16))
                })
            });
        }
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
