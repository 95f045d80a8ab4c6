use blockdsp_common::{allocate, BlockSize, CpuCapabilities, DspTier};
use blockdsp_pixels::hpel::{self, HpelFilter, PixelsTable};
use core::time::Duration;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const STRIDE: usize = 1024;
const ROWS: usize = 64;

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    allocate::allocate_align_64(num_bytes).unwrap()
}

fn bench_table(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    table: &PixelsTable,
    family: &str,
    tier: DspTier,
    src: &RawAlloc,
    dst: &mut RawAlloc,
) {
    for size in BlockSize::all_values() {
        for filter in HpelFilter::all_values() {
            let kernel = hpel::lookup(table, *size, *filter);
            let width = size.width();
            let id = format!("{family} {}x{width} {filter:?}", width);
            group.bench_with_input(BenchmarkId::new(id, tier.name()), &width, |b, _| {
                b.iter(|| {
                    // One row of blocks across the plane.
                    for x in (0..STRIDE - width - 1).step_by(width) {
                        unsafe {
                            kernel(
                                black_box(dst.as_mut_ptr().add(x)),
                                black_box(src.as_ptr().add(x)),
                                STRIDE,
                                width,
                            )
                        }
                    }
                })
            });
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Half-pel Interpolation");
    let mut src = allocate_align_64(STRIDE * ROWS);
    for (i, byte) in src.as_mut_slice().iter_mut().enumerate() {
        *byte = (i * 31 % 251) as u8;
    }
    let mut dst = allocate_align_64(STRIDE * ROWS);
    dst.as_mut_slice().fill(128);

    group.throughput(criterion::Throughput::Bytes((STRIDE * 16) as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    let caps = CpuCapabilities::detect();
    for &tier in DspTier::all_values() {
        if !tier.is_supported_by(caps) {
            continue;
        }

        let tables = [
            (hpel::put_pixels_tab(tier), "put"),
            (hpel::avg_pixels_tab(tier), "avg"),
            (hpel::put_no_rnd_pixels_tab(tier), "put_no_rnd"),
        ];
        for (table, family) in &tables {
            bench_table(&mut group, table, family, tier, &src, &mut dst);
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
