use blockdsp_common::{allocate, CpuCapabilities, DspTier};
use blockdsp_qpel::{h264, mpeg4, QpelPhases};
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

/// Phases worth tracking separately: full, half and the two most expensive quarter positions.
const PHASES: [(usize, &str); 5] = [
    (0, "mc00"),
    (2, "mc20"),
    (10, "mc22"),
    (5, "mc11"),
    (15, "mc33"),
];

fn bench_phases(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    phases: &QpelPhases,
    name: &str,
    tier: DspTier,
    src: &RawAlloc,
    dst: &mut RawAlloc,
) {
    // Leave room for the filter support before and after the block.
    let origin = 3 * STRIDE + 3;
    for (index, phase) in PHASES {
        let kernel = phases[index];
        group.bench_with_input(
            BenchmarkId::new(format!("{name} {phase}"), tier.name()),
            &index,
            |b, _| {
                b.iter(|| unsafe {
                    kernel(
                        black_box(dst.as_mut_ptr().add(origin)),
                        black_box(src.as_ptr().add(origin)),
                        STRIDE,
                    )
                })
            },
        );
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quarter-pel Interpolation");
    let mut src = allocate_align_64(STRIDE * STRIDE);
    for (i, byte) in src.as_mut_slice().iter_mut().enumerate() {
        *byte = (i * 13 % 256) as u8;
    }
    let mut dst = allocate::allocate_plane(STRIDE, STRIDE).unwrap();

    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    let caps = CpuCapabilities::detect();
    for &tier in DspTier::all_values() {
        if !tier.is_supported_by(caps) {
            continue;
        }

        let mpeg4 = mpeg4::put_qpel_pixels_tab(tier);
        let h264 = h264::put_h264_qpel_pixels_tab(tier);
        let tables = [
            (&mpeg4[0], "mpeg4 put 16x16"),
            (&mpeg4[1], "mpeg4 put 8x8"),
            (&h264[0], "h264 put 16x16"),
            (&h264[1], "h264 put 8x8"),
            (&h264[2], "h264 put 4x4"),
        ];
        for (phases, name) in tables {
            bench_phases(&mut group, phases, name, tier, &src, &mut dst);
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
