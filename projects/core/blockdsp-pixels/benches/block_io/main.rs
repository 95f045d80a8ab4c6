use blockdsp_common::{allocate, CpuCapabilities, DspTier};
use blockdsp_pixels::block_io::{BlockIoFns, BLOCK_LEN, MACROBLOCK_BLOCKS};
use blockdsp_pixels::bytes::ByteRowFns;
use core::time::Duration;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const STRIDE: usize = 1920;
const BLOCKS_PER_ROW: usize = STRIDE / 8;

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    allocate::allocate_align_64(num_bytes).unwrap()
}

fn bench_block_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("Block I/O");
    let mut frame = allocate_align_64(STRIDE * 8);
    frame.as_mut_slice().fill(100);
    let mut coeffs = allocate_align_64(BLOCK_LEN * MACROBLOCK_BLOCKS * 2);
    coeffs.as_mut_slice().fill(3);
    let coeffs = coeffs.as_mut_ptr() as *mut i16;

    group.throughput(criterion::Throughput::Bytes((STRIDE * 8) as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    let caps = CpuCapabilities::detect();
    for &tier in DspTier::all_values() {
        if !tier.is_supported_by(caps) {
            continue;
        }

        let fns = BlockIoFns::for_tier(tier);
        group.bench_with_input(BenchmarkId::new("put_pixels_clamped", tier.name()), &fns, |b, fns| {
            b.iter(|| {
                for block in 0..BLOCKS_PER_ROW {
                    unsafe {
                        let dst = frame.as_mut_ptr().add(block * 8);
                        (fns.put_pixels_clamped)(coeffs, black_box(dst), STRIDE)
                    }
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("add_pixels_clamped", tier.name()), &fns, |b, fns| {
            b.iter(|| {
                for block in 0..BLOCKS_PER_ROW {
                    unsafe {
                        let dst = frame.as_mut_ptr().add(block * 8);
                        (fns.add_pixels_clamped)(coeffs, black_box(dst), STRIDE)
                    }
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("get_pixels", tier.name()), &fns, |b, fns| {
            b.iter(|| {
                for block in 0..BLOCKS_PER_ROW {
                    unsafe {
                        let src = frame.as_ptr().add(block * 8);
                        (fns.get_pixels)(black_box(coeffs), src, STRIDE)
                    }
                }
            })
        });
    }

    group.finish();
}

fn bench_byte_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("Byte Rows");
    let mut above = allocate_align_64(STRIDE);
    let mut row = allocate_align_64(STRIDE);
    let mut out = allocate_align_64(STRIDE);
    let pairs = above.as_mut_slice().iter_mut().zip(row.as_mut_slice());
    for (i, (a, r)) in pairs.enumerate() {
        *a = (i * 7) as u8;
        *r = (i * 7 + 3) as u8;
    }

    group.throughput(criterion::Throughput::Bytes(STRIDE as u64));

    let caps = CpuCapabilities::detect();
    for &tier in DspTier::all_values() {
        if !tier.is_supported_by(caps) {
            continue;
        }

        let fns = ByteRowFns::for_tier(tier);
        group.bench_with_input(BenchmarkId::new("diff_bytes", tier.name()), &fns, |b, fns| {
            b.iter(|| unsafe {
                let dst = black_box(out.as_mut_ptr());
                (fns.diff_bytes)(dst, row.as_ptr(), above.as_ptr(), STRIDE)
            })
        });
        group.bench_with_input(BenchmarkId::new("median_prediction", tier.name()), &fns, |b, fns| {
            b.iter(|| unsafe {
                let (mut left, mut left_top) = (0u8, 0u8);
                (fns.sub_hfyu_median_prediction)(
                    black_box(out.as_mut_ptr()),
                    above.as_ptr(),
                    row.as_ptr(),
                    STRIDE,
                    &mut left,
                    &mut left_top,
                )
            })
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
    targets = bench_block_io, bench_byte_rows
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_block_io, bench_byte_rows
}

criterion_main!(benches);
