//! 转换与向量原语基准测试
//!
//! 标量转换: 硬件/查表/软件 三种路径, 全部 65536 个 fp16 位模式
//! 行转换: fp16 <-> fp32, 向量大小 1K, 4K, 16K, 64K
//! 点积: 通过绑定后端的 f32/f16 façade vs 标量循环
//! 报告: 元素吞吐量 (Elements throughput)

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::Rng;
use std::time::Duration;

use gllm_simd::fp16::{soft, Fp16Table};
use gllm_simd::{f16, fp16_to_fp32, fp16_to_fp32_row, fp32_to_fp16_row, lookup_fp16_to_fp32};

const ELEM_SIZES: &[usize] = &[1024, 4096, 16384, 65536];

fn size_label(n: usize) -> String {
    match n {
        1024 => "1K".into(),
        4096 => "4K".into(),
        16384 => "16K".into(),
        65536 => "64K".into(),
        _ => format!("{n}"),
    }
}

fn random_f32(n: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

fn bench_scalar_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp16_to_fp32_scalar");
    group.throughput(Throughput::Elements(1 << 16));
    let table = Fp16Table::new();
    gllm_simd::init_fp16_table();

    group.bench_function("bound", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for bits in 0..=u16::MAX {
                acc += fp16_to_fp32(black_box(f16::from_bits(bits)));
            }
            acc
        })
    });
    group.bench_function("table_shared", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for bits in 0..=u16::MAX {
                acc += lookup_fp16_to_fp32(black_box(f16::from_bits(bits)));
            }
            acc
        })
    });
    group.bench_function("table_owned", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for bits in 0..=u16::MAX {
                acc += table.lookup(black_box(f16::from_bits(bits)));
            }
            acc
        })
    });
    group.bench_function("soft", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for bits in 0..=u16::MAX {
                acc += soft::fp16_to_fp32(black_box(f16::from_bits(bits)));
            }
            acc
        })
    });
    group.finish();
}

fn bench_row_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_conversion");
    group.measurement_time(Duration::from_secs(3));

    for &n in ELEM_SIZES {
        let src = random_f32(n);
        let mut halves = vec![f16::ZERO; n];
        let mut wide = vec![0.0f32; n];
        fp32_to_fp16_row(&src, &mut halves);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("fp32_to_fp16", size_label(n)), &n, |b, _| {
            b.iter(|| fp32_to_fp16_row(black_box(&src), black_box(&mut halves)))
        });
        group.bench_with_input(BenchmarkId::new("fp16_to_fp32", size_label(n)), &n, |b, _| {
            b.iter(|| fp16_to_fp32_row(black_box(&halves), black_box(&mut wide)))
        });
    }
    group.finish();
}

fn dot_scalar(x: &[f32], y: &[f32]) -> f32 {
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

#[cfg(has_simd)]
fn dot_simd_f32(x: &[f32], y: &[f32]) -> f32 {
    use gllm_simd::mappings::*;

    let full = x.len() - x.len() % F32_STEP;
    let mut sum = [f32_vec_zero(); F32_ARR];
    for i in (0..full).step_by(F32_STEP) {
        for (j, acc) in sum.iter_mut().enumerate() {
            let off = i + j * F32_EPR;
            unsafe {
                let ax = f32_vec_load(x.as_ptr().add(off));
                let ay = f32_vec_load(y.as_ptr().add(off));
                *acc = f32_vec_fma(*acc, ax, ay);
            }
        }
    }
    f32_vec_reduce(&mut sum) + dot_scalar(&x[full..], &y[full..])
}

#[cfg(has_simd)]
fn dot_simd_f16(x: &[f16], y: &[f16]) -> f32 {
    use gllm_simd::mappings::*;

    let full = x.len() - x.len() % F16_STEP;
    let mut sum = [f16_vec_zero(); F16_ARR];
    for i in (0..full).step_by(F16_STEP) {
        for (j, acc) in sum.iter_mut().enumerate() {
            let off = i + j * F16_EPR;
            unsafe {
                let ax = f16_vec_load(x.as_ptr().add(off));
                let ay = f16_vec_load(y.as_ptr().add(off));
                *acc = f16_vec_fma(*acc, ax, ay);
            }
        }
    }
    let tail: f32 = x[full..]
        .iter()
        .zip(&y[full..])
        .map(|(a, b)| a.to_f32() * b.to_f32())
        .sum();
    f16_vec_reduce(&mut sum) + tail
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");

    for &n in ELEM_SIZES {
        let x = random_f32(n);
        let y = random_f32(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("scalar_f32", size_label(n)), &n, |b, _| {
            b.iter(|| dot_scalar(black_box(&x), black_box(&y)))
        });

        #[cfg(has_simd)]
        {
            let xh: Vec<f16> = x.iter().map(|&v| f16::from_f32(v)).collect();
            let yh: Vec<f16> = y.iter().map(|&v| f16::from_f32(v)).collect();
            group.bench_with_input(BenchmarkId::new("simd_f32", size_label(n)), &n, |b, _| {
                b.iter(|| dot_simd_f32(black_box(&x), black_box(&y)))
            });
            group.bench_with_input(BenchmarkId::new("simd_f16", size_label(n)), &n, |b, _| {
                b.iter(|| dot_simd_f16(black_box(&xh), black_box(&yh)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_scalar_conversion, bench_row_conversion, bench_dot);
criterion_main!(benches);
