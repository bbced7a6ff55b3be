//! Façade behaviour for whichever backend this build bound.

#![cfg(has_simd)]

use gllm_simd::mappings::*;
use gllm_simd::{capabilities, f16, simd_primitive, Backend, BACKEND, NATIVE_F16_ARITH};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sums `x[i] * y[i]` one step at a time through the façade; the tail is
/// done in scalar.
fn dot_f32(x: &[f32], y: &[f32]) -> f32 {
    let full = x.len() - x.len() % F32_STEP;
    let mut sum = [f32_vec_zero(); F32_ARR];
    for i in (0..full).step_by(F32_STEP) {
        for (j, acc) in sum.iter_mut().enumerate() {
            let off = i + j * F32_EPR;
            let (ax, ay) = unsafe {
                (
                    f32_vec_load(x.as_ptr().add(off)),
                    f32_vec_load(y.as_ptr().add(off)),
                )
            };
            *acc = f32_vec_fma(*acc, ax, ay);
        }
    }
    let mut total = f32_vec_reduce(&mut sum);
    for i in full..x.len() {
        total += x[i] * y[i];
    }
    total
}

fn dot_f16(x: &[f16], y: &[f16]) -> f32 {
    let full = x.len() - x.len() % F16_STEP;
    let mut sum = [simd_primitive!(f16, zero); simd_primitive!(f16, arr)];
    for i in (0..full).step_by(F16_STEP) {
        for (j, acc) in sum.iter_mut().enumerate() {
            let off = i + j * F16_EPR;
            let (ax, ay) = unsafe {
                (
                    simd_primitive!(f16, load, x.as_ptr().add(off)),
                    simd_primitive!(f16, load, y.as_ptr().add(off)),
                )
            };
            *acc = simd_primitive!(f16, fma, *acc, ax, ay);
        }
    }
    let mut total = simd_primitive!(f16, reduce, &mut sum);
    for i in full..x.len() {
        total += x[i].to_f32() * y[i].to_f32();
    }
    total
}

#[test]
fn test_bound_backend_reported() {
    init_logger();
    gllm_simd::init();
    let caps = capabilities();
    assert_ne!(BACKEND, Backend::None);
    assert_eq!(caps.f32_step, F32_STEP);
    assert_eq!(caps.f32_epr, F32_EPR);
    assert_eq!(caps.f16_step, F16_STEP);
    assert_eq!(caps.f16_epr, F16_EPR);
    assert_eq!(caps.native_f16_arith, NATIVE_F16_ARITH);
}

#[test]
fn test_zero_and_splat() {
    let mut out = vec![-1.0f32; F32_EPR];
    unsafe { f32_vec_store(out.as_mut_ptr(), f32_vec_zero()) };
    assert_eq!(out, vec![0.0; F32_EPR]);
    unsafe { f32_vec_store(out.as_mut_ptr(), f32_vec_set1(3.5)) };
    assert_eq!(out, vec![3.5; F32_EPR]);

    let mut halves = vec![f16::NEG_ONE; F16_EPR];
    unsafe { f16_vec_store(halves.as_mut_ptr(), f16_vec_zero()) };
    assert!(halves.iter().all(|h| h.to_f32() == 0.0));
    unsafe { f16_vec_store(halves.as_mut_ptr(), f16_vec_set1(3.5)) };
    assert!(halves.iter().all(|h| h.to_f32() == 3.5));
}

#[test]
fn test_f16_load_widens_known_patterns() {
    // 1.0 and -2.0 alternating.
    let src: Vec<f16> = (0..F16_EPR)
        .map(|i| f16::from_bits(if i % 2 == 0 { 0x3C00 } else { 0xC000 }))
        .collect();
    let v = unsafe { f16_vec_load(src.as_ptr()) };
    let mut regs = [f16_vec_zero(); F16_ARR];
    regs[0] = v;
    let expected = (F16_EPR / 2) as f32 * -1.0;
    assert_eq!(f16_vec_reduce(&mut regs), expected);

    let mut back = vec![f16::ZERO; F16_EPR];
    unsafe { f16_vec_store(back.as_mut_ptr(), v) };
    assert_eq!(back, src);
}

#[test]
fn test_add_mul_fma_f16() {
    let a = f16_vec_set1(1.5);
    let b = f16_vec_set1(-0.25);
    let mut out = vec![f16::ZERO; F16_EPR];
    unsafe { f16_vec_store(out.as_mut_ptr(), f16_vec_add(a, b)) };
    assert!(out.iter().all(|h| h.to_f32() == 1.25));
    unsafe { f16_vec_store(out.as_mut_ptr(), f16_vec_mul(a, b)) };
    assert!(out.iter().all(|h| h.to_f32() == -0.375));
    unsafe { f16_vec_store(out.as_mut_ptr(), f16_vec_fma(f16_vec_set1(2.0), a, b)) };
    assert!(out.iter().all(|h| h.to_f32() == 1.625));
}

#[test]
fn test_dot_products_match_scalar() {
    for len in [0, 1, F32_STEP - 1, F32_STEP, 3 * F32_STEP + 5, 1000] {
        let x: Vec<f32> = (0..len).map(|i| ((i % 17) as f32 - 8.0) * 0.125).collect();
        let y: Vec<f32> = (0..len).map(|i| ((i % 5) as f32 - 2.0) * 0.5).collect();
        let expected: f32 = x.iter().zip(&y).map(|(a, b)| a * b).sum();
        // Every product and partial sum is a multiple of 1/16 below 2^20: exact.
        assert_eq!(dot_f32(&x, &y), expected, "f32 len {len}");

        let xh: Vec<f16> = x.iter().map(|&v| f16::from_f32(v)).collect();
        let yh: Vec<f16> = y.iter().map(|&v| f16::from_f32(v)).collect();
        let got = dot_f16(&xh, &yh);
        let tol = if NATIVE_F16_ARITH { 1e-2 * expected.abs().max(1.0) } else { 0.0 };
        assert!((got - expected).abs() <= tol, "f16 len {len}: {got} vs {expected}");
    }
}
