//! Whole-row fp16 <-> fp32 conversion.
//!
//! Full register-width chunks go through the bound f32 kind's half-precision
//! load/store; the remainder goes through the scalar conversion.

use half::f16;

use crate::fp16::{fp16_to_fp32, fp32_to_fp16};

/// Widens `src` into `dst`.
///
/// # Panics
/// If the slices differ in length.
pub fn fp16_to_fp32_row(src: &[f16], dst: &mut [f32]) {
    assert_eq!(src.len(), dst.len(), "fp16_to_fp32_row: length mismatch");
    let done = widen_chunks(src, dst);
    for (d, &s) in dst[done..].iter_mut().zip(&src[done..]) {
        *d = fp16_to_fp32(s);
    }
}

/// Narrows `src` into `dst`, round-to-nearest-even.
///
/// # Panics
/// If the slices differ in length.
pub fn fp32_to_fp16_row(src: &[f32], dst: &mut [f16]) {
    assert_eq!(src.len(), dst.len(), "fp32_to_fp16_row: length mismatch");
    let done = narrow_chunks(src, dst);
    for (d, &s) in dst[done..].iter_mut().zip(&src[done..]) {
        *d = fp32_to_fp16(s);
    }
}

/// Returns how many leading elements were converted.
#[cfg(has_simd)]
#[inline(always)]
fn widen_chunks(src: &[f16], dst: &mut [f32]) -> usize {
    use crate::mappings::{F32Kind, F32_EPR};
    use crate::traits::{HalfIo, SimdKind};

    let full = src.len() - src.len() % F32_EPR;
    for i in (0..full).step_by(F32_EPR) {
        // SAFETY: i + F32_EPR <= full <= len of both slices.
        unsafe {
            let v = <F32Kind as HalfIo>::load_f16(src.as_ptr().add(i));
            <F32Kind as SimdKind>::store(dst.as_mut_ptr().add(i), v);
        }
    }
    full
}

#[cfg(has_simd)]
#[inline(always)]
fn narrow_chunks(src: &[f32], dst: &mut [f16]) -> usize {
    use crate::mappings::{F32Kind, F32_EPR};
    use crate::traits::{HalfIo, SimdKind};

    let full = src.len() - src.len() % F32_EPR;
    for i in (0..full).step_by(F32_EPR) {
        // SAFETY: i + F32_EPR <= full <= len of both slices.
        unsafe {
            let v = <F32Kind as SimdKind>::load(src.as_ptr().add(i));
            <F32Kind as HalfIo>::store_f16(dst.as_mut_ptr().add(i), v);
        }
    }
    full
}

#[cfg(not(has_simd))]
#[inline(always)]
fn widen_chunks(_src: &[f16], _dst: &mut [f32]) -> usize {
    0
}

#[cfg(not(has_simd))]
#[inline(always)]
fn narrow_chunks(_src: &[f32], _dst: &mut [f16]) -> usize {
    0
}
