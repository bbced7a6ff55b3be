//! x86 kinds: SSE (128-bit), AVX (256-bit) and AVX-512 (512-bit), all f32.
//!
//! Fused multiply-add is used when `fma` is enabled for the build; without
//! it `fma` is a separate multiply and add. Half-precision loads and stores
//! use the F16C widening instructions when available.

// Intrinsics are safe functions on recent toolchains once the feature is
// enabled for the whole build; the blocks stay for older ones.
#![allow(unused_unsafe)]

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

#[cfg(any(target_feature = "f16c", target_feature = "avx512f"))]
use half::f16;

use crate::traits::{HalfIo, SimdKind};

/// 4 x f32 in an XMM register, 8 accumulators per step.
#[cfg(target_feature = "sse2")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Sse;

#[cfg(target_feature = "sse2")]
impl SimdKind for Sse {
    type Elem = f32;
    type Reg = __m128;

    const NAME: &'static str = "sse";
    const STEP: usize = 32;
    const EPR: usize = 4;
    const FUSED: bool = cfg!(target_feature = "fma");

    #[inline(always)]
    fn zero() -> __m128 {
        unsafe { _mm_setzero_ps() }
    }

    #[inline(always)]
    fn splat(x: f32) -> __m128 {
        unsafe { _mm_set1_ps(x) }
    }

    #[inline(always)]
    unsafe fn load(p: *const f32) -> __m128 {
        _mm_loadu_ps(p)
    }

    #[inline(always)]
    unsafe fn store(p: *mut f32, v: __m128) {
        _mm_storeu_ps(p, v)
    }

    #[inline(always)]
    fn fma(acc: __m128, a: __m128, b: __m128) -> __m128 {
        #[cfg(target_feature = "fma")]
        {
            unsafe { _mm_fmadd_ps(a, b, acc) }
        }
        #[cfg(not(target_feature = "fma"))]
        {
            unsafe { _mm_add_ps(_mm_mul_ps(a, b), acc) }
        }
    }

    #[inline(always)]
    fn add(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_add_ps(a, b) }
    }

    #[inline(always)]
    fn mul(a: __m128, b: __m128) -> __m128 {
        unsafe { _mm_mul_ps(a, b) }
    }

    #[inline(always)]
    fn reduce_one(v: __m128) -> f32 {
        #[cfg(target_feature = "sse3")]
        {
            unsafe {
                let t = _mm_hadd_ps(v, v);
                _mm_cvtss_f32(_mm_hadd_ps(t, t))
            }
        }
        #[cfg(not(target_feature = "sse3"))]
        {
            unsafe {
                let pairs = _mm_add_ps(v, _mm_movehl_ps(v, v));
                let lane1 = _mm_shuffle_ps::<0b01_01_01_01>(pairs, pairs);
                _mm_cvtss_f32(_mm_add_ss(pairs, lane1))
            }
        }
    }
}

#[cfg(target_feature = "sse2")]
impl HalfIo for Sse {
    #[cfg(target_feature = "f16c")]
    #[inline(always)]
    unsafe fn load_f16(p: *const f16) -> __m128 {
        _mm_cvtph_ps(_mm_loadl_epi64(p as *const __m128i))
    }

    #[cfg(target_feature = "f16c")]
    #[inline(always)]
    unsafe fn store_f16(p: *mut f16, v: __m128) {
        _mm_storel_epi64(
            p as *mut __m128i,
            _mm_cvtps_ph::<_MM_FROUND_TO_NEAREST_INT>(v),
        )
    }
}

/// 8 x f32 in a YMM register, 4 accumulators per step.
#[cfg(target_feature = "avx")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Avx;

#[cfg(target_feature = "avx")]
impl SimdKind for Avx {
    type Elem = f32;
    type Reg = __m256;

    const NAME: &'static str = "avx";
    const STEP: usize = 32;
    const EPR: usize = 8;
    const FUSED: bool = cfg!(target_feature = "fma");

    #[inline(always)]
    fn zero() -> __m256 {
        unsafe { _mm256_setzero_ps() }
    }

    #[inline(always)]
    fn splat(x: f32) -> __m256 {
        unsafe { _mm256_set1_ps(x) }
    }

    #[inline(always)]
    unsafe fn load(p: *const f32) -> __m256 {
        _mm256_loadu_ps(p)
    }

    #[inline(always)]
    unsafe fn store(p: *mut f32, v: __m256) {
        _mm256_storeu_ps(p, v)
    }

    #[inline(always)]
    fn fma(acc: __m256, a: __m256, b: __m256) -> __m256 {
        #[cfg(target_feature = "fma")]
        {
            unsafe { _mm256_fmadd_ps(a, b, acc) }
        }
        #[cfg(not(target_feature = "fma"))]
        {
            unsafe { _mm256_add_ps(_mm256_mul_ps(a, b), acc) }
        }
    }

    #[inline(always)]
    fn add(a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_add_ps(a, b) }
    }

    #[inline(always)]
    fn mul(a: __m256, b: __m256) -> __m256 {
        unsafe { _mm256_mul_ps(a, b) }
    }

    #[inline(always)]
    fn reduce_one(v: __m256) -> f32 {
        unsafe {
            let halves = _mm_add_ps(_mm256_castps256_ps128(v), _mm256_extractf128_ps::<1>(v));
            let t = _mm_hadd_ps(halves, halves);
            _mm_cvtss_f32(_mm_hadd_ps(t, t))
        }
    }
}

#[cfg(target_feature = "avx")]
impl HalfIo for Avx {
    #[cfg(target_feature = "f16c")]
    #[inline(always)]
    unsafe fn load_f16(p: *const f16) -> __m256 {
        _mm256_cvtph_ps(_mm_loadu_si128(p as *const __m128i))
    }

    #[cfg(target_feature = "f16c")]
    #[inline(always)]
    unsafe fn store_f16(p: *mut f16, v: __m256) {
        _mm_storeu_si128(
            p as *mut __m128i,
            _mm256_cvtps_ph::<_MM_FROUND_TO_NEAREST_INT>(v),
        )
    }
}

/// 16 x f32 in a ZMM register, 4 accumulators per step.
#[cfg(target_feature = "avx512f")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Avx512;

#[cfg(target_feature = "avx512f")]
impl SimdKind for Avx512 {
    type Elem = f32;
    type Reg = __m512;

    const NAME: &'static str = "avx512";
    const STEP: usize = 64;
    const EPR: usize = 16;
    const FUSED: bool = true;

    #[inline(always)]
    fn zero() -> __m512 {
        unsafe { _mm512_setzero_ps() }
    }

    #[inline(always)]
    fn splat(x: f32) -> __m512 {
        unsafe { _mm512_set1_ps(x) }
    }

    #[inline(always)]
    unsafe fn load(p: *const f32) -> __m512 {
        _mm512_loadu_ps(p)
    }

    #[inline(always)]
    unsafe fn store(p: *mut f32, v: __m512) {
        _mm512_storeu_ps(p, v)
    }

    #[inline(always)]
    fn fma(acc: __m512, a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_fmadd_ps(a, b, acc) }
    }

    #[inline(always)]
    fn add(a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_add_ps(a, b) }
    }

    #[inline(always)]
    fn mul(a: __m512, b: __m512) -> __m512 {
        unsafe { _mm512_mul_ps(a, b) }
    }

    #[inline(always)]
    fn reduce_one(v: __m512) -> f32 {
        unsafe { _mm512_reduce_add_ps(v) }
    }
}

#[cfg(target_feature = "avx512f")]
impl HalfIo for Avx512 {
    #[inline(always)]
    unsafe fn load_f16(p: *const f16) -> __m512 {
        _mm512_cvtph_ps(_mm256_loadu_si256(p as *const __m256i))
    }

    // Narrowed as two 8-lane halves through F16C.
    #[cfg(target_feature = "f16c")]
    #[inline(always)]
    unsafe fn store_f16(p: *mut f16, v: __m512) {
        let lo = _mm512_castps512_ps256(v);
        let hi = _mm256_castpd_ps(_mm512_extractf64x4_pd::<1>(_mm512_castps_pd(v)));
        let dst = p as *mut __m128i;
        _mm_storeu_si128(dst, _mm256_cvtps_ph::<_MM_FROUND_TO_NEAREST_INT>(lo));
        _mm_storeu_si128(dst.add(1), _mm256_cvtps_ph::<_MM_FROUND_TO_NEAREST_INT>(hi));
    }
}
