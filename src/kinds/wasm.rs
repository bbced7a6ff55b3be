//! WebAssembly SIMD128 kind.

use core::arch::wasm32::*;

use crate::traits::{HalfIo, SimdKind};

/// 4 x f32 in a `v128`. There is no fused multiply-add in SIMD128.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wasm;

impl SimdKind for Wasm {
    type Elem = f32;
    type Reg = v128;

    const NAME: &'static str = "wasm";
    const STEP: usize = 16;
    const EPR: usize = 4;
    const FUSED: bool = false;

    #[inline(always)]
    fn zero() -> v128 {
        f32x4_splat(0.0)
    }

    #[inline(always)]
    fn splat(x: f32) -> v128 {
        f32x4_splat(x)
    }

    #[inline(always)]
    unsafe fn load(p: *const f32) -> v128 {
        v128_load(p as *const v128)
    }

    #[inline(always)]
    unsafe fn store(p: *mut f32, v: v128) {
        v128_store(p as *mut v128, v)
    }

    #[inline(always)]
    fn fma(acc: v128, a: v128, b: v128) -> v128 {
        f32x4_add(f32x4_mul(a, b), acc)
    }

    #[inline(always)]
    fn add(a: v128, b: v128) -> v128 {
        f32x4_add(a, b)
    }

    #[inline(always)]
    fn mul(a: v128, b: v128) -> v128 {
        f32x4_mul(a, b)
    }

    #[inline(always)]
    fn reduce_one(v: v128) -> f32 {
        f32x4_extract_lane::<0>(v)
            + f32x4_extract_lane::<1>(v)
            + f32x4_extract_lane::<2>(v)
            + f32x4_extract_lane::<3>(v)
    }
}

impl HalfIo for Wasm {}
