//! The build's vector façade.
//!
//! Binds one f32 kind and one f16 kind according to `cfg(simd_backend)` and
//! re-exports their operations as plain functions. Code written against
//! this module, or against `simd_primitive!`, compiles to exactly one
//! instruction family.
//!
//! This module only exists when a backend is bound; check
//! [`crate::HAS_SIMD`] or `cfg(has_simd)` and fall back to scalar loops
//! otherwise.

use half::f16;

#[allow(unused_imports)]
use crate::kinds::*;
use crate::traits::SimdKind;

cfg_if::cfg_if! {
    if #[cfg(simd_backend = "sve")] {
        pub type F32Kind = Sve;
    } else if #[cfg(simd_backend = "neon")] {
        pub type F32Kind = Neon;
    } else if #[cfg(simd_backend = "avx512")] {
        pub type F32Kind = Avx512;
    } else if #[cfg(simd_backend = "avx")] {
        pub type F32Kind = Avx;
    } else if #[cfg(simd_backend = "sse")] {
        pub type F32Kind = Sse;
    } else if #[cfg(simd_backend = "power9")] {
        pub type F32Kind = Power9;
    } else if #[cfg(simd_backend = "wasm")] {
        pub type F32Kind = Wasm;
    } else if #[cfg(simd_backend = "lasx")] {
        pub type F32Kind = Lasx;
    } else if #[cfg(simd_backend = "lsx")] {
        pub type F32Kind = Lsx;
    } else if #[cfg(simd_backend = "vxe")] {
        pub type F32Kind = Vxe;
    }
}

// ARM builds keep half lanes in NEON registers even when SVE is bound.
cfg_if::cfg_if! {
    if #[cfg(native_f16_arith)] {
        pub type F16Kind = NeonFp16;
    } else if #[cfg(any(simd_backend = "sve", simd_backend = "neon"))] {
        pub type F16Kind = Widened<Neon>;
    } else {
        pub type F16Kind = Widened<F32Kind>;
    }
}

pub type F32Vec = <F32Kind as SimdKind>::Reg;
pub type F16Vec = <F16Kind as SimdKind>::Reg;

pub const F32_STEP: usize = <F32Kind as SimdKind>::STEP;
pub const F32_EPR: usize = <F32Kind as SimdKind>::EPR;
pub const F32_ARR: usize = <F32Kind as SimdKind>::ARR;

pub const F16_STEP: usize = <F16Kind as SimdKind>::STEP;
pub const F16_EPR: usize = <F16Kind as SimdKind>::EPR;
pub const F16_ARR: usize = <F16Kind as SimdKind>::ARR;

#[inline(always)]
pub fn f32_vec_zero() -> F32Vec {
    F32Kind::zero()
}

#[inline(always)]
pub fn f32_vec_set1(x: f32) -> F32Vec {
    F32Kind::splat(x)
}

/// # Safety
/// `p` must be valid for reads of `F32_EPR` floats.
#[inline(always)]
pub unsafe fn f32_vec_load(p: *const f32) -> F32Vec {
    F32Kind::load(p)
}

/// # Safety
/// `p` must be valid for writes of `F32_EPR` floats.
#[inline(always)]
pub unsafe fn f32_vec_store(p: *mut f32, v: F32Vec) {
    F32Kind::store(p, v)
}

/// `acc + a * b`.
#[inline(always)]
pub fn f32_vec_fma(acc: F32Vec, a: F32Vec, b: F32Vec) -> F32Vec {
    F32Kind::fma(acc, a, b)
}

#[inline(always)]
pub fn f32_vec_add(a: F32Vec, b: F32Vec) -> F32Vec {
    F32Kind::add(a, b)
}

#[inline(always)]
pub fn f32_vec_mul(a: F32Vec, b: F32Vec) -> F32Vec {
    F32Kind::mul(a, b)
}

/// Collapses one step's accumulators into a scalar. Clobbers `regs`.
#[inline(always)]
pub fn f32_vec_reduce(regs: &mut [F32Vec; F32_ARR]) -> f32 {
    F32Kind::reduce(regs)
}

#[inline(always)]
pub fn f16_vec_zero() -> F16Vec {
    F16Kind::zero()
}

/// Broadcasts `x`, rounded to the kind's lane precision.
#[inline(always)]
pub fn f16_vec_set1(x: f32) -> F16Vec {
    F16Kind::splat(x)
}

/// # Safety
/// `p` must be valid for reads of `F16_EPR` halves.
#[inline(always)]
pub unsafe fn f16_vec_load(p: *const f16) -> F16Vec {
    F16Kind::load(p)
}

/// # Safety
/// `p` must be valid for writes of `F16_EPR` halves.
#[inline(always)]
pub unsafe fn f16_vec_store(p: *mut f16, v: F16Vec) {
    F16Kind::store(p, v)
}

#[inline(always)]
pub fn f16_vec_fma(acc: F16Vec, a: F16Vec, b: F16Vec) -> F16Vec {
    F16Kind::fma(acc, a, b)
}

#[inline(always)]
pub fn f16_vec_add(a: F16Vec, b: F16Vec) -> F16Vec {
    F16Kind::add(a, b)
}

#[inline(always)]
pub fn f16_vec_mul(a: F16Vec, b: F16Vec) -> F16Vec {
    F16Kind::mul(a, b)
}

#[inline(always)]
pub fn f16_vec_reduce(regs: &mut [F16Vec; F16_ARR]) -> f32 {
    F16Kind::reduce(regs)
}
