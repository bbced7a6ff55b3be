//! ARM Advanced SIMD kinds.
//!
//! [`Neon`] is the 4 x f32 kind. [`NeonFp16`] keeps eight half lanes in a
//! `uint16x8_t` and does its arithmetic with the ARMv8.2 FP16 vector
//! instructions, which have no stable intrinsics yet and go through `asm!`.

#![allow(unused_unsafe)]

use core::arch::aarch64::*;
use core::arch::asm;

use half::f16;

use crate::traits::{HalfIo, SimdKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct Neon;

impl SimdKind for Neon {
    type Elem = f32;
    type Reg = float32x4_t;

    const NAME: &'static str = "neon";
    const STEP: usize = 16;
    const EPR: usize = 4;
    const FUSED: bool = true;

    #[inline(always)]
    fn zero() -> float32x4_t {
        unsafe { vdupq_n_f32(0.0) }
    }

    #[inline(always)]
    fn splat(x: f32) -> float32x4_t {
        unsafe { vdupq_n_f32(x) }
    }

    #[inline(always)]
    unsafe fn load(p: *const f32) -> float32x4_t {
        vld1q_f32(p)
    }

    #[inline(always)]
    unsafe fn store(p: *mut f32, v: float32x4_t) {
        vst1q_f32(p, v)
    }

    #[inline(always)]
    fn fma(acc: float32x4_t, a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vfmaq_f32(acc, a, b) }
    }

    #[inline(always)]
    fn add(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vaddq_f32(a, b) }
    }

    #[inline(always)]
    fn mul(a: float32x4_t, b: float32x4_t) -> float32x4_t {
        unsafe { vmulq_f32(a, b) }
    }

    #[inline(always)]
    fn reduce_one(v: float32x4_t) -> f32 {
        unsafe { vaddvq_f32(v) }
    }
}

impl HalfIo for Neon {
    #[inline(always)]
    unsafe fn load_f16(p: *const f16) -> float32x4_t {
        widen_low(vcombine_u16(vld1_u16(p as *const u16), vdup_n_u16(0)))
    }

    #[inline(always)]
    unsafe fn store_f16(p: *mut f16, v: float32x4_t) {
        vst1_u16(p as *mut u16, vget_low_u16(narrow(v)))
    }
}

/// Widens the low four half lanes of `h` to f32.
#[inline(always)]
fn widen_low(h: uint16x8_t) -> float32x4_t {
    let out: float32x4_t;
    // SAFETY: fcvtl is baseline ARMv8 and touches registers only.
    unsafe {
        asm!(
            "fcvtl {0:v}.4s, {1:v}.4h",
            lateout(vreg) out,
            in(vreg) h,
            options(pure, nomem, nostack, preserves_flags)
        );
    }
    out
}

/// Widens the high four half lanes of `h` to f32.
#[cfg(target_feature = "fp16")]
#[inline(always)]
fn widen_high(h: uint16x8_t) -> float32x4_t {
    let out: float32x4_t;
    // SAFETY: see `widen_low`.
    unsafe {
        asm!(
            "fcvtl2 {0:v}.4s, {1:v}.8h",
            lateout(vreg) out,
            in(vreg) h,
            options(pure, nomem, nostack, preserves_flags)
        );
    }
    out
}

/// Narrows four f32 lanes into the low half of the result; the high half is
/// zero.
#[inline(always)]
fn narrow(v: float32x4_t) -> uint16x8_t {
    let out: uint16x8_t;
    // SAFETY: fcvtn is baseline ARMv8 and writes the low 64 bits, zeroing the rest.
    unsafe {
        asm!(
            "fcvtn {0:v}.4h, {1:v}.4s",
            lateout(vreg) out,
            in(vreg) v,
            options(pure, nomem, nostack, preserves_flags)
        );
    }
    out
}

/// 8 x f16 with native half arithmetic, 4 accumulators per step.
///
/// Sums are accumulated in half precision and only widened in
/// `reduce_one`, so long reductions lose precision compared to the f32
/// kinds.
#[cfg(target_feature = "fp16")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NeonFp16;

#[cfg(target_feature = "fp16")]
macro_rules! fp16_binop {
    ($insn:literal, $a:expr, $b:expr) => {{
        let out: uint16x8_t;
        // SAFETY: the build enables the fp16 extension.
        unsafe {
            asm!(
                concat!($insn, " {0:v}.8h, {1:v}.8h, {2:v}.8h"),
                lateout(vreg) out,
                in(vreg) $a,
                in(vreg) $b,
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        out
    }};
}

#[cfg(target_feature = "fp16")]
impl SimdKind for NeonFp16 {
    type Elem = f16;
    type Reg = uint16x8_t;

    const NAME: &'static str = "neon-fp16";
    const STEP: usize = 32;
    const EPR: usize = 8;
    const FUSED: bool = true;

    #[inline(always)]
    fn zero() -> uint16x8_t {
        unsafe { vdupq_n_u16(0) }
    }

    #[inline(always)]
    fn splat(x: f32) -> uint16x8_t {
        unsafe { vdupq_n_u16(crate::fp16::fp32_to_fp16(x).to_bits()) }
    }

    #[inline(always)]
    unsafe fn load(p: *const f16) -> uint16x8_t {
        vld1q_u16(p as *const u16)
    }

    #[inline(always)]
    unsafe fn store(p: *mut f16, v: uint16x8_t) {
        vst1q_u16(p as *mut u16, v)
    }

    #[inline(always)]
    fn fma(acc: uint16x8_t, a: uint16x8_t, b: uint16x8_t) -> uint16x8_t {
        let mut acc = acc;
        // SAFETY: the build enables the fp16 extension.
        unsafe {
            asm!(
                "fmla {0:v}.8h, {1:v}.8h, {2:v}.8h",
                inout(vreg) acc,
                in(vreg) a,
                in(vreg) b,
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        acc
    }

    #[inline(always)]
    fn add(a: uint16x8_t, b: uint16x8_t) -> uint16x8_t {
        fp16_binop!("fadd", a, b)
    }

    #[inline(always)]
    fn mul(a: uint16x8_t, b: uint16x8_t) -> uint16x8_t {
        fp16_binop!("fmul", a, b)
    }

    #[inline(always)]
    fn reduce_one(v: uint16x8_t) -> f32 {
        unsafe { vaddvq_f32(vaddq_f32(widen_low(v), widen_high(v))) }
    }
}
