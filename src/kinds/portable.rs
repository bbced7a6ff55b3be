//! Kinds built on `wide` portable vectors.
//!
//! These cover the families whose intrinsics are not available on stable
//! Rust: SVE, POWER9 VSX, LoongArch LASX/LSX and s390x vector. `wide`
//! lowers to the native instructions where it can and to scalar lanes
//! otherwise, so every kind here compiles on every target and can be tested
//! anywhere. The horizontal sum extracts lanes and adds them left to right.

use wide::{f32x4, f32x8};

use crate::traits::{HalfIo, SimdKind};

macro_rules! portable_kind {
    (
        $(#[$meta:meta])*
        $name:ident: $vec:ty, lanes = $lanes:literal, step = $step:literal, name = $label:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl SimdKind for $name {
            type Elem = f32;
            type Reg = $vec;

            const NAME: &'static str = $label;
            const STEP: usize = $step;
            const EPR: usize = $lanes;
            const FUSED: bool = false;

            #[inline(always)]
            fn zero() -> $vec {
                <$vec>::ZERO
            }

            #[inline(always)]
            fn splat(x: f32) -> $vec {
                <$vec>::splat(x)
            }

            #[inline(always)]
            unsafe fn load(p: *const f32) -> $vec {
                <$vec>::from(p.cast::<[f32; $lanes]>().read_unaligned())
            }

            #[inline(always)]
            unsafe fn store(p: *mut f32, v: $vec) {
                let lanes: [f32; $lanes] = v.into();
                p.cast::<[f32; $lanes]>().write_unaligned(lanes)
            }

            #[inline(always)]
            fn fma(acc: $vec, a: $vec, b: $vec) -> $vec {
                a.mul_add(b, acc)
            }

            #[inline(always)]
            fn add(a: $vec, b: $vec) -> $vec {
                a + b
            }

            #[inline(always)]
            fn mul(a: $vec, b: $vec) -> $vec {
                a * b
            }

            #[inline(always)]
            fn reduce_one(v: $vec) -> f32 {
                let lanes: [f32; $lanes] = v.into();
                lanes.iter().fold(0.0, |sum, &x| sum + x)
            }
        }

        impl HalfIo for $name {}
    };
}

portable_kind! {
    /// Scalable vectors at a fixed 256-bit length, 8 accumulators per step.
    Sve: f32x8, lanes = 8, step = 64, name = "sve"
}

portable_kind! {
    /// POWER9 VSX, 4 x f32, 8 accumulators per step.
    Power9: f32x4, lanes = 4, step = 32, name = "power9"
}

portable_kind! {
    /// LoongArch LASX, 8 x f32, 4 accumulators per step.
    Lasx: f32x8, lanes = 8, step = 32, name = "lasx"
}

portable_kind! {
    /// LoongArch LSX, 4 x f32, 8 accumulators per step.
    Lsx: f32x4, lanes = 4, step = 32, name = "lsx"
}

portable_kind! {
    /// s390x vector extension, 4 x f32, 8 accumulators per step.
    Vxe: f32x4, lanes = 4, step = 32, name = "vxe"
}
