use std::marker::PhantomData;

use half::f16;

use crate::traits::{HalfIo, SimdKind};

/// Half-precision kind for targets without half arithmetic.
///
/// Elements are widened to f32 on load and narrowed on store; registers and
/// arithmetic are those of the f32 kind `K`. Reductions and fma therefore
/// run at full precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Widened<K>(PhantomData<K>);

impl<K: HalfIo> SimdKind for Widened<K> {
    type Elem = f16;
    type Reg = K::Reg;

    const NAME: &'static str = K::NAME;
    const STEP: usize = K::STEP;
    const EPR: usize = K::EPR;
    const FUSED: bool = K::FUSED;

    #[inline(always)]
    fn zero() -> K::Reg {
        K::zero()
    }

    #[inline(always)]
    fn splat(x: f32) -> K::Reg {
        K::splat(x)
    }

    #[inline(always)]
    unsafe fn load(p: *const f16) -> K::Reg {
        K::load_f16(p)
    }

    #[inline(always)]
    unsafe fn store(p: *mut f16, v: K::Reg) {
        K::store_f16(p, v)
    }

    #[inline(always)]
    fn fma(acc: K::Reg, a: K::Reg, b: K::Reg) -> K::Reg {
        K::fma(acc, a, b)
    }

    #[inline(always)]
    fn add(a: K::Reg, b: K::Reg) -> K::Reg {
        K::add(a, b)
    }

    #[inline(always)]
    fn mul(a: K::Reg, b: K::Reg) -> K::Reg {
        K::mul(a, b)
    }

    #[inline(always)]
    fn reduce_one(v: K::Reg) -> f32 {
        K::reduce_one(v)
    }
}
