use half::f16;

use crate::fp16::{fp16_to_fp32, fp32_to_fp16};

/// Widest register (in f32 lanes) of any kind; sizes the scratch buffers of
/// the per-lane conversion fallback.
pub const MAX_EPR: usize = 16;

/// A vector kind: one instruction set at one element width.
///
/// Implementors are zero-sized markers; all operations are associated
/// functions over `Self::Reg`, so a kind bound through a type alias costs
/// nothing at the call site. Every kind shares the same contract:
///
/// - `load`/`store` move `EPR` contiguous elements to/from unaligned memory.
/// - `fma(acc, a, b)` is `acc + a * b`, with a single rounding when `FUSED`.
/// - `reduce` collapses `ARR` registers with a pairwise-halving tree before
///   the horizontal sum, so all kinds add in the same order.
pub trait SimdKind: Copy + Send + Sync + 'static {
    /// Element type in memory.
    type Elem: Copy;
    /// Register type, passed by value.
    type Reg: Copy;

    /// Short name used in logs and test messages.
    const NAME: &'static str;
    /// Elements processed per fully unrolled loop iteration.
    const STEP: usize;
    /// Lanes per register.
    const EPR: usize;
    /// Registers per step.
    const ARR: usize = Self::STEP / Self::EPR;
    /// Whether `fma` is guaranteed to round once.
    const FUSED: bool;

    fn zero() -> Self::Reg;

    fn splat(x: f32) -> Self::Reg;

    /// # Safety
    /// `p` must be valid for reads of `EPR` elements. No alignment is required.
    unsafe fn load(p: *const Self::Elem) -> Self::Reg;

    /// # Safety
    /// `p` must be valid for writes of `EPR` elements. No alignment is required.
    unsafe fn store(p: *mut Self::Elem, v: Self::Reg);

    fn fma(acc: Self::Reg, a: Self::Reg, b: Self::Reg) -> Self::Reg;

    fn add(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    fn mul(a: Self::Reg, b: Self::Reg) -> Self::Reg;

    /// Horizontal sum of one register.
    fn reduce_one(v: Self::Reg) -> f32;

    /// Sums `regs` (normally `ARR` accumulators) into one scalar.
    ///
    /// The upper half of the slice is added into the lower half until one
    /// register is left. `regs` is clobbered. The length must be a power of
    /// two.
    #[inline(always)]
    fn reduce(regs: &mut [Self::Reg]) -> f32 {
        debug_assert!(regs.len().is_power_of_two(), "reduce needs 2^n registers");
        let mut offset = regs.len() >> 1;
        while offset > 0 {
            let (lo, hi) = regs[..2 * offset].split_at_mut(offset);
            for (l, &h) in lo.iter_mut().zip(hi.iter()) {
                *l = Self::add(*l, h);
            }
            offset >>= 1;
        }
        Self::reduce_one(regs[0])
    }
}

/// Half-precision memory access for a full-precision kind.
///
/// Kinds with a hardware widening/narrowing instruction override both
/// methods; the provided versions convert lane by lane through the scalar
/// conversion layer and a stack buffer.
pub trait HalfIo: SimdKind<Elem = f32> {
    /// # Safety
    /// `p` must be valid for reads of `EPR` half-precision elements.
    #[inline(always)]
    unsafe fn load_f16(p: *const f16) -> Self::Reg {
        let mut tmp = [0.0f32; MAX_EPR];
        for (i, slot) in tmp.iter_mut().enumerate().take(Self::EPR) {
            *slot = fp16_to_fp32(p.add(i).read_unaligned());
        }
        Self::load(tmp.as_ptr())
    }

    /// # Safety
    /// `p` must be valid for writes of `EPR` half-precision elements.
    #[inline(always)]
    unsafe fn store_f16(p: *mut f16, v: Self::Reg) {
        let mut tmp = [0.0f32; MAX_EPR];
        Self::store(tmp.as_mut_ptr(), v);
        for (i, &x) in tmp.iter().enumerate().take(Self::EPR) {
            p.add(i).write_unaligned(fp32_to_fp16(x));
        }
    }
}

/// Compile-time shape check for a kind: `STEP` is a whole number of
/// registers and the register count is a power of two.
#[macro_export]
macro_rules! assert_kind_shape {
    ($kind:ty) => {
        const _: () = {
            let step = <$kind as $crate::traits::SimdKind>::STEP;
            let epr = <$kind as $crate::traits::SimdKind>::EPR;
            assert!(epr <= $crate::traits::MAX_EPR);
            assert!(step % epr == 0);
            assert!((step / epr).is_power_of_two());
        };
    };
}
