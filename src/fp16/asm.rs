//! Inline-assembly fp16 <-> fp32 conversion for targets without intrinsics.

#[cfg(all(target_arch = "riscv64", target_feature = "zfhmin"))]
pub(crate) mod riscv {
    use core::arch::asm;

    use half::f16;

    #[inline(always)]
    pub fn fp16_to_fp32(h: f16) -> f32 {
        let f: f32;
        // SAFETY: zfhmin provides fmv.h.x and fcvt.s.h.
        unsafe {
            asm!(
                "fmv.h.x {f}, {h}",
                "fcvt.s.h {f}, {f}",
                h = in(reg) u64::from(h.to_bits()),
                f = out(freg) f,
                options(pure, nomem, nostack)
            );
        }
        f
    }

    #[inline(always)]
    pub fn fp32_to_fp16(f: f32) -> f16 {
        let bits: u64;
        // SAFETY: zfhmin provides fcvt.h.s and fmv.x.h.
        unsafe {
            asm!(
                "fcvt.h.s {t}, {f}",
                "fmv.x.h {h}, {t}",
                f = in(freg) f,
                t = out(freg) _,
                h = out(reg) bits,
                options(pure, nomem, nostack)
            );
        }
        f16::from_bits(bits as u16)
    }
}
