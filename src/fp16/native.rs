//! Hardware fp16 <-> fp32 conversion.

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "f16c"
))]
pub(crate) mod x86 {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::*;

    use half::f16;

    #[inline(always)]
    #[allow(unused_unsafe)]
    pub fn fp16_to_fp32(h: f16) -> f32 {
        // SAFETY: f16c is enabled for the whole build.
        unsafe { _mm_cvtss_f32(_mm_cvtph_ps(_mm_cvtsi32_si128(i32::from(h.to_bits())))) }
    }

    #[inline(always)]
    #[allow(unused_unsafe)]
    pub fn fp32_to_fp16(f: f32) -> f16 {
        // SAFETY: f16c is enabled for the whole build.
        let bits = unsafe {
            _mm_cvtsi128_si32(_mm_cvtps_ph::<_MM_FROUND_TO_NEAREST_INT>(_mm_set_ss(f)))
        };
        f16::from_bits(bits as u16)
    }
}

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64 {
    use core::arch::asm;

    use half::f16;

    #[inline(always)]
    pub fn fp16_to_fp32(h: f16) -> f32 {
        let f: f32;
        // SAFETY: scalar fcvt between h and s registers is baseline ARMv8 FP.
        unsafe {
            asm!(
                "fcvt {0:s}, {1:h}",
                out(vreg) f,
                in(vreg) h.to_bits(),
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        f
    }

    #[inline(always)]
    pub fn fp32_to_fp16(f: f32) -> f16 {
        let bits: u16;
        // SAFETY: as above; rounding follows FPCR, which defaults to nearest-even.
        unsafe {
            asm!(
                "fcvt {0:h}, {1:s}",
                out(vreg) bits,
                in(vreg) f,
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        f16::from_bits(bits)
    }
}
