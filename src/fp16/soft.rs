//! Software fp16 <-> fp32 conversion by bit manipulation.
//!
//! Always compiled. Used directly as the bit-manipulation strategy, to build
//! the lookup table, and for fp32 -> fp16 on the table path.

use half::f16;

/// Widens by re-biasing the exponent and shifting the mantissa; subnormal
/// halves are normalized, NaN payloads are kept with the quiet bit set.
#[inline]
pub const fn fp16_to_fp32(h: f16) -> f32 {
    h.to_f32_const()
}

/// Narrows with round-to-nearest-even. Overflow goes to infinity, underflow
/// to a subnormal or signed zero, NaN stays NaN.
#[inline]
pub const fn fp32_to_fp16(f: f32) -> f16 {
    f16::from_f32_const(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(fp16_to_fp32(f16::from_bits(0x3C00)), 1.0);
        assert_eq!(fp16_to_fp32(f16::from_bits(0xC000)), -2.0);
        assert_eq!(fp16_to_fp32(f16::from_bits(0x7BFF)), 65504.0);
        assert_eq!(fp16_to_fp32(f16::from_bits(0x0001)), 2.0f32.powi(-24));
        assert_eq!(fp32_to_fp16(1.0).to_bits(), 0x3C00);
        assert_eq!(fp32_to_fp16(-0.0).to_bits(), 0x8000);
    }

    #[test]
    fn test_overflow_and_nan() {
        assert_eq!(fp32_to_fp16(1.0e6).to_bits(), 0x7C00);
        assert_eq!(fp32_to_fp16(-1.0e6).to_bits(), 0xFC00);
        assert!(fp32_to_fp16(f32::NAN).is_nan());
        assert!(fp16_to_fp32(f16::from_bits(0x7E00)).is_nan());
    }

    #[test]
    fn test_round_to_nearest_even() {
        // 1 + 2^-11 sits halfway between 1.0 and the next half; ties go to even.
        let halfway = 1.0 + 2.0f32.powi(-11);
        assert_eq!(fp32_to_fp16(halfway).to_bits(), 0x3C00);
        // 1 + 3 * 2^-11 is halfway between 0x3C01 and 0x3C02.
        let halfway_odd = 1.0 + 3.0 * 2.0f32.powi(-11);
        assert_eq!(fp32_to_fp16(halfway_odd).to_bits(), 0x3C02);
    }

    #[test]
    fn test_const_evaluable() {
        const ONE: f32 = fp16_to_fp32(f16::from_bits(0x3C00));
        const HALF_TWO: f16 = fp32_to_fp16(2.0);
        assert_eq!(ONE, 1.0);
        assert_eq!(HALF_TWO.to_bits(), 0x4000);
    }
}
