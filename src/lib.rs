//! gllm-simd: half-precision conversion and per-ISA vector primitives.
//!
//! Three layers, all resolved when the crate is compiled:
//! - **Scalar conversion** (`fp16`): fp16 <-> fp32 through hardware
//!   instructions, inline assembly, software or a 64K lookup table.
//! - **Vector kinds** (`kinds`): one zero-sized type per instruction set and
//!   element width, all implementing [`SimdKind`].
//! - **Façade** (`mappings`, `simd_primitive!`): the f32 and f16 kinds bound
//!   for this build, exposed as plain functions.
//!
//! # Quick Start
//!
//! ```ignore
//! gllm_simd::init();
//!
//! let mut acc = [gllm_simd::mappings::f32_vec_zero(); gllm_simd::mappings::F32_ARR];
//! // ... f32_vec_load / f32_vec_fma over STEP-sized chunks ...
//! let sum = gllm_simd::mappings::f32_vec_reduce(&mut acc);
//! ```

pub mod capability;
pub mod convert;
pub mod error;
pub mod fp16;
pub mod kinds;
#[macro_use]
pub mod macros;
#[cfg(has_simd)]
pub mod mappings;
pub mod traits;

use std::sync::Once;

pub use capability::{
    capabilities, check_cpu_support, log_capabilities, Backend, Capabilities, BACKEND,
};
pub use convert::{fp16_to_fp32_row, fp32_to_fp16_row};
pub use error::{SimdError, SimdResult};
pub use fp16::{
    fp16_to_fp32, fp32_to_fp16, init_fp16_table, lookup_fp16_to_fp32, Fp16Strategy, Fp16Table,
    STRATEGY,
};
pub use half::f16;
pub use traits::{HalfIo, SimdKind};

/// Whether a vector backend is bound. When `false`, [`mappings`] and
/// `simd_primitive!` do not exist and callers use scalar loops.
pub const HAS_SIMD: bool = cfg!(has_simd);

/// Whether the f16 kind does arithmetic in half precision.
pub const NATIVE_F16_ARITH: bool = cfg!(native_f16_arith);

/// Start-up hook: builds the conversion table and logs the bound backend.
///
/// Idempotent and thread-safe. Nothing requires it; the table is also
/// built on first use.
pub fn init() {
    static LOGGED: Once = Once::new();
    init_fp16_table();
    LOGGED.call_once(log_capabilities);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        let _ = env_logger::builder().is_test(true).try_init();
        init();
        init();
        assert!(fp16::fp16_table_ready());
    }

    #[test]
    fn test_flags_consistent() {
        if NATIVE_F16_ARITH {
            assert!(HAS_SIMD);
        }
        assert_eq!(BACKEND.is_simd(), HAS_SIMD);
    }
}
