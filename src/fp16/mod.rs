//! Scalar fp16 <-> fp32 conversion.
//!
//! Exactly one strategy is bound per build, chosen from the target's
//! instruction sets:
//!
//! | target                               | strategy    |
//! |--------------------------------------|-------------|
//! | x86 with `f16c`, any aarch64         | `Native`    |
//! | riscv64 with `zfhmin`                | `InlineAsm` |
//! | s390x with `nnp-assist`              | `BitManip`  |
//! | everything else, or `force-table`    | `Table`     |
//!
//! All strategies agree bit for bit on fp16 -> fp32 for non-NaN inputs and
//! round fp32 -> fp16 to nearest, ties to even.

mod asm;
mod native;
pub mod soft;
pub mod table;

use half::f16;
use serde::Serialize;

pub use table::{fp16_table_ready, init_fp16_table, Fp16Table, TABLE_LEN};

/// How the scalar conversion is carried out in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fp16Strategy {
    /// Dedicated hardware conversion instruction.
    Native,
    /// Hand-written assembly sequence.
    InlineAsm,
    /// Software exponent/mantissa manipulation.
    BitManip,
    /// Lookup table for fp16 -> fp32, software for fp32 -> fp16.
    Table,
}

impl Fp16Strategy {
    pub const fn name(self) -> &'static str {
        match self {
            Fp16Strategy::Native => "native",
            Fp16Strategy::InlineAsm => "inline-asm",
            Fp16Strategy::BitManip => "bit-manip",
            Fp16Strategy::Table => "table",
        }
    }

    /// Whether fp16 -> fp32 reads the process-wide table.
    pub const fn uses_table(self) -> bool {
        matches!(self, Fp16Strategy::Table)
    }
}

impl std::fmt::Display for Fp16Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "force-table")] {
        pub const STRATEGY: Fp16Strategy = Fp16Strategy::Table;
        use self::table as active;
    } else if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "f16c"
    ))] {
        pub const STRATEGY: Fp16Strategy = Fp16Strategy::Native;
        use self::native::x86 as active;
    } else if #[cfg(target_arch = "aarch64")] {
        pub const STRATEGY: Fp16Strategy = Fp16Strategy::Native;
        use self::native::aarch64 as active;
    } else if #[cfg(all(target_arch = "riscv64", target_feature = "zfhmin"))] {
        pub const STRATEGY: Fp16Strategy = Fp16Strategy::InlineAsm;
        use self::asm::riscv as active;
    } else if #[cfg(all(target_arch = "s390x", target_feature = "nnp-assist"))] {
        pub const STRATEGY: Fp16Strategy = Fp16Strategy::BitManip;
        use self::soft as active;
    } else {
        pub const STRATEGY: Fp16Strategy = Fp16Strategy::Table;
        use self::table as active;
    }
}

/// Widens one half-precision value. Exact for every input.
#[inline(always)]
pub fn fp16_to_fp32(h: f16) -> f32 {
    active::fp16_to_fp32(h)
}

/// Narrows one value to half precision, round-to-nearest-even.
#[inline(always)]
pub fn fp32_to_fp16(f: f32) -> f16 {
    active::fp32_to_fp16(f)
}

/// fp16 -> fp32 through the lookup table, whatever strategy is bound.
///
/// Kernels that widen many values at once use this to get a fixed-cost
/// load regardless of target.
#[inline(always)]
pub fn lookup_fp16_to_fp32(h: f16) -> f32 {
    table::fp16_to_fp32(h)
}
