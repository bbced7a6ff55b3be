//! The 64K-entry fp16 -> fp32 lookup table.
//!
//! The table is built once and never written again. It can be owned and
//! passed around as a value, or shared through the process-wide instance
//! created by [`init_fp16_table`].

use std::fmt;
use std::sync::OnceLock;

use half::f16;

use super::soft;

/// One entry per half-precision bit pattern.
pub const TABLE_LEN: usize = 1 << 16;

static FP16_TABLE: OnceLock<Fp16Table> = OnceLock::new();

/// Immutable map from every fp16 bit pattern to its fp32 value (256 KiB).
pub struct Fp16Table {
    values: Box<[f32]>,
}

impl Fp16Table {
    pub fn new() -> Self {
        let values: Box<[f32]> = (0..TABLE_LEN)
            .map(|bits| soft::fp16_to_fp32(f16::from_bits(bits as u16)))
            .collect();
        debug_assert_eq!(values.len(), TABLE_LEN);
        Self { values }
    }

    #[inline(always)]
    pub fn lookup(&self, h: f16) -> f32 {
        // SAFETY: `values` has exactly 1 << 16 entries and every u16 indexes one.
        unsafe { *self.values.get_unchecked(h.to_bits() as usize) }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

impl Default for Fp16Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Fp16Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fp16Table")
            .field("len", &self.values.len())
            .finish()
    }
}

/// Builds the process-wide table on first call; later calls return the same
/// instance. Safe to call from any number of threads.
pub fn init_fp16_table() -> &'static Fp16Table {
    FP16_TABLE.get_or_init(|| {
        log::debug!("building fp16 -> fp32 lookup table ({TABLE_LEN} entries)");
        Fp16Table::new()
    })
}

/// Whether [`init_fp16_table`] has already run.
pub fn fp16_table_ready() -> bool {
    FP16_TABLE.get().is_some()
}

/// fp16 -> fp32 through the process-wide table.
#[inline(always)]
pub fn fp16_to_fp32(h: f16) -> f32 {
    init_fp16_table().lookup(h)
}

/// The table path has no fp32 -> fp16 table; narrowing is computed.
#[inline(always)]
pub fn fp32_to_fp16(f: f32) -> f16 {
    soft::fp32_to_fp16(f)
}
