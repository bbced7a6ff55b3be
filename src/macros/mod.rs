//! Macro surface over the bound backend.

#[macro_use]
pub mod simd_primitive;
