//! Per-instruction-set vector kinds.
//!
//! Intrinsic-backed kinds exist only on targets that enable their features
//! for the build. The `wide`-backed kinds and [`Widened`] are always
//! available. Which kind the rest of the crate uses is decided once in
//! [`crate::mappings`].

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
mod x86;
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
pub use x86::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
pub use neon::*;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
mod wasm;
#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub use wasm::Wasm;

mod portable;
mod widened;

pub use portable::{Lasx, Lsx, Power9, Sve, Vxe};
pub use widened::Widened;

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
crate::assert_kind_shape!(Sse);
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "avx"))]
crate::assert_kind_shape!(Avx);
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "avx512f"
))]
crate::assert_kind_shape!(Avx512);
#[cfg(target_arch = "aarch64")]
crate::assert_kind_shape!(Neon);
#[cfg(all(target_arch = "aarch64", target_feature = "fp16"))]
crate::assert_kind_shape!(NeonFp16);
#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
crate::assert_kind_shape!(Wasm);
crate::assert_kind_shape!(Sve);
crate::assert_kind_shape!(Power9);
crate::assert_kind_shape!(Lasx);
crate::assert_kind_shape!(Lsx);
crate::assert_kind_shape!(Vxe);
