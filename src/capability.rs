//! What this build can do, and whether the running CPU agrees.

use std::fmt;

use serde::Serialize;

use crate::error::SimdResult;
use crate::fp16::{Fp16Strategy, STRATEGY};

/// The vector family bound at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sve,
    Neon,
    Avx512,
    Avx,
    Sse,
    Power9,
    Wasm,
    Lasx,
    Lsx,
    Vxe,
    /// No backend; callers use scalar loops.
    None,
}

impl Backend {
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Sve => "sve",
            Backend::Neon => "neon",
            Backend::Avx512 => "avx512",
            Backend::Avx => "avx",
            Backend::Sse => "sse",
            Backend::Power9 => "power9",
            Backend::Wasm => "wasm",
            Backend::Lasx => "lasx",
            Backend::Lsx => "lsx",
            Backend::Vxe => "vxe",
            Backend::None => "none",
        }
    }

    pub const fn is_simd(self) -> bool {
        !matches!(self, Backend::None)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The backend bound for this build.
pub const BACKEND: Backend = if cfg!(simd_backend = "sve") {
    Backend::Sve
} else if cfg!(simd_backend = "neon") {
    Backend::Neon
} else if cfg!(simd_backend = "avx512") {
    Backend::Avx512
} else if cfg!(simd_backend = "avx") {
    Backend::Avx
} else if cfg!(simd_backend = "sse") {
    Backend::Sse
} else if cfg!(simd_backend = "power9") {
    Backend::Power9
} else if cfg!(simd_backend = "wasm") {
    Backend::Wasm
} else if cfg!(simd_backend = "lasx") {
    Backend::Lasx
} else if cfg!(simd_backend = "lsx") {
    Backend::Lsx
} else if cfg!(simd_backend = "vxe") {
    Backend::Vxe
} else {
    Backend::None
};

/// Summary of the bound backend and conversion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub backend: Backend,
    pub f32_step: usize,
    pub f32_epr: usize,
    pub f16_step: usize,
    pub f16_epr: usize,
    pub native_f16_arith: bool,
    pub fused_fma: bool,
    pub fp16_strategy: Fp16Strategy,
}

#[cfg(has_simd)]
pub const fn capabilities() -> Capabilities {
    use crate::mappings::{F16_EPR, F16_STEP, F32_EPR, F32_STEP, F32Kind};
    use crate::traits::SimdKind;

    Capabilities {
        backend: BACKEND,
        f32_step: F32_STEP,
        f32_epr: F32_EPR,
        f16_step: F16_STEP,
        f16_epr: F16_EPR,
        native_f16_arith: cfg!(native_f16_arith),
        fused_fma: <F32Kind as SimdKind>::FUSED,
        fp16_strategy: STRATEGY,
    }
}

/// Without a backend every width is one element.
#[cfg(not(has_simd))]
pub const fn capabilities() -> Capabilities {
    Capabilities {
        backend: BACKEND,
        f32_step: 1,
        f32_epr: 1,
        f16_step: 1,
        f16_epr: 1,
        native_f16_arith: false,
        fused_fma: false,
        fp16_strategy: STRATEGY,
    }
}

/// Verifies that the running CPU has every feature this build was compiled
/// to assume. It reports a misconfigured build; it never changes what is
/// bound.
pub fn check_cpu_support() -> SimdResult<()> {
    #[allow(unused_variables)]
    let backend = BACKEND.name();

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        macro_rules! require {
            ($($feature:tt),* $(,)?) => {
                $(
                    if cfg!(target_feature = $feature)
                        && !std::arch::is_x86_feature_detected!($feature)
                    {
                        return Err($crate::error::SimdError::MissingCpuFeature { backend, feature: $feature });
                    }
                )*
            };
        }
        require!("avx512f", "avx", "fma", "f16c", "sse3");
    }

    #[cfg(target_arch = "aarch64")]
    {
        macro_rules! require {
            ($($feature:tt),* $(,)?) => {
                $(
                    if cfg!(target_feature = $feature)
                        && !std::arch::is_aarch64_feature_detected!($feature)
                    {
                        return Err($crate::error::SimdError::MissingCpuFeature { backend, feature: $feature });
                    }
                )*
            };
        }
        require!("sve", "fp16");
    }

    Ok(())
}

/// Logs the bound backend at `info` and the details at `debug`.
pub fn log_capabilities() {
    let caps = capabilities();
    log::info!(
        "SIMD backend: {} (f32 {}x{}, f16 {}x{}), fp16 conversion: {}",
        caps.backend,
        caps.f32_step / caps.f32_epr,
        caps.f32_epr,
        caps.f16_step / caps.f16_epr,
        caps.f16_epr,
        caps.fp16_strategy
    );
    log::debug!(
        "native f16 arithmetic: {}, fused fma: {}",
        caps.native_f16_arith,
        caps.fused_fma
    );
    if let Err(e) = check_cpu_support() {
        log::warn!("{e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_matches_has_simd() {
        assert_eq!(BACKEND.is_simd(), crate::HAS_SIMD);
    }

    #[test]
    fn test_capabilities_shape() {
        const CAPS: Capabilities = capabilities();
        assert_eq!(CAPS.backend, BACKEND);
        assert_eq!(CAPS.f32_step % CAPS.f32_epr, 0);
        assert_eq!(CAPS.f16_step % CAPS.f16_epr, 0);
        assert_eq!(CAPS.fp16_strategy, STRATEGY);
        assert_eq!(CAPS.native_f16_arith, crate::NATIVE_F16_ARITH);
    }

    #[cfg(all(target_arch = "x86_64", not(feature = "scalar-only")))]
    #[test]
    fn test_x86_64_always_binds() {
        assert!(matches!(BACKEND, Backend::Sse | Backend::Avx | Backend::Avx512));
    }

    #[cfg(all(target_arch = "aarch64", not(feature = "scalar-only")))]
    #[test]
    fn test_aarch64_binds_arm_family() {
        assert!(matches!(BACKEND, Backend::Neon | Backend::Sve));
    }

    #[test]
    fn test_check_cpu_support_on_build_host() {
        // Tests run on the machine they were built for.
        assert_eq!(check_cpu_support(), Ok(()));
    }

    #[test]
    fn test_names() {
        assert_eq!(Backend::Avx512.name(), "avx512");
        assert_eq!(Backend::None.to_string(), "none");
    }
}
