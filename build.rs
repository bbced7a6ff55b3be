//! Resolves the SIMD backend at build-configuration time.
//!
//! The target-feature predicates are tested in a fixed priority order and
//! exactly one backend is emitted as `cfg(simd_backend = "...")`. Nothing is
//! decided at runtime.

use std::env;

/// Backend priority: scalable vectors, fixed-width ARM, widest x86 first,
/// then the server/embedded vector extensions.
const PRIORITY: &[(&str, &[&str], &str)] = &[
    ("sve", &["aarch64"], "sve"),
    ("neon", &["aarch64"], "neon"),
    ("avx512", &["x86", "x86_64"], "avx512f"),
    ("avx", &["x86", "x86_64"], "avx"),
    ("sse", &["x86", "x86_64"], "sse2"),
    ("power9", &["powerpc64"], "power9-vector"),
    ("wasm", &["wasm32"], "simd128"),
    ("lasx", &["loongarch64"], "lasx"),
    ("lsx", &["loongarch64"], "lsx"),
    ("vxe", &["s390x"], "vector"),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(has_simd)");
    println!("cargo:rustc-check-cfg=cfg(native_f16_arith)");
    println!(
        "cargo:rustc-check-cfg=cfg(simd_backend, values(\"sve\", \"neon\", \"avx512\", \"avx\", \"sse\", \"power9\", \"wasm\", \"lasx\", \"lsx\", \"vxe\"))"
    );

    if env::var_os("CARGO_FEATURE_SCALAR_ONLY").is_some() {
        return;
    }

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let has = |feature: &str| features.split(',').any(|f| f == feature);

    let Some((backend, _, _)) = PRIORITY
        .iter()
        .find(|(_, arches, feature)| arches.contains(&arch.as_str()) && has(*feature))
    else {
        return;
    };

    println!("cargo:rustc-cfg=has_simd");
    println!("cargo:rustc-cfg=simd_backend=\"{backend}\"");

    // Half lanes with native arithmetic only exist on the ARM families.
    if matches!(*backend, "sve" | "neon") && has("fp16") {
        println!("cargo:rustc-cfg=native_f16_arith");
    }
}
