/// Maps an abstract vector operation to the backend bound for this build.
///
/// The first argument selects the precision (`f32` or `f16`), the second the
/// operation; the rest are the operands. Every arm forwards to the matching
/// function or constant in [`crate::mappings`], so the expansion is a direct
/// call into one kind with no dispatch.
///
/// `load` and `store` expand to unsafe calls; the caller supplies the
/// `unsafe` block and guarantees `EPR` valid elements behind the pointer.
///
/// Only defined when a backend is bound (`cfg(has_simd)`).
///
/// # Usage
/// ```ignore
/// let mut sum = [simd_primitive!(f32, zero); simd_primitive!(f32, arr)];
/// let x = unsafe { simd_primitive!(f32, load, p) };
/// sum[0] = simd_primitive!(f32, fma, sum[0], x, x);
/// let total = simd_primitive!(f32, reduce, &mut sum);
/// ```
#[cfg(has_simd)]
#[macro_export]
macro_rules! simd_primitive {
    // --- f32 shape ---
    (f32, step) => { $crate::mappings::F32_STEP };
    (f32, epr) => { $crate::mappings::F32_EPR };
    (f32, arr) => { $crate::mappings::F32_ARR };

    // --- f32 compute ---
    (f32, zero) => { $crate::mappings::f32_vec_zero() };
    (f32, splat, $v:expr) => { $crate::mappings::f32_vec_set1($v) };
    (f32, load, $p:expr) => { $crate::mappings::f32_vec_load($p) };
    (f32, store, $p:expr, $v:expr) => { $crate::mappings::f32_vec_store($p, $v) };
    (f32, fma, $acc:expr, $a:expr, $b:expr) => { $crate::mappings::f32_vec_fma($acc, $a, $b) };
    (f32, add, $a:expr, $b:expr) => { $crate::mappings::f32_vec_add($a, $b) };
    (f32, mul, $a:expr, $b:expr) => { $crate::mappings::f32_vec_mul($a, $b) };
    (f32, reduce, $regs:expr) => { $crate::mappings::f32_vec_reduce($regs) };

    // --- f16 shape ---
    (f16, step) => { $crate::mappings::F16_STEP };
    (f16, epr) => { $crate::mappings::F16_EPR };
    (f16, arr) => { $crate::mappings::F16_ARR };

    // --- f16 compute ---
    (f16, zero) => { $crate::mappings::f16_vec_zero() };
    (f16, splat, $v:expr) => { $crate::mappings::f16_vec_set1($v) };
    (f16, load, $p:expr) => { $crate::mappings::f16_vec_load($p) };
    (f16, store, $p:expr, $v:expr) => { $crate::mappings::f16_vec_store($p, $v) };
    (f16, fma, $acc:expr, $a:expr, $b:expr) => { $crate::mappings::f16_vec_fma($acc, $a, $b) };
    (f16, add, $a:expr, $b:expr) => { $crate::mappings::f16_vec_add($a, $b) };
    (f16, mul, $a:expr, $b:expr) => { $crate::mappings::f16_vec_mul($a, $b) };
    (f16, reduce, $regs:expr) => { $crate::mappings::f16_vec_reduce($regs) };

    // --- scalar conversion, available with every backend ---
    (f16, to_f32, $h:expr) => { $crate::fp16::fp16_to_fp32($h) };
    (f32, to_f16, $x:expr) => { $crate::fp16::fp32_to_fp16($x) };
}
