use thiserror::Error;

/// Errors reported by the capability check.
///
/// Conversions and vector operations are total and never fail; the only
/// failure this crate can detect is a binary built for features the running
/// CPU does not have.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimdError {
    #[error("{backend} build requires CPU feature `{feature}`, which this CPU lacks")]
    MissingCpuFeature {
        backend: &'static str,
        feature: &'static str,
    },
}

pub type SimdResult<T> = Result<T, SimdError>;
