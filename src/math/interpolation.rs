//! Scalar shaping functions shared by the field builders
//!
//! Generic over [`num_traits::Float`] so the same curves serve both the `f64`
//! pipeline math and the `f32` field storage.

use num_traits::Float;

/// Clamp a value into `[0, 1]`
///
/// NaN collapses to zero.
pub fn clamp_unit<T: Float>(value: T) -> T {
    value.max(T::zero()).min(T::one())
}

/// Linear interpolation `a * (1 - t) + b * t`
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Cubic Hermite step `t^2 (3 - 2t)` for `t` in `[0, 1]`
pub fn hermite<T: Float>(t: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    t * t * (three - two * t)
}

/// Smoothstep across the band `center ± half_width`
///
/// Values at or below the low bound map to 0, at or above the high bound to 1,
/// and the band itself follows [`hermite`]. A zero-width band is a hard step.
pub fn smoothstep_band<T: Float>(value: T, center: T, half_width: T) -> T {
    let low = center - half_width;
    let high = center + half_width;

    if value <= low {
        T::zero()
    } else if value >= high {
        T::one()
    } else {
        hermite((value - low) / (high - low))
    }
}
