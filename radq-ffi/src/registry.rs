//! Unit registry and conversion logic for FFI.
//!
//! Maps [`RadqUnitId`] values onto the `radq` unit catalog and converts between them with the catalog's
//! conversion factors:
//!
//! ```text
//! v_dst = v_src * (src.ratio / dst.ratio)
//! ```
//!
//! Errors are reported as status codes so the extern functions can return them unchanged.

use crate::types::{RadqUnitId, RADQ_ERR_INCOMPATIBLE_DIM, RADQ_ERR_UNKNOWN_UNIT};
use radq::{Dimension, Quantity, QuantityError, Unit};

/// Resolves a raw discriminant to its catalog unit.
///
/// Returns `None` if the discriminant is not a known unit ID.
#[inline]
pub fn lookup(raw: u32) -> Option<Unit> {
    RadqUnitId::from_u32(raw).map(RadqUnitId::unit)
}

/// Returns the dimensional signature of the given unit ID.
#[inline]
pub fn dimension(id: RadqUnitId) -> Dimension {
    id.unit().dimension()
}

/// Checks if two units are compatible (same dimension).
#[inline]
pub fn compatible(a: RadqUnitId, b: RadqUnitId) -> bool {
    a.unit().is_compatible(&b.unit())
}

/// Maps a quantity-system error onto its status code.
#[inline]
pub fn status(err: QuantityError) -> i32 {
    match err {
        QuantityError::DimensionMismatch { .. } => RADQ_ERR_INCOMPATIBLE_DIM,
    }
}

/// Converts a value from one unit to another.
///
/// # Returns
///
/// * `Ok(converted_value)` on success
/// * `Err(RADQ_ERR_INCOMPATIBLE_DIM)` if units have different dimensions
///
/// # Example
///
/// ```rust
/// use radq_ffi::{registry, RadqUnitId};
///
/// let km = registry::convert_value(1000.0, RadqUnitId::Meter, RadqUnitId::Kilometer);
/// assert!((km.unwrap() - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn convert_value(v: f64, src: RadqUnitId, dst: RadqUnitId) -> Result<f64, i32> {
    Quantity::new(v, src.unit()).convert(dst.unit()).map_err(status)
}

/// Like [`convert_value`], for raw discriminants coming from untyped callers.
///
/// # Returns
///
/// * `Err(RADQ_ERR_UNKNOWN_UNIT)` if either discriminant is not a unit ID
/// * otherwise as [`convert_value`]
pub fn convert_raw(v: f64, src: u32, dst: u32) -> Result<f64, i32> {
    let src = RadqUnitId::from_u32(src).ok_or(RADQ_ERR_UNKNOWN_UNIT)?;
    let dst = RadqUnitId::from_u32(dst).ok_or(RADQ_ERR_UNKNOWN_UNIT)?;
    convert_value(v, src, dst)
}
