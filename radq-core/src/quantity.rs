//! Quantity type and its implementations.

use crate::dimension::Dimension;
use crate::error::QuantityResult;
use crate::math;
use crate::unit::{Unit, ONE};
use core::cmp::Ordering;
use core::fmt;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude expressed in a [`Unit`].
///
/// The unit fixes the dimensional signature for the lifetime of the value: conversion produces a new quantity whose
/// signature is the same and whose magnitude is re-expressed in the target unit.
///
/// # Examples
///
/// ```rust
/// use radq_core::length::{KILOMETER, PARSEC};
///
/// let d = 45.0 * KILOMETER;
/// let pc = d.to(PARSEC).unwrap();
/// assert!((pc.value() - 1.458_350_7e-12).abs() < 1e-18);
/// ```
///
/// Multiplication and division compose signatures; addition requires them to match:
///
/// ```rust
/// use radq_core::length::METER;
/// use radq_core::time::SECOND;
/// use radq_core::Dimension;
///
/// let v = (100.0 * METER) / (20.0 * SECOND);
/// assert_eq!(v.dimension(), Dimension::VELOCITY);
/// assert_eq!(v.value(), 5.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// Creates a quantity of `value` expressed in `unit`.
    ///
    /// ```rust
    /// use radq_core::{Quantity, temperature::KELVIN};
    /// let t = Quantity::new(5_000.0, KELVIN);
    /// assert_eq!(t.value(), 5_000.0);
    /// ```
    #[inline]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// A dimensionless quantity.
    #[inline]
    pub const fn dimensionless(value: f64) -> Self {
        Self::new(value, ONE)
    }

    /// The magnitude in this quantity's own unit.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit the magnitude is expressed in.
    #[inline]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// The dimensional signature.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// The magnitude in coherent SI units.
    ///
    /// ```rust
    /// use radq_core::length::NANOMETER;
    /// assert!(((500.0 * NANOMETER).si_value() - 5e-7).abs() < 1e-21);
    /// ```
    #[inline]
    pub const fn si_value(&self) -> f64 {
        self.value * self.unit.ratio()
    }

    /// `true` when this quantity can be expressed in `unit`.
    #[inline]
    pub const fn is_compatible(&self, unit: &Unit) -> bool {
        self.unit.is_compatible(unit)
    }

    /// Re-expresses the magnitude in `target` and returns the bare number.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`](crate::QuantityError::DimensionMismatch) when `target` measures a
    /// different dimension.
    ///
    /// ```rust
    /// use radq_core::length::{METER, NANOMETER};
    /// use radq_core::temperature::KELVIN;
    ///
    /// let lam = 500e-9 * METER;
    /// assert!((lam.convert(NANOMETER).unwrap() - 500.0).abs() < 1e-9);
    /// assert!(lam.convert(KELVIN).is_err());
    /// ```
    #[inline]
    pub fn convert(&self, target: Unit) -> QuantityResult<f64> {
        let factor = self.unit.conversion_factor(&target)?;
        Ok(self.value * factor)
    }

    /// Like [`Quantity::convert`] but keeps the result tagged with `target`.
    #[inline]
    pub fn to(&self, target: Unit) -> QuantityResult<Quantity> {
        Ok(Quantity::new(self.convert(target)?, target))
    }

    /// The same quantity expressed in coherent SI units.
    #[inline]
    pub const fn to_si(&self) -> Quantity {
        Quantity::new(self.si_value(), Unit::coherent(self.dimension()))
    }

    /// Addition that reports a signature mismatch instead of panicking.
    ///
    /// `rhs` is normalized to `self`'s unit first, so the result is tagged with `self`'s unit.
    ///
    /// ```rust
    /// use radq_core::length::{KILOMETER, METER};
    /// let sum = (1.0 * KILOMETER).checked_add(250.0 * METER).unwrap();
    /// assert_eq!(sum.value(), 1.25);
    /// ```
    pub fn checked_add(self, rhs: Quantity) -> QuantityResult<Quantity> {
        let rhs = rhs.convert(self.unit)?;
        Ok(Quantity::new(self.value + rhs, self.unit))
    }

    /// Subtraction that reports a signature mismatch instead of panicking.
    pub fn checked_sub(self, rhs: Quantity) -> QuantityResult<Quantity> {
        let rhs = rhs.convert(self.unit)?;
        Ok(Quantity::new(self.value - rhs, self.unit))
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(math::abs(self.value), self.unit)
    }

    /// Integral power; the signature's exponents are multiplied by `n`.
    pub fn powi(self, n: i32) -> Self {
        Self::new(math::powi(self.value, n), self.unit.powi(n))
    }

    /// Square root; the signature's exponents are halved.
    ///
    /// ```rust
    /// use radq_core::length::METER;
    /// let side = (9.0 * METER * METER).sqrt();
    /// assert_eq!(side.dimension(), radq_core::Dimension::LENGTH);
    /// assert_eq!(side.value(), 3.0);
    /// ```
    pub fn sqrt(self) -> Self {
        Self::new(math::sqrt(self.value), self.unit.sqrt())
    }

    /// Exponential of a dimensionless quantity.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`](crate::QuantityError::DimensionMismatch) unless the quantity is
    /// dimensionless.
    pub fn exp(self) -> QuantityResult<Quantity> {
        let x = self.convert(ONE)?;
        Ok(Quantity::dimensionless(math::exp(x)))
    }

    /// `exp(x) - 1` of a dimensionless quantity, accurate near zero.
    ///
    /// # Errors
    ///
    /// Same as [`Quantity::exp`].
    pub fn exp_m1(self) -> QuantityResult<Quantity> {
        let x = self.convert(ONE)?;
        Ok(Quantity::dimensionless(math::exp_m1(x)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

/// # Panics
///
/// Adding quantities of different signatures is a programming error and panics; use
/// [`Quantity::checked_add`] to test first.
impl Add for Quantity {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(err) => panic!("cannot add {} to {}: {}", rhs, self, err),
        }
    }
}

impl AddAssign for Quantity {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// # Panics
///
/// Subtracting quantities of different signatures panics; see [`Quantity::checked_sub`].
impl Sub for Quantity {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        match self.checked_sub(rhs) {
            Ok(diff) => diff,
            Err(err) => panic!("cannot subtract {} from {}: {}", rhs, self, err),
        }
    }
}

impl SubAssign for Quantity {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Quantity {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value, self.unit.mul(rhs.unit))
    }
}

impl Div for Quantity {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value, self.unit.per(rhs.unit))
    }
}

/// Re-tags a quantity: `(2.0 * METER) * SECOND` is `2 m s`.
impl Mul<Unit> for Quantity {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Unit) -> Self {
        Self::new(self.value, self.unit.mul(rhs))
    }
}

impl Div<Unit> for Quantity {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Unit) -> Self {
        Self::new(self.value, self.unit.per(rhs))
    }
}

impl Mul<f64> for Quantity {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    #[inline]
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.unit)
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;
    #[inline]
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(self / rhs.value, rhs.unit.recip())
    }
}

impl MulAssign<f64> for Quantity {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

impl DivAssign<f64> for Quantity {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
    }
}

impl Neg for Quantity {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl From<f64> for Quantity {
    #[inline]
    fn from(value: f64) -> Self {
        Self::dimensionless(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

/// Quantities compare by magnitude when they share a signature; same-unit comparisons use the stored values
/// directly, mixed-unit comparisons use coherent SI magnitudes. Quantities of different signatures are never equal.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.unit.is_compatible(&other.unit) {
            return None;
        }
        if self.unit == other.unit {
            self.value.partial_cmp(&other.value)
        } else {
            self.si_value().partial_cmp(&other.si_value())
        }
    }
}

/// Composed dimensionless units (`km / m`) fold into the value and print as a bare number.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.dimension().is_dimensionless() && !self.unit.is_named() {
            self.to_si()
        } else {
            *self
        };
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, shown.value)?,
            None => write!(f, "{}", shown.value)?,
        }
        if shown.unit == ONE {
            Ok(())
        } else {
            write!(f, " {}", shown.unit)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serializes as `{"value": .., "unit": ".."}`.
///
/// Named units write their symbol. Composed units are normalized to coherent SI first and write the SI base
/// expression (for example `"m^-1 kg s^-3"`), which [`Dimension::parse_si`] reads back.
#[cfg(feature = "serde")]
impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Quantity", 2)?;
        if self.unit.is_named() {
            state.serialize_field("value", &self.value)?;
            state.serialize_field("unit", self.unit.symbol())?;
        } else {
            state.serialize_field("value", &self.si_value())?;
            state.serialize_field("unit", &self.dimension().to_string())?;
        }
        state.end()
    }
}

/// Deserializes from `{"value": .., "unit": ".."}`. The unit string is resolved through the catalog first and
/// then as an SI base expression; anything else is rejected.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor;

        impl<'de> Visitor<'de> for QuantityVisitor {
            type Value = Quantity;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let unit = unit.ok_or_else(|| de::Error::missing_field("unit"))?;

                let resolved = Unit::lookup(&unit)
                    .or_else(|| Dimension::parse_si(&unit).map(Unit::coherent))
                    .ok_or_else(|| de::Error::custom(format!("unknown unit '{}'", unit)))?;

                Ok(Quantity::new(value, resolved))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuantityError;
    use crate::units::flux::{FLAM, JANSKY, WATT_PER_SQUARE_METER_PER_NANOMETER};
    use crate::units::length::{ANGSTROM, KILOMETER, METER, NANOMETER, PARSEC};
    use crate::units::temperature::{KELVIN, MILLIKELVIN};
    use crate::units::time::SECOND;
    use crate::units::unitless::PERCENT;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn value_times_unit() {
        let q = 500.0 * NANOMETER;
        assert_eq!(q.value(), 500.0);
        assert_eq!(q.unit(), NANOMETER);
        assert_eq!(q.dimension(), Dimension::LENGTH);
        assert_eq!(NANOMETER * 500.0, q);
    }

    #[test]
    fn from_f64_is_dimensionless() {
        let q: Quantity = 0.25.into();
        assert!(q.dimension().is_dimensionless());
        assert_eq!(q.to_string(), "0.25");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion via `convert` / `to`
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn convert_to_same_unit_is_exact() {
        let q = 123.456 * ANGSTROM;
        assert_eq!(q.convert(ANGSTROM), Ok(123.456));
    }

    #[test]
    fn convert_nanometres_to_metres() {
        let q = 500.0 * NANOMETER;
        assert_relative_eq!(q.convert(METER).unwrap(), 5e-7, max_relative = 1e-15);
    }

    #[test]
    fn to_keeps_signature() {
        let q = (45.0 * KILOMETER).to(PARSEC).unwrap();
        assert_eq!(q.unit(), PARSEC);
        assert_eq!(q.dimension(), Dimension::LENGTH);
    }

    #[test]
    fn convert_mismatch_reports_both_signatures() {
        let err = (1.0 * METER).convert(KELVIN).unwrap_err();
        assert_eq!(
            err,
            QuantityError::DimensionMismatch {
                expected: Dimension::TEMPERATURE,
                found: Dimension::LENGTH,
            }
        );
    }

    #[test]
    fn flux_per_wavelength_is_not_flux_per_frequency() {
        assert!((1.0 * FLAM).convert(JANSKY).is_err());
        assert_relative_eq!(
            (1.0 * FLAM).convert(WATT_PER_SQUARE_METER_PER_NANOMETER).unwrap(),
            1e-2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn to_si_drops_symbol() {
        let q = (2.0 * KILOMETER).to_si();
        assert!(!q.unit().is_named());
        assert_eq!(q.value(), 2_000.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_normalizes_rhs_to_lhs_unit() {
        let sum = (1.0 * KELVIN) + (500.0 * MILLIKELVIN);
        assert_eq!(sum.unit(), KELVIN);
        assert_relative_eq!(sum.value(), 1.5);
    }

    #[test]
    fn sub_and_assign_ops() {
        let mut q = 10.0 * METER;
        q -= 2.0 * METER;
        q += 1.0 * METER;
        q *= 2.0;
        q /= 3.0;
        assert_relative_eq!(q.value(), 6.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_mismatched_panics() {
        let _ = (1.0 * METER) + (1.0 * SECOND);
    }

    #[test]
    fn checked_sub_mismatch_is_error() {
        assert!((1.0 * METER).checked_sub(1.0 * KELVIN).is_err());
    }

    #[test]
    fn mul_div_compose_signatures() {
        let area = (2.0 * METER) * (3.0 * METER);
        assert_eq!(area.dimension(), Dimension::LENGTH.powi(2));
        assert_eq!(area.value(), 6.0);

        let ratio = (6.0 * METER) / (2.0 * METER);
        assert!(ratio.dimension().is_dimensionless());
        assert_eq!(ratio.convert(ONE), Ok(3.0));

        let per_second = 2.0 / (4.0 * SECOND);
        assert_eq!(per_second.dimension(), Dimension::TIME.recip());
        assert_eq!(per_second.value(), 0.5);
    }

    #[test]
    fn mixed_mismatch_in_mul_is_representable() {
        let q = (2.0 * METER) * (3.0 * KELVIN);
        assert_eq!(q.dimension(), Dimension::LENGTH.mul(Dimension::TEMPERATURE));
    }

    #[test]
    fn neg_and_abs() {
        let q = -(5.0 * METER);
        assert_eq!(q.value(), -5.0);
        assert_eq!(q.abs().value(), 5.0);
    }

    #[test]
    fn powi_and_sqrt() {
        let cube = (2.0 * METER).powi(3);
        assert_eq!(cube.value(), 8.0);
        assert_eq!(cube.dimension(), Dimension::LENGTH.powi(3));
        let root = (4.0 * METER).sqrt();
        assert_eq!(root.dimension(), Dimension::LENGTH.sqrt());
        assert_eq!(root.value(), 2.0);
    }

    #[test]
    fn exp_requires_dimensionless() {
        assert!((1.0 * METER).exp().is_err());
        let e = Quantity::dimensionless(1.0).exp().unwrap();
        assert_relative_eq!(e.value(), core::f64::consts::E);
        let pct = (50.0 * PERCENT).exp_m1().unwrap();
        assert_relative_eq!(pct.value(), 0.5f64.exp_m1());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison and display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn compare_across_units() {
        assert_eq!(1.0 * KILOMETER, 1_000.0 * METER);
        assert!(2.0 * KILOMETER > 1_500.0 * METER);
        assert_eq!((1.0 * METER).partial_cmp(&(1.0 * KELVIN)), None);
        assert_ne!(1.0 * METER, 1.0 * KELVIN);
    }

    #[test]
    fn display() {
        assert_eq!((42.5 * KILOMETER).to_string(), "42.5 km");
        assert_eq!(format!("{:.2}", 1.0 / 3.0 * KELVIN), "0.33 K");
        assert_eq!(((2.0 * METER) / (1.0 * SECOND)).to_string(), "2 m s^-1");
    }

    #[test]
    fn display_folds_scaled_dimensionless_ratio() {
        let ratio = (3.0 * KILOMETER) / (1.0 * METER);
        assert_eq!(ratio.to_string(), "3000");
        assert_eq!(format!("{:.1}", ratio), "3000.0");
        assert_eq!((25.0 * PERCENT).to_string(), "25 %");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_through_intermediate_unit(v in -1e12..1e12f64) {
            let q = v * NANOMETER;
            let direct = q.convert(KILOMETER).unwrap();
            let via = q.to(PARSEC).unwrap().convert(KILOMETER).unwrap();
            prop_assert!((direct - via).abs() <= 1e-9 * direct.abs().max(f64::MIN_POSITIVE));
        }

        #[test]
        fn prop_checked_add_commutes_in_si(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let x = a * KILOMETER;
            let y = b * METER;
            let l = x.checked_add(y).unwrap().si_value();
            let r = y.checked_add(x).unwrap().si_value();
            prop_assert!((l - r).abs() <= 1e-9 * l.abs().max(1.0));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serialize_named_unit() {
            let json = serde_json::to_string(&(42.5 * KILOMETER)).unwrap();
            assert_eq!(json, r#"{"value":42.5,"unit":"km"}"#);
        }

        #[test]
        fn serialize_composed_unit_as_si() {
            let v = (1.0 * KILOMETER) / (1.0 * SECOND);
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, r#"{"value":1000.0,"unit":"m s^-1"}"#);
        }

        #[test]
        fn deserialize_catalog_symbol() {
            let q: Quantity = serde_json::from_str(r#"{"value":5000.0,"unit":"K"}"#).unwrap();
            assert_eq!(q, 5_000.0 * KELVIN);
        }

        #[test]
        fn deserialize_si_expression() {
            let q: Quantity =
                serde_json::from_str(r#"{"value":1e7,"unit":"m^-1 kg s^-3"}"#).unwrap();
            assert_relative_eq!(q.convert(FLAM).unwrap(), 1.0, max_relative = 1e-12);
        }

        #[test]
        fn deserialize_unknown_unit() {
            let err = serde_json::from_str::<Quantity>(r#"{"value":1.0,"unit":"cubit"}"#)
                .unwrap_err()
                .to_string();
            assert!(err.contains("unknown unit"));
        }

        #[test]
        fn deserialize_overflowing_exponent_is_an_error() {
            for unit in ["m^1/65536 m^1/65537", "m^2147483647 m", "m^-2147483648/-1"] {
                let json = format!(r#"{{"value":1.0,"unit":"{}"}}"#, unit);
                let err = serde_json::from_str::<Quantity>(&json).unwrap_err().to_string();
                assert!(err.contains("unknown unit"), "{}", err);
            }
        }

        #[test]
        fn deserialize_missing_fields() {
            assert!(serde_json::from_str::<Quantity>(r#"{"unit":"m"}"#).is_err());
            assert!(serde_json::from_str::<Quantity>(r#"{"value":1.0}"#).is_err());
            assert!(serde_json::from_str::<Quantity>(r#""not_an_object""#).is_err());
        }

        #[test]
        fn roundtrip() {
            let original = 123.456 * ANGSTROM;
            let json = serde_json::to_string(&original).unwrap();
            let restored: Quantity = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, original);
        }
    }
}
