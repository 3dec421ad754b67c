//! Units: named conversion anchors.

use crate::dimension::Dimension;
use crate::error::{QuantityError, QuantityResult};
use crate::math;
use crate::Quantity;
use core::fmt::{self, Display, Formatter};
use core::ops::{Div, Mul};

/// A unit of measure.
///
/// * `ratio` is the conversion factor from this unit to the *coherent SI unit* of the same [`Dimension`].
///   Example: metres are coherent (`METER.ratio() == 1.0`), so kilometres carry `1000.0` because `1 km = 1000 m`.
///
/// * `symbol` is the printable string (e.g. `"m"` or `"flam"`). Units composed with `*`, `/` or
///   [`Unit::powi`] are *unnamed* (empty symbol) until given a symbol with [`Unit::named`].
///
/// # Invariants
///
/// - `ratio` should be finite and non-zero.
/// - The dimension of a unit never changes; composition produces a new unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit {
    symbol: &'static str,
    dimension: Dimension,
    ratio: f64,
}

/// The dimensionless unit with ratio one.
pub const ONE: Unit = Unit::new("", Dimension::DIMENSIONLESS, 1.0);

impl Unit {
    /// Creates a unit from its symbol, signature and ratio to coherent SI.
    ///
    /// ```rust
    /// use radq_core::{Dimension, Unit};
    /// const FURLONG: Unit = Unit::new("fur", Dimension::LENGTH, 201.168);
    /// assert_eq!(FURLONG.symbol(), "fur");
    /// ```
    #[inline]
    pub const fn new(symbol: &'static str, dimension: Dimension, ratio: f64) -> Self {
        Self {
            symbol,
            dimension,
            ratio,
        }
    }

    /// The coherent SI unit of `dimension` (ratio one, unnamed).
    #[inline]
    pub const fn coherent(dimension: Dimension) -> Self {
        Self::new("", dimension, 1.0)
    }

    /// Printable symbol; empty for composed units.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Dimensional signature.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Conversion factor to the coherent SI unit.
    #[inline]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// `true` when the unit carries a symbol.
    #[inline]
    pub const fn is_named(&self) -> bool {
        !self.symbol.is_empty()
    }

    /// Same unit, new symbol.
    ///
    /// ```rust
    /// use radq_core::energy::JOULE;
    /// use radq_core::temperature::KELVIN;
    /// let jk = JOULE.per(KELVIN).named("J/K");
    /// assert_eq!(jk.to_string(), "J/K");
    /// ```
    #[inline]
    pub const fn named(self, symbol: &'static str) -> Self {
        Self::new(symbol, self.dimension, self.ratio)
    }

    /// The same dimension scaled by `factor` (unnamed).
    #[inline]
    pub const fn scaled(self, factor: f64) -> Self {
        Self::new("", self.dimension, self.ratio * factor)
    }

    /// `true` when both units measure the same dimension.
    #[inline]
    pub const fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension.equals(&other.dimension)
    }

    const fn is_one(&self) -> bool {
        self.symbol.is_empty() && self.ratio == 1.0 && self.dimension.is_dimensionless()
    }

    /// Product unit. Multiplying by [`ONE`] keeps the unit (and its symbol) unchanged.
    pub const fn mul(self, rhs: Unit) -> Unit {
        if rhs.is_one() {
            return self;
        }
        if self.is_one() {
            return rhs;
        }
        Self::new("", self.dimension.mul(rhs.dimension), self.ratio * rhs.ratio)
    }

    /// Quotient unit `self / rhs`.
    pub const fn per(self, rhs: Unit) -> Unit {
        if rhs.is_one() {
            return self;
        }
        Self::new("", self.dimension.div(rhs.dimension), self.ratio / rhs.ratio)
    }

    /// Reciprocal unit.
    pub const fn recip(self) -> Unit {
        ONE.per(self)
    }

    /// Integral power of a unit.
    ///
    /// ```rust
    /// use radq_core::length::CENTIMETER;
    /// let cm2 = CENTIMETER.powi(2);
    /// assert!((cm2.ratio() - 1e-4).abs() < 1e-20);
    /// ```
    pub const fn powi(self, n: i32) -> Unit {
        if n == 1 {
            return self;
        }
        let mut ratio = 1.0;
        let mut i = 0;
        let count = n.unsigned_abs();
        while i < count {
            ratio *= self.ratio;
            i += 1;
        }
        if n < 0 {
            ratio = 1.0 / ratio;
        }
        Self::new("", self.dimension.powi(n), ratio)
    }

    /// Rational power `num / den` of a unit.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0`.
    pub fn powr(self, num: i32, den: i32) -> Unit {
        let dimension = self.dimension.powr(num, den);
        let ratio = math::powf(self.ratio, num as f64 / den as f64);
        Self::new("", dimension, ratio)
    }

    /// Square root of a unit.
    pub fn sqrt(self) -> Unit {
        Self::new("", self.dimension.sqrt(), math::sqrt(self.ratio))
    }

    /// Factor that re-expresses a magnitude in `self` as a magnitude in `target`.
    ///
    /// The factor is computed once as a single division of the two ratios.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] when the two units measure different dimensions.
    pub fn conversion_factor(&self, target: &Unit) -> QuantityResult<f64> {
        QuantityError::ensure_compatible(target.dimension, self.dimension)?;
        if self.ratio == target.ratio {
            return Ok(1.0);
        }
        Ok(self.ratio / target.ratio)
    }

    /// Resolves a symbol (or a registered alias) through the unit catalog.
    ///
    /// ```rust
    /// use radq_core::Unit;
    /// assert_eq!(Unit::lookup("nm"), Some(radq_core::length::NANOMETER));
    /// assert_eq!(Unit::lookup("AA"), Some(radq_core::length::ANGSTROM));
    /// assert!(Unit::lookup("cubit").is_none());
    /// ```
    pub fn lookup(symbol: &str) -> Option<Unit> {
        crate::units::lookup(symbol)
    }
}

impl Mul for Unit {
    type Output = Unit;
    #[inline]
    fn mul(self, rhs: Unit) -> Unit {
        Unit::mul(self, rhs)
    }
}

impl Div for Unit {
    type Output = Unit;
    #[inline]
    fn div(self, rhs: Unit) -> Unit {
        Unit::per(self, rhs)
    }
}

/// `value * unit` builds a quantity expressed in `unit`.
impl Mul<Unit> for f64 {
    type Output = Quantity;
    #[inline]
    fn mul(self, unit: Unit) -> Quantity {
        Quantity::new(self, unit)
    }
}

impl Mul<f64> for Unit {
    type Output = Quantity;
    #[inline]
    fn mul(self, value: f64) -> Quantity {
        Quantity::new(value, self)
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_named() {
            f.write_str(self.symbol)
        } else if self.ratio == 1.0 {
            write!(f, "{}", self.dimension)
        } else {
            write!(f, "{:e} {}", self.ratio, self.dimension)
        }
    }
}
