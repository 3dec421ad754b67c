//! Dimensional signatures.
//!
//! A [`Dimension`] is a fixed vector of rational [`Exponent`]s over the seven SI [`BaseDimension`]s. Two quantities
//! are compatible exactly when their signatures are equal. Signatures compose under multiplication (exponents add),
//! division (exponents subtract) and rational powers (exponents scale), which is what lets `sqrt` of an area come
//! back as a length.
//!
//! All composition methods are `const fn`, so derived signatures are evaluated at compile time:
//!
//! ```rust
//! use radq_core::Dimension;
//!
//! const VELOCITY: Dimension = Dimension::LENGTH.div(Dimension::TIME);
//! assert_eq!(VELOCITY, Dimension::VELOCITY);
//! assert_eq!(VELOCITY.to_string(), "m s^-1");
//! ```

use core::fmt;
use core::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of base dimensions tracked by a [`Dimension`].
pub const BASE_COUNT: usize = 7;

/// SI base dimensions, in the order they are stored inside a [`Dimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BaseDimension {
    /// Length (metre).
    Length,
    /// Mass (kilogram).
    Mass,
    /// Time (second).
    Time,
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Amount of substance (mole).
    Amount,
    /// Luminous intensity (candela).
    LuminousIntensity,
}

impl BaseDimension {
    /// Every base dimension, in storage order.
    pub const ALL: [BaseDimension; BASE_COUNT] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this base dimension inside the exponent vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the coherent SI unit for this base dimension.
    pub const fn si_symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }

    /// Inverse of [`BaseDimension::si_symbol`].
    pub fn from_si_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.si_symbol() == symbol)
    }
}

// Operands are widened from i32, so `abs` cannot overflow.
const fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.abs();
    let mut b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Lowest terms with a positive denominator, or `None` if either term leaves `±i32::MAX`.
const fn reduce(num: i64, den: i64) -> Option<Exponent> {
    if den == 0 {
        return None;
    }
    let sign = if den < 0 { -1 } else { 1 };
    // gcd(0, den) == |den|, which reduces zero to 0/1.
    let g = gcd(num, den);
    let num = sign * num / g;
    let den = sign * den / g;
    let max = i32::MAX as i64;
    if num < -max || num > max || den > max {
        return None;
    }
    Some(Exponent {
        num: num as i32,
        den: den as i32,
    })
}

/// A rational exponent kept in lowest terms with a positive denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exponent {
    num: i32,
    den: i32,
}

impl Exponent {
    /// The zero exponent (base dimension absent).
    pub const ZERO: Self = Self { num: 0, den: 1 };
    /// The unit exponent.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Builds `num / den` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0` or the reduced numerator is `i32::MIN`.
    ///
    /// ```rust
    /// use radq_core::Exponent;
    /// let e = Exponent::new(2, -4);
    /// assert_eq!((e.numer(), e.denom()), (-1, 2));
    /// ```
    pub const fn new(num: i32, den: i32) -> Self {
        assert!(den != 0, "exponent denominator must be non-zero");
        match Self::checked_new(num, den) {
            Some(e) => e,
            None => panic!("exponent overflow"),
        }
    }

    /// Fallible [`Exponent::new`]: `None` for a zero denominator or when the reduced terms do
    /// not fit.
    pub const fn checked_new(num: i32, den: i32) -> Option<Self> {
        reduce(num as i64, den as i64)
    }

    /// An integral exponent.
    ///
    /// # Panics
    ///
    /// Panics if `n == i32::MIN`.
    #[inline]
    pub const fn integer(n: i32) -> Self {
        assert!(n != i32::MIN, "exponent overflow");
        Self { num: n, den: 1 }
    }

    /// Numerator.
    #[inline]
    pub const fn numer(self) -> i32 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn denom(self) -> i32 {
        self.den
    }

    /// `true` for the zero exponent.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// `true` when the denominator is one.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Sum of two exponents.
    ///
    /// # Panics
    ///
    /// Panics on overflow; see [`Exponent::checked_plus`].
    pub const fn plus(self, rhs: Self) -> Self {
        match self.checked_plus(rhs) {
            Some(e) => e,
            None => panic!("exponent overflow"),
        }
    }

    /// Sum of two exponents, `None` if the result does not fit.
    pub const fn checked_plus(self, rhs: Self) -> Option<Self> {
        let (a, b, c, d) = (self.num as i64, self.den as i64, rhs.num as i64, rhs.den as i64);
        reduce(a * d + c * b, b * d)
    }

    /// Difference of two exponents.
    pub const fn minus(self, rhs: Self) -> Self {
        self.plus(rhs.negate())
    }

    /// Additive inverse.
    #[inline]
    pub const fn negate(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }

    /// Product with the rational `num / den`.
    pub const fn times(self, num: i32, den: i32) -> Self {
        match reduce(self.num as i64 * num as i64, self.den as i64 * den as i64) {
            Some(e) => e,
            None => panic!("exponent overflow"),
        }
    }

    /// Parses `"3"`, `"-2"` or `"1/2"`.
    pub fn parse(text: &str) -> Option<Self> {
        match text.split_once('/') {
            Some((num, den)) => {
                let num: i32 = num.trim().parse().ok()?;
                let den: i32 = den.trim().parse().ok()?;
                Self::checked_new(num, den)
            }
            None => Self::checked_new(text.trim().parse().ok()?, 1),
        }
    }

    /// Value as a float, used when raising conversion ratios to this exponent.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Dimensional signature: one rational exponent per [`BaseDimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    exponents: [Exponent; BASE_COUNT],
}

impl Dimension {
    /// Signature of pure numbers.
    pub const DIMENSIONLESS: Self = Self {
        exponents: [Exponent::ZERO; BASE_COUNT],
    };

    /// Length.
    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    /// Mass.
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    /// Time.
    pub const TIME: Self = Self::base(BaseDimension::Time);
    /// Electric current.
    pub const CURRENT: Self = Self::base(BaseDimension::Current);
    /// Thermodynamic temperature.
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    /// Amount of substance.
    pub const AMOUNT: Self = Self::base(BaseDimension::Amount);
    /// Luminous intensity.
    pub const LUMINOUS_INTENSITY: Self = Self::base(BaseDimension::LuminousIntensity);

    /// `L T^-1`
    pub const VELOCITY: Self = Self::LENGTH.div(Self::TIME);
    /// `M L^2 T^-2`
    pub const ENERGY: Self = Self::MASS
        .mul(Self::LENGTH.powi(2))
        .div(Self::TIME.powi(2));
    /// `M L^2 T^-3`
    pub const POWER: Self = Self::ENERGY.div(Self::TIME);
    /// Energy times time, the signature of Planck's constant.
    pub const ACTION: Self = Self::ENERGY.mul(Self::TIME);
    /// Energy per temperature, the signature of Boltzmann's constant.
    pub const ENTROPY: Self = Self::ENERGY.div(Self::TEMPERATURE);
    /// Power per area per wavelength (`M L^-1 T^-3`).
    pub const SPECTRAL_FLUX_DENSITY_WAVELENGTH: Self = Self::POWER.div(Self::LENGTH.powi(3));
    /// Power per area per frequency (`M T^-2`).
    pub const SPECTRAL_FLUX_DENSITY_FREQUENCY: Self =
        Self::POWER.div(Self::LENGTH.powi(2)).mul(Self::TIME);

    /// Signature with a unit exponent on `base` and zero elsewhere.
    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [Exponent::ZERO; BASE_COUNT];
        exponents[base.index()] = Exponent::ONE;
        Self { exponents }
    }

    /// Builds a signature from an explicit exponent vector.
    #[inline]
    pub const fn from_exponents(exponents: [Exponent; BASE_COUNT]) -> Self {
        Self { exponents }
    }

    /// Exponent carried by `base`.
    #[inline]
    pub const fn exponent(&self, base: BaseDimension) -> Exponent {
        self.exponents[base.index()]
    }

    /// The full exponent vector.
    #[inline]
    pub const fn exponents(&self) -> &[Exponent; BASE_COUNT] {
        &self.exponents
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < BASE_COUNT {
            if !self.exponents[i].is_zero() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Equality usable in constant contexts.
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < BASE_COUNT {
            let (a, b) = (self.exponents[i], other.exponents[i]);
            if a.num != b.num || a.den != b.den {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Product signature: exponents add.
    pub const fn mul(self, rhs: Self) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] = self.exponents[i].plus(rhs.exponents[i]);
            i += 1;
        }
        Self { exponents }
    }

    /// Quotient signature: exponents subtract.
    pub const fn div(self, rhs: Self) -> Self {
        self.mul(rhs.recip())
    }

    /// Reciprocal signature.
    pub const fn recip(self) -> Self {
        self.powr(-1, 1)
    }

    /// Integral power.
    pub const fn powi(self, n: i32) -> Self {
        self.powr(n, 1)
    }

    /// Rational power `num / den`.
    pub const fn powr(self, num: i32, den: i32) -> Self {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] = self.exponents[i].times(num, den);
            i += 1;
        }
        Self { exponents }
    }

    /// Square root: every exponent is halved.
    pub const fn sqrt(self) -> Self {
        self.powr(1, 2)
    }

    /// Parses the SI base-unit expression produced by [`Display`](fmt::Display), e.g. `"kg m^-1 s^-3"` or
    /// `"m^1/2"`. The empty string and `"1"` parse as dimensionless. Repeated symbols accumulate.
    ///
    /// ```rust
    /// use radq_core::Dimension;
    /// let d = Dimension::parse_si("kg m^-1 s^-3").unwrap();
    /// assert_eq!(d, Dimension::SPECTRAL_FLUX_DENSITY_WAVELENGTH);
    /// assert!(Dimension::parse_si("furlong").is_none());
    /// ```
    pub fn parse_si(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text == "1" {
            return Some(Self::DIMENSIONLESS);
        }

        let mut exponents = [Exponent::ZERO; BASE_COUNT];
        for token in text.split_whitespace() {
            let (symbol, exponent) = match token.split_once('^') {
                Some((symbol, exponent)) => (symbol, Exponent::parse(exponent)?),
                None => (token, Exponent::ONE),
            };
            let base = BaseDimension::from_si_symbol(symbol)?;
            let slot = &mut exponents[base.index()];
            *slot = slot.checked_plus(exponent)?;
        }
        Some(Self { exponents })
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl Mul for Dimension {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dimension::mul(self, rhs)
    }
}

impl Div for Dimension {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Dimension::div(self, rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for base in BaseDimension::ALL {
            let e = self.exponent(base);
            if e.is_zero() {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if e == Exponent::ONE {
                f.write_str(base.si_symbol())?;
            } else {
                write!(f, "{}^{}", base.si_symbol(), e)?;
            }
        }
        Ok(())
    }
}
