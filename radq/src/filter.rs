//! Photometric filter curves.
//!
//! A [`Filter`] stores a transmission curve on a wavelength grid normalized to nanometres at construction, so
//! downstream code can feed the grid straight into [`BlackbodyEvaluator::spectrum`](crate::BlackbodyEvaluator::spectrum).

use core::fmt;
use core::str::FromStr;

use radq_core::length::NANOMETER;
use radq_core::{Quantity, QuantityError, Unit};
use serde::{Deserialize, Serialize};

/// Errors raised while building a [`Filter`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// The wavelength unit is not a length.
    #[error("invalid wavelength unit: {0}")]
    Dimension(#[from] QuantityError),

    /// Wavelength and transmission arrays differ in length.
    #[error("wavelength has {wavelength} samples but transmission has {transmission}")]
    LengthMismatch {
        /// Number of wavelength samples.
        wavelength: usize,
        /// Number of transmission samples.
        transmission: usize,
    },

    /// A response kind other than `photon` or `energy`.
    #[error("unknown response kind '{0}': only photon and energy are allowed")]
    UnknownResponseKind(String),
}

/// What the detector behind a filter counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Photon-counting detector.
    #[default]
    Photon,
    /// Energy-integrating detector.
    Energy,
}

impl ResponseKind {
    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            ResponseKind::Photon => "photon",
            ResponseKind::Energy => "energy",
        }
    }
}

impl FromStr for ResponseKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photon" => Ok(ResponseKind::Photon),
            "energy" => Ok(ResponseKind::Energy),
            other => Err(FilterError::UnknownResponseKind(other.to_string())),
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named transmission curve sampled on a nanometre grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    name: String,
    wavelength_nm: Vec<f64>,
    transmission: Vec<f64>,
    kind: ResponseKind,
}

impl Filter {
    /// Builds a filter, re-expressing `wavelength` (given in `wavelength_unit`) in nanometres.
    ///
    /// The unit factor is computed once and applied to every sample.
    ///
    /// # Errors
    ///
    /// - [`FilterError::Dimension`] when `wavelength_unit` is not a length.
    /// - [`FilterError::LengthMismatch`] when the two arrays differ in length.
    ///
    /// ```rust
    /// use radq::filter::{Filter, ResponseKind};
    /// use radq::length::ANGSTROM;
    ///
    /// let f = Filter::new("V", vec![5_000.0, 5_500.0], vec![0.5, 0.9], ANGSTROM, ResponseKind::Photon).unwrap();
    /// assert!((f.wavelength_nm()[0] - 500.0).abs() < 1e-9);
    /// assert!((f.wavelength_nm()[1] - 550.0).abs() < 1e-9);
    /// ```
    pub fn new(
        name: impl Into<String>,
        wavelength: Vec<f64>,
        transmission: Vec<f64>,
        wavelength_unit: Unit,
        kind: ResponseKind,
    ) -> Result<Self, FilterError> {
        let name = name.into();
        if wavelength.len() != transmission.len() {
            return Err(FilterError::LengthMismatch {
                wavelength: wavelength.len(),
                transmission: transmission.len(),
            });
        }

        let convfac = Quantity::new(1.0, wavelength_unit).convert(NANOMETER)?;
        let wavelength_nm = wavelength.into_iter().map(|w| w * convfac).collect();
        log::debug!(
            "filter '{}': {} samples, {} -> nm factor {}, {} response",
            name,
            transmission.len(),
            wavelength_unit,
            convfac,
            kind
        );

        Ok(Self {
            name,
            wavelength_nm,
            transmission,
            kind,
        })
    }

    /// Filter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wavelength grid in nanometres.
    pub fn wavelength_nm(&self) -> &[f64] {
        &self.wavelength_nm
    }

    /// Transmission at each grid point.
    pub fn transmission(&self) -> &[f64] {
        &self.transmission
    }

    /// Detector response kind.
    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.wavelength_nm.len()
    }

    /// `true` when the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.wavelength_nm.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use radq_core::length::{ANGSTROM, METER, MICROMETER};
    use radq_core::temperature::KELVIN;
    use radq_core::Dimension;

    #[test]
    fn response_kind_parses_exactly_two_names() {
        assert_eq!("photon".parse::<ResponseKind>(), Ok(ResponseKind::Photon));
        assert_eq!("energy".parse::<ResponseKind>(), Ok(ResponseKind::Energy));
        for bad in ["Photon", "ENERGY", "", "flux", " photon"] {
            assert_eq!(
                bad.parse::<ResponseKind>(),
                Err(FilterError::UnknownResponseKind(bad.to_string()))
            );
        }
    }

    #[test]
    fn response_kind_display_round_trips() {
        for kind in [ResponseKind::Photon, ResponseKind::Energy] {
            assert_eq!(kind.to_string().parse::<ResponseKind>(), Ok(kind));
        }
    }

    #[test]
    fn wavelength_is_normalized_to_nanometres() {
        let f = Filter::new(
            "J",
            vec![1.1, 1.25, 1.4],
            vec![0.2, 0.8, 0.3],
            MICROMETER,
            ResponseKind::Energy,
        )
        .unwrap();
        assert_eq!(f.name(), "J");
        assert_eq!(f.kind(), ResponseKind::Energy);
        assert_eq!(f.len(), 3);
        assert_eq!(f.transmission(), &[0.2, 0.8, 0.3]);
        for (got, want) in f.wavelength_nm().iter().zip([1_100.0, 1_250.0, 1_400.0]) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
    }

    #[test]
    fn metre_input() {
        let f = Filter::new("x", vec![5e-7], vec![1.0], METER, ResponseKind::Photon).unwrap();
        assert_relative_eq!(f.wavelength_nm()[0], 500.0, max_relative = 1e-12);
    }

    #[test]
    fn non_length_unit_is_rejected() {
        let err =
            Filter::new("bad", vec![1.0], vec![1.0], KELVIN, ResponseKind::Photon).unwrap_err();
        assert_eq!(
            err,
            FilterError::Dimension(QuantityError::DimensionMismatch {
                expected: Dimension::LENGTH,
                found: Dimension::TEMPERATURE,
            })
        );
    }

    #[test]
    fn array_lengths_must_match() {
        let err = Filter::new("bad", vec![1.0, 2.0], vec![1.0], ANGSTROM, ResponseKind::Photon)
            .unwrap_err();
        assert_eq!(
            err,
            FilterError::LengthMismatch {
                wavelength: 2,
                transmission: 1
            }
        );
    }

    #[test]
    fn empty_filter() {
        let f =
            Filter::new("empty", Vec::new(), Vec::new(), ANGSTROM, ResponseKind::Photon).unwrap();
        assert!(f.is_empty());
    }
}
