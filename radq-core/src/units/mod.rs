//! The named-unit catalog, grouped by dimension.
//!
//! ## Modules
//!
//! - [`length`]: metre ladder, ångström, astronomical distances.
//! - [`mass`]: kilogram, gram, solar mass.
//! - [`time`]: second through Julian year.
//! - [`temperature`]: kelvin and other absolute scales.
//! - [`energy`]: joule, erg, electronvolt, and the units of `h` and `k_B`.
//! - [`power`]: watt, erg/s, solar luminosity.
//! - [`velocity`]: `Length / Time` units.
//! - [`flux`]: spectral flux density per wavelength (flam) and per frequency (jansky).
//! - [`unitless`]: dimensionless units.
//!
//! Every named unit is reachable by symbol through [`lookup`], which also accepts a few ASCII aliases for
//! symbols that are awkward to type (`"um"`, `"AA"`, `"Msun"`, `"Lsun"`).

use crate::Unit;

pub mod energy;
pub mod flux;
pub mod length;
pub mod mass;
pub mod power;
pub mod temperature;
pub mod time;
pub mod unitless;
pub mod velocity;

const CATALOG: &[&[Unit]] = &[
    length::UNITS,
    mass::UNITS,
    time::UNITS,
    temperature::UNITS,
    energy::UNITS,
    power::UNITS,
    velocity::UNITS,
    flux::UNITS,
    unitless::UNITS,
];

const ALIASES: &[(&str, Unit)] = &[
    ("um", length::MICROMETER),
    ("AA", length::ANGSTROM),
    ("angstrom", length::ANGSTROM),
    ("Msun", mass::SOLAR_MASS),
    ("Lsun", power::SOLAR_LUMINOSITY),
    ("R", temperature::RANKINE),
];

/// Iterates over every named unit in the catalog.
pub fn catalog() -> impl Iterator<Item = Unit> {
    CATALOG.iter().flat_map(|units| units.iter().copied())
}

/// Resolves a unit symbol or alias.
pub fn lookup(symbol: &str) -> Option<Unit> {
    catalog()
        .find(|unit| unit.symbol() == symbol)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == symbol)
                .map(|(_, unit)| *unit)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        let units: Vec<Unit> = catalog().collect();
        for (i, a) in units.iter().enumerate() {
            for b in &units[i + 1..] {
                assert_ne!(a.symbol(), b.symbol(), "duplicate symbol");
            }
        }
    }

    #[test]
    fn aliases_do_not_shadow_symbols() {
        for (alias, _) in ALIASES {
            assert!(catalog().all(|u| u.symbol() != *alias), "{}", alias);
        }
    }

    #[test]
    fn lookup_resolves_symbols_and_aliases() {
        assert_eq!(lookup("flam"), Some(flux::FLAM));
        assert_eq!(lookup("K"), Some(temperature::KELVIN));
        assert_eq!(lookup("um"), Some(length::MICROMETER));
        assert_eq!(lookup("Lsun"), Some(power::SOLAR_LUMINOSITY));
        assert_eq!(lookup("parsec"), None);
    }

    #[test]
    fn every_named_unit_has_finite_positive_ratio() {
        for unit in catalog() {
            assert!(unit.ratio().is_finite() && unit.ratio() > 0.0, "{}", unit);
        }
    }
}
