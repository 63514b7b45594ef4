//! Travel package models and the static catalog

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Season category that drives the seasonal price adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    Peak,
    Off,
    Shoulder,
}

impl Season {
    /// Multiplier applied to the base price for this season.
    ///
    /// Peak carries a 25% surcharge, Off a 15% discount, Shoulder is unchanged.
    pub fn multiplier(self) -> Decimal {
        match self {
            Season::Peak => dec!(1.25),
            Season::Off => dec!(0.85),
            Season::Shoulder => Decimal::ONE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Peak => "Peak",
            Season::Off => "Off",
            Season::Shoulder => "Shoulder",
        }
    }
}

/// Package construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackageError {
    #[error("Package id must not be empty")]
    EmptyId,

    #[error("Package {id} must last at least one day")]
    InvalidDuration { id: String },

    #[error("Package {id} has a negative base price: {price}")]
    NegativePrice { id: String, price: Decimal },
}

/// A static travel offering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub id: String,
    pub destination: String,
    pub duration_days: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub season: Season,
}

impl Package {
    /// Build a package, rejecting empty ids, zero-day trips and negative prices
    pub fn new(
        id: impl Into<String>,
        destination: impl Into<String>,
        duration_days: u32,
        base_price: Decimal,
        season: Season,
    ) -> Result<Self, PackageError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PackageError::EmptyId);
        }
        if duration_days == 0 {
            return Err(PackageError::InvalidDuration { id });
        }
        if base_price < Decimal::ZERO {
            return Err(PackageError::NegativePrice {
                id,
                price: base_price,
            });
        }

        Ok(Self {
            id,
            destination: destination.into(),
            duration_days,
            base_price,
            season,
        })
    }

    /// Display label: the id with its first letter upper-cased ("beach" -> "Beach")
    pub fn label(&self) -> String {
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Ordered, immutable list of packages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    packages: Vec<Package>,
}

impl Catalog {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// Look up a package by id. Empty or unknown ids return `None`.
    pub fn get(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// Base price for a package id, zero when the id is unknown
    pub fn base_price(&self, id: &str) -> Decimal {
        self.get(id).map(|p| p.base_price).unwrap_or(Decimal::ZERO)
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for Catalog {
    /// The agency's published packages
    fn default() -> Self {
        let entries = [
            ("beach", "Maldives", 7, dec!(2500), Season::Peak),
            ("mountain", "Nepal", 10, dec!(1800), Season::Off),
            ("ancient", "Rome, Italy", 5, dec!(2200), Season::Peak),
            ("city", "Tokyo, Japan", 7, dec!(3000), Season::Shoulder),
        ];

        let packages = entries
            .into_iter()
            .filter_map(|(id, destination, days, price, season)| {
                match Package::new(id, destination, days, price, season) {
                    Ok(package) => Some(package),
                    Err(e) => {
                        tracing::error!("Skipping invalid catalog entry: {}", e);
                        None
                    }
                }
            })
            .collect();

        Self::new(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_multipliers() {
        assert_eq!(Season::Peak.multiplier(), dec!(1.25));
        assert_eq!(Season::Off.multiplier(), dec!(0.85));
        assert_eq!(Season::Shoulder.multiplier(), dec!(1));
    }

    #[test]
    fn test_package_new_rejects_empty_id() {
        let err = Package::new("  ", "Nowhere", 3, dec!(100), Season::Off).unwrap_err();
        assert_eq!(err, PackageError::EmptyId);
    }

    #[test]
    fn test_package_new_rejects_zero_days() {
        let err = Package::new("trip", "Nowhere", 0, dec!(100), Season::Off).unwrap_err();
        assert!(matches!(err, PackageError::InvalidDuration { .. }));
        assert!(err.to_string().contains("trip"));
    }

    #[test]
    fn test_package_new_rejects_negative_price() {
        let err = Package::new("trip", "Nowhere", 2, dec!(-1), Season::Off).unwrap_err();
        assert!(matches!(err, PackageError::NegativePrice { .. }));
    }

    #[test]
    fn test_package_new_accepts_free_package() {
        let package = Package::new("free", "Home", 1, dec!(0), Season::Shoulder).unwrap();
        assert_eq!(package.base_price, Decimal::ZERO);
    }

    #[test]
    fn test_package_label_capitalizes_id() {
        let package = Package::new("beach", "Maldives", 7, dec!(2500), Season::Peak).unwrap();
        assert_eq!(package.label(), "Beach");
    }

    #[test]
    fn test_default_catalog_contents() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 4);

        let ids: Vec<&str> = catalog.packages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["beach", "mountain", "ancient", "city"]);

        let city = catalog.get("city").unwrap();
        assert_eq!(city.destination, "Tokyo, Japan");
        assert_eq!(city.season, Season::Shoulder);
    }

    #[test]
    fn test_base_price_unknown_id_is_zero() {
        let catalog = Catalog::default();
        assert_eq!(catalog.base_price("mountain"), dec!(1800));
        assert_eq!(catalog.base_price("moon"), Decimal::ZERO);
        assert_eq!(catalog.base_price(""), Decimal::ZERO);
    }
}
