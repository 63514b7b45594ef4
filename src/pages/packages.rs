//! Package price table

use crate::models::{Catalog, Package};
use crate::pricing::{format_money, seasonal_price};

/// One rendered row of the package table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRow {
    pub label: String,
    pub destination: String,
    pub duration: String,
    pub base_price: String,
    pub final_price: String,
}

impl PackageRow {
    pub fn from_package(package: &Package) -> Self {
        Self {
            label: package.label(),
            destination: package.destination.clone(),
            duration: format!("{} Days", package.duration_days),
            base_price: format_money(package.base_price),
            final_price: format_money(seasonal_price(package)),
        }
    }

    /// Table cells in column order
    pub fn cells(&self) -> [&str; 5] {
        [
            self.label.as_str(),
            self.destination.as_str(),
            self.duration.as_str(),
            self.base_price.as_str(),
            self.final_price.as_str(),
        ]
    }
}

/// Build every row from scratch. Prices are derived from the catalog on each
/// call, never from a previous render.
pub fn render_rows(catalog: &Catalog) -> Vec<PackageRow> {
    catalog.packages().iter().map(PackageRow::from_package).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rows_for_default_catalog() {
        let rows = render_rows(&Catalog::default());
        assert_eq!(rows.len(), 4);

        assert_eq!(
            rows[0].cells(),
            ["Beach", "Maldives", "7 Days", "$2500.00", "$3125.00"]
        );
        assert_eq!(
            rows[1].cells(),
            ["Mountain", "Nepal", "10 Days", "$1800.00", "$1530.00"]
        );
        assert_eq!(
            rows[2].cells(),
            ["Ancient", "Rome, Italy", "5 Days", "$2200.00", "$2750.00"]
        );
        assert_eq!(
            rows[3].cells(),
            ["City", "Tokyo, Japan", "7 Days", "$3000.00", "$3000.00"]
        );
    }

    #[test]
    fn test_rerender_is_identical() {
        let catalog = Catalog::default();
        let first = render_rows(&catalog);
        let second = render_rows(&catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_cells_keep_raw_text() {
        let package =
            Package::new("reef", "Turks & <Caicos>", 4, dec!(950), Season::Shoulder).unwrap();
        let row = PackageRow::from_package(&package);
        assert_eq!(
            row.cells(),
            ["Reef", "Turks & <Caicos>", "4 Days", "$950.00", "$950.00"]
        );
    }

    #[test]
    fn test_empty_catalog_renders_nothing() {
        assert!(render_rows(&Catalog::new(vec![])).is_empty());
    }
}
