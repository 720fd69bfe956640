//! Manifest

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::packing::Packing;

/// Errors that can occur when writing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// IO error
    #[error("IO error")]
    IO(#[from] io::Error),
}

/// Shipping manifest for a solved packing.
///
/// Renders one row per pack size followed by the order totals.
#[derive(Debug, Clone, Copy)]
pub struct Manifest<'a> {
    packing: &'a Packing,
}

impl<'a> Manifest<'a> {
    /// Create a manifest for the given packing.
    pub fn new(packing: &'a Packing) -> Self {
        Self { packing }
    }

    /// Write the manifest table and summary.
    ///
    /// # Errors
    ///
    /// Returns a [`ManifestError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ManifestError> {
        let mut builder = Builder::default();

        builder.push_record(["Pack Size", "Quantity", "Items"]);

        for allocation in self.packing.iter() {
            builder.push_record([
                allocation.size.to_string(),
                allocation.quantity.to_string(),
                allocation.items().to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(0..3), Alignment::right());

        writeln!(out, "\n{table}")?;

        let rows = [
            (" Ordered:", self.packing.order_quantity()),
            (" Shipped:", self.packing.total_items()),
            (" Surplus:", self.packing.surplus()),
            (" Packs:", self.packing.total_packs()),
        ];

        let value_width = rows
            .iter()
            .map(|(_, value)| value.to_string().len())
            .max()
            .unwrap_or(0);

        for (label, value) in rows {
            writeln!(out, "{label:<10}{value:>value_width$}")?;
        }

        writeln!(out)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{packing::PackAllocation, packs::PackSize};

    use super::*;

    #[test]
    fn write_to_renders_allocations_and_totals() -> TestResult {
        let packing = Packing::new(
            501,
            [
                PackAllocation {
                    size: PackSize::new(500).ok_or("zero pack size")?,
                    quantity: 1,
                },
                PackAllocation {
                    size: PackSize::new(250).ok_or("zero pack size")?,
                    quantity: 1,
                },
            ],
        );

        let mut out = Vec::new();

        Manifest::new(&packing).write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Pack Size"), "expected header row");
        assert!(rendered.contains("500"), "expected 500 pack row");
        assert!(rendered.contains("250"), "expected 250 pack row");
        assert!(rendered.contains("Shipped: 750"), "expected shipped total");
        assert!(rendered.contains("Surplus: 249"), "expected surplus");
        assert!(rendered.contains("Packs:     2"), "expected pack count");

        Ok(())
    }
}
