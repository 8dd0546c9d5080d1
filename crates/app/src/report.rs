//! Catalog listings for stdout.

use std::fmt::Write as _;

use serde::Serialize;

use stockroom_core::Entity;
use stockroom_inventory::{PartRef, PartSource, ProductRef};

#[derive(Debug, Serialize)]
struct CatalogView<'a> {
    parts: &'a [PartRef],
    products: &'a [ProductRef],
}

pub fn render_json(parts: &[PartRef], products: &[ProductRef]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CatalogView { parts, products })
}

pub fn render_text(parts: &[PartRef], products: &[ProductRef]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Parts ({})", parts.len());
    for part in parts {
        let source = match part.source() {
            PartSource::InHouse { machine_id } => format!("in-house, machine {machine_id}"),
            PartSource::Outsourced { company_name } => format!("outsourced, {company_name}"),
        };
        let _ = writeln!(
            out,
            "  {:>5}  {:<20} stock {:>4} [{}..{}]  ${:>9}  ({source})",
            part.id(),
            part.name(),
            part.stock(),
            part.min(),
            part.max(),
            part.price().to_string(),
        );
    }

    let _ = writeln!(out, "Products ({})", products.len());
    for product in products {
        let used: Vec<&str> = product.associated_parts().iter().map(|p| p.name()).collect();
        let _ = writeln!(
            out,
            "  {:>5}  {:<20} stock {:>4} [{}..{}]  ${:>9}  parts: {}",
            product.id(),
            product.name(),
            product.stock(),
            product.min(),
            product.max(),
            product.price().to_string(),
            if used.is_empty() { "-".to_string() } else { used.join(", ") },
        );
    }

    out
}
