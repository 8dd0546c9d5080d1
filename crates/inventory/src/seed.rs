//! Demo catalog: a few bike parts and two bikes built from them.

use stockroom_core::{DomainResult, Price, StockLevels};

use crate::part::Part;
use crate::product::Product;
use crate::store::Inventory;

/// Adds the demo parts and products using inventory-issued ids.
pub fn seed_demo(inventory: &Inventory) -> DomainResult<()> {
    let mut brakes = Part::in_house(
        inventory.next_part_id(),
        "Brakes",
        Price::from_cents(1500),
        StockLevels::new(10, 1, 20),
    );
    brakes.set_machine_id(1234)?;
    let brakes = inventory.add_part(brakes);

    let mut wheel = Part::outsourced(
        inventory.next_part_id(),
        "Wheel",
        Price::from_cents(1100),
        StockLevels::new(16, 1, 20),
    );
    wheel.set_company_name("Wheels 'R Us")?;
    let wheel = inventory.add_part(wheel);

    let mut seat = Part::in_house(
        inventory.next_part_id(),
        "Seat",
        Price::from_cents(1500),
        StockLevels::new(10, 1, 20),
    );
    seat.set_machine_id(5555)?;
    let seat = inventory.add_part(seat);

    let mut giant_bike = Product::new(
        inventory.next_product_id(),
        "Giant Bike",
        Price::from_cents(9999),
        StockLevels::new(5, 1, 10),
    );
    for part in [&wheel, &wheel, &seat, &brakes] {
        giant_bike.add_associated_part(part.clone());
    }
    inventory.add_product(giant_bike);

    let mut tricycle = Product::new(
        inventory.next_product_id(),
        "Tricycle",
        Price::from_cents(19999),
        StockLevels::new(3, 1, 5),
    );
    for part in [&wheel, &wheel, &wheel, &seat, &brakes] {
        tricycle.add_associated_part(part.clone());
    }
    inventory.add_product(tricycle);

    tracing::info!(parts = 3, products = 2, "seeded demo catalog");
    Ok(())
}
