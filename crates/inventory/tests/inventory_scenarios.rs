//! End-to-end flows as a list/form UI drives them.

use std::sync::Arc;

use stockroom_core::{Entity, PartId, Price, ProductId, StockLevels};
use stockroom_inventory::{
    Inventory, Part, PartForm, PartFormSource, PartRef, Product, ProductForm, SearchQuery,
};

fn names<T: Entity>(items: &[Arc<T>]) -> Vec<String> {
    items.iter().map(|i| i.name().to_string()).collect()
}

/// Brakes (1), Wheel (2) and a Giant Bike (1000) built from [Wheel, Wheel, Brakes].
fn bike_shop() -> (Inventory, PartRef, PartRef) {
    let inventory = Inventory::new();

    let mut brakes = Part::in_house(
        inventory.next_part_id(),
        "Brakes",
        Price::from_cents(1500),
        StockLevels::new(10, 1, 20),
    );
    brakes.set_machine_id(1234).unwrap();
    let brakes = inventory.add_part(brakes);

    let mut wheel = Part::outsourced(
        inventory.next_part_id(),
        "Wheel",
        Price::from_cents(1100),
        StockLevels::new(16, 1, 20),
    );
    wheel.set_company_name("Wheels R Us").unwrap();
    let wheel = inventory.add_part(wheel);

    let mut bike = Product::new(
        inventory.next_product_id(),
        "Giant Bike",
        Price::from_cents(29999),
        StockLevels::new(5, 1, 10),
    );
    bike.add_associated_part(wheel.clone());
    bike.add_associated_part(wheel.clone());
    bike.add_associated_part(brakes.clone());
    inventory.add_product(bike);

    (inventory, brakes, wheel)
}

#[test]
fn bike_shop_scenario() {
    let (inventory, brakes, wheel) = bike_shop();

    assert_eq!(brakes.id(), PartId::new(1));
    assert_eq!(wheel.id(), PartId::new(2));

    let bike = inventory.lookup_product(ProductId::new(1000)).unwrap();
    assert_eq!(names(bike.associated_parts()), ["Wheel", "Wheel", "Brakes"]);
    assert!(Arc::ptr_eq(&bike.associated_parts()[0], &wheel));

    let found = inventory.lookup_parts_by_name("wheel");
    assert_eq!(found.len(), 1);
    assert!(Arc::ptr_eq(&found[0], &wheel));
}

#[test]
fn add_part_through_form() {
    let inventory = Inventory::new();
    let form = PartForm {
        name: "Chain".into(),
        price: "24.50".into(),
        stock: "8".into(),
        min: "2".into(),
        max: "30".into(),
        source: PartFormSource::Outsourced {
            company_name: "Links Ltd".into(),
        },
    };

    let draft = form.validate().unwrap();
    let part = draft.into_part(inventory.next_part_id()).unwrap();
    inventory.add_part(part);

    let chain = inventory.lookup_part(PartId::new(1)).unwrap();
    assert_eq!(chain.price(), Price::from_cents(2450));
    assert_eq!(chain.company_name(), Some("Links Ltd"));
}

#[test]
fn rejected_form_does_not_touch_inventory() {
    let inventory = Inventory::new();
    let form = PartForm {
        name: "Chain".into(),
        price: "24.50".into(),
        stock: "80".into(),
        min: "2".into(),
        max: "30".into(),
        source: PartFormSource::InHouse {
            machine_id: "7".into(),
        },
    };

    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.first(),
        Some("Stock level must be within the minimum and maximum stock values.")
    );
    assert!(inventory.all_parts().is_empty());
    // No id was spent on the rejected form.
    assert_eq!(inventory.next_part_id(), PartId::new(1));
}

#[test]
fn modify_product_through_form() {
    let (inventory, brakes, wheel) = bike_shop();
    let bike = inventory.lookup_product(ProductId::new(1000)).unwrap();

    let mut form = ProductForm::from_product(&bike);
    form.name = "Giant Bike Pro".into();
    form.associated_parts.remove(1);
    form.associated_parts.push(brakes.clone());

    let updated = inventory.update_product(form.to_product(bike.id()).unwrap()).unwrap();

    let found = inventory.lookup_product(ProductId::new(1000)).unwrap();
    assert!(Arc::ptr_eq(&found, &updated));
    assert_eq!(found.name(), "Giant Bike Pro");
    assert_eq!(names(found.associated_parts()), ["Wheel", "Brakes", "Brakes"]);
    // The previous record is untouched.
    assert_eq!(names(bike.associated_parts()), ["Wheel", "Wheel", "Brakes"]);
    assert!(found.uses_part(&wheel));
}

#[test]
fn search_box_flow() {
    let (inventory, _, wheel) = bike_shop();

    let by_id = inventory.search_parts(&SearchQuery::parse("2"));
    assert_eq!(by_id.len(), 1);
    assert!(Arc::ptr_eq(&by_id[0], &wheel));

    assert_eq!(names(&inventory.search_parts(&SearchQuery::parse(""))), ["Brakes", "Wheel"]);
    assert!(inventory.search_products(&SearchQuery::parse("tricycle")).is_empty());
}

/// Positional updates trust the caller's index. An index read off a filtered
/// search result points at a different record in the full collection, and the
/// wrong part gets overwritten.
#[test]
fn positional_update_with_filtered_index_overwrites_wrong_part() {
    let (inventory, brakes, wheel) = bike_shop();

    // The user searches "wheel" and edits the first (only) row.
    let filtered = inventory.lookup_parts_by_name("wheel");
    let row = 0;
    assert!(Arc::ptr_eq(&filtered[row], &wheel));

    let mut edited = Part::outsourced(
        wheel.id(),
        "Wheel (27in)",
        Price::from_cents(1300),
        StockLevels::new(16, 1, 20),
    );
    edited.set_company_name("Wheels R Us").unwrap();

    // Row 0 of the filtered view is row 1 of the full list, so this replaces Brakes.
    inventory.replace_part_at(row, edited).unwrap();

    let all = inventory.all_parts();
    assert_eq!(names(&all), ["Wheel (27in)", "Wheel"]);
    assert!(inventory.lookup_parts_by_name("brakes").is_empty());
    assert_eq!(all[0].id(), wheel.id());
    assert_ne!(all[0].id(), brakes.id());
}

#[test]
fn positional_update_with_resolved_index_hits_right_part() {
    let (inventory, brakes, wheel) = bike_shop();

    let index = inventory.part_index(wheel.id()).unwrap();
    assert_eq!(index, 1);

    let edited = Part::outsourced(
        wheel.id(),
        "Wheel (27in)",
        Price::from_cents(1300),
        StockLevels::new(16, 1, 20),
    );
    inventory.replace_part_at(index, edited).unwrap();

    assert_eq!(names(&inventory.all_parts()), ["Brakes", "Wheel (27in)"]);
    assert!(Arc::ptr_eq(&inventory.lookup_part(brakes.id()).unwrap(), &brakes));
}

#[test]
fn id_keyed_update_ignores_view_positions() {
    let (inventory, brakes, wheel) = bike_shop();

    let edited = Part::outsourced(
        wheel.id(),
        "Wheel (27in)",
        Price::from_cents(1300),
        StockLevels::new(16, 1, 20),
    );
    inventory.update_part(edited).unwrap();

    assert_eq!(names(&inventory.all_parts()), ["Brakes", "Wheel (27in)"]);
    assert!(Arc::ptr_eq(&inventory.lookup_part(brakes.id()).unwrap(), &brakes));
}

/// A product keeps using a part after the part is deleted from the
/// inventory. The product sees the values the part had when it was
/// associated, and later updates to the inventory's copy are not reflected.
#[test]
fn products_keep_their_part_handles() {
    let (inventory, _, wheel) = bike_shop();

    inventory
        .update_part(Part::outsourced(
            wheel.id(),
            "Wheel v2",
            Price::from_cents(1200),
            StockLevels::new(16, 1, 20),
        ))
        .unwrap();
    let bike = inventory.lookup_product(ProductId::new(1000)).unwrap();
    assert_eq!(bike.associated_parts()[0].name(), "Wheel");

    let current = inventory.lookup_part(wheel.id()).unwrap();
    assert!(inventory.products_using_part(&current).is_empty());
    assert_eq!(inventory.products_using_part(&wheel).len(), 1);

    assert!(!inventory.delete_part(&wheel));
    assert!(inventory.delete_part(&current));
    assert!(inventory.lookup_part(wheel.id()).is_none());
    assert_eq!(bike.associated_parts().len(), 3);
}
