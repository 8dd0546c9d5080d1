//! Products: catalog items assembled from parts.

use std::sync::Arc;

use serde::Serialize;

use stockroom_core::{Entity, Price, ProductId, StockLevels};

use crate::part::PartRef;

/// Shared handle to a committed product.
pub type ProductRef = Arc<Product>;

/// A product record and the parts it is assembled from.
///
/// `associated_parts` keeps insertion order and allows the same part more than
/// once (a bike using two wheels holds the wheel twice). The product does not
/// own those parts: they live in the inventory, and the product only holds
/// handles to them.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    #[serde(flatten)]
    levels: StockLevels,
    associated_parts: Vec<PartRef>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, levels: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            associated_parts: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn stock(&self) -> i32 {
        self.levels.stock
    }

    pub fn min(&self) -> i32 {
        self.levels.min
    }

    pub fn max(&self) -> i32 {
        self.levels.max
    }

    /// Appends `part`. Duplicates are allowed.
    pub fn add_associated_part(&mut self, part: PartRef) {
        self.associated_parts.push(part);
    }

    /// Removes the first association holding this exact part handle.
    ///
    /// Returns `false` (and changes nothing) when the handle is not associated.
    /// A different handle with equal field values does not match.
    pub fn delete_associated_part(&mut self, part: &PartRef) -> bool {
        match self
            .associated_parts
            .iter()
            .position(|p| Arc::ptr_eq(p, part))
        {
            Some(index) => {
                self.associated_parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// All associated parts, in insertion order.
    pub fn associated_parts(&self) -> &[PartRef] {
        &self.associated_parts
    }

    /// `true` when this exact part handle is associated at least once.
    pub fn uses_part(&self, part: &PartRef) -> bool {
        self.associated_parts.iter().any(|p| Arc::ptr_eq(p, part))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Part;
    use stockroom_core::PartId;

    fn part(id: u32, name: &str) -> PartRef {
        Arc::new(Part::in_house(
            PartId::new(id),
            name,
            Price::from_cents(1000),
            StockLevels::new(5, 1, 10),
        ))
    }

    fn bike() -> Product {
        Product::new(
            ProductId::new(1000),
            "Giant Bike",
            Price::from_cents(29999),
            StockLevels::new(5, 1, 10),
        )
    }

    fn names(product: &Product) -> Vec<&str> {
        product.associated_parts().iter().map(|p| p.name()).collect()
    }

    #[test]
    fn new_product_has_no_associations() {
        let product = bike();
        assert!(product.associated_parts().is_empty());
        assert_eq!(product.id(), ProductId::new(1000));
        assert_eq!(product.price(), Price::from_cents(29999));
    }

    #[test]
    fn associations_keep_order_and_duplicates() {
        let wheel = part(2, "Wheel");
        let brakes = part(1, "Brakes");
        let mut product = bike();

        product.add_associated_part(wheel.clone());
        product.add_associated_part(wheel.clone());
        product.add_associated_part(brakes.clone());

        assert_eq!(names(&product), vec!["Wheel", "Wheel", "Brakes"]);
    }

    #[test]
    fn delete_removes_one_occurrence() {
        let wheel = part(2, "Wheel");
        let brakes = part(1, "Brakes");
        let mut product = bike();
        product.add_associated_part(wheel.clone());
        product.add_associated_part(brakes.clone());
        product.add_associated_part(wheel.clone());

        assert!(product.delete_associated_part(&wheel));
        assert_eq!(names(&product), vec!["Brakes", "Wheel"]);
        assert!(product.uses_part(&wheel));
    }

    #[test]
    fn delete_of_absent_part_is_a_no_op() {
        let wheel = part(2, "Wheel");
        let lookalike = part(2, "Wheel");
        let mut product = bike();
        product.add_associated_part(wheel.clone());

        assert!(!product.delete_associated_part(&lookalike));
        assert_eq!(product.associated_parts().len(), 1);
        assert!(Arc::ptr_eq(&product.associated_parts()[0], &wheel));
    }

    #[test]
    fn clone_shares_part_handles() {
        let wheel = part(2, "Wheel");
        let mut product = bike();
        product.add_associated_part(wheel.clone());

        let copy = product.clone();
        assert!(copy.uses_part(&wheel));
    }

    #[test]
    fn serializes_associated_parts_by_value() {
        let mut product = bike();
        product.add_associated_part(part(2, "Wheel"));

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 1000);
        assert_eq!(json["associated_parts"][0]["name"], "Wheel");
        assert_eq!(json["max"], 10);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Adding then deleting the same handle restores the prior list.
            #[test]
            fn add_then_delete_restores_associations(
                picks in proptest::collection::vec(0usize..4, 0..12),
                extra in 0usize..4,
            ) {
                let pool: Vec<PartRef> = (0..4u32).map(|i| part(i + 1, "P")).collect();
                let mut product = bike();
                for &i in &picks {
                    product.add_associated_part(pool[i].clone());
                }
                let before: Vec<PartRef> = product.associated_parts().to_vec();

                product.add_associated_part(pool[extra].clone());
                prop_assert!(product.delete_associated_part(&pool[extra]));

                // The first occurrence is removed, so the result matches `before`
                // only when `extra` was not already present; otherwise one earlier
                // occurrence moved to the end.
                let after = product.associated_parts();
                prop_assert_eq!(after.len(), before.len());
                let count = |list: &[PartRef], p: &PartRef| list.iter().filter(|x| Arc::ptr_eq(*x, p)).count();
                for p in &pool {
                    prop_assert_eq!(count(after, p), count(&before, p));
                }
                if !picks.contains(&extra) {
                    prop_assert!(after.iter().zip(&before).all(|(a, b)| Arc::ptr_eq(a, b)));
                }
            }
        }
    }
}
