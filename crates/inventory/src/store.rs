//! The inventory registry.
//!
//! One [`Inventory`] owns every committed part and product plus the two id
//! counters. It is created by the process entry point and passed by reference
//! to whatever needs it; there is no global instance.
//!
//! All collections and counters sit behind a single `RwLock`. Reads take the
//! read lock and return snapshots (`Vec` of shared handles), so callers never
//! iterate while a writer holds the lock. Every operation is synchronous and
//! at worst linear in the collection size.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use stockroom_core::{DomainError, DomainResult, Entity, PartId, ProductId};

use crate::part::{Part, PartRef};
use crate::product::{Product, ProductRef};
use crate::search::SearchQuery;

/// First id handed out by [`Inventory::next_part_id`].
pub const FIRST_PART_ID: PartId = PartId::new(1);

/// First id handed out by [`Inventory::next_product_id`].
pub const FIRST_PRODUCT_ID: ProductId = ProductId::new(1000);

#[derive(Debug)]
struct State {
    parts: Vec<PartRef>,
    products: Vec<ProductRef>,
    last_part_id: u32,
    last_product_id: u32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            parts: Vec::new(),
            products: Vec::new(),
            last_part_id: FIRST_PART_ID.get() - 1,
            last_product_id: FIRST_PRODUCT_ID.get() - 1,
        }
    }
}

/// In-memory registry of parts and products.
#[derive(Debug, Default)]
pub struct Inventory {
    state: RwLock<State>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning is ignored: every write leaves the state whole.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ---------------------------------------------------------------------
    // Id issuance
    // ---------------------------------------------------------------------

    /// Advances the part counter and returns the new value (1, 2, 3, ...).
    pub fn next_part_id(&self) -> PartId {
        let mut state = self.write();
        state.last_part_id += 1;
        let id = PartId::new(state.last_part_id);
        debug!(part_id = %id, "issued part id");
        id
    }

    /// Advances the product counter and returns the new value (1000, 1001, ...).
    pub fn next_product_id(&self) -> ProductId {
        let mut state = self.write();
        state.last_product_id += 1;
        let id = ProductId::new(state.last_product_id);
        debug!(product_id = %id, "issued product id");
        id
    }

    // ---------------------------------------------------------------------
    // Parts
    // ---------------------------------------------------------------------

    /// Appends `part` and returns the shared handle now held by the inventory.
    ///
    /// Ids are not checked for uniqueness; callers are expected to use
    /// [`Inventory::next_part_id`].
    pub fn add_part(&self, part: Part) -> PartRef {
        let part = Arc::new(part);
        self.add_part_ref(part.clone());
        part
    }

    /// Appends an existing handle (e.g. one re-added after deletion).
    pub fn add_part_ref(&self, part: PartRef) {
        let mut state = self.write();
        debug!(part_id = %part.id(), index = state.parts.len(), "adding part");
        state.parts.push(part);
    }

    /// First part with `id`, in insertion order.
    pub fn lookup_part(&self, id: PartId) -> Option<PartRef> {
        find_by_id(&self.read().parts, id).cloned()
    }

    /// Parts whose name contains `query`, ignoring case, in insertion order.
    /// An empty query matches every part.
    pub fn lookup_parts_by_name(&self, query: &str) -> Vec<PartRef> {
        filter_by_name(&self.read().parts, query)
    }

    /// Current position of the first part with `id` in [`Inventory::all_parts`].
    pub fn part_index(&self, id: PartId) -> Option<usize> {
        position_of_id(&self.read().parts, id)
    }

    /// Replaces the part carrying `part.id()` in place.
    ///
    /// The id is resolved to a position under the same write lock as the
    /// replacement, so the record replaced is always the one with that id.
    /// With duplicate ids, the first match is replaced.
    pub fn update_part(&self, part: Part) -> DomainResult<PartRef> {
        let mut state = self.write();
        let id = part.id();
        let Some(index) = position_of_id(&state.parts, id) else {
            warn!(part_id = %id, "update of unknown part");
            return Err(DomainError::not_found());
        };
        let part = Arc::new(part);
        state.parts[index] = part.clone();
        debug!(part_id = %id, index, "updated part");
        Ok(part)
    }

    /// Replaces whatever part sits at `index`.
    ///
    /// The index must come from [`Inventory::part_index`] or
    /// [`Inventory::all_parts`] *immediately* beforehand. A position taken
    /// from a filtered list (a search result) refers to a different record in
    /// the full collection, and this will overwrite that record without
    /// complaint. Prefer [`Inventory::update_part`].
    pub fn replace_part_at(&self, index: usize, part: Part) -> DomainResult<PartRef> {
        let mut state = self.write();
        let len = state.parts.len();
        let Some(slot) = state.parts.get_mut(index) else {
            return Err(DomainError::index_out_of_bounds(index, len));
        };
        if slot.id() != part.id() {
            warn!(index, replaced = %slot.id(), with = %part.id(), "positional update changed part id");
        }
        let part = Arc::new(part);
        *slot = part.clone();
        debug!(part_id = %part.id(), index, "replaced part at index");
        Ok(part)
    }

    /// Removes this exact handle. Returns `false` when it is not present.
    ///
    /// Products that still use the part keep their handle to it and keep
    /// seeing its last committed values; nothing is cascaded.
    pub fn delete_part(&self, part: &PartRef) -> bool {
        let mut state = self.write();
        let removed = remove_ref(&mut state.parts, part);
        if removed {
            let users = state.products.iter().filter(|p| p.uses_part(part)).count();
            if users > 0 {
                warn!(part_id = %part.id(), products = users, "deleted part is still used by products");
            }
            debug!(part_id = %part.id(), "deleted part");
        }
        removed
    }

    /// Snapshot of every part, in insertion order.
    pub fn all_parts(&self) -> Vec<PartRef> {
        self.read().parts.clone()
    }

    /// Applies a search-box query: everything, one id, or a name search.
    /// A negative id matches nothing; it never falls back to a name search.
    pub fn search_parts(&self, query: &SearchQuery) -> Vec<PartRef> {
        match query {
            SearchQuery::All => self.all_parts(),
            SearchQuery::Id(id) => u32::try_from(*id)
                .ok()
                .and_then(|id| self.lookup_part(PartId::new(id)))
                .into_iter()
                .collect(),
            SearchQuery::Name(name) => self.lookup_parts_by_name(name),
        }
    }

    /// Products whose associations hold this exact part handle.
    pub fn products_using_part(&self, part: &PartRef) -> Vec<ProductRef> {
        self.read()
            .products
            .iter()
            .filter(|p| p.uses_part(part))
            .cloned()
            .collect()
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    /// Appends `product` and returns the shared handle now held by the
    /// inventory.
    pub fn add_product(&self, product: Product) -> ProductRef {
        let product = Arc::new(product);
        self.add_product_ref(product.clone());
        product
    }

    pub fn add_product_ref(&self, product: ProductRef) {
        let mut state = self.write();
        debug!(
            product_id = %product.id(),
            index = state.products.len(),
            parts = product.associated_parts().len(),
            "adding product"
        );
        state.products.push(product);
    }

    /// First product with `id`, in insertion order.
    pub fn lookup_product(&self, id: ProductId) -> Option<ProductRef> {
        find_by_id(&self.read().products, id).cloned()
    }

    /// Products whose name contains `query`, ignoring case, in insertion
    /// order. An empty query matches every product.
    pub fn lookup_products_by_name(&self, query: &str) -> Vec<ProductRef> {
        filter_by_name(&self.read().products, query)
    }

    pub fn product_index(&self, id: ProductId) -> Option<usize> {
        position_of_id(&self.read().products, id)
    }

    /// Replaces the product carrying `product.id()` in place (first match).
    pub fn update_product(&self, product: Product) -> DomainResult<ProductRef> {
        let mut state = self.write();
        let id = product.id();
        let Some(index) = position_of_id(&state.products, id) else {
            warn!(product_id = %id, "update of unknown product");
            return Err(DomainError::not_found());
        };
        let product = Arc::new(product);
        state.products[index] = product.clone();
        debug!(product_id = %id, index, "updated product");
        Ok(product)
    }

    /// Replaces whatever product sits at `index`. Same caveats as
    /// [`Inventory::replace_part_at`].
    pub fn replace_product_at(&self, index: usize, product: Product) -> DomainResult<ProductRef> {
        let mut state = self.write();
        let len = state.products.len();
        let Some(slot) = state.products.get_mut(index) else {
            return Err(DomainError::index_out_of_bounds(index, len));
        };
        if slot.id() != product.id() {
            warn!(index, replaced = %slot.id(), with = %product.id(), "positional update changed product id");
        }
        let product = Arc::new(product);
        *slot = product.clone();
        debug!(product_id = %product.id(), index, "replaced product at index");
        Ok(product)
    }

    /// Removes this exact handle. The product's parts are left alone.
    pub fn delete_product(&self, product: &ProductRef) -> bool {
        let removed = remove_ref(&mut self.write().products, product);
        if removed {
            debug!(product_id = %product.id(), "deleted product");
        }
        removed
    }

    pub fn all_products(&self) -> Vec<ProductRef> {
        self.read().products.clone()
    }

    pub fn search_products(&self, query: &SearchQuery) -> Vec<ProductRef> {
        match query {
            SearchQuery::All => self.all_products(),
            SearchQuery::Id(id) => u32::try_from(*id)
                .ok()
                .and_then(|id| self.lookup_product(ProductId::new(id)))
                .into_iter()
                .collect(),
            SearchQuery::Name(name) => self.lookup_products_by_name(name),
        }
    }
}

fn find_by_id<T: Entity>(items: &[Arc<T>], id: T::Id) -> Option<&Arc<T>> {
    items.iter().find(|item| item.id() == id)
}

fn position_of_id<T: Entity>(items: &[Arc<T>], id: T::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

fn filter_by_name<T: Entity>(items: &[Arc<T>], query: &str) -> Vec<Arc<T>> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn remove_ref<T>(items: &mut Vec<Arc<T>>, target: &Arc<T>) -> bool {
    match items.iter().position(|item| Arc::ptr_eq(item, target)) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
