//! Inventory domain module.
//!
//! This crate contains the part/product entity model and the in-memory
//! registry that owns them. Everything here is synchronous, deterministic
//! domain logic (no IO, no storage).

pub mod form;
pub mod part;
pub mod product;
pub mod search;
pub mod seed;
pub mod store;

pub use form::{PartDraft, PartForm, PartFormSource, ProductDraft, ProductForm};
pub use part::{Part, PartRef, PartSource};
pub use product::{Product, ProductRef};
pub use search::SearchQuery;
pub use store::{FIRST_PART_ID, FIRST_PRODUCT_ID, Inventory};
