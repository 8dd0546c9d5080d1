//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, value objects and the error model shared by the inventory
//! crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod stock;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, ValidationErrors};
pub use id::{PartId, ProductId};
pub use money::Price;
pub use stock::StockLevels;
pub use value_object::ValueObject;
