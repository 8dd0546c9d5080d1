//! Stock level bounds.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// On-hand stock plus its allowed range.
///
/// The expected shape is `0 <= min <= stock <= max`, but nothing here
/// enforces it: callers check before committing, and the inventory stores
/// whatever it is given.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockLevels {
    pub stock: i32,
    pub min: i32,
    pub max: i32,
}

impl StockLevels {
    pub const fn new(stock: i32, min: i32, max: i32) -> Self {
        Self { stock, min, max }
    }

    /// `true` when `0 <= min <= stock <= max`.
    pub fn is_consistent(&self) -> bool {
        0 <= self.min && self.min <= self.stock && self.stock <= self.max
    }
}

impl ValueObject for StockLevels {}
