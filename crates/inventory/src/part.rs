//! Parts: catalog items built in-house or bought from a supplier.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, PartId, Price, StockLevels};

/// Shared handle to a committed part.
///
/// The inventory and every product that uses the part hold clones of the same
/// handle. Identity comparisons (delete, association removal) use
/// `Arc::ptr_eq`, never field equality.
pub type PartRef = Arc<Part>;

/// Where a part comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    /// Fabricated in-house on the given machine.
    InHouse { machine_id: u32 },
    /// Bought from a supplier.
    Outsourced { company_name: String },
}

/// A part record.
///
/// Pure value holder: no cross-field checks happen here (see
/// [`crate::form::PartForm`] for the caller-side validation).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: Price,
    #[serde(flatten)]
    levels: StockLevels,
    #[serde(flatten)]
    source: PartSource,
}

impl Part {
    /// In-house part with machine id `0`; set the real one with
    /// [`Part::set_machine_id`].
    pub fn in_house(id: PartId, name: impl Into<String>, price: Price, levels: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            source: PartSource::InHouse { machine_id: 0 },
        }
    }

    /// Outsourced part with an empty company name; set it with
    /// [`Part::set_company_name`].
    pub fn outsourced(id: PartId, name: impl Into<String>, price: Price, levels: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            source: PartSource::Outsourced {
                company_name: String::new(),
            },
        }
    }

    pub fn id_typed(&self) -> PartId {
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

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    pub fn is_in_house(&self) -> bool {
        matches!(self.source, PartSource::InHouse { .. })
    }

    pub fn machine_id(&self) -> Option<u32> {
        match self.source {
            PartSource::InHouse { machine_id } => Some(machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::Outsourced { company_name } => Some(company_name),
            PartSource::InHouse { .. } => None,
        }
    }

    pub fn set_machine_id(&mut self, machine_id: u32) -> DomainResult<()> {
        match &mut self.source {
            PartSource::InHouse { machine_id: current } => {
                *current = machine_id;
                Ok(())
            }
            PartSource::Outsourced { .. } => Err(DomainError::invariant(
                "machine id applies only to in-house parts",
            )),
        }
    }

    pub fn set_company_name(&mut self, company_name: impl Into<String>) -> DomainResult<()> {
        match &mut self.source {
            PartSource::Outsourced { company_name: current } => {
                *current = company_name.into();
                Ok(())
            }
            PartSource::InHouse { .. } => Err(DomainError::invariant(
                "company name applies only to outsourced parts",
            )),
        }
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> PartId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
