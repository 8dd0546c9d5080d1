//! Caller-side form validation.
//!
//! The inventory stores whatever it is handed. Checking that raw field text
//! makes a sensible part or product happens here, before an entity is built.
//! Every violated rule is collected, in a fixed order, so a UI can show the
//! first and a test can assert on all of them.

use stockroom_core::{
    DomainResult, Entity, PartId, Price, ProductId, StockLevels, ValidationErrors,
};

use crate::part::{Part, PartRef, PartSource};
use crate::product::Product;

const MIN_INVALID: &str = "Minimum stock value must be a positive whole number.";
const MAX_INVALID: &str = "Maximum stock value must be a positive whole number.";
const MAX_BELOW_MIN: &str = "Maximum stock value must be equal to or larger than minimum stock value.";
const STOCK_INVALID: &str = "Stock level must be a valid positive whole number.";
const STOCK_OUT_OF_RANGE: &str = "Stock level must be within the minimum and maximum stock values.";
const PRICE_NEGATIVE: &str = "Price must be a positive dollar amount.";
const PRICE_INVALID: &str = "Price must be a valid dollar amount.";
const MACHINE_ID_NEGATIVE: &str = "Machine ID must be a positive whole number.";
const MACHINE_ID_INVALID: &str = "Machine ID must be a valid whole number.";
const COMPANY_REQUIRED: &str = "Company name is required for outsourced parts.";

/// Variant-specific field of the part form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartFormSource {
    InHouse { machine_id: String },
    Outsourced { company_name: String },
}

/// Raw part form fields, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
    pub source: PartFormSource,
}

/// Raw product form fields plus the parts picked for it.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
    pub associated_parts: Vec<PartRef>,
}

impl PartForm {
    /// Pre-fills the form from an existing part (modify mode).
    pub fn from_part(part: &Part) -> Self {
        let source = match part.machine_id() {
            Some(machine_id) => PartFormSource::InHouse {
                machine_id: machine_id.to_string(),
            },
            None => PartFormSource::Outsourced {
                company_name: part.company_name().unwrap_or_default().to_string(),
            },
        };
        Self {
            name: part.name().to_string(),
            price: part.price().to_string(),
            stock: part.stock().to_string(),
            min: part.min().to_string(),
            max: part.max().to_string(),
            source,
        }
    }

    /// Checks every field and, when all pass, returns the typed draft.
    ///
    /// Emptiness is checked on the raw text; the draft carries the name and
    /// company name with surrounding whitespace removed.
    pub fn validate(&self) -> Result<PartDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let (price, levels) = check_base(
            "Part",
            &self.name,
            &self.price,
            &self.stock,
            &self.min,
            &self.max,
            &mut errors,
        );

        let source = match &self.source {
            PartFormSource::InHouse { machine_id } => {
                let machine_id = match machine_id.parse::<i64>() {
                    Ok(v) if v < 0 => {
                        errors.push(MACHINE_ID_NEGATIVE);
                        0
                    }
                    Ok(v) => u32::try_from(v).unwrap_or_else(|_| {
                        errors.push(MACHINE_ID_INVALID);
                        0
                    }),
                    Err(_) => {
                        errors.push(MACHINE_ID_INVALID);
                        0
                    }
                };
                PartSource::InHouse { machine_id }
            }
            PartFormSource::Outsourced { company_name } => {
                if company_name.is_empty() {
                    errors.push(COMPANY_REQUIRED);
                }
                PartSource::Outsourced {
                    company_name: company_name.trim().to_string(),
                }
            }
        };

        errors.into_result(PartDraft {
            name: self.name.trim().to_string(),
            price,
            levels,
            source,
        })
    }

    /// Validates and builds the part with `id` in one step.
    ///
    /// Prefer [`PartForm::validate`] followed by [`PartDraft::into_part`] with
    /// a freshly issued id, so rejected forms do not burn ids.
    pub fn to_part(&self, id: PartId) -> Result<Part, ValidationErrors> {
        self.validate()?
            .into_part(id)
            .map_err(|e| single(e.to_string()))
    }
}

impl ProductForm {
    /// Pre-fills the form from an existing product (modify mode), including
    /// its current associations.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: product.price().to_string(),
            stock: product.stock().to_string(),
            min: product.min().to_string(),
            max: product.max().to_string(),
            associated_parts: product.associated_parts().to_vec(),
        }
    }

    pub fn validate(&self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let (price, levels) = check_base(
            "Product",
            &self.name,
            &self.price,
            &self.stock,
            &self.min,
            &self.max,
            &mut errors,
        );
        errors.into_result(ProductDraft {
            name: self.name.trim().to_string(),
            price,
            levels,
            associated_parts: self.associated_parts.clone(),
        })
    }

    /// Validates and builds the product with `id` and the picked
    /// associations, in order.
    pub fn to_product(&self, id: ProductId) -> Result<Product, ValidationErrors> {
        Ok(self.validate()?.into_product(id))
    }
}

/// A part form that passed validation, waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDraft {
    pub name: String,
    pub price: Price,
    pub levels: StockLevels,
    pub source: PartSource,
}

impl PartDraft {
    /// Builds the part: base fields first, then the variant field.
    pub fn into_part(self, id: PartId) -> DomainResult<Part> {
        match self.source {
            PartSource::InHouse { machine_id } => {
                let mut part = Part::in_house(id, self.name, self.price, self.levels);
                part.set_machine_id(machine_id)?;
                Ok(part)
            }
            PartSource::Outsourced { company_name } => {
                let mut part = Part::outsourced(id, self.name, self.price, self.levels);
                part.set_company_name(company_name)?;
                Ok(part)
            }
        }
    }
}

/// A product form that passed validation, waiting for an id.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: Price,
    pub levels: StockLevels,
    pub associated_parts: Vec<PartRef>,
}

impl ProductDraft {
    pub fn into_product(self, id: ProductId) -> Product {
        let mut product = Product::new(id, self.name, self.price, self.levels);
        for part in self.associated_parts {
            product.add_associated_part(part);
        }
        product
    }
}

fn single(msg: String) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.push(msg);
    errors
}

/// Checks the fields parts and products share. Unparseable numbers count as
/// `0` for the later range checks.
fn check_base(
    kind: &str,
    name: &str,
    price: &str,
    stock: &str,
    min: &str,
    max: &str,
    errors: &mut ValidationErrors,
) -> (Price, StockLevels) {
    if name.is_empty() {
        errors.push(format!("{kind} name is required."));
    }

    let min = match min.parse::<i32>() {
        Ok(v) => {
            if v < 0 {
                errors.push(MIN_INVALID);
            }
            v
        }
        Err(_) => {
            errors.push(MIN_INVALID);
            0
        }
    };

    let max = match max.parse::<i32>() {
        Ok(v) => {
            if v < 0 {
                errors.push(MAX_INVALID);
            }
            if v < min {
                errors.push(MAX_BELOW_MIN);
            }
            v
        }
        Err(_) => {
            errors.push(MAX_INVALID);
            0
        }
    };

    let stock = stock.parse::<i32>().unwrap_or_else(|_| {
        errors.push(STOCK_INVALID);
        0
    });
    if stock < min || stock > max {
        errors.push(STOCK_OUT_OF_RANGE);
    }

    let price = match price.parse::<Price>() {
        Ok(p) => {
            if p.is_negative() {
                errors.push(PRICE_NEGATIVE);
            }
            p
        }
        Err(_) => {
            errors.push(PRICE_INVALID);
            Price::ZERO
        }
    };

    (price, StockLevels::new(stock, min, max))
}
