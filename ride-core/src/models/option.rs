//! Ride option (add-on) model.

use crate::error::CatalogError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Selectable ride add-on with a flat fee; the fee may be zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideOption {
    pub key: String,
    pub flat_fee: Decimal,
}

/// Validated option catalog; keys are unique.
#[derive(Debug, Clone, Default)]
pub struct OptionCatalog {
    options: HashMap<String, RideOption>,
}

impl OptionCatalog {
    pub fn new(options: Vec<RideOption>) -> Result<Self, CatalogError> {
        let mut by_key = HashMap::with_capacity(options.len());
        for option in options {
            if by_key.contains_key(&option.key) {
                return Err(CatalogError::DuplicateOptionKey(option.key));
            }
            by_key.insert(option.key.clone(), option);
        }
        Ok(Self { options: by_key })
    }

    pub fn get(&self, key: &str) -> Option<&RideOption> {
        self.options.get(key)
    }

    pub fn flat_fee(&self, key: &str) -> Option<Decimal> {
        self.options.get(key).map(|option| option.flat_fee)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
