//! Product - An inventory item
//!
//! Products are keyed by name. Names are trimmed and title-cased when a
//! product is created or renamed, so "blue pen" is stored as "Blue Pen".

use serde::{Deserialize, Deserializer, Serialize};

use super::record::{require_text, Measured, Record};
use crate::repository::record_repository::RepositoryError;

/// An inventory item with a unit price and a stock count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also the lookup key
    #[serde(alias = "product")]
    name: String,
    /// Unit price in whole currency units
    #[serde(deserialize_with = "whole_number")]
    price: u64,
    /// Units in stock
    #[serde(deserialize_with = "whole_number")]
    count: u64,
}

impl Product {
    /// Create a new Product, normalising the name
    pub fn new(name: impl AsRef<str>, price: u64, count: u64) -> Self {
        Self {
            name: title_case(name.as_ref()),
            price,
            count,
        }
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product: {} Price: {} Count: {}",
            self.name, self.price, self.count
        )
    }
}

/// Replacement values for a product. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub count: Option<u64>,
}

impl ProductPatch {
    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, |n| n.trim().is_empty())
            && self.price.is_none()
            && self.count.is_none()
    }
}

/// Numeric product fields usable in threshold queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Price,
    Count,
}

impl core::fmt::Display for ProductField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductField::Price => write!(f, "price"),
            ProductField::Count => write!(f, "count"),
        }
    }
}

impl Record for Product {
    type Patch = ProductPatch;

    const KIND: &'static str = "product";

    fn key(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), RepositoryError> {
        require_text("name", &self.name)
    }

    fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = patch.name.as_deref() {
            let name = title_case(name);
            if !name.is_empty() {
                self.name = name;
            }
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(count) = patch.count {
            self.count = count;
        }
    }
}

impl Measured for Product {
    type Field = ProductField;

    fn measure(&self, field: ProductField) -> u64 {
        match field {
            ProductField::Price => self.price,
            ProductField::Count => self.count,
        }
    }
}

/// Accept a non-negative integer, or a legacy fractional value rounded to
/// the nearest whole number
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Whole(u64),
        Fractional(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Whole(n) => Ok(n),
        Number::Fractional(f) if f.is_finite() && f >= 0.0 && f <= u64::MAX as f64 => {
            Ok(f.round() as u64)
        }
        Number::Fractional(f) => Err(serde::de::Error::custom(format_args!(
            "{} is not a non-negative number",
            f
        ))),
    }
}

/// Trim, then upper-case the first letter of every word and lower-case the
/// rest. A word starts after any non-alphabetic character.
fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;

    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
