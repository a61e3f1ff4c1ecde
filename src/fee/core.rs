//! Defines the core data models for fee categories.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How often a fee category recurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    /// Billed every month.
    Monthly,
    /// Billed every three months.
    Quarterly,
    /// Billed once per school year.
    Yearly,
    /// Billed a single time, e.g. an admission fee.
    OneTime,
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
            Frequency::OneTime => "one-time",
        };

        write!(f, "{label}")
    }
}

/// A named, priced billing line item, e.g. 'Tuition Fee', 'Transport Fee'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeCategory {
    /// Opaque string ID assigned by the store.
    pub id: String,
    /// The display name. Payments reference categories by this name.
    pub name: String,
    /// The charge per billing period, always non-negative.
    pub amount: f64,
    /// A short description of what the fee covers.
    pub description: String,
    /// How often the fee recurs.
    pub frequency: Frequency,
    /// Whether every student must pay this fee.
    pub mandatory: bool,
}

/// The fields of a fee category, as entered in the add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeCategoryDraft {
    /// The display name.
    pub name: String,
    /// The charge per billing period.
    pub amount: f64,
    /// A short description of what the fee covers.
    pub description: String,
    /// How often the fee recurs.
    pub frequency: Frequency,
    /// Whether every student must pay this fee.
    pub mandatory: bool,
}

impl FeeCategoryDraft {
    /// Validate the draft and build a [FeeCategory] with the given `id`.
    ///
    /// # Errors
    ///
    /// This function will return an:
    /// - [Error::EmptyField] if the name is empty,
    /// - [Error::NegativeAmount] if the amount is negative.
    pub fn into_category(self, id: String) -> Result<FeeCategory, Error> {
        if self.name.is_empty() {
            return Err(Error::EmptyField("name"));
        }

        if self.amount < 0.0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        Ok(FeeCategory {
            id,
            name: self.name,
            amount: self.amount,
            description: self.description,
            frequency: self.frequency,
            mandatory: self.mandatory,
        })
    }
}
