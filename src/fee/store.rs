//! The in-memory fee category store.

use crate::{
    Error,
    fee::{FeeCategory, FeeCategoryDraft, Frequency},
    ids::next_id_after,
};

/// The counts shown on the fee management summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencySummary {
    /// Number of monthly fee categories.
    pub monthly: usize,
    /// Number of quarterly fee categories.
    pub quarterly: usize,
    /// Number of yearly fee categories.
    pub yearly: usize,
    /// Number of mandatory fee categories of any frequency.
    pub mandatory: usize,
}

/// Owns the fee category list and applies edits by wholesale replacement.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeeCategoryStore {
    categories: Vec<FeeCategory>,
    next_id: u64,
}

impl InMemoryFeeCategoryStore {
    /// Create a store seeded with `categories`.
    pub fn new(categories: Vec<FeeCategory>) -> Self {
        let next_id = next_id_after(categories.iter().map(|category| category.id.as_str()));

        Self {
            categories,
            next_id,
        }
    }

    /// All fee categories, in insertion order.
    pub fn get_all(&self) -> &[FeeCategory] {
        &self.categories
    }

    /// The fee category with the given `id`, if any.
    pub fn get(&self, id: &str) -> Option<&FeeCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Validate `draft`, assign it the next ID and add it to the list.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyField] or
    /// [Error::NegativeAmount] if the draft is invalid.
    pub fn create(&mut self, draft: FeeCategoryDraft) -> Result<&FeeCategory, Error> {
        let id = self.next_id.to_string();
        let category = draft.into_category(id)?;

        self.next_id += 1;
        self.categories.push(category);

        Ok(self.categories.last().expect("just pushed"))
    }

    /// Replace the stored record with the same ID as `category`.
    ///
    /// Renaming a category does not touch payments that reference the old
    /// name; payments hold the name as free text.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::UpdateMissingFeeCategory] if no
    /// category with that ID exists.
    pub fn update(&mut self, category: FeeCategory) -> Result<(), Error> {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => {
                *existing = category;
                Ok(())
            }
            None => Err(Error::UpdateMissingFeeCategory),
        }
    }

    /// Remove the fee category with the given `id`.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::DeleteMissingFeeCategory] if no
    /// category with that ID exists.
    pub fn delete(&mut self, id: &str) -> Result<(), Error> {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);

        if self.categories.len() == before {
            Err(Error::DeleteMissingFeeCategory)
        } else {
            Ok(())
        }
    }

    /// The frequency and mandatory counts for the summary cards.
    pub fn summary(&self) -> FrequencySummary {
        let mut summary = FrequencySummary::default();

        for category in &self.categories {
            match category.frequency {
                Frequency::Monthly => summary.monthly += 1,
                Frequency::Quarterly => summary.quarterly += 1,
                Frequency::Yearly => summary.yearly += 1,
                Frequency::OneTime => {}
            }

            if category.mandatory {
                summary.mandatory += 1;
            }
        }

        summary
    }
}
