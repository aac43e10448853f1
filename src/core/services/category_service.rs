//! Business logic for creating and listing categories.

use crate::domain::category::{Category, EntryKind};
use crate::errors::{Result, TrackerError};
use crate::ledger::Ledger;

/// Validated creation and listing of categories.
pub struct CategoryService;

impl CategoryService {
    pub fn create(ledger: &mut Ledger, name: &str, kind: EntryKind) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::InvalidInput("category name is empty".into()));
        }
        Self::validate_name(ledger, name)?;
        ledger.add_category(Category::new(name, kind));
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&Category> {
        ledger.categories.iter().collect()
    }

    fn validate_name(ledger: &Ledger, candidate: &str) -> Result<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        let duplicate = ledger
            .categories
            .iter()
            .any(|category| category.name.trim().to_ascii_lowercase() == normalized);
        if duplicate {
            Err(TrackerError::DuplicateCategory(candidate.to_string()))
        } else {
            Ok(())
        }
    }
}
