//! Domain model for recorded ledger transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::EntryKind;

/// A single dated ledger entry against one account.
///
/// Ids are sequential and never reused; `kind` is copied from the referenced
/// category when the entry is recorded and not re-validated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub note: String,
    pub account: String,
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        date: NaiveDate,
        note: impl Into<String>,
        account: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        kind: EntryKind,
    ) -> Self {
        Self {
            id,
            date,
            note: note.into(),
            account: account.into(),
            category: category.into(),
            amount,
            kind,
        }
    }

    /// Balance delta this entry applies to its account.
    pub fn signed_amount(&self) -> f64 {
        self.amount * self.kind.signum()
    }
}
