//! The ledger aggregate: the three persisted tables and their invariant
//! helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Category, Transaction};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The full persisted table set: every account, category, and transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            accounts: Vec::new(),
            categories: Vec::new(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }

    pub fn account_mut(&mut self, name: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.name == name)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
        self.touch();
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
        self.touch();
    }

    /// Appends a transaction and returns its id.
    pub fn add_transaction(&mut self, transaction: Transaction) -> u64 {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    /// Ids are assigned as count + 1 and never reused; rows are append-only.
    pub fn next_transaction_id(&self) -> u64 {
        self.transactions.len() as u64 + 1
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{EntryKind, Transaction};

    #[test]
    fn transaction_ids_are_sequential() {
        let mut ledger = Ledger::new();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        for expected in 1..=3u64 {
            let id = ledger.next_transaction_id();
            assert_eq!(id, expected);
            ledger.add_transaction(Transaction::new(
                id,
                date,
                "",
                "Cash",
                "Misc",
                10.0,
                EntryKind::Income,
            ));
        }
        assert_eq!(ledger.transaction_count(), 3);
    }

    #[test]
    fn lookups_match_exact_names() {
        let mut ledger = Ledger::new();
        ledger.add_category(crate::domain::Category::new("Food", EntryKind::Expense));
        assert!(ledger.category("Food").is_some());
        assert!(ledger.category("food").is_none());
    }
}
