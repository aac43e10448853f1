//! The public Ledger Store: one mutex, one backing file, and the
//! read-validate-write cycle around the table services.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::core::services::{
    AccountService, CategoryService, Summary, SummaryService, TransactionService,
};
use crate::domain::{Account, AccountKind, Category, EntryKind, Transaction};
use crate::errors::Result;
use crate::ledger::Ledger;
use crate::storage::StorageBackend;

/// Owns the three tables through a persistence backend.
///
/// Every operation re-reads the full snapshot, mutates it, and writes it
/// back as one atomic unit; the mutex keeps interleaved callers within the
/// process from tearing that cycle apart.
pub struct LedgerStore {
    storage: Box<dyn StorageBackend>,
    guard: Mutex<()>,
}

impl LedgerStore {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            storage,
            guard: Mutex::new(()),
        }
    }

    /// Creates the backing store with three empty tables when none exists
    /// yet. Safe to call on every startup.
    pub fn initialize(&self) -> Result<()> {
        let _guard = self.lock();
        if self.storage.exists() {
            return Ok(());
        }
        self.storage.save(&Ledger::new())?;
        info!("backing store created");
        Ok(())
    }

    pub fn create_category(&self, name: &str, kind: EntryKind) -> Result<()> {
        let _guard = self.lock();
        let mut ledger = self.storage.load()?;
        CategoryService::create(&mut ledger, name, kind)?;
        self.storage.save(&ledger)?;
        info!(category = name, kind = %kind, "category created");
        Ok(())
    }

    /// `initial_balance` arrives as raw field text; empty means zero.
    pub fn create_account(
        &self,
        name: &str,
        initial_balance: &str,
        kind: AccountKind,
        currency: &str,
    ) -> Result<()> {
        let _guard = self.lock();
        let mut ledger = self.storage.load()?;
        AccountService::create(&mut ledger, name, initial_balance, kind, currency)?;
        self.storage.save(&ledger)?;
        info!(account = name, kind = %kind, currency, "account created");
        Ok(())
    }

    /// Records one transaction and moves the account balance with it. The
    /// transaction row and the updated balance land in the same snapshot
    /// write, so the two tables can never diverge.
    pub fn record_transaction(
        &self,
        date: NaiveDate,
        note: &str,
        account: &str,
        category: &str,
        amount: &str,
    ) -> Result<u64> {
        let _guard = self.lock();
        let mut ledger = self.storage.load()?;
        let id = TransactionService::record(&mut ledger, date, note, account, category, amount)?;
        self.storage.save(&ledger)?;
        info!(id, account, category, "transaction recorded");
        Ok(id)
    }

    pub fn summary(&self) -> Result<Summary> {
        let _guard = self.lock();
        let ledger = self.storage.load()?;
        Ok(SummaryService::totals(&ledger))
    }

    /// The last `n` transactions in insertion order, for the dashboard.
    pub fn recent_transactions(&self, n: usize) -> Result<Vec<Transaction>> {
        let _guard = self.lock();
        let ledger = self.storage.load()?;
        Ok(TransactionService::recent(&ledger, n)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn list_accounts(&self) -> Result<Vec<Account>> {
        let _guard = self.lock();
        let ledger = self.storage.load()?;
        Ok(AccountService::list(&ledger).into_iter().cloned().collect())
    }

    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let _guard = self.lock();
        let ledger = self.storage.load()?;
        Ok(CategoryService::list(&ledger)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Destroys the backing store and recreates it empty. A locked backing
    /// file fails the delete and leaves everything untouched.
    pub fn reset(&self) -> Result<()> {
        let _guard = self.lock();
        debug!("resetting backing store");
        self.storage.delete()?;
        self.storage.save(&Ledger::new())?;
        warn!("backing store reset to empty tables");
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
