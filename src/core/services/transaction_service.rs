//! The record-transaction operation and transaction listings.

use chrono::NaiveDate;

use crate::domain::category::EntryKind;
use crate::domain::transaction::Transaction;
use crate::errors::{Result, TrackerError};
use crate::ledger::Ledger;

/// Validates references and the raw amount, rejects overdraws, then appends
/// the row and moves the account balance in the same mutation.
pub struct TransactionService;

impl TransactionService {
    /// Records one transaction and returns its id. Validation failures leave
    /// the ledger untouched.
    pub fn record(
        ledger: &mut Ledger,
        date: NaiveDate,
        note: &str,
        account: &str,
        category: &str,
        amount: &str,
    ) -> Result<u64> {
        let balance = ledger
            .account(account)
            .ok_or_else(|| TrackerError::AccountNotFound(account.to_string()))?
            .balance;
        let kind = ledger
            .category(category)
            .ok_or_else(|| TrackerError::CategoryNotFound(category.to_string()))?
            .kind;
        let amount = parse_amount(amount)?;
        if kind == EntryKind::Expense && balance - amount < 0.0 {
            return Err(TrackerError::InsufficientBalance {
                account: account.to_string(),
                balance,
                requested: amount,
            });
        }

        let id = ledger.next_transaction_id();
        let entry = Transaction::new(id, date, note, account, category, amount, kind);
        let delta = entry.signed_amount();
        ledger.add_transaction(entry);
        let holder = ledger
            .account_mut(account)
            .ok_or_else(|| TrackerError::AccountNotFound(account.to_string()))?;
        holder.balance += delta;
        Ok(id)
    }

    /// Returns the last `n` transactions in insertion order.
    pub fn recent(ledger: &Ledger, n: usize) -> Vec<&Transaction> {
        let skip = ledger.transactions.len().saturating_sub(n);
        ledger.transactions[skip..].iter().collect()
    }
}

/// The shell hands amounts over as raw text; only finite, strictly positive
/// numbers are accepted.
fn parse_amount(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(TrackerError::InvalidAmount(raw.to_string())),
    }
}
