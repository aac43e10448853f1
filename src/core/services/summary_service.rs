//! Dashboard totals over the full table set.

use crate::domain::category::EntryKind;
use crate::ledger::Ledger;

/// Headline figures shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total: f64,
    pub income: f64,
    pub expense: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Totals across the whole ledger. Account balances are summed as-is,
    /// whatever currency each account carries; rates are never applied here.
    pub fn totals(ledger: &Ledger) -> Summary {
        Summary {
            total: ledger.accounts.iter().map(|account| account.balance).sum(),
            income: Self::sum_kind(ledger, EntryKind::Income),
            expense: Self::sum_kind(ledger, EntryKind::Expense),
        }
    }

    fn sum_kind(ledger: &Ledger, kind: EntryKind) -> f64 {
        ledger
            .transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| txn.amount)
            .sum()
    }
}
