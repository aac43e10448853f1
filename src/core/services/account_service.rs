//! Business logic for creating and listing accounts.

use crate::domain::account::{Account, AccountKind};
use crate::errors::{Result, TrackerError};
use crate::ledger::Ledger;

/// Validated creation and listing of accounts.
pub struct AccountService;

impl AccountService {
    /// Appends a new account, parsing the user-entered opening balance.
    pub fn create(
        ledger: &mut Ledger,
        name: &str,
        initial_balance: &str,
        kind: AccountKind,
        currency: &str,
    ) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::InvalidInput("account name is empty".into()));
        }
        Self::validate_name(ledger, name)?;
        let balance = parse_opening_balance(initial_balance)?;
        ledger.add_account(Account::new(name, kind, currency, balance));
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&Account> {
        ledger.accounts.iter().collect()
    }

    fn validate_name(ledger: &Ledger, candidate: &str) -> Result<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        let duplicate = ledger
            .accounts
            .iter()
            .any(|account| account.name.trim().to_ascii_lowercase() == normalized);
        if duplicate {
            Err(TrackerError::DuplicateAccount(candidate.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Empty input defaults to a zero opening balance; anything else must parse
/// as a finite, non-negative number.
fn parse_opening_balance(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(TrackerError::InvalidAmount(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_parses_opening_balance() {
        let mut ledger = Ledger::new();
        AccountService::create(&mut ledger, "Cash", "100", AccountKind::Cash, "USD").unwrap();
        assert_eq!(ledger.account("Cash").unwrap().balance, 100.0);
    }

    #[test]
    fn empty_opening_balance_defaults_to_zero() {
        let mut ledger = Ledger::new();
        AccountService::create(&mut ledger, "Giro", "  ", AccountKind::Bank, "EUR").unwrap();
        assert_eq!(ledger.account("Giro").unwrap().balance, 0.0);
    }

    #[test]
    fn junk_opening_balance_is_rejected() {
        let mut ledger = Ledger::new();
        let err = AccountService::create(&mut ledger, "Cash", "lots", AccountKind::Cash, "USD")
            .expect_err("non-numeric balance must fail");
        assert!(matches!(err, TrackerError::InvalidAmount(_)));
        assert!(ledger.accounts.is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let mut ledger = Ledger::new();
        AccountService::create(&mut ledger, "Cash", "", AccountKind::Cash, "USD").unwrap();
        let err = AccountService::create(&mut ledger, " cash ", "", AccountKind::Cash, "USD")
            .expect_err("duplicate must fail");
        assert!(matches!(err, TrackerError::DuplicateAccount(_)));
        assert_eq!(ledger.accounts.len(), 1);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut ledger = Ledger::new();
        let err = AccountService::create(&mut ledger, "   ", "", AccountKind::Cash, "USD")
            .expect_err("blank name must fail");
        assert!(matches!(err, TrackerError::InvalidInput(_)));
    }
}
