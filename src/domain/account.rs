//! Domain types representing accounts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A financial account that transactions settle against.
///
/// The name doubles as the account's identifier; `balance` always equals the
/// opening balance plus the signed sum of every transaction recorded against
/// the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub currency: String,
    pub balance: f64,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        kind: AccountKind,
        currency: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            currency: currency.into().to_uppercase(),
            balance,
        }
    }
}

/// Supported account types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountKind {
    Cash,
    #[serde(rename = "Bank Account")]
    Bank,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountKind::Cash => "Cash",
            AccountKind::Bank => "Bank Account",
        };
        f.write_str(label)
    }
}
