pub mod services;
pub mod store;

pub use services::{AccountService, CategoryService, Summary, SummaryService, TransactionService};
pub use store::LedgerStore;
