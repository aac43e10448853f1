pub mod json_backend;

use crate::{errors::TrackerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Abstraction over persistence backends holding the full table set.
///
/// The backend is a dumb read/write surface; all business logic stays with
/// the caller. `save` must replace the whole snapshot as one atomic unit so
/// a transaction row and its account balance can never land separately.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Ledger>;
    fn save(&self, ledger: &Ledger) -> Result<()>;
    fn exists(&self) -> bool;
    /// Removes the backing file. Fails with [`TrackerError::StoreLocked`]
    /// when the file is held open elsewhere.
    fn delete(&self) -> Result<()>;
}

pub use json_backend::JsonStorage;
