pub mod json_backend;

use crate::{domain::Reservation, errors::Result};

/// Abstraction over persistence backends holding the reservation ledger.
///
/// The ledger is append-only: records are never updated or removed, and
/// insertion order is creation order. Implementations are not required to
/// serialize concurrent writers; callers must ensure a single writer at a
/// time or add external locking.
pub trait LedgerStore: Send + Sync {
    /// Returns every committed reservation in insertion order. A store that
    /// has never been written to yields an empty ledger, not an error.
    fn load(&self) -> Result<Vec<Reservation>>;

    /// Durably appends one reservation after all existing records.
    fn append(&self, reservation: &Reservation) -> Result<()>;
}

pub use json_backend::JsonLedgerStore;
