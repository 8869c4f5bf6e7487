use tempfile::TempDir;
use trip_core::{config::Config, storage::JsonLedgerStore};

/// Builds a ledger store rooted in a fresh temp directory. The directory
/// guard must stay alive for the duration of the test.
pub fn setup_test_env() -> (JsonLedgerStore, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let config = Config::new(temp.path().join("trip.json"));
    (JsonLedgerStore::new(config.ledger_path), temp)
}
