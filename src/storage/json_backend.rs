use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{domain::Reservation, errors::Result};

use super::LedgerStore;

const TMP_SUFFIX: &str = "tmp";

/// Ledger store backed by a single JSON-array file.
///
/// Appends perform a whole-file load-modify-rewrite: simple and adequate for
/// one writer, but two overlapping appends can drop each other's record.
#[derive(Debug, Clone)]
pub struct JsonLedgerStore {
    path: PathBuf,
}

impl JsonLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonLedgerStore {
    fn load(&self) -> Result<Vec<Reservation>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn append(&self, reservation: &Reservation) -> Result<()> {
        let mut records = self.load()?;
        records.push(reservation.clone());
        let json = serde_json::to_string_pretty(&records)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{HotelReservation, Reservation},
        errors::TripError,
    };
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonLedgerStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonLedgerStore::new(temp.path().join("trip.json"));
        (store, temp)
    }

    fn sample_stay(hotel: &str) -> Reservation {
        Reservation::Hotel(HotelReservation {
            hotel_name: hotel.into(),
            city: "Sucre".into(),
            checkin_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            cost: 600,
        })
    }

    #[test]
    fn load_of_missing_file_yields_empty_ledger() {
        let (store, _guard) = store_with_temp_dir();
        let records = store.load().expect("load empty store");
        assert!(records.is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let (store, _guard) = store_with_temp_dir();
        store.append(&sample_stay("Europa")).expect("first append");
        store.append(&sample_stay("Parador")).expect("second append");

        let records = store.load().expect("reload ledger");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], sample_stay("Europa"));
        assert_eq!(records[1], sample_stay("Parador"));
    }

    #[test]
    fn malformed_ledger_surfaces_storage_error() {
        let (store, _guard) = store_with_temp_dir();
        fs::write(store.path(), "not json").expect("seed corrupt file");
        let err = store.load().expect_err("corrupt ledger should fail");
        assert!(matches!(err, TripError::StorageError(_)));
    }
}
