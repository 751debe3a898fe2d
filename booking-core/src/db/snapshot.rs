//! JSON snapshot persistence
//!
//! Snapshots the whole [`Database`] (id counters included) to a JSON file
//! and restores it at process start. The store itself stays memory-resident;
//! durability exists only at these two explicit calls.

use super::Database;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Snapshot errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Restore a database from a JSON snapshot file
pub fn load(path: impl AsRef<Path>) -> SnapshotResult<Database> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let db = serde_json::from_str(&json)?;
    tracing::info!(path = %path.display(), "database snapshot loaded");
    Ok(db)
}

/// Write the database to a JSON snapshot file, replacing any previous one
pub fn save(path: impl AsRef<Path>, db: &Database) -> SnapshotResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(db)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "database snapshot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use shared::models::{DiningTable, Reservation, Restaurant, User};
    use shared::UserType;

    fn populated_db() -> Database {
        let mut db = Database::new();
        let user_id = db.users.insert(User {
            id: None,
            email: "e@x.com".to_string(),
            password: "p".to_string(),
            is_active: true,
            user_type: UserType::Standard,
        });
        let restaurant_id = db.restaurants.insert(Restaurant {
            id: None,
            name: "Trattoria".to_string(),
            address: "Via Roma 1".to_string(),
            open_hour: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            close_hour: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        });
        let table_id = db.tables.insert(DiningTable {
            id: None,
            seats: 4,
            restaurant_id,
        });
        db.reservations.insert(Reservation {
            id: None,
            user_id,
            table_id,
            time: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2016, 7, 11).unwrap(),
        });
        db
    }

    #[test]
    fn round_trip_reproduces_the_database() {
        let db = populated_db();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");

        save(&path, &db).unwrap();
        let restored = load(&path).unwrap();

        assert_eq!(restored, db);
    }

    #[test]
    fn counters_survive_the_round_trip() {
        let mut db = populated_db();
        // Free id 1; the counter must not rewind
        assert!(db.users.remove(1));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        save(&path, &db).unwrap();

        let mut restored = load(&path).unwrap();
        let id = restored.users.insert(User {
            id: None,
            email: "new@x.com".to_string(),
            password: "p".to_string(),
            is_active: false,
            user_type: UserType::Standard,
        });
        assert_eq!(id, 2);
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(SnapshotError::Io(_))));
    }

    #[test]
    fn load_fails_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(load(&path), Err(SnapshotError::Serialization(_))));
    }
}
