//! The persisted appointment slot.
//!
//! All appointments live in a single JSON file (the "slot"), read and
//! rewritten whole on every append. The store is an explicit instance opened
//! once at startup and passed to callers; there is no ambient singleton.
//!
//! No mutual exclusion is provided across concurrent appends. Gameday is a
//! single-user, single-device store and callers serialize their own appends.

use std::path::{Path, PathBuf};

use crate::appointment::Appointment;
use crate::codec;
use crate::error::{StoreError, StoreResult};

/// Handle to the appointment slot file.
pub struct AppointmentStore {
    path: PathBuf,
}

impl AppointmentStore {
    /// Open the store at the given slot path.
    ///
    /// Creates parent directories so a later append cannot fail on a missing
    /// directory. The slot file itself is only created by the first append;
    /// an absent file reads as an empty sequence.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(AppointmentStore { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one appointment to the end of the persisted sequence.
    ///
    /// Read-modify-write of the whole slot: absent slot reads as empty,
    /// corrupt slot propagates as [`StoreError::Corrupt`] without being
    /// overwritten. The updated sequence is written to a temp file and
    /// renamed into place, so a reader never observes a partial write.
    /// Returns only after the rename is acknowledged.
    ///
    /// No dedup by id is performed; duplicate ids are a caller error.
    pub fn append(&self, appointment: Appointment) -> StoreResult<()> {
        let mut appointments = self.list_all()?;
        appointments.push(appointment);

        let encoded = codec::encode(&appointments)?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, encoded)?;
        std::fs::rename(&tmp, &self.path)?;

        Ok(())
    }

    /// Read the full persisted sequence, in insertion order.
    ///
    /// An absent slot is an empty sequence; a present-but-undecodable slot
    /// is [`StoreError::Corrupt`].
    pub fn list_all(&self) -> StoreResult<Vec<Appointment>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => codec::decode(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Read the persisted sequence filtered to one category id.
    ///
    /// An empty filter means "all categories". Order is insertion order.
    pub fn list_by_category(&self, category: &str) -> StoreResult<Vec<Appointment>> {
        let mut appointments = self.list_all()?;
        if !category.is_empty() {
            appointments.retain(|a| a.category == category);
        }
        Ok(appointments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::Guild;
    use tempfile::tempdir;

    fn make_appointment(id: &str, category: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            guild: Guild {
                id: "g1".to_string(),
                name: "Lendários".to_string(),
                icon: None,
                owner: false,
            },
            category: category.to_string(),
            date: "10/05 às 20:30h".to_string(),
            description: "play".to_string(),
        }
    }

    fn open_store(dir: &tempfile::TempDir) -> AppointmentStore {
        AppointmentStore::open(dir.path().join("appointments.json")).unwrap()
    }

    #[test]
    fn absent_slot_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        assert_eq!(store.list_all().unwrap(), vec![]);
    }

    #[test]
    fn append_to_absent_slot_yields_one_record() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        store.append(make_appointment("a1", "1")).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "a1");
        assert_eq!(all[0].date, "10/05 às 20:30h");
    }

    #[test]
    fn appends_preserve_call_order() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        store.append(make_appointment("a1", "1")).unwrap();
        store.append(make_appointment("a2", "2")).unwrap();
        store.append(make_appointment("a3", "1")).unwrap();

        let ids: Vec<_> = store.list_all().unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn open_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("gameday").join("appointments.json");

        let store = AppointmentStore::open(&nested).unwrap();
        store.append(make_appointment("a1", "")).unwrap();

        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_slot_surfaces_as_corrupt_on_read() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        std::fs::write(store.path(), "{{{ definitely not json").unwrap();

        let err = store.list_all().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn append_refuses_to_overwrite_a_corrupt_slot() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        std::fs::write(store.path(), "{{{ definitely not json").unwrap();

        let err = store.append(make_appointment("a1", "1")).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));

        // The corrupt blob must still be there for the user to inspect.
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "{{{ definitely not json");
    }

    #[test]
    fn append_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);
        store.append(make_appointment("a1", "1")).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(leftovers, vec!["appointments.json"]);
    }

    #[test]
    fn list_by_category_filters_without_reordering() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        store.append(make_appointment("a1", "1")).unwrap();
        store.append(make_appointment("a2", "2")).unwrap();
        store.append(make_appointment("a3", "1")).unwrap();

        let ids: Vec<_> = store
            .list_by_category("1")
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["a1", "a3"]);
    }

    #[test]
    fn list_by_category_empty_filter_means_all() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        store.append(make_appointment("a1", "1")).unwrap();
        store.append(make_appointment("a2", "2")).unwrap();

        assert_eq!(store.list_by_category("").unwrap().len(), 2);
    }
}
