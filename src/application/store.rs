//! Ordered, uniquely-keyed record collections with a durable JSON mirror.
//!
//! A store is constructed explicitly with [`RecordStore::open`] and owned
//! by the caller for the life of the session; there is no ambient global
//! state. Records are kept in insertion order and every lookup is a linear
//! scan from the front, which is fine at clinic scale (tens to low
//! thousands of records). Single-threaded by design: callers exposing a
//! store to concurrent sessions must add their own mutual exclusion.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{Doctor, FieldMap, MedicalRecord, Patient, Record, StoreError, StoreResult};
use crate::infrastructure::FileRepository;

pub type DoctorStore = RecordStore<Doctor>;
pub type PatientStore = RecordStore<Patient>;

/// Mutable ordered collection of records mirrored to a backing file.
///
/// Every mutation (add, remove, update, history append) rewrites the
/// backing file with the full collection before returning; reads never
/// touch the file after [`RecordStore::open`].
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    repository: FileRepository,
}

impl<R: Record> RecordStore<R> {
    /// Opens the store backed by `path`, loading any previously persisted
    /// records. A missing file yields an empty store. Loaded records are
    /// replayed through the same insert path as runtime adds, so file
    /// order becomes insertion order and duplicate identifiers in the
    /// file are rejected just as they would be at runtime.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let repository = FileRepository::new(path);
        let loaded = repository.load()?;
        let mut store = Self {
            records: Vec::new(),
            repository,
        };
        for record in loaded {
            store.insert(record)?;
        }
        info!(
            path = %store.repository.path().display(),
            count = store.records.len(),
            "opened record store"
        );
        Ok(store)
    }

    /// Appends a record at the tail and flushes. Fails with
    /// [`StoreError::DuplicateId`] if the identifier is already taken;
    /// nothing is written in that case.
    pub fn add(&mut self, record: R) -> StoreResult<()> {
        self.insert(record)?;
        self.flush()
    }

    /// Builds a record from a raw field mapping and appends it. Optional
    /// fields absent from the mapping take their defaults, exactly as for
    /// a directly constructed record.
    pub fn add_from_map(&mut self, map: &FieldMap) -> StoreResult<()> {
        self.add(R::from_map(map)?)
    }

    /// Removes the first record with the given identifier. Returns whether
    /// anything was removed; the backing file is rewritten only on a hit.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let Some(position) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };
        self.records.remove(position);
        debug!(id, "removed record");
        self.flush()?;
        Ok(true)
    }

    /// Applies a partial update to the record with the given identifier.
    /// Returns whether a record matched; the file is rewritten only then.
    pub fn update(&mut self, id: &str, update: R::Update) -> StoreResult<bool> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return Ok(false);
        };
        record.apply_update(update);
        debug!(id, "updated record");
        self.flush()?;
        Ok(true)
    }

    /// Map form of [`RecordStore::update`]; unknown keys fail with
    /// [`StoreError::UnknownField`] before any record is touched.
    pub fn update_from_map(&mut self, id: &str, map: &FieldMap) -> StoreResult<bool> {
        let update = R::update_from_map(map)?;
        self.update(id, update)
    }

    /// Linear scan for a record by identifier.
    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// All records in insertion order. The shared borrow is what keeps
    /// callers from corrupting the collection out from under the store.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn insert(&mut self, record: R) -> StoreResult<()> {
        if self.records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    fn flush(&self) -> StoreResult<()> {
        self.repository.save(&self.records)
    }
}

impl RecordStore<Patient> {
    /// Case-insensitive substring search over name, id, contact, age as
    /// text, and the assigned-doctor label, in collection order. An empty
    /// term matches everyone.
    pub fn search(&self, term: &str) -> Vec<&Patient> {
        self.records.iter().filter(|p| p.matches(term)).collect()
    }

    /// Appends an entry to a patient's medical history and flushes.
    /// Returns whether the patient exists. History is append-only; there
    /// is no removal counterpart.
    pub fn add_medical_record(&mut self, id: &str, entry: MedicalRecord) -> StoreResult<bool> {
        let Some(patient) = self.records.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        patient.medical_history.push(entry);
        debug!(id, "appended medical record");
        self.flush()?;
        Ok(true)
    }
}
