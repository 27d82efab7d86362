use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::{StoreError, StoreResult};

/// Raw field mapping as submitted by the UI layer's forms.
pub type FieldMap = Map<String, Value>;

/// A uniquely-keyed clinic record that can live in a `RecordStore`.
///
/// Implementations provide construction from a raw field mapping (missing
/// required fields fail with [`StoreError::MissingField`], unknown extras
/// are ignored) and a typed partial update (unknown keys in the map form
/// fail with [`StoreError::UnknownField`]).
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Update;

    fn id(&self) -> &str;
    fn from_map(map: &FieldMap) -> StoreResult<Self>;
    fn update_from_map(map: &FieldMap) -> StoreResult<Self::Update>;
    fn apply_update(&mut self, update: Self::Update);
}

fn require_fields(map: &FieldMap, required: &'static [&'static str]) -> StoreResult<()> {
    for &field in required {
        if !map.contains_key(field) {
            return Err(StoreError::MissingField(field));
        }
    }
    Ok(())
}

fn reject_unknown_keys(map: &FieldMap, allowed: &[&str]) -> StoreResult<()> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(StoreError::UnknownField(key.clone()));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub contact: String,
    /// Working day names, in the order they were selected.
    pub schedule: Vec<String>,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub working_hours: Option<WorkingHours>,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub notes: String,
}

impl Doctor {
    const REQUIRED: &'static [&'static str] = &["id", "name", "specialization", "contact", "schedule"];
    const UPDATABLE: &'static [&'static str] = &[
        "name",
        "specialization",
        "contact",
        "schedule",
        "experience",
        "qualification",
        "working_hours",
        "emergency_contact",
        "notes",
    ];
}

/// Partial update for a doctor record; `None` fields are left untouched.
/// The identifier is the record's key and cannot be updated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorUpdate {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub contact: Option<String>,
    pub schedule: Option<Vec<String>>,
    pub experience: Option<u32>,
    pub qualification: Option<String>,
    pub working_hours: Option<WorkingHours>,
    pub emergency_contact: Option<String>,
    pub notes: Option<String>,
}

impl Record for Doctor {
    type Update = DoctorUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_map(map: &FieldMap) -> StoreResult<Self> {
        require_fields(map, Self::REQUIRED)?;
        Ok(serde_json::from_value(Value::Object(map.clone()))?)
    }

    fn update_from_map(map: &FieldMap) -> StoreResult<DoctorUpdate> {
        reject_unknown_keys(map, Self::UPDATABLE)?;
        Ok(serde_json::from_value(Value::Object(map.clone()))?)
    }

    fn apply_update(&mut self, update: DoctorUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(specialization) = update.specialization {
            self.specialization = specialization;
        }
        if let Some(contact) = update.contact {
            self.contact = contact;
        }
        if let Some(schedule) = update.schedule {
            self.schedule = schedule;
        }
        if let Some(experience) = update.experience {
            self.experience = experience;
        }
        if let Some(qualification) = update.qualification {
            self.qualification = qualification;
        }
        if let Some(working_hours) = update.working_hours {
            self.working_hours = Some(working_hours);
        }
        if let Some(emergency_contact) = update.emergency_contact {
            self.emergency_contact = emergency_contact;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
    }
}

/// One entry in a patient's medical history. History is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub date: String,
    pub diagnosis: String,
    pub prescription: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    #[serde(default)]
    pub medical_history: Vec<MedicalRecord>,
    /// Display label for the assigned doctor, not a foreign key.
    #[serde(default)]
    pub assigned_doctor: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub notes: String,
}

impl Patient {
    const REQUIRED: &'static [&'static str] = &["id", "name", "age", "gender", "contact"];
    const UPDATABLE: &'static [&'static str] = &[
        "name",
        "age",
        "gender",
        "contact",
        "assigned_doctor",
        "emergency_contact",
        "notes",
    ];

    /// Case-insensitive substring match against the searchable fields:
    /// name, id, contact, age rendered as text, and the assigned-doctor
    /// label. An empty term matches every record.
    ///
    /// # Examples
    ///
    /// ```
    /// use clinic_records::domain::Patient;
    ///
    /// let patient = Patient {
    ///     id: "P1".to_string(),
    ///     name: "Bob".to_string(),
    ///     age: 30,
    ///     gender: "Male".to_string(),
    ///     contact: "5550100".to_string(),
    ///     medical_history: Vec::new(),
    ///     assigned_doctor: String::new(),
    ///     emergency_contact: String::new(),
    ///     notes: String::new(),
    /// };
    /// assert!(patient.matches("bob"));
    /// assert!(patient.matches("3"));
    /// assert!(!patient.matches("carol"));
    /// ```
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.id.to_lowercase().contains(&term)
            || self.contact.to_lowercase().contains(&term)
            || self.age.to_string().contains(&term)
            || self.assigned_doctor.to_lowercase().contains(&term)
    }
}

/// Partial update for a patient record; `None` fields are left untouched.
/// Neither the identifier nor the medical history is updatable here:
/// history grows only through `add_medical_record`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub assigned_doctor: Option<String>,
    pub emergency_contact: Option<String>,
    pub notes: Option<String>,
}

impl Record for Patient {
    type Update = PatientUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_map(map: &FieldMap) -> StoreResult<Self> {
        require_fields(map, Self::REQUIRED)?;
        Ok(serde_json::from_value(Value::Object(map.clone()))?)
    }

    fn update_from_map(map: &FieldMap) -> StoreResult<PatientUpdate> {
        reject_unknown_keys(map, Self::UPDATABLE)?;
        Ok(serde_json::from_value(Value::Object(map.clone()))?)
    }

    fn apply_update(&mut self, update: PatientUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(contact) = update.contact {
            self.contact = contact;
        }
        if let Some(assigned_doctor) = update.assigned_doctor {
            self.assigned_doctor = assigned_doctor;
        }
        if let Some(emergency_contact) = update.emergency_contact {
            self.emergency_contact = emergency_contact;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
    }
}
