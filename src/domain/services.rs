//! Domain services shared by the record stores and their callers:
//! contact-number validation and patient roster filtering/sorting.

use crate::domain::models::Patient;

/// Checks a contact number: an optional leading `+` followed by at least
/// ten characters, each a digit, space, or hyphen.
///
/// # Examples
///
/// ```
/// use clinic_records::domain::is_valid_phone;
///
/// assert!(is_valid_phone("+1 555-010-0199"));
/// assert!(is_valid_phone("1234567890"));
/// assert!(!is_valid_phone("555-0100"));
/// assert!(!is_valid_phone("call me maybe"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    rest.len() >= 10 && rest.chars().all(|ch| ch.is_ascii_digit() || ch == ' ' || ch == '-')
}

/// Roster filter; `None` criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct PatientFilter {
    /// Matches when the patient's assigned-doctor label starts with this.
    pub doctor: Option<String>,
    /// Matches on exact gender equality.
    pub gender: Option<String>,
}

impl PatientFilter {
    pub fn matches(&self, patient: &Patient) -> bool {
        if let Some(doctor) = &self.doctor {
            if !patient.assigned_doctor.starts_with(doctor.as_str()) {
                return false;
            }
        }
        if let Some(gender) = &self.gender {
            if patient.gender != *gender {
                return false;
            }
        }
        true
    }
}

pub fn filter_patients<'a>(patients: &'a [Patient], filter: &PatientFilter) -> Vec<&'a Patient> {
    patients.iter().filter(|p| filter.matches(p)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientSortKey {
    Name,
    Id,
    Age,
}

/// Stable in-place sort of a roster view by the chosen key.
pub fn sort_patients(patients: &mut [Patient], key: PatientSortKey) {
    match key {
        PatientSortKey::Name => patients.sort_by(|a, b| a.name.cmp(&b.name)),
        PatientSortKey::Id => patients.sort_by(|a, b| a.id.cmp(&b.id)),
        PatientSortKey::Age => patients.sort_by_key(|p| p.age),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: &str, name: &str, age: u32, gender: &str, doctor: &str) -> Patient {
        Patient {
            id: id.to_string(),
            name: name.to_string(),
            age,
            gender: gender.to_string(),
            contact: "1234567890".to_string(),
            medical_history: Vec::new(),
            assigned_doctor: doctor.to_string(),
            emergency_contact: String::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("+44 20 7946 0958"));
        assert!(is_valid_phone("555-010-0199"));

        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("+123456789"));
        assert!(!is_valid_phone("12345abcde"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_filter_by_doctor_prefix_and_gender() {
        let patients = vec![
            patient("P1", "Bob", 30, "Male", "Dr. Alice (Cardiology)"),
            patient("P2", "Carol", 40, "Female", "Dr. Alice (Cardiology)"),
            patient("P3", "Dan", 25, "Male", "Dr. Eve (Dermatology)"),
        ];

        let by_doctor = PatientFilter {
            doctor: Some("Dr. Alice".to_string()),
            ..PatientFilter::default()
        };
        let matched = filter_patients(&patients, &by_doctor);
        assert_eq!(matched.len(), 2);

        let both = PatientFilter {
            doctor: Some("Dr. Alice".to_string()),
            gender: Some("Female".to_string()),
        };
        let matched = filter_patients(&patients, &both);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "P2");

        let everything = PatientFilter::default();
        assert_eq!(filter_patients(&patients, &everything).len(), 3);
    }

    #[test]
    fn test_sort_keys() {
        let mut patients = vec![
            patient("P2", "Carol", 40, "Female", ""),
            patient("P3", "Dan", 25, "Male", ""),
            patient("P1", "Bob", 30, "Male", ""),
        ];

        sort_patients(&mut patients, PatientSortKey::Name);
        assert_eq!(patients[0].name, "Bob");
        assert_eq!(patients[2].name, "Dan");

        sort_patients(&mut patients, PatientSortKey::Id);
        assert_eq!(patients[0].id, "P1");

        sort_patients(&mut patients, PatientSortKey::Age);
        assert_eq!(patients[0].age, 25);
        assert_eq!(patients[2].age, 40);
    }
}
