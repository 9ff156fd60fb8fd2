use serde::{Deserialize, Serialize};

/// A patient's medical history entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistory {
    /// Server-assigned identifier
    pub record_id: Option<i64>,

    /// Patient the entry belongs to
    pub patient_id: Option<i64>,

    /// User who owns the entry
    pub user_id: Option<i64>,

    pub allergies: Option<String>,
    pub current_medication: Option<String>,
    pub past_medication: Option<String>,
    pub chronic_diseases: Option<String>,
    pub injuries: Option<String>,
    pub surgeries: Option<String>,
}

impl MedicalHistory {
    /// Copy the six clinical fields from `changes`, including empty ones.
    ///
    /// Identifier and ownership fields are left untouched.
    pub fn apply_clinical_fields(&mut self, changes: MedicalHistory) {
        self.allergies = changes.allergies;
        self.current_medication = changes.current_medication;
        self.past_medication = changes.past_medication;
        self.chronic_diseases = changes.chronic_diseases;
        self.injuries = changes.injuries;
        self.surgeries = changes.surgeries;
    }
}
