use serde::{Deserialize, Serialize};

use super::Record;

/// Storage model for a medical history record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistoryRecord {
    /// Primary key, assigned on first save
    pub record_id: Option<i64>,

    /// Patient the record belongs to
    pub patient_id: Option<i64>,

    /// User who owns the record
    pub user_id: Option<i64>,

    /// Known allergies
    pub allergies: Option<String>,

    /// Medication currently taken
    pub current_medication: Option<String>,

    /// Medication taken in the past
    pub past_medication: Option<String>,

    /// Chronic conditions
    pub chronic_diseases: Option<String>,

    /// Past injuries
    pub injuries: Option<String>,

    /// Past surgeries
    pub surgeries: Option<String>,
}

impl MedicalHistoryRecord {
    /// Whether this record belongs to the given (patient, user) pair
    pub fn belongs_to(&self, patient_id: i64, user_id: i64) -> bool {
        self.patient_id == Some(patient_id) && self.user_id == Some(user_id)
    }
}

impl Record for MedicalHistoryRecord {
    fn id(&self) -> Option<i64> {
        self.record_id
    }

    fn set_id(&mut self, id: i64) {
        self.record_id = Some(id);
    }
}
