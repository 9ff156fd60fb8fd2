use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public representation of a medical history record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    /// Server-assigned identifier, ignored on create
    pub record_id: Option<i64>,

    /// Patient the record belongs to; kept on update
    pub patient_id: Option<i64>,

    /// User who owns the record; kept on update
    pub user_id: Option<i64>,

    pub allergies: Option<String>,
    pub current_medication: Option<String>,
    pub past_medication: Option<String>,
    pub chronic_diseases: Option<String>,
    pub injuries: Option<String>,
    pub surgeries: Option<String>,
}
