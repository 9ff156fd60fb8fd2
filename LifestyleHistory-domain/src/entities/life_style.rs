use serde::{Deserialize, Serialize};

/// Lifestyle habits recorded for a patient
///
/// The descriptive attributes are free text and are not interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeStyle {
    /// Server-assigned identifier
    pub l_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub user_id: Option<i64>,
    pub smoking_status: Option<String>,
    pub alcohol_consumption: Option<String>,
    pub physical_activity: Option<String>,
    pub dietary_habits: Option<String>,
    pub sleep_pattern: Option<String>,
    pub stress_level: Option<String>,
}
