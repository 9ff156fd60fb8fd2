use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public representation of a lifestyle record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifeStyle {
    /// Server-assigned identifier, ignored on create
    #[serde(rename = "lID")]
    pub l_id: Option<i64>,

    /// Patient the record belongs to
    pub patient_id: Option<i64>,

    /// User who owns the record
    pub user_id: Option<i64>,

    /// Smoking habits
    pub smoking_status: Option<String>,

    /// Alcohol consumption
    pub alcohol_consumption: Option<String>,

    /// Exercise and activity level
    pub physical_activity: Option<String>,

    /// Diet
    pub dietary_habits: Option<String>,

    /// Sleep pattern
    pub sleep_pattern: Option<String>,

    /// Perceived stress level
    pub stress_level: Option<String>,
}
