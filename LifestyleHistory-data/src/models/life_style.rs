use serde::{Deserialize, Serialize};

use super::Record;

/// Storage model for a lifestyle record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeStyleRecord {
    /// Primary key, assigned on first save
    pub l_id: Option<i64>,

    /// Patient the record belongs to
    pub patient_id: Option<i64>,

    /// User who owns the record
    pub user_id: Option<i64>,

    pub smoking_status: Option<String>,
    pub alcohol_consumption: Option<String>,
    pub physical_activity: Option<String>,
    pub dietary_habits: Option<String>,
    pub sleep_pattern: Option<String>,
    pub stress_level: Option<String>,
}

impl Record for LifeStyleRecord {
    fn id(&self) -> Option<i64> {
        self.l_id
    }

    fn set_id(&mut self, id: i64) {
        self.l_id = Some(id);
    }
}
