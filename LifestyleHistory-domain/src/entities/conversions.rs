use lifestyle_history_data::models::{LifeStyleRecord, MedicalHistoryRecord};

use crate::entities::{LifeStyle, MedicalHistory};

/// Conversion functions between domain entities and data models.
/// Named `convert_to_[target_layer]_[model_name]`.

/// Convert from data model to domain entity for a lifestyle record
pub fn convert_to_domain_life_style(record: LifeStyleRecord) -> LifeStyle {
    LifeStyle {
        l_id: record.l_id,
        patient_id: record.patient_id,
        user_id: record.user_id,
        smoking_status: record.smoking_status,
        alcohol_consumption: record.alcohol_consumption,
        physical_activity: record.physical_activity,
        dietary_habits: record.dietary_habits,
        sleep_pattern: record.sleep_pattern,
        stress_level: record.stress_level,
    }
}

/// Convert from domain entity to data model for a lifestyle record
pub fn convert_to_data_life_style(life_style: LifeStyle) -> LifeStyleRecord {
    LifeStyleRecord {
        l_id: life_style.l_id,
        patient_id: life_style.patient_id,
        user_id: life_style.user_id,
        smoking_status: life_style.smoking_status,
        alcohol_consumption: life_style.alcohol_consumption,
        physical_activity: life_style.physical_activity,
        dietary_habits: life_style.dietary_habits,
        sleep_pattern: life_style.sleep_pattern,
        stress_level: life_style.stress_level,
    }
}

/// Convert from data model to domain entity for a medical history record
pub fn convert_to_domain_medical_history(record: MedicalHistoryRecord) -> MedicalHistory {
    MedicalHistory {
        record_id: record.record_id,
        patient_id: record.patient_id,
        user_id: record.user_id,
        allergies: record.allergies,
        current_medication: record.current_medication,
        past_medication: record.past_medication,
        chronic_diseases: record.chronic_diseases,
        injuries: record.injuries,
        surgeries: record.surgeries,
    }
}

/// Convert from domain entity to data model for a medical history record
pub fn convert_to_data_medical_history(history: MedicalHistory) -> MedicalHistoryRecord {
    MedicalHistoryRecord {
        record_id: history.record_id,
        patient_id: history.patient_id,
        user_id: history.user_id,
        allergies: history.allergies,
        current_medication: history.current_medication,
        past_medication: history.past_medication,
        chronic_diseases: history.chronic_diseases,
        injuries: history.injuries,
        surgeries: history.surgeries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_style_conversion_preserves_fields() {
        let record = LifeStyleRecord {
            l_id: Some(3),
            patient_id: Some(10),
            user_id: Some(20),
            smoking_status: Some("never".to_string()),
            stress_level: Some("low".to_string()),
            ..Default::default()
        };

        let domain = convert_to_domain_life_style(record.clone());
        assert_eq!(domain.l_id, Some(3));
        assert_eq!(domain.smoking_status.as_deref(), Some("never"));
        assert_eq!(domain.alcohol_consumption, None);

        assert_eq!(convert_to_data_life_style(domain), record);
    }

    #[test]
    fn test_medical_history_conversion_preserves_fields() {
        let history = MedicalHistory {
            record_id: None,
            patient_id: Some(1),
            user_id: Some(2),
            surgeries: Some("appendectomy".to_string()),
            ..Default::default()
        };

        let record = convert_to_data_medical_history(history.clone());
        assert_eq!(record.record_id, None);
        assert_eq!(record.surgeries.as_deref(), Some("appendectomy"));

        assert_eq!(convert_to_domain_medical_history(record), history);
    }
}
