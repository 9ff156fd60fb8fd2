// Storage models, one per table

pub mod life_style;
pub mod medical_history;

pub use life_style::LifeStyleRecord;
pub use medical_history::MedicalHistoryRecord;

/// A persisted row addressed by a server-assigned integer key
pub trait Record: Clone + Send + Sync + 'static {
    /// Current identifier, `None` until the row has been saved
    fn id(&self) -> Option<i64>;

    /// Assign the identifier chosen by the store
    fn set_id(&mut self, id: i64);
}
