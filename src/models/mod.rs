pub mod criteria;
pub mod doctor;

pub use criteria::{ConsultationMode, FilterCriteria, SortKey};
pub use doctor::{specialty_slug, DoctorRecord};
