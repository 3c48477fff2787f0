pub use super::appointment::Entity as Appointment;
pub use super::patient::Entity as Patient;
pub use super::physician::Entity as Physician;
pub use super::picture::Entity as Picture;
