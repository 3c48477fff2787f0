//! Appointment factory for creating test appointment entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments between an existing physician and patient.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::appointment::AppointmentFactory;
///
/// let appointment = AppointmentFactory::new(&db, physician.id, patient.id)
///     .appointment_date(Utc::now() + Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    physician_id: i32,
    patient_id: i32,
    appointment_date: DateTime<Utc>,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory scheduled one day from now.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `physician_id` - ID of the physician seeing the patient
    /// - `patient_id` - ID of the patient
    pub fn new(db: &'a DatabaseConnection, physician_id: i32, patient_id: i32) -> Self {
        Self {
            db,
            physician_id,
            patient_id,
            appointment_date: Utc::now() + chrono::Duration::days(1),
        }
    }

    pub fn appointment_date(mut self, appointment_date: DateTime<Utc>) -> Self {
        self.appointment_date = appointment_date;
        self
    }

    /// Builds and inserts the appointment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        entity::appointment::ActiveModel {
            appointment_date: ActiveValue::Set(self.appointment_date),
            physician_id: ActiveValue::Set(self.physician_id),
            patient_id: ActiveValue::Set(self.patient_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an appointment with default values.
pub async fn create_appointment(
    db: &DatabaseConnection,
    physician_id: i32,
    patient_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, physician_id, patient_id)
        .build()
        .await
}
