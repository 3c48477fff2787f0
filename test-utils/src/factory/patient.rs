//! Patient factory for creating test patient entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test patients with customizable fields.
pub struct PatientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> PatientFactory<'a> {
    /// Creates a new PatientFactory with default name `"Patient {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Patient {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the patient entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::patient::Model)` - Created patient entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::patient::Model, DbErr> {
        let now = Utc::now();
        entity::patient::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a patient with default values.
pub async fn create_patient(db: &DatabaseConnection) -> Result<entity::patient::Model, DbErr> {
    PatientFactory::new(db).build().await
}

/// Creates `count` patients with default values, in id order.
pub async fn create_patients(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::patient::Model>, DbErr> {
    let mut patients = Vec::with_capacity(count);
    for _ in 0..count {
        patients.push(create_patient(db).await?);
    }
    Ok(patients)
}
