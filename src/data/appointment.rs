//! Appointment data repository for database operations.
//!
//! Appointments are the join rows between physicians and patients, so besides the usual
//! CRUD operations this repository resolves both sides of an appointment.

use async_trait::async_trait;
use chrono::Utc;
use entity::prelude::{Appointment, Patient, Physician};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::appointment::{CreateAppointmentParam, UpdateAppointmentParam},
    pagination::{KeysetEntity, PageQuery, Paginator, RowSource},
};

impl KeysetEntity for Appointment {
    fn id_column() -> entity::appointment::Column {
        entity::appointment::Column::Id
    }

    fn row_id(model: &entity::appointment::Model) -> i64 {
        i64::from(model.id)
    }
}

/// Repository providing database operations for appointments.
#[derive(Clone, Copy)]
pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a keyset paginator over appointments backed by this repository.
    pub fn paginator(&self) -> Paginator<Appointment, Self> {
        Paginator::new(*self)
    }

    /// Books an appointment.
    ///
    /// The referenced physician and patient must exist where the database enforces foreign
    /// keys.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created appointment
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn create(
        &self,
        param: CreateAppointmentParam,
    ) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        entity::appointment::ActiveModel {
            appointment_date: ActiveValue::Set(param.appointment_date),
            physician_id: ActiveValue::Set(param.physician_id),
            patient_id: ActiveValue::Set(param.patient_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::appointment::Model>, DbErr> {
        Appointment::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::appointment::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Appointment::find()
            .filter(entity::appointment::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn first(&self, n: u64) -> Result<Vec<entity::appointment::Model>, DbErr> {
        Appointment::find()
            .order_by_asc(entity::appointment::Column::Id)
            .limit(n)
            .all(self.db)
            .await
    }

    pub async fn last(&self, n: u64) -> Result<Vec<entity::appointment::Model>, DbErr> {
        Appointment::find()
            .order_by_desc(entity::appointment::Column::Id)
            .limit(n)
            .all(self.db)
            .await
    }

    pub async fn all(&self) -> Result<Vec<entity::appointment::Model>, DbErr> {
        Appointment::find()
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Appointment::find().count(self.db).await
    }

    pub async fn ids_where(&self, filter: Condition) -> Result<Vec<i32>, DbErr> {
        Appointment::find()
            .select_only()
            .column(entity::appointment::Column::Id)
            .filter(filter)
            .order_by_asc(entity::appointment::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Finds the appointments matching `filter`, ordered by id.
    pub async fn find_where(
        &self,
        filter: Condition,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        Appointment::find()
            .filter(filter)
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_one_where(
        &self,
        filter: Condition,
    ) -> Result<Option<entity::appointment::Model>, DbErr> {
        Appointment::find()
            .filter(filter)
            .order_by_asc(entity::appointment::Column::Id)
            .one(self.db)
            .await
    }

    /// Reschedules or reassigns an appointment.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated appointment
    /// - `Ok(None)` - No appointment with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateAppointmentParam,
    ) -> Result<Option<entity::appointment::Model>, DbErr> {
        let Some(appointment) = Appointment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::appointment::ActiveModel = appointment.into();
        if let Some(appointment_date) = param.appointment_date {
            active.appointment_date = ActiveValue::Set(appointment_date);
        }
        if let Some(physician_id) = param.physician_id {
            active.physician_id = ActiveValue::Set(physician_id);
        }
        if let Some(patient_id) = param.patient_id {
            active.patient_id = ActiveValue::Set(patient_id);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = Appointment::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Appointment::delete_many()
            .filter(entity::appointment::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the appointments matching `filter`; an empty filter is refused.
    pub async fn delete_where(&self, filter: Condition) -> Result<u64, DbErr> {
        if filter.is_empty() {
            tracing::warn!("Refusing to delete appointments without a filter");
            return Err(DbErr::Custom(
                "delete_where requires at least one condition".to_string(),
            ));
        }

        let result = Appointment::delete_many()
            .filter(filter)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the physician an appointment is booked with.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The physician
    /// - `Ok(None)` - The appointment or its physician does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_physician(
        &self,
        appointment_id: i32,
    ) -> Result<Option<entity::physician::Model>, DbErr> {
        let found = Appointment::find_by_id(appointment_id)
            .find_also_related(Physician)
            .one(self.db)
            .await?;

        Ok(found.and_then(|(_, physician)| physician))
    }

    /// Gets the patient an appointment is booked for.
    pub async fn get_patient(
        &self,
        appointment_id: i32,
    ) -> Result<Option<entity::patient::Model>, DbErr> {
        let found = Appointment::find_by_id(appointment_id)
            .find_also_related(Patient)
            .one(self.db)
            .await?;

        Ok(found.and_then(|(_, patient)| patient))
    }
}

#[async_trait]
impl<'a> RowSource<Appointment> for AppointmentRepository<'a> {
    async fn count_where(&self, filter: Condition) -> Result<u64, DbErr> {
        Appointment::find().filter(filter).count(self.db).await
    }

    async fn find_where(
        &self,
        query: PageQuery<Appointment>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        query.into_select().all(self.db).await
    }
}
