//! Patient data repository for database operations.

use async_trait::async_trait;
use chrono::Utc;
use entity::prelude::{Appointment, Patient, Physician};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::{
    model::patient::{CreatePatientParam, UpdatePatientParam},
    pagination::{KeysetEntity, PageQuery, Paginator, RowSource},
};

impl KeysetEntity for Patient {
    fn id_column() -> entity::patient::Column {
        entity::patient::Column::Id
    }

    fn row_id(model: &entity::patient::Model) -> i64 {
        i64::from(model.id)
    }
}

/// Repository providing database operations for patients.
#[derive(Clone, Copy)]
pub struct PatientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a keyset paginator over patients backed by this repository.
    pub fn paginator(&self) -> Paginator<Patient, Self> {
        Paginator::new(*self)
    }

    /// Creates a new patient, stamping `created_at` and `updated_at`.
    pub async fn create(&self, param: CreatePatientParam) -> Result<entity::patient::Model, DbErr> {
        let now = Utc::now();
        entity::patient::ActiveModel {
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::patient::Model>, DbErr> {
        Patient::find_by_id(id).one(self.db).await
    }

    /// Finds every patient whose id is in `ids`, ordered by id.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::patient::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Patient::find()
            .filter(entity::patient::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::patient::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn first(&self, n: u64) -> Result<Vec<entity::patient::Model>, DbErr> {
        Patient::find()
            .order_by_asc(entity::patient::Column::Id)
            .limit(n)
            .all(self.db)
            .await
    }

    pub async fn last(&self, n: u64) -> Result<Vec<entity::patient::Model>, DbErr> {
        Patient::find()
            .order_by_desc(entity::patient::Column::Id)
            .limit(n)
            .all(self.db)
            .await
    }

    pub async fn all(&self) -> Result<Vec<entity::patient::Model>, DbErr> {
        Patient::find()
            .order_by_asc(entity::patient::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Patient::find().count(self.db).await
    }

    pub async fn ids_where(&self, filter: Condition) -> Result<Vec<i32>, DbErr> {
        Patient::find()
            .select_only()
            .column(entity::patient::Column::Id)
            .filter(filter)
            .order_by_asc(entity::patient::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Finds the patients matching `filter`, ordered by id.
    pub async fn find_where(
        &self,
        filter: Condition,
    ) -> Result<Vec<entity::patient::Model>, DbErr> {
        Patient::find()
            .filter(filter)
            .order_by_asc(entity::patient::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the lowest-id patient matching `filter`.
    pub async fn find_one_where(
        &self,
        filter: Condition,
    ) -> Result<Option<entity::patient::Model>, DbErr> {
        Patient::find()
            .filter(filter)
            .order_by_asc(entity::patient::Column::Id)
            .one(self.db)
            .await
    }

    /// Updates the given fields of a patient and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated patient
    /// - `Ok(None)` - No patient with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdatePatientParam,
    ) -> Result<Option<entity::patient::Model>, DbErr> {
        let Some(patient) = Patient::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::patient::ActiveModel = patient.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = Patient::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Patient::delete_many()
            .filter(entity::patient::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the patients matching `filter`; an empty filter is refused.
    pub async fn delete_where(&self, filter: Condition) -> Result<u64, DbErr> {
        if filter.is_empty() {
            tracing::warn!("Refusing to delete patients without a filter");
            return Err(DbErr::Custom(
                "delete_where requires at least one condition".to_string(),
            ));
        }

        let result = Patient::delete_many().filter(filter).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    pub async fn get_appointments(
        &self,
        patient_id: i32,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        Appointment::find()
            .filter(entity::appointment::Column::PatientId.eq(patient_id))
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the distinct physicians a patient has appointments with, ordered by id.
    pub async fn get_physicians(
        &self,
        patient_id: i32,
    ) -> Result<Vec<entity::physician::Model>, DbErr> {
        Physician::find()
            .join(
                JoinType::InnerJoin,
                entity::physician::Relation::Appointment.def(),
            )
            .filter(entity::appointment::Column::PatientId.eq(patient_id))
            .distinct()
            .order_by_asc(entity::physician::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds patients matching `filter` together with their appointments.
    pub async fn find_with_appointments(
        &self,
        filter: Condition,
    ) -> Result<Vec<(entity::patient::Model, Vec<entity::appointment::Model>)>, DbErr> {
        Patient::find()
            .filter(filter)
            .order_by_asc(entity::patient::Column::Id)
            .find_with_related(Appointment)
            .all(self.db)
            .await
    }
}

#[async_trait]
impl<'a> RowSource<Patient> for PatientRepository<'a> {
    async fn count_where(&self, filter: Condition) -> Result<u64, DbErr> {
        Patient::find().filter(filter).count(self.db).await
    }

    async fn find_where(
        &self,
        query: PageQuery<Patient>,
    ) -> Result<Vec<entity::patient::Model>, DbErr> {
        query.into_select().all(self.db).await
    }
}
