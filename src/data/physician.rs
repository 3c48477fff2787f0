//! Physician data repository for database operations.
//!
//! This module provides the `PhysicianRepository` for managing physician records, loading
//! their appointments, patients and pictures, and paging through them with the keyset
//! paginator.

use async_trait::async_trait;
use chrono::Utc;
use entity::prelude::{Appointment, Patient, Physician};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::{
    data::picture::PictureRepository,
    model::{
        physician::{CreatePhysicianParam, UpdatePhysicianParam},
        picture::Imageable,
    },
    pagination::{KeysetEntity, PageQuery, Paginator, RowSource},
};

impl KeysetEntity for Physician {
    fn id_column() -> entity::physician::Column {
        entity::physician::Column::Id
    }

    fn row_id(model: &entity::physician::Model) -> i64 {
        i64::from(model.id)
    }
}

/// Repository providing database operations for physicians.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, deleting and paginating physician records.
#[derive(Clone, Copy)]
pub struct PhysicianRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhysicianRepository<'a> {
    /// Creates a new PhysicianRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PhysicianRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a keyset paginator over physicians backed by this repository.
    ///
    /// The paginator has no filter and no sort order; add at least an order on
    /// `physician::Column::Id` before loading a page.
    pub fn paginator(&self) -> Paginator<Physician, Self> {
        Paginator::new(*self)
    }

    /// Creates a new physician.
    ///
    /// Stamps `created_at` and `updated_at` with the current time.
    ///
    /// # Arguments
    /// - `param` - Name and introduction of the physician
    ///
    /// # Returns
    /// - `Ok(Model)` - The created physician including its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreatePhysicianParam,
    ) -> Result<entity::physician::Model, DbErr> {
        let now = Utc::now();
        entity::physician::ActiveModel {
            name: ActiveValue::Set(param.name),
            introduction: ActiveValue::Set(param.introduction),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a physician by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Physician found
    /// - `Ok(None)` - No physician with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::physician::Model>, DbErr> {
        Physician::find_by_id(id).one(self.db).await
    }

    /// Finds every physician whose id is in `ids`, ordered by id.
    ///
    /// Ids without a matching row are skipped. An empty slice returns an empty vector
    /// without querying.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::physician::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Physician::find()
            .filter(entity::physician::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::physician::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the first `n` physicians by ascending id.
    pub async fn first(&self, n: u64) -> Result<Vec<entity::physician::Model>, DbErr> {
        Physician::find()
            .order_by_asc(entity::physician::Column::Id)
            .limit(n)
            .all(self.db)
            .await
    }

    /// Gets the last `n` physicians, newest first.
    pub async fn last(&self, n: u64) -> Result<Vec<entity::physician::Model>, DbErr> {
        Physician::find()
            .order_by_desc(entity::physician::Column::Id)
            .limit(n)
            .all(self.db)
            .await
    }

    /// Gets every physician ordered by id.
    pub async fn all(&self) -> Result<Vec<entity::physician::Model>, DbErr> {
        Physician::find()
            .order_by_asc(entity::physician::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts all physicians.
    pub async fn count(&self) -> Result<u64, DbErr> {
        Physician::find().count(self.db).await
    }

    /// Gets the ids of physicians matching `filter`, ascending.
    pub async fn ids_where(&self, filter: Condition) -> Result<Vec<i32>, DbErr> {
        Physician::find()
            .select_only()
            .column(entity::physician::Column::Id)
            .filter(filter)
            .order_by_asc(entity::physician::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Finds the physicians matching `filter`, ordered by id.
    ///
    /// An empty filter matches every physician.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching physicians (empty if none match)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_where(
        &self,
        filter: Condition,
    ) -> Result<Vec<entity::physician::Model>, DbErr> {
        Physician::find()
            .filter(filter)
            .order_by_asc(entity::physician::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the first physician matching `filter` by ascending id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Lowest-id matching physician
    /// - `Ok(None)` - No physician matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_one_where(
        &self,
        filter: Condition,
    ) -> Result<Option<entity::physician::Model>, DbErr> {
        Physician::find()
            .filter(filter)
            .order_by_asc(entity::physician::Column::Id)
            .one(self.db)
            .await
    }

    /// Updates the given fields of a physician.
    ///
    /// Only fields set to `Some` are written. `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `id` - Id of the physician to update
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated physician
    /// - `Ok(None)` - No physician with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdatePhysicianParam,
    ) -> Result<Option<entity::physician::Model>, DbErr> {
        let Some(physician) = Physician::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::physician::ActiveModel = physician.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(introduction) = param.introduction {
            active.introduction = ActiveValue::Set(introduction);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a physician by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows deleted, 0 when the physician did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = Physician::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes every physician whose id is in `ids`.
    ///
    /// Returns early with 0 if `ids` is empty.
    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Physician::delete_many()
            .filter(entity::physician::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the physicians matching `filter`.
    ///
    /// Associated rows are not touched by this call; foreign key cascades apply only where
    /// the database enforces them.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows deleted
    /// - `Err(DbErr::Custom)` - `filter` is empty; nothing is deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_where(&self, filter: Condition) -> Result<u64, DbErr> {
        if filter.is_empty() {
            tracing::warn!("Refusing to delete physicians without a filter");
            return Err(DbErr::Custom(
                "delete_where requires at least one condition".to_string(),
            ));
        }

        let result = Physician::delete_many()
            .filter(filter)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the appointments booked with a physician, ordered by id.
    pub async fn get_appointments(
        &self,
        physician_id: i32,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        Appointment::find()
            .filter(entity::appointment::Column::PhysicianId.eq(physician_id))
            .order_by_asc(entity::appointment::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the distinct patients who have an appointment with a physician.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Patients ordered by id, each listed once
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_patients(
        &self,
        physician_id: i32,
    ) -> Result<Vec<entity::patient::Model>, DbErr> {
        Patient::find()
            .join(
                JoinType::InnerJoin,
                entity::patient::Relation::Appointment.def(),
            )
            .filter(entity::appointment::Column::PhysicianId.eq(physician_id))
            .distinct()
            .order_by_asc(entity::patient::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the pictures attached to a physician, ordered by id.
    pub async fn get_pictures(
        &self,
        physician_id: i32,
    ) -> Result<Vec<entity::picture::Model>, DbErr> {
        PictureRepository::new(self.db)
            .get_for_owner(Imageable::Physician(physician_id))
            .await
    }

    /// Finds physicians matching `filter` together with their appointments.
    ///
    /// Loads both sides in one joined query, ordered by physician id.
    ///
    /// # Returns
    /// - `Ok(Vec<(physician, appointments)>)` - Physicians with their appointments (empty
    ///   vector for physicians without any)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_appointments(
        &self,
        filter: Condition,
    ) -> Result<Vec<(entity::physician::Model, Vec<entity::appointment::Model>)>, DbErr> {
        Physician::find()
            .filter(filter)
            .order_by_asc(entity::physician::Column::Id)
            .find_with_related(Appointment)
            .all(self.db)
            .await
    }
}

#[async_trait]
impl<'a> RowSource<Physician> for PhysicianRepository<'a> {
    async fn count_where(&self, filter: Condition) -> Result<u64, DbErr> {
        Physician::find().filter(filter).count(self.db).await
    }

    async fn find_where(
        &self,
        query: PageQuery<Physician>,
    ) -> Result<Vec<entity::physician::Model>, DbErr> {
        query.into_select().all(self.db).await
    }
}
