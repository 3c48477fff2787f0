//! Picture data repository for database operations.

use async_trait::async_trait;
use chrono::Utc;
use entity::prelude::Picture;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::picture::{CreatePictureParam, Imageable, UpdatePictureParam},
    pagination::{KeysetEntity, PageQuery, Paginator, RowSource},
};

impl KeysetEntity for Picture {
    fn id_column() -> entity::picture::Column {
        entity::picture::Column::Id
    }

    fn row_id(model: &entity::picture::Model) -> i64 {
        i64::from(model.id)
    }
}

/// Repository providing database operations for pictures.
#[derive(Clone, Copy)]
pub struct PictureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PictureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a keyset paginator over pictures backed by this repository.
    pub fn paginator(&self) -> Paginator<Picture, Self> {
        Paginator::new(*self)
    }

    /// Attaches a new picture to its owner.
    pub async fn create(&self, param: CreatePictureParam) -> Result<entity::picture::Model, DbErr> {
        let now = Utc::now();
        entity::picture::ActiveModel {
            name: ActiveValue::Set(param.name),
            url: ActiveValue::Set(param.url),
            imageable_id: ActiveValue::Set(param.owner.id()),
            imageable_type: ActiveValue::Set(param.owner.type_name().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::picture::Model>, DbErr> {
        Picture::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::picture::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Picture::find()
            .filter(entity::picture::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::picture::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn first(&self, n: u64) -> Result<Vec<entity::picture::Model>, DbErr> {
        Picture::find()
            .order_by_asc(entity::picture::Column::Id)
            .limit(n)
            .all(self.db)
            .await
    }

    pub async fn last(&self, n: u64) -> Result<Vec<entity::picture::Model>, DbErr> {
        Picture::find()
            .order_by_desc(entity::picture::Column::Id)
            .limit(n)
            .all(self.db)
            .await
    }

    pub async fn all(&self) -> Result<Vec<entity::picture::Model>, DbErr> {
        Picture::find()
            .order_by_asc(entity::picture::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Picture::find().count(self.db).await
    }

    pub async fn ids_where(&self, filter: Condition) -> Result<Vec<i32>, DbErr> {
        Picture::find()
            .select_only()
            .column(entity::picture::Column::Id)
            .filter(filter)
            .order_by_asc(entity::picture::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Finds the pictures matching `filter`, ordered by id.
    pub async fn find_where(
        &self,
        filter: Condition,
    ) -> Result<Vec<entity::picture::Model>, DbErr> {
        Picture::find()
            .filter(filter)
            .order_by_asc(entity::picture::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the lowest-id picture matching `filter`.
    pub async fn find_one_where(
        &self,
        filter: Condition,
    ) -> Result<Option<entity::picture::Model>, DbErr> {
        Picture::find()
            .filter(filter)
            .order_by_asc(entity::picture::Column::Id)
            .one(self.db)
            .await
    }

    /// Renames a picture or points it at a new URL.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated picture
    /// - `Ok(None)` - No picture with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdatePictureParam,
    ) -> Result<Option<entity::picture::Model>, DbErr> {
        let Some(picture) = Picture::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::picture::ActiveModel = picture.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(url) = param.url {
            active.url = ActiveValue::Set(url);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = Picture::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Picture::delete_many()
            .filter(entity::picture::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the pictures matching `filter`; an empty filter is refused.
    pub async fn delete_where(&self, filter: Condition) -> Result<u64, DbErr> {
        if filter.is_empty() {
            tracing::warn!("Refusing to delete pictures without a filter");
            return Err(DbErr::Custom(
                "delete_where requires at least one condition".to_string(),
            ));
        }

        let result = Picture::delete_many().filter(filter).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Gets every picture attached to `owner`, ordered by id.
    pub async fn get_for_owner(
        &self,
        owner: Imageable,
    ) -> Result<Vec<entity::picture::Model>, DbErr> {
        Picture::find()
            .filter(entity::picture::Column::ImageableType.eq(owner.type_name()))
            .filter(entity::picture::Column::ImageableId.eq(owner.id()))
            .order_by_asc(entity::picture::Column::Id)
            .all(self.db)
            .await
    }
}

#[async_trait]
impl<'a> RowSource<Picture> for PictureRepository<'a> {
    async fn count_where(&self, filter: Condition) -> Result<u64, DbErr> {
        Picture::find().filter(filter).count(self.db).await
    }

    async fn find_where(
        &self,
        query: PageQuery<Picture>,
    ) -> Result<Vec<entity::picture::Model>, DbErr> {
        query.into_select().all(self.db).await
    }
}
