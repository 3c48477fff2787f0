//! Picture factory for creating test picture entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pictures attached to an owner.
pub struct PictureFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    url: String,
    imageable_type: String,
    imageable_id: i32,
}

impl<'a> PictureFactory<'a> {
    /// Creates a new PictureFactory for the given owner.
    ///
    /// Defaults:
    /// - name: `"Picture {n}"`
    /// - url: `"https://img.example.com/{n}.png"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `imageable_type` - Owner type name, e.g. `"Physician"`
    /// - `imageable_id` - Owner primary key
    pub fn new(
        db: &'a DatabaseConnection,
        imageable_type: impl Into<String>,
        imageable_id: i32,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Picture {}", id),
            url: format!("https://img.example.com/{}.png", id),
            imageable_type: imageable_type.into(),
            imageable_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builds and inserts the picture entity into the database.
    pub async fn build(self) -> Result<entity::picture::Model, DbErr> {
        let now = Utc::now();
        entity::picture::ActiveModel {
            name: ActiveValue::Set(self.name),
            url: ActiveValue::Set(self.url),
            imageable_id: ActiveValue::Set(self.imageable_id),
            imageable_type: ActiveValue::Set(self.imageable_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a picture with default values for the given owner.
pub async fn create_picture(
    db: &DatabaseConnection,
    imageable_type: &str,
    imageable_id: i32,
) -> Result<entity::picture::Model, DbErr> {
    PictureFactory::new(db, imageable_type, imageable_id)
        .build()
        .await
}
