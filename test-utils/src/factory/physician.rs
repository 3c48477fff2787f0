//! Physician factory for creating test physician entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test physicians with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::physician::PhysicianFactory;
///
/// let physician = PhysicianFactory::new(&db)
///     .name("Dr. Grey")
///     .introduction("Surgeon")
///     .build()
///     .await?;
/// ```
pub struct PhysicianFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    introduction: String,
}

impl<'a> PhysicianFactory<'a> {
    /// Creates a new PhysicianFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Physician {n}"` where n is auto-incremented
    /// - introduction: `"General practitioner"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Physician {}", id),
            introduction: "General practitioner".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = introduction.into();
        self
    }

    /// Builds and inserts the physician entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::physician::Model)` - Created physician entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::physician::Model, DbErr> {
        let now = Utc::now();
        entity::physician::ActiveModel {
            name: ActiveValue::Set(self.name),
            introduction: ActiveValue::Set(self.introduction),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a physician with default values.
///
/// Shorthand for `PhysicianFactory::new(db).build().await`.
pub async fn create_physician(db: &DatabaseConnection) -> Result<entity::physician::Model, DbErr> {
    PhysicianFactory::new(db).build().await
}

/// Creates `count` physicians with default values, in id order.
///
/// # Returns
/// - `Ok(Vec<entity::physician::Model>)` - Created physicians ordered by ascending id
/// - `Err(DbErr)` - Database error during insert
pub async fn create_physicians(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::physician::Model>, DbErr> {
    let mut physicians = Vec::with_capacity(count);
    for _ in 0..count {
        physicians.push(create_physician(db).await?);
    }
    Ok(physicians)
}
