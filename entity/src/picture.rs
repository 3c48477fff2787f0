use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Picture attached to any owning record.
///
/// `imageable_type` holds the owner's type name (e.g. `"Physician"`) and `imageable_id`
/// its primary key, so there is no foreign key constraint on the owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pictures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub url: String,
    pub imageable_id: i32,
    pub imageable_type: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
