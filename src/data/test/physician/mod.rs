use crate::{
    data::physician::PhysicianRepository,
    model::physician::{CreatePhysicianParam, UpdatePhysicianParam},
};
use entity::physician::Column;
use sea_orm::{ColumnTrait, Condition, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod associations;
mod create;
mod delete;
mod get;
mod update;
