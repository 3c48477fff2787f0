use crate::{
    data::patient::PatientRepository,
    error::pagination::{PageBoundary, PaginationError},
    model::patient::{CreatePatientParam, UpdatePatientParam},
    pagination::SortDirection,
};
use entity::patient::Column;
use sea_orm::{ColumnTrait, Condition, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod find;
