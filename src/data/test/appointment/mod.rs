use crate::{
    data::appointment::AppointmentRepository,
    error::pagination::{PageBoundary, PaginationError},
    model::appointment::{CreateAppointmentParam, UpdateAppointmentParam},
    pagination::SortDirection,
};
use chrono::{Duration, Utc};
use entity::appointment::Column;
use sea_orm::{ColumnTrait, Condition, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod paginates;
