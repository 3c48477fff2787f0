use crate::{
    data::physician::PhysicianRepository,
    error::pagination::{PageBoundary, PaginationError},
    pagination::{PageCursor, PageDirection, PageQuery, RowSource, SortDirection},
};
use async_trait::async_trait;
use entity::{physician::Column, prelude::Physician};
use sea_orm::{ColumnTrait, Condition, DbErr};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};
use test_utils::{builder::TestBuilder, factory};


/// Ids of the given rows in returned order.
fn ids(rows: &[entity::physician::Model]) -> Vec<i32> {
    rows.iter().map(|row| row.id).collect()
}

/// Row source that fails every call and records how many calls were made.
#[derive(Clone, Default)]
struct FailingSource {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl RowSource<Physician> for FailingSource {
    async fn count_where(&self, _filter: Condition) -> Result<u64, DbErr> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DbErr::Custom("count unavailable".to_string()))
    }

    async fn find_where(
        &self,
        _query: PageQuery<Physician>,
    ) -> Result<Vec<entity::physician::Model>, DbErr> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DbErr::Custom("find unavailable".to_string()))
    }
}

/// Row source delegating to a repository until `fail_find` is switched on.
#[derive(Clone)]
struct SwitchableSource<'a> {
    inner: PhysicianRepository<'a>,
    fail_find: Arc<AtomicBool>,
}

#[async_trait]
impl<'a> RowSource<Physician> for SwitchableSource<'a> {
    async fn count_where(&self, filter: Condition) -> Result<u64, DbErr> {
        RowSource::count_where(&self.inner, filter).await
    }

    async fn find_where(
        &self,
        query: PageQuery<Physician>,
    ) -> Result<Vec<entity::physician::Model>, DbErr> {
        if self.fail_find.load(Ordering::SeqCst) {
            return Err(DbErr::Custom("connection reset".to_string()));
        }
        RowSource::find_where(&self.inner, query).await
    }
}
