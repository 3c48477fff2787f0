use async_trait::async_trait;
use sea_orm::{Condition, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select};

/// Entity that can be paginated by keyset on an integer identity column.
///
/// Each entity provides a thin implementation naming its identity column and reading the
/// identity value from a row. The identity value must increase with insertion.
pub trait KeysetEntity: EntityTrait {
    /// Column holding the identity value.
    fn id_column() -> Self::Column;

    /// Identity value of `model`.
    fn row_id(model: &Self::Model) -> i64;
}

/// Fully composed page query: WHERE, ORDER BY and LIMIT.
pub struct PageQuery<E: EntityTrait> {
    /// Base filter conjoined with the id restriction.
    pub filter: Condition,
    /// ORDER BY terms in rendering order.
    pub order: Vec<(E::Column, Order)>,
    /// Maximum number of rows to return.
    pub limit: u64,
}

impl<E: EntityTrait> PageQuery<E> {
    /// Turns the query into a SeaORM select on `E`.
    pub fn into_select(self) -> Select<E> {
        let mut select = E::find().filter(self.filter);
        for (column, order) in self.order {
            select = select.order_by(column, order);
        }
        select.limit(self.limit)
    }
}

/// Storage a paginator reads rows and counts from.
#[async_trait]
pub trait RowSource<E: EntityTrait>: Send + Sync {
    /// Number of rows matching `filter`.
    async fn count_where(&self, filter: Condition) -> Result<u64, DbErr>;

    /// Rows matching the query, in the query's order.
    async fn find_where(&self, query: PageQuery<E>) -> Result<Vec<E::Model>, DbErr>;
}
