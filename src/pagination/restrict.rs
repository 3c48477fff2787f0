//! Id-range predicates for keyset navigation.

use sea_orm::{ColumnTrait, Condition};

use super::{cursor::PageCursor, direction::PageDirection, sort::SortDirection};

/// Builds the predicate selecting the page in `direction` from `cursor`.
///
/// `identity_order` is the direction the identity column is sorted in.
pub(crate) fn id_restriction<C: ColumnTrait>(
    column: C,
    direction: PageDirection,
    identity_order: SortDirection,
    cursor: &PageCursor,
) -> Condition {
    let expr = match (direction, identity_order) {
        (PageDirection::Previous, SortDirection::Asc) => column.lt(cursor.first_id),
        (PageDirection::Previous, SortDirection::Desc) => column.gt(cursor.first_id),
        (PageDirection::Next, SortDirection::Asc) => column.gt(cursor.last_id),
        (PageDirection::Next, SortDirection::Desc) => column.lt(cursor.last_id),
        // Bootstrap: nothing loaded yet, match every row.
        (PageDirection::Current, _) if cursor.is_unloaded() => column.gt(0i64),
        (PageDirection::Current, SortDirection::Asc) => {
            column.between(cursor.first_id, cursor.last_id)
        }
        (PageDirection::Current, SortDirection::Desc) => {
            column.between(cursor.last_id, cursor.first_id)
        }
    };

    Condition::all().add(expr)
}

/// ANDs the id restriction onto the caller's filter, or returns it alone if the filter is
/// empty.
pub(crate) fn conjoin(filter: &Condition, restriction: Condition) -> Condition {
    if filter.is_empty() {
        restriction
    } else {
        Condition::all().add(filter.clone()).add(restriction)
    }
}
