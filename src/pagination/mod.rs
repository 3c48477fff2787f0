//! Keyset pagination over any SeaORM entity.
//!
//! A [`Paginator`] walks the rows matching a filter one page at a time without OFFSET. It
//! remembers the identity values of the first and last row of the loaded page and builds
//! an id-range predicate from them for the next call:
//!
//! | direction | identity order | predicate |
//! |---|---|---|
//! | previous | asc | `id < first_id` |
//! | previous | desc | `id > first_id` |
//! | next | asc | `id > last_id` |
//! | next | desc | `id < last_id` |
//! | current, nothing loaded | any | `id > 0` |
//! | current, page loaded | asc | `first_id <= id <= last_id` |
//! | current, page loaded | desc | `last_id <= id <= first_id` |
//!
//! Row retrieval and counting are delegated to a [`RowSource`]; every repository in
//! `crate::data` is one. Entities opt in by implementing [`KeysetEntity`], which names the
//! identity column. Identity values must increase with insertion for pages to be correct.
//!
//! The sort specification must contain the identity column. Other columns may be added and
//! are rendered into ORDER BY in the order they were added.

pub mod cursor;
pub mod direction;
pub mod paginator;
pub mod sort;
pub mod source;

mod restrict;

#[cfg(test)]
mod test;

pub use cursor::PageCursor;
pub use direction::PageDirection;
pub use paginator::Paginator;
pub use sort::{SortDirection, SortSpec};
pub use source::{KeysetEntity, PageQuery, RowSource};
