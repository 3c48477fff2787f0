//! Database repository layer for the clinic entities.
//!
//! This module contains one repository struct per entity. Repositories use SeaORM entity
//! models directly and take parameter models from `crate::model` for writes. Each repository
//! also serves as the `RowSource` for keyset pagination of its entity and hands out
//! paginators through `paginator()`.

pub mod appointment;
pub mod patient;
pub mod physician;
pub mod picture;

#[cfg(test)]
mod test;
