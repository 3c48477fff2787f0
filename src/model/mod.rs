//! Parameter types for repository operations.
//!
//! Repositories return SeaORM entity models directly; these types carry caller input for
//! inserts and partial updates so that column stamping (`created_at`, `updated_at`) stays in
//! the data layer.

pub mod appointment;
pub mod patient;
pub mod physician;
pub mod picture;
