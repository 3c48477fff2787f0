//! SeaORM entity definitions for the clinic schema.
//!
//! Physicians and patients are linked many-to-many through appointments. Pictures attach
//! polymorphically to an owner through the `imageable_type`/`imageable_id` pair.

pub mod prelude;

pub mod appointment;
pub mod patient;
pub mod physician;
pub mod picture;
