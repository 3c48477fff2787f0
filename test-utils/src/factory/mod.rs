//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories for dependent rows take the ids of the rows they
//! reference, and `helpers` creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let physician = factory::physician::create_physician(&db).await?;
//!     let patient = factory::patient::create_patient(&db).await?;
//!
//!     // Create with all dependencies
//!     let (physician, patient, appointment) =
//!         factory::helpers::create_appointment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `physician` - Create physician entities
//! - `patient` - Create patient entities
//! - `appointment` - Create appointments linking a physician and a patient
//! - `picture` - Create pictures attached to an owner
//! - `helpers` - Unique id generation and dependency chains

pub mod appointment;
pub mod helpers;
pub mod patient;
pub mod physician;
pub mod picture;

// Re-export commonly used factory functions for concise usage
pub use appointment::create_appointment;
pub use patient::{create_patient, create_patients};
pub use physician::{create_physician, create_physicians};
pub use picture::create_picture;
