//! Data access for physicians, patients, appointments and pictures.
//!
//! The crate is layered like the rest of the application it serves:
//!
//! - **Data Layer** (`data/`) - Repositories with CRUD, finders and association loaders
//! - **Pagination** (`pagination/`) - Keyset pagination engine shared by every repository
//! - **Model Layer** (`model/`) - Parameter types for inserts and partial updates
//! - **Error Layer** (`error/`) - Application, configuration and pagination errors
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Database connection and logging initialization

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod pagination;
pub mod startup;
