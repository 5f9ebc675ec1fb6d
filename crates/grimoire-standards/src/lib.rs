#![deny(unsafe_code)]

//! Loading and validation of the spell component data tables.

pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::error::StandardsError;
pub use crate::loaders::{DataFile, embedded_context, load_context, load_default_context};
pub use crate::paths::{DATA_ENV_VAR, default_data_root, workspace_data_dir};
