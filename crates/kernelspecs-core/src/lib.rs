//! # Kernelspecs Core Library
//!
//! Loads the list of kernel specs a kernel server offers and validates it
//! into a well-formed model, or fails explicitly.
//!
//! ## Modules
//!
//! - `domain` - Entities (KernelSpec, KernelSpecs) and connection settings
//! - `validation` - Document and per-entry validation
//! - `service` - HTTP fetcher for `api/kernelspecs`
//! - `error` - Validation and fetch errors

pub mod domain;
pub mod error;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use domain::*;
pub use error::{FetchError, ValidationError};
pub use service::*;
pub use validation::{check_spec_model, validate_spec_model, validate_spec_models, EntryDefect};
