//! Services
//!
//! Network glue around the validator.

mod kernelspec_api_client;

pub use kernelspec_api_client::*;
