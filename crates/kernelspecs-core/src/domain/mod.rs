//! Domain entities

mod kernel_spec;
mod settings;

pub use kernel_spec::*;
pub use settings::*;
