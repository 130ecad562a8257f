//! Product-specific registry logic, including identifier assignment policy.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;
