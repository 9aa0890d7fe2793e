//! Students Performance ML - Rust библиотека

pub mod artifacts;
pub mod dataset;
pub mod error;
pub mod preprocessing;
pub mod transformation;
pub mod types;

pub use dataset::*;
pub use preprocessing::*;
pub use transformation::*;
pub use types::*;

// Re-export для удобства
pub use artifacts::{load_object, save_object};
pub use error::{Result, TransformError};
