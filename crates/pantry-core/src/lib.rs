//! Pantry Core — domain models, repository traits and the read-only
//! data-access seam consumed by the dashboard engine.

pub mod error;
pub mod models;
pub mod repository;
pub mod source;

pub use error::{PantryError, PantryResult};
